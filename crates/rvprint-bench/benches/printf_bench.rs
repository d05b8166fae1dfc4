//! Format engine benchmarks against an in-memory capture sink.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rvprint_core::intrinsics::CaptureBuffer;
use rvprint_core::{Arg, PrintConfig, WordWidth, printf_with};

const CONFIG: PrintConfig = PrintConfig::new(WordWidth::W64);

type Case = (&'static str, &'static [u8], Vec<Arg<'static>>);

fn case(label: &'static str, fmt: &'static [u8], args: Vec<Arg<'static>>) -> Case {
    (label, fmt, args)
}

fn bench_templates(c: &mut Criterion) {
    let cases = [
        case("literal", b"no placeholders in this line at all\n", vec![]),
        case("one_int", b"value = {i}\n", vec![Arg::I32(-12_345)]),
        case(
            "mixed",
            b"{s}: {ull} {ll} {c}\n",
            vec![
                Arg::Str(b"mixed"),
                Arg::U64(u64::MAX),
                Arg::I64(i64::MIN),
                Arg::Char(b'!'),
            ],
        ),
        case(
            "binary",
            b"{llb} {ib} {cb}\n",
            vec![Arg::U64(0xDEAD_BEEF), Arg::I32(-1), Arg::Char(0xA5)],
        ),
        case("unknown_braces", b"{x}{y}{z} {i} {f}{g}\n", vec![Arg::I32(7)]),
    ];

    let mut group = c.benchmark_group("printf");
    for (label, fmt, args) in &cases {
        group.throughput(Throughput::Bytes(fmt.len() as u64));
        group.bench_with_input(BenchmarkId::new("capture", label), fmt, |b, &fmt| {
            let mut sink = CaptureBuffer::<512>::new();
            b.iter(|| {
                sink.clear();
                black_box(printf_with(&CONFIG, &mut sink, black_box(fmt), args))
            });
        });
    }
    group.finish();
}

fn bench_fib_listing(c: &mut Criterion) {
    let mut fib = Vec::with_capacity(94);
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..94 {
        fib.push(a);
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }

    c.bench_function("printf/fib_94_lines", |bench| {
        let mut sink = CaptureBuffer::<4096>::new();
        bench.iter(|| {
            sink.clear();
            for (i, &v) in fib.iter().enumerate() {
                let args = [Arg::I32(i as i32), Arg::U64(v)];
                let _ = printf_with(&CONFIG, &mut sink, b"fib({i}) = {ull}\n", &args);
            }
            black_box(sink.len())
        });
    });
}

criterion_group!(benches, bench_templates, bench_fib_listing);
criterion_main!(benches);
