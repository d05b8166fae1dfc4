#![no_main]
use libfuzzer_sys::fuzz_target;
use rvprint_core::intrinsics::CaptureBuffer;
use rvprint_core::{Arg, PrintConfig, WordWidth, printf_with};

fuzz_target!(|data: &[u8]| {
    // First byte picks the word width and an argument list shape; the rest is the template.
    let Some((&selector, fmt)) = data.split_first() else {
        return;
    };
    let word = if selector & 1 == 0 {
        WordWidth::W32
    } else {
        WordWidth::W64
    };
    let config = PrintConfig::new(word);

    let pool = [
        Arg::U64(u64::MAX),
        Arg::UWord(u64::from(u32::MAX)),
        Arg::I64(i64::MIN),
        Arg::IWord(i64::from(i32::MIN)),
        Arg::U32(0),
        Arg::I32(-1),
        Arg::Char(b'{'),
        Arg::Str(b"{i}\0tail"),
    ];
    let count = usize::from(selector >> 1) % 9;
    let args: Vec<Arg<'_>> = pool
        .iter()
        .cycle()
        .skip(usize::from(selector) % 8)
        .take(count)
        .copied()
        .collect();

    let mut sink = CaptureBuffer::<8192>::new();
    match printf_with(&config, &mut sink, fmt, &args) {
        // The engine reports exactly what it emitted.
        Ok(written) => assert_eq!(written, sink.len() + sink.dropped()),
        // Validation happens before any byte is emitted.
        Err(_) => assert!(sink.is_empty() && sink.dropped() == 0),
    }
});
