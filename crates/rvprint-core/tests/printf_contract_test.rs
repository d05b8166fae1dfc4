//! End-to-end contract tests for the codec, the retry driver and the engine.

use rvprint_core::intrinsics::CaptureBuffer;
use rvprint_core::stdio::{Arg, render_decimal};
use rvprint_core::stdlib::{MAX_DECIMAL_LEN, decimal_digits, ll_to_str, ull_to_str};
use rvprint_core::{PrintConfig, WordWidth, printf, printf_with};

/// Deterministic xorshift64* sequence so failures reproduce.
struct Sampler(u64);

impl Sampler {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Values spread across every digit count, not just the 19-20 digit range.
    fn spread(&mut self) -> u64 {
        let shift = self.next() % 64;
        self.next() >> shift
    }
}

fn boundary_values() -> Vec<u64> {
    let mut out = vec![0, 1, 9, u64::MAX, u64::MAX - 1];
    let mut p: u64 = 10;
    loop {
        out.extend([p - 1, p, p + 1]);
        match p.checked_mul(10) {
            Some(next) => p = next,
            None => break,
        }
    }
    out
}

fn convert_unsigned(v: u64) -> String {
    let mut buf = [0u8; MAX_DECIMAL_LEN];
    let len = ull_to_str(v, &mut buf).expect("full-size buffer always fits");
    assert_eq!(buf[len], 0, "text must be NUL-terminated");
    String::from_utf8(buf[..len].to_vec()).expect("ascii digits")
}

fn convert_signed(v: i64) -> String {
    let mut buf = [0u8; MAX_DECIMAL_LEN];
    let len = ll_to_str(v, &mut buf).expect("full-size buffer always fits");
    String::from_utf8(buf[..len].to_vec()).expect("ascii digits")
}

#[test]
fn unsigned_text_parses_back_without_leading_zeros() {
    let mut sampler = Sampler(0x9E37_79B9_7F4A_7C15);
    let samples = (0..4096).map(|_| sampler.spread());
    for v in boundary_values().into_iter().chain(samples) {
        let text = convert_unsigned(v);
        assert_eq!(text.parse::<u64>().unwrap(), v);
        if v == 0 {
            assert_eq!(text, "0");
        } else {
            assert!(!text.starts_with('0'), "leading zero in {text}");
        }
    }
}

#[test]
fn signed_text_matches_std_rendering() {
    let mut sampler = Sampler(0xD1B5_4A32_D192_ED03);
    let samples = (0..4096).map(|_| sampler.spread() as i64);
    let fixed = [0, 1, -1, i64::MAX, i64::MIN, i64::MIN + 1];
    for v in fixed.into_iter().chain(samples) {
        let text = convert_signed(v);
        assert_eq!(text, v.to_string());
        if v < 0 && v != i64::MIN {
            assert_eq!(text, format!("-{}", -v));
        }
    }
}

#[test]
fn short_capacities_always_fail() {
    let mut sampler = Sampler(0x0123_4567_89AB_CDEF);
    for _ in 0..512 {
        let v = sampler.spread() as i64;
        let required = decimal_digits(v.unsigned_abs()) + 1 + usize::from(v < 0);
        let mut buf = [0u8; MAX_DECIMAL_LEN];
        for n in 0..required {
            assert!(ll_to_str(v, &mut buf[..n]).is_err(), "{v} fit in {n} bytes");
        }
        assert!(ll_to_str(v, &mut buf[..required]).is_ok());
    }
}

#[test]
fn retry_driver_agrees_with_codec() {
    let mut sampler = Sampler(0xFEED_FACE_CAFE_BEEF);
    let samples = (0..2048).map(|_| sampler.spread());
    for v in boundary_values().into_iter().chain(samples) {
        let text = render_decimal(v, false);
        assert_eq!(text.as_bytes(), convert_unsigned(v).as_bytes());

        let signed = v as i64;
        let text = render_decimal(signed.unsigned_abs(), signed < 0);
        assert_eq!(text.as_bytes(), convert_signed(signed).as_bytes());
    }
}

#[test]
fn engine_examples() {
    let mut out = CaptureBuffer::<64>::new();
    printf(&mut out, b"{i}\n", &[Arg::I32(-5)]).unwrap();
    assert_eq!(out.as_bytes(), b"-5\n");

    out.clear();
    printf(&mut out, b"{ull}\n", &[Arg::U64(u64::MAX)]).unwrap();
    assert_eq!(out.as_bytes(), b"18446744073709551615\n");

    out.clear();
    printf(&mut out, b"a{s}b", &[Arg::Str(b"XY")]).unwrap();
    assert_eq!(out.as_bytes(), b"aXYb");

    out.clear();
    printf(&mut out, b"Calculating Prime(\r\n", &[]).unwrap();
    assert_eq!(out.as_bytes(), b"Calculating Prime(\r\n");
}

#[test]
fn fixed_point_demo_line() {
    let mut out = CaptureBuffer::<128>::new();
    let config = PrintConfig::new(WordWidth::W32);
    printf_with(
        &config,
        &mut out,
        b"{ib} * {ib}\n",
        &[Arg::I32(1 << 16), Arg::I32(0x3243F)],
    )
    .unwrap();
    assert_eq!(
        out.as_bytes(),
        b"00000000000000010000000000000000 * 00000000000000110010010000111111\n"
    );
}

#[test]
fn fibonacci_listing_matches_std() {
    let mut out = CaptureBuffer::<4096>::new();
    let mut expected = String::new();
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..94 {
        printf(&mut out, b"{ull}\n", &[Arg::U64(a)]).unwrap();
        expected.push_str(&format!("{a}\n"));
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    assert_eq!(out.dropped(), 0);
    assert_eq!(out.as_bytes(), expected.as_bytes());
}

#[test]
fn unknown_placeholders_print_literally() {
    let mut out = CaptureBuffer::<64>::new();
    printf(&mut out, b"{d} {x} {ull", &[]).unwrap();
    assert_eq!(out.as_bytes(), b"{d} {x} {ull");
}
