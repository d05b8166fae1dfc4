#![no_main]
use libfuzzer_sys::fuzz_target;
use rvprint_core::stdio::render_decimal;
use rvprint_core::stdlib::{decimal_digits, ll_to_str, ull_to_str};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let raw = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let capacity = usize::from(data[8]) % 32;
    let mut buf = vec![0xAAu8; capacity];

    // Unsigned: succeeds exactly when digits plus terminator fit.
    let needed = decimal_digits(raw) + 1;
    match ull_to_str(raw, &mut buf) {
        Ok(len) => {
            assert!(needed <= capacity);
            assert_eq!(&buf[..len], raw.to_string().as_bytes());
            assert_eq!(buf[len], 0);
        }
        Err(_) => assert!(needed > capacity),
    }

    // Signed: same value reinterpreted.
    let signed = raw as i64;
    let text = signed.to_string();
    buf.fill(0xAA);
    match ll_to_str(signed, &mut buf) {
        Ok(len) => assert_eq!(&buf[..len], text.as_bytes()),
        Err(_) => assert!(text.len() + 1 > capacity),
    }

    // The retry driver never fails and agrees with std.
    let rendered = render_decimal(signed.unsigned_abs(), signed < 0);
    assert_eq!(rendered.as_bytes(), text.as_bytes());
});
