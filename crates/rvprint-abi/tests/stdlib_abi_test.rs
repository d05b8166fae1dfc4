use core::ffi::c_char;

use rvprint_abi::stdlib_abi::{iToStr, lToStr, llToStr, uiToStr, ulToStr, ullToStr};

fn text(buf: &[c_char]) -> String {
    let bytes: Vec<u8> = buf
        .iter()
        .map(|&c| c as u8)
        .take_while(|&b| b != 0)
        .collect();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn ll_to_str_writes_terminated_text() {
    let mut buf = [0x7f as c_char; 32];
    let ok = unsafe { llToStr(i64::MIN, buf.as_mut_ptr(), buf.len() as i32) };
    assert!(ok);
    assert_eq!(text(&buf), "-9223372036854775808");
}

#[test]
fn ull_to_str_reports_short_buffer() {
    let mut buf = [0 as c_char; 20];
    // 20 digits leave no room for the terminator.
    let ok = unsafe { ullToStr(u64::MAX, buf.as_mut_ptr(), 20) };
    assert!(!ok);

    let mut buf = [0 as c_char; 21];
    let ok = unsafe { ullToStr(u64::MAX, buf.as_mut_ptr(), 21) };
    assert!(ok);
    assert_eq!(text(&buf), "18446744073709551615");
}

#[test]
fn narrow_variants() {
    let mut buf = [0 as c_char; 16];
    unsafe {
        assert!(iToStr(-5, buf.as_mut_ptr(), 16));
        assert_eq!(text(&buf), "-5");
        assert!(uiToStr(u32::MAX, buf.as_mut_ptr(), 16));
        assert_eq!(text(&buf), "4294967295");
        assert!(lToStr(-42, buf.as_mut_ptr(), 16));
        assert_eq!(text(&buf), "-42");
        assert!(ulToStr(0, buf.as_mut_ptr(), 16));
        assert_eq!(text(&buf), "0");
    }
}

#[test]
fn null_or_non_positive_size_fails() {
    let mut buf = [0 as c_char; 4];
    unsafe {
        assert!(!llToStr(1, core::ptr::null_mut(), 4));
        assert!(!llToStr(1, buf.as_mut_ptr(), 0));
        assert!(!llToStr(1, buf.as_mut_ptr(), -1));
    }
}

#[test]
fn sign_needs_its_own_byte() {
    let mut buf = [0 as c_char; 3];
    // "-5" plus NUL is three bytes; two is not enough.
    unsafe {
        assert!(!iToStr(-5, buf.as_mut_ptr(), 2));
        assert!(iToStr(-5, buf.as_mut_ptr(), 3));
    }
    assert_eq!(text(&buf), "-5");
}
