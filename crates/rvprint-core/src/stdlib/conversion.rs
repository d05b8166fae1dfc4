//! Integer-to-decimal conversion (llToStr, ullToStr and friends).
//!
//! The destination is a caller-owned slice whose length is the capacity. The
//! text is written left-to-right and NUL-terminated. A conversion that does
//! not fit, terminator included, fails instead of truncating; the slice is
//! then in an unspecified partially-written state and must not be read.

use thiserror::Error;

/// Longest text any conversion can produce, terminator included:
/// 20 digits of `u64::MAX` (or 19 of `i64::MIN`), a sign, and the NUL.
pub const MAX_DECIMAL_LEN: usize = 22;

/// The destination buffer was too small for the text plus its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer of {capacity} bytes cannot hold the converted text and terminator")]
pub struct CapacityExhausted {
    pub capacity: usize,
}

/// Convert `magnitude` (negated when `negative` is set) into `buf`.
///
/// Returns the text length, not counting the NUL written after it.
pub fn write_decimal(
    magnitude: u64,
    negative: bool,
    buf: &mut [u8],
) -> Result<usize, CapacityExhausted> {
    let mut acc = DigitAccumulator::new(buf);

    if magnitude == 0 {
        acc.push(b'0')?;
    }
    let mut v = magnitude;
    while v != 0 {
        acc.push(b'0' + (v % 10) as u8)?;
        v /= 10;
    }
    if negative {
        acc.push(b'-')?;
    }

    acc.finish()
}

/// Write cursor over the destination. Digits go in least-significant first;
/// `finish` reverses them and terminates the string.
struct DigitAccumulator<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> DigitAccumulator<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn push(&mut self, byte: u8) -> Result<(), CapacityExhausted> {
        let capacity = self.buf.len();
        let slot = self
            .buf
            .get_mut(self.pos)
            .ok_or(CapacityExhausted { capacity })?;
        *slot = byte;
        self.pos += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<usize, CapacityExhausted> {
        let len = self.pos;
        // The terminator must fit before anything is reordered.
        if len >= self.buf.len() {
            return Err(CapacityExhausted {
                capacity: self.buf.len(),
            });
        }
        self.buf[..len].reverse();
        self.push(0)?;
        Ok(len)
    }
}

// ---------------------------------------------------------------------------
// Typed entry points
// ---------------------------------------------------------------------------

/// `long long` to decimal.
pub fn ll_to_str(v: i64, buf: &mut [u8]) -> Result<usize, CapacityExhausted> {
    write_decimal(v.unsigned_abs(), v < 0, buf)
}

/// `long` to decimal.
pub fn l_to_str(v: isize, buf: &mut [u8]) -> Result<usize, CapacityExhausted> {
    ll_to_str(v as i64, buf)
}

/// `int` to decimal.
pub fn i_to_str(v: i32, buf: &mut [u8]) -> Result<usize, CapacityExhausted> {
    ll_to_str(i64::from(v), buf)
}

/// `unsigned long long` to decimal.
pub fn ull_to_str(v: u64, buf: &mut [u8]) -> Result<usize, CapacityExhausted> {
    write_decimal(v, false, buf)
}

/// `unsigned long` to decimal.
pub fn ul_to_str(v: usize, buf: &mut [u8]) -> Result<usize, CapacityExhausted> {
    ull_to_str(v as u64, buf)
}

/// `unsigned int` to decimal.
pub fn ui_to_str(v: u32, buf: &mut [u8]) -> Result<usize, CapacityExhausted> {
    ull_to_str(u64::from(v), buf)
}

/// Number of decimal digits in `v` (at least 1).
pub fn decimal_digits(v: u64) -> usize {
    let mut n = v / 10;
    let mut count = 1;
    while n != 0 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &[u8], len: usize) -> &[u8] {
        &buf[..len]
    }

    #[test]
    fn test_zero() {
        let mut buf = [0xAAu8; 4];
        let len = ull_to_str(0, &mut buf).unwrap();
        assert_eq!(len, 1);
        assert_eq!(&buf[..2], b"0\0");
    }

    #[test]
    fn test_positive() {
        let mut buf = [0u8; 8];
        let len = ull_to_str(12345, &mut buf).unwrap();
        assert_eq!(text(&buf, len), b"12345");
        assert_eq!(buf[len], 0);
    }

    #[test]
    fn test_negative() {
        let mut buf = [0u8; 8];
        let len = i_to_str(-5, &mut buf).unwrap();
        assert_eq!(text(&buf, len), b"-5");
        assert_eq!(buf[len], 0);
    }

    #[test]
    fn test_u64_max() {
        let mut buf = [0u8; MAX_DECIMAL_LEN];
        let len = ull_to_str(u64::MAX, &mut buf).unwrap();
        assert_eq!(text(&buf, len), b"18446744073709551615");
    }

    #[test]
    fn test_i64_min() {
        let mut buf = [0u8; MAX_DECIMAL_LEN];
        let len = ll_to_str(i64::MIN, &mut buf).unwrap();
        assert_eq!(text(&buf, len), b"-9223372036854775808");
    }

    #[test]
    fn test_i32_min() {
        let mut buf = [0u8; 16];
        let len = i_to_str(i32::MIN, &mut buf).unwrap();
        assert_eq!(text(&buf, len), b"-2147483648");
    }

    #[test]
    fn test_word_and_u32_wrappers() {
        let mut buf = [0u8; MAX_DECIMAL_LEN];
        let len = ui_to_str(u32::MAX, &mut buf).unwrap();
        assert_eq!(text(&buf, len), b"4294967295");
        let len = ul_to_str(42, &mut buf).unwrap();
        assert_eq!(text(&buf, len), b"42");
        let len = l_to_str(-42, &mut buf).unwrap();
        assert_eq!(text(&buf, len), b"-42");
    }

    #[test]
    fn test_no_room_for_terminator() {
        // Exactly the digit count: the NUL does not fit.
        let mut buf = [0u8; 3];
        assert_eq!(
            ull_to_str(123, &mut buf),
            Err(CapacityExhausted { capacity: 3 })
        );
    }

    #[test]
    fn test_no_room_for_sign() {
        // Digits plus NUL, but no byte for '-'.
        let mut buf = [0u8; 4];
        assert!(ll_to_str(-123, &mut buf).is_err());
        let mut buf = [0u8; 5];
        assert_eq!(ll_to_str(-123, &mut buf), Ok(4));
        assert_eq!(&buf, b"-123\0");
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf: [u8; 0] = [];
        assert_eq!(
            ull_to_str(0, &mut buf),
            Err(CapacityExhausted { capacity: 0 })
        );
    }

    #[test]
    fn test_zero_needs_two_bytes() {
        let mut buf = [0u8; 1];
        assert!(ull_to_str(0, &mut buf).is_err());
    }

    #[test]
    fn test_every_short_capacity_fails() {
        let values: [i64; 6] = [0, 7, -7, 1_000_000, -987_654_321, i64::MIN];
        for v in values {
            let required = decimal_digits(v.unsigned_abs()) + 1 + usize::from(v < 0);
            for n in 0..required {
                let mut buf = [0u8; MAX_DECIMAL_LEN];
                assert!(
                    ll_to_str(v, &mut buf[..n]).is_err(),
                    "value {v} must not fit in {n} bytes"
                );
            }
            let mut buf = [0u8; MAX_DECIMAL_LEN];
            assert!(ll_to_str(v, &mut buf[..required]).is_ok());
        }
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(u64::MAX), 20);
    }

    #[test]
    fn test_error_message() {
        let err = CapacityExhausted { capacity: 3 };
        let msg = std::format!("{err}");
        assert!(msg.contains("3 bytes"));
    }
}
