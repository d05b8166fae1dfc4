//! Growable-retry decimal driver.
//!
//! The length of a number's text is only estimated up front. The driver
//! converts into a window of that size and, when the codec reports the window
//! too small, doubles it and converts again. All attempts share one stack
//! scratch buffer sized for the widest possible text, so no attempt ever
//! needs more stack than the last.

use crate::intrinsics::Intrinsics;
use crate::stdlib::conversion::{MAX_DECIMAL_LEN, write_decimal};

/// Seed for the first window: one byte per digit plus one of slack.
///
/// Zero counts no digits and seeds a single byte, which is one short; the
/// retry loop covers that and negative values, which need a sign byte.
pub fn estimate_len(magnitude: u64) -> usize {
    let mut count = 1;
    let mut n = magnitude;
    while n != 0 {
        n /= 10;
        count += 1;
    }
    count
}

/// Decimal text produced by [`render_decimal`].
#[derive(Debug, Clone, Copy)]
pub struct DecimalText {
    buf: [u8; MAX_DECIMAL_LEN],
    len: usize,
    attempts: u32,
}

impl DecimalText {
    /// The text, without its terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// How many conversions were run before one fit.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Convert `magnitude` (negated when `negative` is set) to decimal text.
pub fn render_decimal(magnitude: u64, negative: bool) -> DecimalText {
    let mut scratch = [0u8; MAX_DECIMAL_LEN];
    let mut capacity = estimate_len(magnitude);
    let mut attempts = 0;

    loop {
        attempts += 1;
        let window = capacity.min(MAX_DECIMAL_LEN);
        match write_decimal(magnitude, negative, &mut scratch[..window]) {
            Ok(len) => {
                return DecimalText {
                    buf: scratch,
                    len,
                    attempts,
                };
            }
            // A full-size window always fits, so the loop ends by then.
            Err(_) => capacity = capacity.saturating_mul(2),
        }
    }
}

/// Emit the decimal text of a signed value.
pub fn print_signed<I: Intrinsics + ?Sized>(machine: &mut I, v: i64) -> usize {
    emit(machine, &render_decimal(v.unsigned_abs(), v < 0))
}

/// Emit the decimal text of an unsigned value.
pub fn print_unsigned<I: Intrinsics + ?Sized>(machine: &mut I, v: u64) -> usize {
    emit(machine, &render_decimal(v, false))
}

fn emit<I: Intrinsics + ?Sized>(machine: &mut I, text: &DecimalText) -> usize {
    machine.puts(text.as_bytes());
    text.len
}
