//! ABI entry points for the guest's integer-to-decimal helpers.
//!
//! Signatures follow the guest header:
//!
//! ```c
//! bool llToStr(long long v, char *buf, int n);
//! bool ullToStr(unsigned long long v, char *buf, int n);
//! ```
//!
//! Each returns `true` and leaves a NUL-terminated string in `buf` when the
//! text fits in `n` bytes, and `false` otherwise. On `false` the buffer holds
//! unspecified partial output.

#![allow(non_snake_case)]

use core::ffi::{c_char, c_int, c_long, c_uint, c_ulong};

use rvprint_core::stdlib::conversion::{self, CapacityExhausted};

/// Borrow the caller's buffer as a slice, rejecting null or non-positive sizes.
///
/// # Safety
///
/// `buf` must be valid for writes of `n` bytes when non-null.
unsafe fn out_slice<'a>(buf: *mut c_char, n: c_int) -> Option<&'a mut [u8]> {
    if buf.is_null() || n <= 0 {
        return None;
    }
    // SAFETY: caller guarantees `buf` is writable for `n` bytes.
    Some(unsafe { core::slice::from_raw_parts_mut(buf.cast::<u8>(), n as usize) })
}

/// Run a conversion against the caller's buffer.
unsafe fn convert(
    buf: *mut c_char,
    n: c_int,
    f: impl FnOnce(&mut [u8]) -> Result<usize, CapacityExhausted>,
) -> bool {
    // SAFETY: forwarded from the entry point's contract.
    match unsafe { out_slice(buf, n) } {
        Some(dst) => f(dst).is_ok(),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// signed
// ---------------------------------------------------------------------------

/// `bool llToStr(long long v, char *buf, int n)`
///
/// # Safety
///
/// `buf` must be null or valid for writes of `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn llToStr(v: i64, buf: *mut c_char, n: c_int) -> bool {
    unsafe { convert(buf, n, |dst| conversion::ll_to_str(v, dst)) }
}

/// `bool lToStr(long v, char *buf, int n)`
///
/// # Safety
///
/// `buf` must be null or valid for writes of `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lToStr(v: c_long, buf: *mut c_char, n: c_int) -> bool {
    unsafe { convert(buf, n, |dst| conversion::ll_to_str(v as i64, dst)) }
}

/// `bool iToStr(int v, char *buf, int n)`
///
/// # Safety
///
/// `buf` must be null or valid for writes of `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn iToStr(v: c_int, buf: *mut c_char, n: c_int) -> bool {
    unsafe { convert(buf, n, |dst| conversion::i_to_str(v, dst)) }
}

// ---------------------------------------------------------------------------
// unsigned
// ---------------------------------------------------------------------------

/// `bool ullToStr(unsigned long long v, char *buf, int n)`
///
/// # Safety
///
/// `buf` must be null or valid for writes of `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ullToStr(v: u64, buf: *mut c_char, n: c_int) -> bool {
    unsafe { convert(buf, n, |dst| conversion::ull_to_str(v, dst)) }
}

/// `bool ulToStr(unsigned long v, char *buf, int n)`
///
/// # Safety
///
/// `buf` must be null or valid for writes of `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ulToStr(v: c_ulong, buf: *mut c_char, n: c_int) -> bool {
    unsafe { convert(buf, n, |dst| conversion::ull_to_str(v as u64, dst)) }
}

/// `bool uiToStr(unsigned int v, char *buf, int n)`
///
/// # Safety
///
/// `buf` must be null or valid for writes of `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn uiToStr(v: c_uint, buf: *mut c_char, n: c_int) -> bool {
    unsafe { convert(buf, n, |dst| conversion::ui_to_str(v, dst)) }
}
