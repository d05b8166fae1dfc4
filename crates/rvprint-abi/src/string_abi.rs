//! ABI layer for the guest's `strlen` and `strstr`.
//!
//! Both scan NUL-terminated C strings through raw pointers and delegate the
//! comparison logic to `rvprint-core`.

use core::ffi::c_char;

use rvprint_core::string;

/// Scan a C string and borrow it, terminator included.
///
/// # Safety
///
/// `s` must point to a NUL-terminated string.
unsafe fn c_str<'a>(s: *const c_char) -> &'a [u8] {
    let mut len = 0usize;
    // SAFETY: the caller guarantees a terminator is reachable.
    while unsafe { *s.add(len) } != 0 {
        len += 1;
    }
    // SAFETY: `len + 1` bytes were just read.
    unsafe { core::slice::from_raw_parts(s.cast::<u8>(), len + 1) }
}

/// C `strlen`.
///
/// # Safety
///
/// `s` must point to a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strlen(s: *const c_char) -> usize {
    string::strlen(unsafe { c_str(s) })
}

/// C `strstr`. Returns null when `needle` is not found.
///
/// # Safety
///
/// Both pointers must point to NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strstr(haystack: *const c_char, needle: *const c_char) -> *const c_char {
    let (h, n) = unsafe { (c_str(haystack), c_str(needle)) };
    match string::strstr(h, n) {
        // SAFETY: `offset` is within the haystack.
        Some(offset) => unsafe { haystack.add(offset) },
        None => core::ptr::null(),
    }
}
