//! String operations: strlen, strncmp, strstr.
//!
//! Strings are `&[u8]` slices where a NUL byte (`0x00`) marks the logical end.
//! A slice without a NUL ends at its last byte, so every function here is
//! total over arbitrary slices.

/// Returns the length of a NUL-terminated byte string (not counting the NUL).
///
/// Equivalent to C `strlen`. Scans `s` for the first `0x00` byte and returns
/// its index. If no NUL is found, returns the full slice length.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Compares at most `n` bytes of two NUL-terminated byte strings.
///
/// Equivalent to C `strncmp`. Bytes past the end of a slice read as NUL.
/// Returns a negative value if `s1 < s2`, zero if equal, positive if `s1 > s2`.
pub fn strncmp(s1: &[u8], s2: &[u8], n: usize) -> i32 {
    for i in 0..n {
        let a = s1.get(i).copied().unwrap_or(0);
        let b = s2.get(i).copied().unwrap_or(0);

        if a != b {
            return (a as i32) - (b as i32);
        }
        if a == 0 {
            return 0;
        }
    }
    0
}

/// Finds the first offset in `haystack` at which `needle` matches as a prefix.
///
/// Equivalent to C `strstr` as shipped in the guest runtime: only offsets
/// before the haystack's terminator are tried, so an empty needle is found at
/// offset 0 of a non-empty haystack and not at all in an empty one.
pub fn strstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let h_len = strlen(haystack);
    let needle = &needle[..strlen(needle)];

    (0..h_len).find(|&offset| strncmp(&haystack[offset..], needle, needle.len()) == 0)
}

/// Returns true if `needle` (up to its NUL) is a prefix of `s`.
#[inline]
pub fn starts_with(s: &[u8], needle: &[u8]) -> bool {
    strncmp(s, needle, strlen(needle)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strlen_basic() {
        assert_eq!(strlen(b"hello\0"), 5);
        assert_eq!(strlen(b"\0"), 0);
        assert_eq!(strlen(b"abc"), 3); // no NUL found
        assert_eq!(strlen(b""), 0);
    }

    #[test]
    fn test_strlen_stops_at_first_nul() {
        assert_eq!(strlen(b"ab\0cd\0"), 2);
    }

    #[test]
    fn test_strncmp_basic() {
        assert_eq!(strncmp(b"abcdef\0", b"abcxyz\0", 3), 0);
        assert!(strncmp(b"abcdef\0", b"abcxyz\0", 4) < 0);
    }

    #[test]
    fn test_strncmp_short_slice_reads_nul() {
        assert!(strncmp(b"{u", b"{ul}", 4) < 0);
        assert_eq!(strncmp(b"{ul}tail", b"{ul}", 4), 0);
    }

    #[test]
    fn test_strstr_found() {
        assert_eq!(strstr(b"hello world\0", b"world\0"), Some(6));
    }

    #[test]
    fn test_strstr_first_occurrence() {
        assert_eq!(strstr(b"{i}{i}", b"{i}"), Some(0));
        assert_eq!(strstr(b"x{i}{i}", b"{i}"), Some(1));
    }

    #[test]
    fn test_strstr_not_found() {
        assert_eq!(strstr(b"hello world\0", b"xyz\0"), None);
        assert_eq!(strstr(b"wor\0", b"world\0"), None);
    }

    #[test]
    fn test_strstr_ignores_text_after_nul() {
        assert_eq!(strstr(b"ab\0world", b"world"), None);
    }

    #[test]
    fn test_strstr_empty_needle() {
        assert_eq!(strstr(b"hello\0", b"\0"), Some(0));
        assert_eq!(strstr(b"\0", b"\0"), None);
        assert_eq!(strstr(b"", b""), None);
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with(b"{ull}\n", b"{ull}"));
        assert!(!starts_with(b"{ul}\n", b"{ull}"));
        assert!(starts_with(b"anything", b""));
    }
}
