//! Target configuration.
//!
//! The only target-dependent quantity in the placeholder language is the width
//! of a C `long` ("word"): 32 bits on rv32 guests, 64 bits on rv64 guests. It
//! decides how many bits `{lb}` prints and which values `{l}`/`{ul}` accept.

use core::fmt;

/// Width of the target's native `long`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordWidth {
    W32,
    W64,
}

impl WordWidth {
    /// Word width of the target this crate is compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_pointer_width = "64") {
            Self::W64
        } else {
            Self::W32
        }
    }

    /// Number of bits in a word.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Map a bit count to a width. Only 32 and 64 are valid.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }

    /// Parse from string (case-insensitive). Unknown spellings yield `None`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim();
        let any_of = |names: &[&str]| names.iter().any(|n| s.eq_ignore_ascii_case(n));
        if any_of(&["32", "rv32", "w32"]) {
            Some(Self::W32)
        } else if any_of(&["64", "rv64", "w64"]) {
            Some(Self::W64)
        } else {
            None
        }
    }

    /// Returns true if `value` is representable as an unsigned word.
    #[must_use]
    pub const fn fits_unsigned(self, value: u64) -> bool {
        match self {
            Self::W32 => value <= u32::MAX as u64,
            Self::W64 => true,
        }
    }

    /// Returns true if `value` is representable as a signed word.
    #[must_use]
    pub const fn fits_signed(self, value: i64) -> bool {
        match self {
            Self::W32 => value >= i32::MIN as i64 && value <= i32::MAX as i64,
            Self::W64 => true,
        }
    }
}

impl Default for WordWidth {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for WordWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Settings consulted by the format engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintConfig {
    pub word: WordWidth,
}

impl PrintConfig {
    #[must_use]
    pub const fn new(word: WordWidth) -> Self {
        Self { word }
    }
}
