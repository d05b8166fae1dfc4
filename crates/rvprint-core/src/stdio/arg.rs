//! Typed format arguments.

use core::fmt;

/// One argument slot, tagged with the C type a placeholder reads.
///
/// Word variants carry the value widened to 64 bits; whether it fits the
/// configured word width is checked when the argument list is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// `unsigned long long`
    U64(u64),
    /// `unsigned long`
    UWord(u64),
    /// `long long`
    I64(i64),
    /// `long`
    IWord(i64),
    /// `unsigned int`
    U32(u32),
    /// `int`
    I32(i32),
    /// `char`
    Char(u8),
    /// `const char *`, read up to its NUL or the end of the slice.
    Str(&'a [u8]),
}

/// Type tag of an [`Arg`], and the type a placeholder declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    U64,
    UWord,
    I64,
    IWord,
    U32,
    I32,
    Char,
    Str,
}

impl ArgKind {
    /// The C spelling of the type.
    #[must_use]
    pub const fn c_name(self) -> &'static str {
        match self {
            Self::U64 => "unsigned long long",
            Self::UWord => "unsigned long",
            Self::I64 => "long long",
            Self::IWord => "long",
            Self::U32 => "unsigned int",
            Self::I32 => "int",
            Self::Char => "char",
            Self::Str => "char *",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

impl Arg<'_> {
    #[must_use]
    pub const fn kind(&self) -> ArgKind {
        match self {
            Self::U64(_) => ArgKind::U64,
            Self::UWord(_) => ArgKind::UWord,
            Self::I64(_) => ArgKind::I64,
            Self::IWord(_) => ArgKind::IWord,
            Self::U32(_) => ArgKind::U32,
            Self::I32(_) => ArgKind::I32,
            Self::Char(_) => ArgKind::Char,
            Self::Str(_) => ArgKind::Str,
        }
    }

    /// Raw bit pattern of an integer or character argument, zero-extended
    /// from the argument's own width. `None` for strings.
    #[must_use]
    pub const fn bits(&self) -> Option<u64> {
        match *self {
            Self::U64(v) | Self::UWord(v) => Some(v),
            Self::I64(v) | Self::IWord(v) => Some(v as u64),
            Self::U32(v) => Some(v as u64),
            Self::I32(v) => Some(v as u32 as u64),
            Self::Char(c) => Some(c as u64),
            Self::Str(_) => None,
        }
    }
}

impl From<u64> for Arg<'_> {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<i64> for Arg<'_> {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<usize> for Arg<'_> {
    fn from(v: usize) -> Self {
        Self::UWord(v as u64)
    }
}

impl From<isize> for Arg<'_> {
    fn from(v: isize) -> Self {
        Self::IWord(v as i64)
    }
}

impl From<u32> for Arg<'_> {
    fn from(v: u32) -> Self {
        Self::U32(v)
    }
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<u8> for Arg<'_> {
    fn from(c: u8) -> Self {
        Self::Char(c)
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Self::Str(s)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s.as_bytes())
    }
}
