//! The placeholder table.
//!
//! A template is plain bytes interleaved with fixed `{...}` spellings. At each
//! cursor position the table is tried in order and the first spelling that is
//! a prefix of the remaining text wins. There is no escape syntax: text that
//! matches no entry is printed as-is.

use crate::config::WordWidth;
use crate::string;

use super::arg::{Arg, ArgKind};

/// How a placeholder's argument is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Decimal text through the growable-retry driver.
    Decimal,
    /// Every bit of the declared width, most significant first.
    Binary,
    /// Bytes emitted directly (`{s}`, `{c}`).
    Raw,
}

/// One placeholder spelling and the argument it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub spelling: &'static [u8],
    pub kind: ArgKind,
    pub render: Render,
}

impl Token {
    const fn new(spelling: &'static [u8], kind: ArgKind, render: Render) -> Self {
        Self {
            spelling,
            kind,
            render,
        }
    }

    /// The spelling as text.
    #[must_use]
    pub fn name(&self) -> &'static str {
        core::str::from_utf8(self.spelling).unwrap_or("{?}")
    }

    /// Number of digits a binary placeholder prints. `None` for other renderings.
    #[must_use]
    pub const fn bit_width(&self, word: WordWidth) -> Option<u32> {
        if !matches!(self.render, Render::Binary) {
            return None;
        }
        Some(match self.kind {
            ArgKind::U64 | ArgKind::I64 => 64,
            ArgKind::UWord | ArgKind::IWord => word.bits(),
            ArgKind::U32 | ArgKind::I32 => 32,
            ArgKind::Char | ArgKind::Str => 8,
        })
    }

    /// Whether `arg` may fill this placeholder.
    ///
    /// Decimal and raw placeholders need the exact declared type. Binary
    /// placeholders print a bit pattern, so either signedness of the declared
    /// width is accepted.
    #[must_use]
    pub const fn accepts(&self, arg: &Arg<'_>) -> bool {
        let found = arg.kind();
        match self.render {
            Render::Decimal | Render::Raw => same_kind(self.kind, found),
            Render::Binary => matches!(
                (self.kind, found),
                (ArgKind::U64, ArgKind::U64 | ArgKind::I64)
                    | (ArgKind::UWord, ArgKind::UWord | ArgKind::IWord)
                    | (ArgKind::U32, ArgKind::U32 | ArgKind::I32)
                    | (ArgKind::Char, ArgKind::Char)
            ),
        }
    }
}

const fn same_kind(a: ArgKind, b: ArgKind) -> bool {
    a as u8 == b as u8
}

/// Every placeholder, in match order.
pub static TOKENS: [Token; 12] = [
    Token::new(b"{ull}", ArgKind::U64, Render::Decimal),
    Token::new(b"{ul}", ArgKind::UWord, Render::Decimal),
    Token::new(b"{ll}", ArgKind::I64, Render::Decimal),
    Token::new(b"{l}", ArgKind::IWord, Render::Decimal),
    Token::new(b"{ui}", ArgKind::U32, Render::Decimal),
    Token::new(b"{i}", ArgKind::I32, Render::Decimal),
    Token::new(b"{s}", ArgKind::Str, Render::Raw),
    Token::new(b"{c}", ArgKind::Char, Render::Raw),
    Token::new(b"{llb}", ArgKind::U64, Render::Binary),
    Token::new(b"{lb}", ArgKind::UWord, Render::Binary),
    Token::new(b"{ib}", ArgKind::U32, Render::Binary),
    Token::new(b"{cb}", ArgKind::Char, Render::Binary),
];

/// First table entry whose spelling is a prefix of `rest`.
pub fn match_token(rest: &[u8]) -> Option<&'static Token> {
    TOKENS
        .iter()
        .find(|token| string::starts_with(rest, token.spelling))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_spelling_matches_itself() {
        for token in &TOKENS {
            let found = match_token(token.spelling).unwrap();
            assert_eq!(found, token, "{} resolved to {}", token.name(), found.name());
        }
    }

    #[test]
    fn test_match_requires_full_spelling() {
        assert!(match_token(b"{ul").is_none());
        assert!(match_token(b"{x}").is_none());
        assert!(match_token(b"ull}").is_none());
        assert!(match_token(b"").is_none());
    }

    #[test]
    fn test_match_ignores_trailing_text() {
        let token = match_token(b"{i}\n").unwrap();
        assert_eq!(token.kind, ArgKind::I32);
        assert_eq!(token.render, Render::Decimal);
    }

    #[test]
    fn test_nul_ends_matching() {
        assert!(match_token(b"{i\0}").is_none());
    }

    #[test]
    fn test_bit_widths() {
        let width = |s: &[u8], w| match_token(s).unwrap().bit_width(w);
        assert_eq!(width(b"{llb}", WordWidth::W32), Some(64));
        assert_eq!(width(b"{lb}", WordWidth::W32), Some(32));
        assert_eq!(width(b"{lb}", WordWidth::W64), Some(64));
        assert_eq!(width(b"{ib}", WordWidth::W64), Some(32));
        assert_eq!(width(b"{cb}", WordWidth::W64), Some(8));
        assert_eq!(width(b"{i}", WordWidth::W64), None);
    }

    #[test]
    fn test_accepts() {
        let i = match_token(b"{i}").unwrap();
        assert!(i.accepts(&Arg::I32(1)));
        assert!(!i.accepts(&Arg::U32(1)));
        assert!(!i.accepts(&Arg::I64(1)));

        let ib = match_token(b"{ib}").unwrap();
        assert!(ib.accepts(&Arg::U32(1)));
        assert!(ib.accepts(&Arg::I32(-1)));
        assert!(!ib.accepts(&Arg::U64(1)));

        let cb = match_token(b"{cb}").unwrap();
        assert!(cb.accepts(&Arg::Char(b'a')));
        assert!(!cb.accepts(&Arg::Str(b"a")));
    }
}
