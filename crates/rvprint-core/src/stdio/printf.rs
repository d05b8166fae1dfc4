//! printf formatting engine.
//!
//! Templates use fixed `{...}` placeholders (see [`TOKENS`]) instead of
//! `%`-directives. The template ends at its first NUL or at the end of the
//! slice. Arguments are an explicit slice of [`Arg`] values, checked against
//! the placeholders before anything is written, so a bad call emits nothing.
//!
//! Design invariant: no allocation. Decimal output goes through one 22-byte
//! stack buffer; everything else is emitted byte by byte as it is scanned.

use crate::config::PrintConfig;
use crate::intrinsics::Intrinsics;
use crate::string;

use super::arg::Arg;
use super::error::FormatError;
use super::growable::{print_signed, print_unsigned};
use super::token::{TOKENS, Token, match_token};

// ---------------------------------------------------------------------------
// Segment: parsed pieces of a template
// ---------------------------------------------------------------------------

/// A segment of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSegment<'a> {
    /// Literal bytes to emit verbatim.
    Literal(&'a [u8]),
    /// A placeholder consuming one argument.
    Placeholder(&'static Token),
}

/// Iterator over the segments of a template.
///
/// Literal runs are split wherever a placeholder spelling starts, so every
/// byte position is tested against the whole table.
#[derive(Debug, Clone)]
pub struct FormatSegments<'a> {
    fmt: &'a [u8],
    pos: usize,
}

impl<'a> FormatSegments<'a> {
    pub fn new(fmt: &'a [u8]) -> Self {
        Self {
            fmt: &fmt[..string::strlen(fmt)],
            pos: 0,
        }
    }
}

impl<'a> Iterator for FormatSegments<'a> {
    type Item = FormatSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.fmt.get(self.pos..).filter(|r| !r.is_empty())?;

        if let Some(token) = match_token(rest) {
            self.pos += token.spelling.len();
            return Some(FormatSegment::Placeholder(token));
        }

        // At least one literal byte; extend until the next placeholder.
        let mut run = 1;
        while run < rest.len() && match_token(&rest[run..]).is_none() {
            run += 1;
        }
        self.pos += run;
        Some(FormatSegment::Literal(&rest[..run]))
    }
}

/// Parse a template into segments.
pub fn parse_format_string(fmt: &[u8]) -> FormatSegments<'_> {
    FormatSegments::new(fmt)
}

/// Number of placeholders in a template.
pub fn count_placeholders(fmt: &[u8]) -> usize {
    parse_format_string(fmt)
        .filter(|seg| matches!(seg, FormatSegment::Placeholder(_)))
        .count()
}

// ---------------------------------------------------------------------------
// Argument validation
// ---------------------------------------------------------------------------

/// Check `args` against the placeholders of `fmt`, in order.
///
/// Returns the number of arguments consumed, which equals `args.len()` on
/// success.
pub fn check_args(
    config: &PrintConfig,
    fmt: &[u8],
    args: &[Arg<'_>],
) -> Result<usize, FormatError> {
    let mut index = 0;
    for segment in parse_format_string(fmt) {
        let FormatSegment::Placeholder(token) = segment else {
            continue;
        };
        let arg = args.get(index).ok_or(FormatError::MissingArgument {
            index,
            expected: token.kind,
        })?;
        if !token.accepts(arg) {
            return Err(FormatError::TypeMismatch {
                index,
                expected: token.kind,
                found: arg.kind(),
            });
        }
        let in_range = match *arg {
            Arg::UWord(v) => config.word.fits_unsigned(v),
            Arg::IWord(v) => config.word.fits_signed(v),
            _ => true,
        };
        if !in_range {
            return Err(FormatError::WordOutOfRange {
                index,
                bits: config.word.bits(),
            });
        }
        index += 1;
    }

    if index != args.len() {
        return Err(FormatError::ExtraArguments {
            consumed: index,
            supplied: args.len(),
        });
    }
    Ok(index)
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Render `fmt` with `args` through `machine`, using the native word width.
///
/// Returns the number of bytes emitted.
pub fn printf<I: Intrinsics + ?Sized>(
    machine: &mut I,
    fmt: &[u8],
    args: &[Arg<'_>],
) -> Result<usize, FormatError> {
    printf_with(&PrintConfig::default(), machine, fmt, args)
}

/// Render `fmt` with `args` through `machine` under `config`.
pub fn printf_with<I: Intrinsics + ?Sized>(
    config: &PrintConfig,
    machine: &mut I,
    fmt: &[u8],
    args: &[Arg<'_>],
) -> Result<usize, FormatError> {
    check_args(config, fmt, args)?;

    let mut args = args.iter();
    let mut written = 0;
    for segment in parse_format_string(fmt) {
        written += match segment {
            FormatSegment::Literal(bytes) => {
                machine.puts(bytes);
                bytes.len()
            }
            FormatSegment::Placeholder(token) => match args.next() {
                Some(arg) => render_arg(config, machine, token, arg),
                None => 0,
            },
        };
    }
    Ok(written)
}

fn render_arg<I: Intrinsics + ?Sized>(
    config: &PrintConfig,
    machine: &mut I,
    token: &Token,
    arg: &Arg<'_>,
) -> usize {
    if let Some(width) = token.bit_width(config.word) {
        return print_binary(machine, arg.bits().unwrap_or(0), width);
    }
    match *arg {
        Arg::U64(v) | Arg::UWord(v) => print_unsigned(machine, v),
        Arg::U32(v) => print_unsigned(machine, u64::from(v)),
        Arg::I64(v) | Arg::IWord(v) => print_signed(machine, v),
        Arg::I32(v) => print_signed(machine, i64::from(v)),
        Arg::Char(c) => {
            machine.putchar(c);
            1
        }
        Arg::Str(s) => {
            let s = &s[..string::strlen(s)];
            machine.puts(s);
            s.len()
        }
    }
}

/// Emit the low `width` bits of `value`, most significant first, as `'0'`/`'1'`.
pub fn print_binary<I: Intrinsics + ?Sized>(machine: &mut I, value: u64, width: u32) -> usize {
    let width = width.min(u64::BITS);
    for bit in (0..width).rev() {
        machine.putchar(if (value >> bit) & 1 == 0 { b'0' } else { b'1' });
    }
    width as usize
}

/// Spellings of every placeholder, in match order.
pub fn placeholder_spellings() -> impl Iterator<Item = &'static [u8]> {
    TOKENS.iter().map(|token| token.spelling)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
