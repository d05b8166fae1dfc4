//! Harness configuration.
//!
//! The word width used when rendering `{l}`, `{ul}` and `{lb}` is read from
//! the `RVPRINT_WORD_BITS` environment variable:
//! - `32`: rv32 guests (`long` is 32 bits)
//! - `64`: rv64 guests (`long` is 64 bits)
//! - unset or anything else: the host's pointer width
//!
//! The CLI `--word-bits` flag overrides the environment, and a fixture case's
//! own `word_bits` overrides both.

use std::sync::atomic::{AtomicU8, Ordering};

use rvprint_core::{PrintConfig, WordWidth};

use crate::error::HarnessError;

/// Environment variable selecting the default word width.
pub const WORD_BITS_ENV: &str = "RVPRINT_WORD_BITS";

// Atomic cache: 0=unresolved, 1=W32, 2=W64, 255=resolving.
static CACHED_WIDTH: AtomicU8 = AtomicU8::new(0);

const WIDTH_UNRESOLVED: u8 = 0;
const WIDTH_32: u8 = 1;
const WIDTH_64: u8 = 2;
const WIDTH_RESOLVING: u8 = 255;

fn width_to_u8(width: WordWidth) -> u8 {
    match width {
        WordWidth::W32 => WIDTH_32,
        WordWidth::W64 => WIDTH_64,
    }
}

fn u8_to_width(v: u8) -> WordWidth {
    match v {
        WIDTH_32 => WordWidth::W32,
        WIDTH_64 => WordWidth::W64,
        _ => WordWidth::native(),
    }
}

/// Parse an environment value; unknown values fall back to the native width.
#[must_use]
pub fn parse_word_bits_env(raw: &str) -> WordWidth {
    WordWidth::from_str_loose(raw).unwrap_or_else(WordWidth::native)
}

/// Word width from the environment (read on first call, cached thereafter).
#[must_use]
pub fn env_word_width() -> WordWidth {
    let cached = CACHED_WIDTH.load(Ordering::Relaxed);
    if cached != WIDTH_UNRESOLVED && cached != WIDTH_RESOLVING {
        return u8_to_width(cached);
    }
    if cached == WIDTH_RESOLVING {
        return WordWidth::native();
    }

    if CACHED_WIDTH
        .compare_exchange(
            WIDTH_UNRESOLVED,
            WIDTH_RESOLVING,
            Ordering::SeqCst,
            Ordering::Relaxed,
        )
        .is_err()
    {
        // Another thread resolved or is resolving; use its answer if ready.
        let v = CACHED_WIDTH.load(Ordering::Relaxed);
        return u8_to_width(v);
    }

    let width = std::env::var(WORD_BITS_ENV)
        .map(|raw| parse_word_bits_env(&raw))
        .unwrap_or_else(|_| WordWidth::native());
    CACHED_WIDTH.store(width_to_u8(width), Ordering::Release);
    width
}

/// Convert an explicit bit count into a width.
pub fn word_width_from_bits(bits: u32) -> Result<WordWidth, HarnessError> {
    WordWidth::from_bits(bits).ok_or(HarnessError::InvalidWordWidth(bits))
}

/// Settings for one harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Word width used by cases that do not name their own.
    pub default_word: WordWidth,
}

impl HarnessConfig {
    /// Resolve from an optional CLI override, falling back to the environment.
    pub fn resolve(word_bits: Option<u32>) -> Result<Self, HarnessError> {
        let default_word = match word_bits {
            Some(bits) => word_width_from_bits(bits)?,
            None => env_word_width(),
        };
        Ok(Self { default_word })
    }

    /// Print settings for a case, honoring its own override.
    pub fn print_config(&self, case_word_bits: Option<u32>) -> Result<PrintConfig, HarnessError> {
        let word = match case_word_bits {
            Some(bits) => word_width_from_bits(bits)?,
            None => self.default_word,
        };
        Ok(PrintConfig::new(word))
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            default_word: WordWidth::native(),
        }
    }
}
