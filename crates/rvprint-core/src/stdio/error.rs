//! Argument-contract violations detected before any output is emitted.

use thiserror::Error;

use super::arg::ArgKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("placeholder {index} needs a `{expected}` argument but the list ended")]
    MissingArgument { index: usize, expected: ArgKind },
    #[error("placeholder {index} needs a `{expected}` argument, got `{found}`")]
    TypeMismatch {
        index: usize,
        expected: ArgKind,
        found: ArgKind,
    },
    #[error("argument {index} does not fit in a {bits}-bit word")]
    WordOutOfRange { index: usize, bits: u32 },
    #[error("template consumes {consumed} arguments but {supplied} were supplied")]
    ExtraArguments { consumed: usize, supplied: usize },
}
