//! String primitives used to scan format templates.

pub mod str;

pub use self::str::{starts_with, strlen, strncmp, strstr};
