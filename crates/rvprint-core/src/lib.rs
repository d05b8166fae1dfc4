//! # rvprint-core
//!
//! Allocation-free formatted output for freestanding RISC-V guests.
//!
//! The only outside world a guest has is two machine primitives, emit-one-byte
//! and halt ([`intrinsics::Intrinsics`]). On top of them this crate provides:
//!
//! - [`string`]: `strlen`, `strstr` and `strncmp` over NUL-terminated byte strings
//! - [`stdlib`]: the integer-to-decimal codec (`ll_to_str`, `ull_to_str`, ...)
//! - [`stdio`]: the growable-retry decimal driver and the `{...}` placeholder
//!   format engine ([`stdio::printf`])
//!
//! Nothing here allocates. Every buffer lives on the caller's stack.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod intrinsics;
pub mod stdio;
pub mod stdlib;
pub mod string;

pub use config::{PrintConfig, WordWidth};
pub use intrinsics::Intrinsics;
pub use stdio::{Arg, FormatError, printf, printf_with};
pub use stdlib::CapacityExhausted;
