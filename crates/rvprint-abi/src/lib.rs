//! # rvprint-abi
//!
//! Machine-facing boundary for rvprint guests.
//!
//! - [`emulator`]: the concrete [`Intrinsics`](rvprint_core::Intrinsics) binding
//!   for the RISC-V emulator (riscv32/riscv64 targets only)
//! - [`stdlib_abi`]: `extern "C"` integer-to-decimal entry points (`llToStr`, ...)
//! - [`string_abi`]: `extern "C"` `strlen`/`strstr` for guest C code
//!
//! # Architecture
//!
//! ```text
//! C guest code -> ABI entry (this crate) -> rvprint-core safe impl -> emulator intrinsics
//! ```

#![cfg_attr(target_os = "none", no_std)]

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub mod emulator;

pub mod stdlib_abi;

// Only built for freestanding targets: the #[no_mangle] strlen/strstr would
// shadow the host libc in any hosted binary, test binaries included.
#[cfg(all(not(test), target_os = "none"))]
pub mod string_abi;
