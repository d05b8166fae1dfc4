//! Formatted output.
//!
//! Implements the guest `printf`: a template of literal bytes and `{...}`
//! placeholders, the typed argument list it consumes, and the decimal
//! driver that sizes conversion buffers without a heap.

pub mod arg;
pub mod error;
pub mod growable;
pub mod printf;
pub mod token;

pub use arg::{Arg, ArgKind};
pub use error::FormatError;
pub use growable::{DecimalText, print_signed, print_unsigned, render_decimal};
pub use printf::{check_args, print_binary, printf, printf_with};
pub use token::{Render, TOKENS, Token};

/// Format and emit through a machine, converting each argument with
/// [`Arg::from`].
///
/// ```
/// use rvprint_core::intrinsics::CaptureBuffer;
///
/// let mut out = CaptureBuffer::<16>::new();
/// rvprint_core::rvprintf!(&mut out, "{i}\n", -5).unwrap();
/// assert_eq!(out.as_bytes(), b"-5\n");
/// ```
#[macro_export]
macro_rules! rvprintf {
    ($machine:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::stdio::printf(
            $machine,
            ::core::convert::AsRef::<[u8]>::as_ref($fmt),
            &[$($crate::stdio::Arg::from($arg)),*],
        )
    };
}
