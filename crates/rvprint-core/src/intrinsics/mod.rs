//! Machine primitives.
//!
//! A guest talks to the emulator through exactly two operations: put one byte
//! on the console and stop the machine. Everything that produces output in
//! this crate goes through [`Intrinsics`], so the concrete binding (reserved
//! instruction words on the emulator, a capture buffer in tests) is swappable.

mod capture;

pub use capture::CaptureBuffer;

/// The two host-provided primitives.
///
/// `putchar` always succeeds; there is no backpressure or error channel.
/// `halt` stops execution unconditionally and never returns. Partially
/// emitted output and live buffers are abandoned as-is.
pub trait Intrinsics {
    /// Emit one byte on the machine's text output channel.
    fn putchar(&mut self, c: u8);

    /// Stop the machine.
    fn halt(&mut self) -> !;

    /// Emit every byte of `s`.
    fn puts(&mut self, s: &[u8]) {
        for &c in s {
            self.putchar(c);
        }
    }
}

impl<I: Intrinsics + ?Sized> Intrinsics for &mut I {
    fn putchar(&mut self, c: u8) {
        (**self).putchar(c);
    }

    fn halt(&mut self) -> ! {
        (**self).halt()
    }
}
