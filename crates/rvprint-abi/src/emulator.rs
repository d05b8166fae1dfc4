//! Emulator intrinsics.
//!
//! The emulator reserves two otherwise-illegal instruction words:
//!
//! | word | effect |
//! |------|--------|
//! | `0xfffffffd` | print the low byte of `a0` on the console |
//! | `0xffffffff` | halt the machine |
//!
//! Both complete in a single instruction, so there is no intermediate state.

use core::arch::asm;

use rvprint_core::Intrinsics;

/// Instruction word that prints the byte in `a0`.
pub const PUTCHAR_WORD: u32 = 0xffff_fffd;
/// Instruction word that stops the machine.
pub const HALT_WORD: u32 = 0xffff_ffff;

/// The emulator's console and halt primitives.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmulatorIntrinsics;

impl Intrinsics for EmulatorIntrinsics {
    #[inline]
    fn putchar(&mut self, c: u8) {
        putchar(c);
    }

    #[inline]
    fn halt(&mut self) -> ! {
        halt()
    }
}

/// Print one byte on the emulator console.
#[inline]
pub fn putchar(c: u8) {
    // SAFETY: the reserved word only reads a0; no memory or other registers
    // are touched.
    unsafe {
        asm!(
            ".word {word}",
            word = const PUTCHAR_WORD,
            in("a0") c as usize,
            options(nomem, nostack, preserves_flags),
        );
    }
}

/// Stop the emulator. Never returns.
#[inline]
pub fn halt() -> ! {
    // SAFETY: the emulator stops executing at this word.
    unsafe {
        asm!(
            ".word {word}",
            word = const HALT_WORD,
            options(noreturn, nomem, nostack),
        );
    }
}

// ---------------------------------------------------------------------------
// C entry points
// ---------------------------------------------------------------------------

/// C `void __putchar(const char c)`.
#[cfg(not(test))]
#[unsafe(no_mangle)]
pub extern "C" fn __putchar(c: core::ffi::c_char) {
    putchar(c as u8);
}

/// C `void __hlt(void)`.
#[cfg(not(test))]
#[unsafe(no_mangle)]
pub extern "C" fn __hlt() -> ! {
    halt()
}

#[cfg(all(feature = "panic-halt", target_os = "none"))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo<'_>) -> ! {
    halt()
}
