//! Fixed-capacity capture sink.

use super::Intrinsics;

/// An [`Intrinsics`] implementation that records emitted bytes in an inline
/// array instead of talking to hardware.
///
/// Bytes past the capacity are counted in [`dropped`](Self::dropped) and
/// otherwise discarded. `halt` panics, since a capture sink has no machine
/// to stop.
#[derive(Debug, Clone)]
pub struct CaptureBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
    dropped: usize,
}

impl<const N: usize> CaptureBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
            dropped: 0,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes discarded because the buffer was full.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.dropped = 0;
    }
}

impl<const N: usize> Default for CaptureBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Intrinsics for CaptureBuffer<N> {
    fn putchar(&mut self, c: u8) {
        match self.buf.get_mut(self.len) {
            Some(slot) => {
                *slot = c;
                self.len += 1;
            }
            None => self.dropped += 1,
        }
    }

    fn halt(&mut self) -> ! {
        panic!("halt requested after {} bytes of output", self.len)
    }
}
