//! Recording machine for host-side runs.

use rvprint_core::Intrinsics;

/// An [`Intrinsics`] sink that appends every emitted byte to a `Vec`.
///
/// There is no machine to stop, so `halt` panics with the output so far.
#[derive(Debug, Default, Clone)]
pub struct RecordingMachine {
    output: Vec<u8>,
}

impl RecordingMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Output decoded lossily as text.
    #[must_use]
    pub fn output_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    #[must_use]
    pub fn into_output(self) -> Vec<u8> {
        self.output
    }
}

impl Intrinsics for RecordingMachine {
    fn putchar(&mut self, c: u8) {
        self.output.push(c);
    }

    fn halt(&mut self) -> ! {
        panic!("machine halted after output {:?}", self.output_lossy())
    }
}
