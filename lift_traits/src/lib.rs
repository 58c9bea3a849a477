pub mod clock;

pub use clock::{Clock, MonotonicClock};

/// One assembled bus frame: identifier byte at offset 0, payload after it.
///
/// The transport layer (frame assembly, checksum, timing) delivers these
/// ready to read; the core only inspects offsets it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinFrame {
    bytes: [u8; Self::MAX_BYTES],
    len: usize,
}

impl LinFrame {
    /// Identifier byte plus up to eight data bytes.
    pub const MAX_BYTES: usize = 9;

    /// Build a frame from raw bytes; anything past `MAX_BYTES` is dropped.
    pub fn new(raw: &[u8]) -> Self {
        let len = raw.len().min(Self::MAX_BYTES);
        let mut bytes = [0u8; Self::MAX_BYTES];
        bytes[..len].copy_from_slice(&raw[..len]);
        Self { bytes, len }
    }

    /// Byte at `offset`, or 0 when the frame is shorter than that.
    pub fn get_byte(&self, offset: usize) -> u8 {
        if offset < self.len { self.bytes[offset] } else { 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Non-blocking source of assembled frames.
///
/// Implementations own the hand-off from the reception context (which may
/// be interrupt-driven); `poll_frame` must never block or tear a frame.
pub trait FrameBus {
    fn poll_frame(&mut self) -> Option<LinFrame>;
}

/// Logical state of one motion output line.
///
/// The electrical convention (the real relay lines are active-low) is the
/// implementation's concern; callers only speak in logical levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLevel {
    Asserted,
    Released,
}

/// The two motion output lines driving the table.
pub trait MotionOutputs {
    fn set_up(
        &mut self,
        level: LineLevel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn set_down(
        &mut self,
        level: LineLevel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// One persisted calibration byte at a fixed address.
pub trait CalSlot {
    fn load(&mut self) -> Result<u8, Box<dyn std::error::Error + Send + Sync>>;
    fn store(&mut self, value: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Line-oriented operator console.
pub trait ConsoleIo {
    /// Non-blocking poll for one complete input line (without terminator).
    fn poll_line(&mut self) -> Option<String>;
    fn write_line(&mut self, line: &str)
    -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod frame_tests {
    use super::LinFrame;

    #[test]
    fn get_byte_past_end_is_zero() {
        let f = LinFrame::new(&[0x92, 0x05]);
        assert_eq!(f.get_byte(0), 0x92);
        assert_eq!(f.get_byte(1), 0x05);
        assert_eq!(f.get_byte(2), 0);
        assert_eq!(f.get_byte(100), 0);
    }

    #[test]
    fn oversized_input_is_truncated() {
        let raw = [0xAAu8; 16];
        let f = LinFrame::new(&raw);
        assert_eq!(f.len(), LinFrame::MAX_BYTES);
    }
}
