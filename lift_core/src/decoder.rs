//! Bus frame → position decoding.

use lift_traits::LinFrame;

/// Identifier of the bus node that broadcasts the table position.
pub const POSITION_FRAME_ID: u8 = 0x92;

/// Extract the table position from a frame, if it carries one.
///
/// Only frames whose identifier byte equals [`POSITION_FRAME_ID`] carry a
/// position; every other identifier yields `None` and is filtered silently.
///
/// The position is a two-byte value in the payload. On the wire the byte at
/// offset 2 is the high byte and the byte at offset 1 the low byte. This
/// arrangement is kept exactly as observed on the bus; do not "fix" it to a
/// little-endian read without re-verifying against real hardware.
pub fn decode_position(frame: &LinFrame) -> Option<u16> {
    if frame.get_byte(0) != POSITION_FRAME_ID {
        return None;
    }
    let hi = u16::from(frame.get_byte(2));
    let lo = u16::from(frame.get_byte(1));
    Some((hi << 8) | lo)
}
