//! Hysteresis direction policy.

/// Where the target sits relative to the table, seen through the dead-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Within the dead-band; no motion wanted.
    Level,
    /// Target is above the current position; the table must rise.
    Above,
    /// Target is below the current position; the table must descend.
    Below,
}

/// Compare position against target with a dead-band of `threshold` around
/// the target. The dead-band suppresses output chatter from sensor noise
/// near equilibrium.
///
/// The `distance <= 0` branch folds the exact-match case into `Above`, but
/// that case is unreachable: `|distance| <= threshold` already covers
/// distance 0 for any threshold. Kept as-is rather than "fixed".
pub fn desired_direction(position: u16, target: u16, threshold: u8) -> Direction {
    let distance = i32::from(position) - i32::from(target);
    if distance.unsigned_abs() <= u32::from(threshold) {
        return Direction::Level;
    }
    if distance <= 0 {
        Direction::Above
    } else {
        Direction::Below
    }
}
