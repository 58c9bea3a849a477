//! Operator command dispatch.
//!
//! One input line is consumed per invocation. Dispatch is priority-ordered
//! substring matching on a single uppercase normalization of the line:
//! HELP, then VALUES, then STOP, then `T<n>` threshold set, then a bare
//! numeric target. Malformed numbers fall through the same out-of-range
//! rejection path as bad values, with state left untouched.

use eyre::WrapErr;
use lift_traits::{CalSlot, ConsoleIo};

use crate::direction::{Direction, desired_direction};
use crate::error::{Result, console_err};
use crate::threshold::{ThresholdStore, ThresholdUpdate};
use crate::tracker::PositionTracker;

/// Accepted targets are strictly between these bounds (sensor units).
pub const TARGET_MIN_EXCL: u16 = 150;
pub const TARGET_MAX_EXCL: u16 = 6400;

pub(crate) fn emit<C: ConsoleIo>(console: &mut C, line: &str) -> Result<()> {
    console
        .write_line(line)
        .map_err(console_err)
        .wrap_err("console write")
}

/// Handle one console line against the current state.
pub fn dispatch<C: ConsoleIo, P: CalSlot>(
    console: &mut C,
    tracker: &mut PositionTracker,
    threshold: &mut ThresholdStore<P>,
    line: &str,
) -> Result<()> {
    // Single case-insensitive normalization; byte offsets stay valid
    // because ASCII uppercasing is length-preserving.
    let upper = line.to_ascii_uppercase();
    if upper.contains("HELP") {
        print_help(console)
    } else if upper.contains("VALUES") {
        print_values(console, threshold.get(), tracker.position())
    } else if upper.contains("STOP") {
        handle_stop(console, tracker, threshold.get())
    } else if let Some(idx) = upper.find('T') {
        // 'T' anywhere selects the threshold branch, ahead of numeric
        // target parsing; the digits after it carry the value.
        handle_threshold(console, threshold, &line[idx + 1..])
    } else {
        handle_target(console, tracker, line)
    }
}

pub(crate) fn print_help<C: ConsoleIo>(console: &mut C) -> Result<()> {
    emit(console, "======= Serial Commands =======")?;
    emit(console, "Send 'STOP' to stop")?;
    emit(console, "Send 'HELP' to show this view")?;
    emit(console, "Send 'VALUES' to show the current values")?;
    emit(console, "Send 'T123' to set the threshold to 123 (255 max!)")?;
    emit(console, "Send '1580' to move to position 1580.")?;
    emit(console, "===============================")
}

pub(crate) fn print_values<C: ConsoleIo>(
    console: &mut C,
    threshold: u8,
    position: u16,
) -> Result<()> {
    emit(console, "======= VALUES =======")?;
    emit(console, &format!("Threshold is: {threshold}"))?;
    emit(console, &format!("Current Position: {position}"))?;
    emit(console, "======================")
}

/// Park the target just outside the dead-band in the current travel
/// direction, so the table halts there without the comparator ever having
/// to see an exact position match.
fn handle_stop<C: ConsoleIo>(
    console: &mut C,
    tracker: &mut PositionTracker,
    threshold: u8,
) -> Result<()> {
    let position = tracker.position();
    let margin = u16::from(threshold) * 2;
    match desired_direction(position, tracker.target(), threshold) {
        Direction::Above => tracker.set_target(position.saturating_add(margin)),
        Direction::Below => tracker.set_target(position.saturating_sub(margin)),
        Direction::Level => {}
    }
    tracing::info!(target = tracker.target(), "stop requested");
    emit(console, &format!("STOP at {}", tracker.target()))
}

fn handle_threshold<C: ConsoleIo, P: CalSlot>(
    console: &mut C,
    threshold: &mut ThresholdStore<P>,
    rest: &str,
) -> Result<()> {
    // Parse failures (non-numeric, > u8) collapse to 0, which the store
    // rejects through the same out-of-range path.
    let value = rest.trim().parse::<u8>().unwrap_or(0);
    match threshold.set(value)? {
        ThresholdUpdate::Accepted => emit(console, &format!("New Threshold: {value}")),
        ThresholdUpdate::Rejected => {
            emit(console, "Not stored. Keep your value between 50 and 254")
        }
    }
}

fn handle_target<C: ConsoleIo>(
    console: &mut C,
    tracker: &mut PositionTracker,
    line: &str,
) -> Result<()> {
    let value = line.trim().parse::<u16>().unwrap_or(0);
    if value > TARGET_MIN_EXCL && value < TARGET_MAX_EXCL {
        tracker.set_target(value);
        tracing::info!(target = value, "new target accepted");
        emit(console, &format!("New Target {value}"))
    } else {
        emit(console, "Not stored. Keep your value between 150 and 6400")
    }
}
