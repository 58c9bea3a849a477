//! Last-known position and target bookkeeping.

/// Outcome of feeding one decoded position reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionUpdate {
    Changed,
    Unchanged,
}

/// Tracks the last reported position and the desired target.
///
/// The target starts out uninitialized and is bootstrapped from the first
/// observed position change, so the motor never chases a default zero
/// target at startup. After that it changes only through explicit
/// operator commands.
#[derive(Debug, Default)]
pub struct PositionTracker {
    position: u16,
    target: u16,
    target_initialized: bool,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> u16 {
        self.position
    }

    pub fn target(&self) -> u16 {
        self.target
    }

    pub fn target_initialized(&self) -> bool {
        self.target_initialized
    }

    /// Set the target from an operator command.
    ///
    /// Also marks the target initialized so a later first reading does not
    /// clobber an explicitly chosen value.
    pub fn set_target(&mut self, target: u16) {
        self.target = target;
        self.target_initialized = true;
    }

    /// Feed one decoded position reading.
    ///
    /// Change detection is strict inequality with the previously stored
    /// value; no dead-band filtering happens here. On the first change the
    /// target is bootstrapped to the reported position.
    pub fn update(&mut self, new_position: u16) -> PositionUpdate {
        if new_position == self.position {
            return PositionUpdate::Unchanged;
        }
        self.position = new_position;
        if !self.target_initialized {
            self.target = new_position;
            self.target_initialized = true;
            tracing::info!(target = new_position, "target bootstrapped from first reading");
        }
        PositionUpdate::Changed
    }
}
