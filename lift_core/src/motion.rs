//! Idempotent motion output driver.

use eyre::WrapErr;
use lift_traits::{LineLevel, MotionOutputs};

use crate::direction::Direction;
use crate::error::{Result, output_err};

/// Currently commanded table movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementState {
    #[default]
    Stopped,
    MovingUp,
    MovingDown,
}

impl MovementState {
    /// Operator-facing transition announcement; part of the console contract.
    pub fn announcement(self) -> &'static str {
        match self {
            MovementState::Stopped => "Table stops",
            MovementState::MovingUp => "Table goes up",
            MovementState::MovingDown => "Table goes down",
        }
    }
}

impl From<Direction> for MovementState {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Level => MovementState::Stopped,
            Direction::Above => MovementState::MovingUp,
            Direction::Below => MovementState::MovingDown,
        }
    }
}

/// Translates a computed direction into the two output lines.
///
/// Output writes happen only when the requested movement differs from the
/// remembered one, so reapplying the same direction every tick is free.
/// Entering a moving state releases the opposite line before asserting the
/// active one; both lines asserted at once is therefore impossible.
pub struct MotionDriver<O: MotionOutputs> {
    outputs: O,
    commanded: MovementState,
}

impl<O: MotionOutputs> MotionDriver<O> {
    /// Release both lines so the table starts out stopped.
    pub fn new(mut outputs: O) -> Result<Self> {
        outputs
            .set_up(LineLevel::Released)
            .map_err(output_err)
            .wrap_err("release up line")?;
        outputs
            .set_down(LineLevel::Released)
            .map_err(output_err)
            .wrap_err("release down line")?;
        Ok(Self {
            outputs,
            commanded: MovementState::Stopped,
        })
    }

    pub fn commanded(&self) -> MovementState {
        self.commanded
    }

    /// Drive the outputs toward `direction`.
    ///
    /// Returns the new movement state when a transition happened, `None`
    /// when the request matched the current state and nothing was written.
    pub fn apply(&mut self, direction: Direction) -> Result<Option<MovementState>> {
        let requested = MovementState::from(direction);
        if requested == self.commanded {
            return Ok(None);
        }
        match requested {
            MovementState::Stopped => {
                self.outputs
                    .set_up(LineLevel::Released)
                    .map_err(output_err)
                    .wrap_err("release up line")?;
                self.outputs
                    .set_down(LineLevel::Released)
                    .map_err(output_err)
                    .wrap_err("release down line")?;
            }
            MovementState::MovingUp => {
                self.outputs
                    .set_down(LineLevel::Released)
                    .map_err(output_err)
                    .wrap_err("release down line")?;
                self.outputs
                    .set_up(LineLevel::Asserted)
                    .map_err(output_err)
                    .wrap_err("assert up line")?;
            }
            MovementState::MovingDown => {
                self.outputs
                    .set_up(LineLevel::Released)
                    .map_err(output_err)
                    .wrap_err("release up line")?;
                self.outputs
                    .set_down(LineLevel::Asserted)
                    .map_err(output_err)
                    .wrap_err("assert down line")?;
            }
        }
        self.commanded = requested;
        tracing::info!(state = ?requested, "motion transition");
        Ok(Some(requested))
    }
}
