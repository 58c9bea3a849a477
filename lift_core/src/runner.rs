//! Run-until-shutdown orchestration around [`ControlLoop`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use lift_traits::{CalSlot, ConsoleIo, FrameBus, MotionOutputs};

use crate::control::ControlLoop;
use crate::error::Result;

/// Drive the loop until the shutdown flag is raised or `max_ticks` (when
/// given) have elapsed. The outputs are forced to the stopped state before
/// returning, so the table is never left moving on exit.
pub fn run<B, O, P, C>(
    mut control: ControlLoop<B, O, P, C>,
    shutdown: Arc<AtomicBool>,
    max_ticks: Option<u64>,
) -> Result<()>
where
    B: FrameBus,
    O: MotionOutputs,
    P: CalSlot,
    C: ConsoleIo,
{
    tracing::info!("control loop running");
    let mut ticks: u64 = 0;
    while !shutdown.load(Ordering::Relaxed) {
        if let Some(limit) = max_ticks
            && ticks >= limit
        {
            break;
        }
        if let Err(e) = control.tick() {
            let _ = control.halt();
            tracing::error!(error = %e, "control loop aborted");
            return Err(e);
        }
        ticks = ticks.saturating_add(1);
    }
    control.halt()?;
    tracing::info!(ticks, "control loop stopped");
    Ok(())
}
