//! The per-tick control loop orchestration.

use std::sync::Arc;
use std::time::Duration;

use lift_traits::clock::{Clock, MonotonicClock};
use lift_traits::{CalSlot, ConsoleIo, FrameBus, MotionOutputs};

use crate::console;
use crate::decoder::decode_position;
use crate::direction::{Direction, desired_direction};
use crate::error::Result;
use crate::motion::{MotionDriver, MovementState};
use crate::threshold::ThresholdStore;
use crate::tracker::{PositionTracker, PositionUpdate};
use crate::util::tick_period;

/// Owns all mutable control state and the four collaborator seams.
///
/// Every tick is O(1) and non-blocking: at most one frame is polled, the
/// direction is recomputed, the motor driven, and at most one console line
/// serviced. Position, target, threshold and movement state are owned
/// exclusively here, so frames and commands apply strictly in tick order.
pub struct ControlLoop<B, O, P, C>
where
    B: FrameBus,
    O: MotionOutputs,
    P: CalSlot,
    C: ConsoleIo,
{
    bus: B,
    console: C,
    driver: MotionDriver<O>,
    threshold: ThresholdStore<P>,
    tracker: PositionTracker,
    clock: Arc<dyn Clock + Send + Sync>,
    period: Duration,
}

impl<B, O, P, C> ControlLoop<B, O, P, C>
where
    B: FrameBus,
    O: MotionOutputs,
    P: CalSlot,
    C: ConsoleIo,
{
    /// Assemble the loop and run the startup sequence: outputs released,
    /// threshold loaded (bootstrapping the default into an unconfigured
    /// slot), banner and values dump emitted.
    pub fn new(bus: B, outputs: O, slot: P, console: C, tick_hz: u32) -> Result<Self> {
        Self::with_clock(bus, outputs, slot, console, tick_hz, Box::new(MonotonicClock::new()))
    }

    /// Like [`ControlLoop::new`] but with a caller-provided clock, for
    /// deterministic pacing in tests.
    pub fn with_clock(
        bus: B,
        outputs: O,
        slot: P,
        mut console: C,
        tick_hz: u32,
        clock: Box<dyn Clock + Send + Sync>,
    ) -> Result<Self> {
        let driver = MotionDriver::new(outputs)?;
        let threshold = ThresholdStore::open(slot)?;
        console::emit(&mut console, "Lift table controller v1.0")?;
        console::emit(&mut console, "Type 'HELP' to display all commands.")?;
        console::print_values(&mut console, threshold.get(), 0)?;
        Ok(Self {
            bus,
            console,
            driver,
            threshold,
            tracker: PositionTracker::new(),
            clock: Arc::from(clock),
            period: tick_period(tick_hz),
        })
    }

    pub fn position(&self) -> u16 {
        self.tracker.position()
    }

    pub fn target(&self) -> u16 {
        self.tracker.target()
    }

    pub fn threshold(&self) -> u8 {
        self.threshold.get()
    }

    pub fn movement(&self) -> MovementState {
        self.driver.commanded()
    }

    /// Execute one tick.
    ///
    /// 1. poll at most one frame and feed the tracker,
    /// 2. recompute the direction from position/target/threshold,
    /// 3. drive the motion outputs (announcing transitions),
    /// 4. service at most one pending console line,
    /// 5. pace to the configured tick rate.
    ///
    /// No batching: bounding work per tick keeps latency and ordering
    /// predictable.
    pub fn tick(&mut self) -> Result<()> {
        if let Some(frame) = self.bus.poll_frame()
            && let Some(position) = decode_position(&frame)
            && self.tracker.update(position) == PositionUpdate::Changed
        {
            tracing::trace!(position, "position change");
            console::emit(&mut self.console, &format!("Current Position: {position}"))?;
        }

        let direction = desired_direction(
            self.tracker.position(),
            self.tracker.target(),
            self.threshold.get(),
        );
        if let Some(state) = self.driver.apply(direction)? {
            console::emit(&mut self.console, state.announcement())?;
        }

        if let Some(line) = self.console.poll_line() {
            console::dispatch(
                &mut self.console,
                &mut self.tracker,
                &mut self.threshold,
                &line,
            )?;
        }

        self.clock.sleep(self.period);
        Ok(())
    }

    /// Force the outputs to the stopped state, announcing the transition.
    /// Used on shutdown so the table is never left moving.
    pub fn halt(&mut self) -> Result<()> {
        if let Some(state) = self.driver.apply(Direction::Level)? {
            console::emit(&mut self.console, state.announcement())?;
        }
        Ok(())
    }
}
