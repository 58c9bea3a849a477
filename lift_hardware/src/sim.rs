//! Simulated bus and output backends for host-side runs and tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use lift_traits::{FrameBus, LinFrame, LineLevel, MotionOutputs};

use crate::error::HwError;

/// Builds a position telemetry frame the decoder accepts.
pub fn position_frame(position: u16) -> LinFrame {
    let lo = (position & 0xFF) as u8;
    let hi = (position >> 8) as u8;
    LinFrame::new(&[0x92, lo, hi])
}

/// Single-slot frame hand-off. The injector overwrites on a full slot so the
/// consumer only ever sees the freshest reading, never a backlog.
pub fn sim_bus() -> (SimBusInjector, SimFrameBus) {
    let (tx, rx) = bounded(1);
    let drain = rx.clone();
    (SimBusInjector { tx, drain }, SimFrameBus { rx })
}

pub struct SimBusInjector {
    tx: Sender<LinFrame>,
    drain: Receiver<LinFrame>,
}

impl SimBusInjector {
    pub fn inject(&self, frame: LinFrame) {
        match self.tx.try_send(frame) {
            Ok(()) | Err(TrySendError::Disconnected(_)) => {}
            Err(TrySendError::Full(frame)) => {
                // Drop the stale frame and replace it with the fresh one.
                let _ = self.drain.try_recv();
                let _ = self.tx.try_send(frame);
            }
        }
    }
}

pub struct SimFrameBus {
    rx: Receiver<LinFrame>,
}

impl FrameBus for SimFrameBus {
    fn poll_frame(&mut self) -> Option<LinFrame> {
        self.rx.try_recv().ok()
    }
}

/// Output lines backed by shared flags so a simulation thread can observe
/// what the control loop commands.
pub struct SimOutputs {
    up: Arc<AtomicBool>,
    down: Arc<AtomicBool>,
}

#[derive(Clone)]
pub struct SimOutputsHandle {
    up: Arc<AtomicBool>,
    down: Arc<AtomicBool>,
}

impl SimOutputs {
    pub fn new() -> (Self, SimOutputsHandle) {
        let up = Arc::new(AtomicBool::new(false));
        let down = Arc::new(AtomicBool::new(false));
        let handle = SimOutputsHandle {
            up: Arc::clone(&up),
            down: Arc::clone(&down),
        };
        (Self { up, down }, handle)
    }
}

impl SimOutputsHandle {
    pub fn up_asserted(&self) -> bool {
        self.up.load(Ordering::SeqCst)
    }

    pub fn down_asserted(&self) -> bool {
        self.down.load(Ordering::SeqCst)
    }
}

impl MotionOutputs for SimOutputs {
    fn set_up(
        &mut self,
        level: LineLevel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.up.store(level == LineLevel::Asserted, Ordering::SeqCst);
        Ok(())
    }

    fn set_down(
        &mut self,
        level: LineLevel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.down
            .store(level == LineLevel::Asserted, Ordering::SeqCst);
        Ok(())
    }
}

/// Background thread that plays the table: integrates position from the
/// commanded output lines and feeds telemetry frames back to the bus.
pub struct SimTable {
    shutdown: Arc<AtomicBool>,
    position: Arc<AtomicU16>,
    handle: Option<JoinHandle<()>>,
}

impl SimTable {
    /// Spawns the simulation. `step` is how far the table travels per
    /// `interval`, both in the same units the telemetry reports.
    pub fn spawn(
        injector: SimBusInjector,
        outputs: SimOutputsHandle,
        start: u16,
        step: u16,
        interval: Duration,
    ) -> Result<Self, HwError> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let position = Arc::new(AtomicU16::new(start));
        let stop = Arc::clone(&shutdown);
        let pos = Arc::clone(&position);
        let handle = thread::Builder::new()
            .name("sim-table".into())
            .spawn(move || {
                while !stop.load(Ordering::SeqCst) {
                    let mut p = pos.load(Ordering::SeqCst);
                    if outputs.up_asserted() && !outputs.down_asserted() {
                        p = p.saturating_add(step);
                    } else if outputs.down_asserted() && !outputs.up_asserted() {
                        p = p.saturating_sub(step);
                    }
                    pos.store(p, Ordering::SeqCst);
                    injector.inject(position_frame(p));
                    thread::sleep(interval);
                }
            })
            .map_err(HwError::Io)?;
        tracing::info!(start, step, interval_ms = interval.as_millis() as u64, "sim table running");
        Ok(Self {
            shutdown,
            position,
            handle: Some(handle),
        })
    }

    pub fn position(&self) -> u16 {
        self.position.load(Ordering::SeqCst)
    }

    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            tracing::info!(position = self.position(), "sim table stopped");
        }
    }
}

impl Drop for SimTable {
    fn drop(&mut self) {
        self.stop();
    }
}
