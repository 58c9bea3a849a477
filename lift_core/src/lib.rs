#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core lift-table control logic (hardware-agnostic).
//!
//! This crate provides the hardware-independent control loop for a motorized
//! lift table. All hardware interactions go through the `lift_traits` seams:
//! `FrameBus` (position telemetry), `MotionOutputs` (up/down lines),
//! `CalSlot` (persisted threshold byte), and `ConsoleIo` (operator console).
//!
//! ## Architecture
//!
//! - **Decoding**: bus frame → 16-bit position reading (`decoder` module)
//! - **Tracking**: last position, change detection, one-shot target
//!   bootstrap (`tracker`)
//! - **Policy**: hysteresis direction comparator (`direction`)
//! - **Drive**: idempotent two-line motion driver (`motion`)
//! - **Calibration**: validated, persisted dead-band threshold (`threshold`)
//! - **Console**: priority-ordered text command dispatch (`console`)
//! - **Orchestration**: one frame, one direction update, one command per
//!   tick (`control`, `runner`)
//!
//! All position arithmetic is integer-only; every tick operation is O(1)
//! and non-blocking, so the loop can run in a single cooperative thread.

pub mod console;
pub mod control;
pub mod decoder;
pub mod direction;
pub mod error;
pub mod mocks;
pub mod motion;
pub mod runner;
pub mod threshold;
pub mod tracker;
pub mod util;

pub use console::{TARGET_MAX_EXCL, TARGET_MIN_EXCL};
pub use control::ControlLoop;
pub use decoder::{POSITION_FRAME_ID, decode_position};
pub use direction::{Direction, desired_direction};
pub use error::{LiftError, Result};
pub use motion::{MotionDriver, MovementState};
pub use threshold::{
    DEFAULT_THRESHOLD, THRESHOLD_MAX_EXCL, THRESHOLD_MIN_EXCL, THRESHOLD_UNCONFIGURED,
    ThresholdStore, ThresholdUpdate,
};
pub use tracker::{PositionTracker, PositionUpdate};
