#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the lift-table controller.
//!
//! `Config` and sub-structs are deserialized from TOML and validated.
//! Everything the operator contract fixes (frame identifier, threshold and
//! target validation bands) stays hard-coded in `lift_core`; the config
//! only covers deployment-level knobs.

use serde::Deserialize;
use std::path::PathBuf;

/// GPIO pins driving the motion relay lines.
#[derive(Debug, Deserialize)]
pub struct Pins {
    pub lift_up: u8,
    pub lift_down: u8,
    /// The relay lines are active-low on the reference hardware.
    #[serde(default = "default_active_low")]
    pub active_low: bool,
}

fn default_active_low() -> bool {
    true
}

/// Control loop pacing.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TickCfg {
    /// Loop rate in Hz; one frame and one console line at most per tick.
    pub tick_hz: u32,
}

impl Default for TickCfg {
    fn default() -> Self {
        Self { tick_hz: 200 }
    }
}

/// Threshold persistence slot.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PersistCfg {
    /// File holding the single persisted calibration byte.
    pub threshold_path: PathBuf,
}

impl Default for PersistCfg {
    fn default() -> Self {
        Self {
            threshold_path: PathBuf::from("threshold.cal"),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub pins: Pins,
    #[serde(default, rename = "loop")]
    pub tick: TickCfg,
    #[serde(default)]
    pub persist: PersistCfg,
    #[serde(default)]
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        if self.pins.lift_up == self.pins.lift_down {
            eyre::bail!("pins.lift_up and pins.lift_down must differ");
        }
        if self.tick.tick_hz == 0 {
            eyre::bail!("loop.tick_hz must be > 0");
        }
        if self.tick.tick_hz > 10_000 {
            eyre::bail!("loop.tick_hz is unreasonably large (>10kHz)");
        }
        if self.persist.threshold_path.as_os_str().is_empty() {
            eyre::bail!("persist.threshold_path must not be empty");
        }
        Ok(())
    }
}
