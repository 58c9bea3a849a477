//! Validated, persisted dead-band threshold.

use eyre::WrapErr;
use lift_traits::CalSlot;

use crate::error::{Result, persist_err};

/// Persisted value meaning the slot was never written (erased state).
pub const THRESHOLD_UNCONFIGURED: u8 = 255;
/// Bootstrap default applied when the slot is unconfigured.
pub const DEFAULT_THRESHOLD: u8 = 120;
/// Accepted values are strictly between these bounds.
pub const THRESHOLD_MIN_EXCL: u8 = 50;
pub const THRESHOLD_MAX_EXCL: u8 = 254;

/// Outcome of a threshold set attempt. Rejections are operator-facing
/// validation results, not errors; state is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdUpdate {
    Accepted,
    Rejected,
}

/// Live threshold value backed by a one-byte persistence slot.
pub struct ThresholdStore<P: CalSlot> {
    slot: P,
    value: u8,
}

impl<P: CalSlot> ThresholdStore<P> {
    /// Load the persisted value. A sentinel read means the slot was never
    /// configured; the default is applied and written back so both live
    /// and persisted state agree.
    pub fn open(mut slot: P) -> Result<Self> {
        let value = slot
            .load()
            .map_err(persist_err)
            .wrap_err("load threshold slot")?;
        let mut store = Self { slot, value };
        if store.value == THRESHOLD_UNCONFIGURED {
            tracing::info!(
                default = DEFAULT_THRESHOLD,
                "threshold slot unconfigured, storing default"
            );
            store.set(DEFAULT_THRESHOLD)?;
        }
        Ok(store)
    }

    /// Last validated value, or the sentinel if never configured.
    pub fn get(&self) -> u8 {
        self.value
    }

    /// Validate and persist a new threshold.
    ///
    /// Accepted only when strictly inside the band; the slot is written
    /// before the live value changes. On rejection neither live nor
    /// persisted state moves and the caller must report it.
    pub fn set(&mut self, value: u8) -> Result<ThresholdUpdate> {
        if value > THRESHOLD_MIN_EXCL && value < THRESHOLD_MAX_EXCL {
            self.slot
                .store(value)
                .map_err(persist_err)
                .wrap_err("store threshold")?;
            self.value = value;
            Ok(ThresholdUpdate::Accepted)
        } else {
            Ok(ThresholdUpdate::Rejected)
        }
    }
}
