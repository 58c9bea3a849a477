//! Backend assembly and loop execution for the `run` subcommand.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use eyre::WrapErr;
use lift_core::{ControlLoop, runner};
use lift_hardware::{FileSlot, SimOutputs, SimTable, StdinConsole, sim_bus};

/// How far the simulated table travels per telemetry frame, in sensor units.
const SIM_STEP: u16 = 25;
/// Telemetry cadence of the simulated table.
const SIM_FRAME_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_loop(
    cfg: &lift_config::Config,
    ticks: Option<u64>,
    sim_start: u16,
    shutdown: Arc<AtomicBool>,
) -> eyre::Result<()> {
    let (injector, bus) = sim_bus();
    let (outputs, handle) = SimOutputs::new();
    let _table = SimTable::spawn(injector, handle, sim_start, SIM_STEP, SIM_FRAME_INTERVAL)
        .wrap_err("spawn simulated table")?;

    let slot = FileSlot::new(&cfg.persist.threshold_path);
    let console = StdinConsole::spawn().wrap_err("spawn console reader")?;

    let control = ControlLoop::new(bus, outputs, slot, console, cfg.tick.tick_hz)?;
    runner::run(control, shutdown, ticks)
}

/// Assemble every backend once and report. Catches config and wiring
/// problems without starting the loop.
pub fn self_check(cfg: &lift_config::Config) -> eyre::Result<()> {
    let (injector, bus) = sim_bus();
    let (outputs, _handle) = SimOutputs::new();
    injector.inject(lift_hardware::position_frame(0));
    drop(bus);
    drop(outputs);

    let mut slot = FileSlot::new(&cfg.persist.threshold_path);
    use lift_traits::CalSlot;
    let stored = slot
        .load()
        .map_err(|e| eyre::eyre!("threshold slot: {e}"))?;
    tracing::info!(stored, path = %cfg.persist.threshold_path.display(), "threshold slot readable");

    println!("self-check ok");
    Ok(())
}
