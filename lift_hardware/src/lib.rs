//! Backend implementations of the controller's hardware seams.
//!
//! The simulated backends run anywhere and power `liftctl run`; the GPIO
//! backend (feature `hardware`) drives real relay pins on a Raspberry Pi.

mod console;
mod error;
#[cfg(feature = "hardware")]
mod gpio;
mod sim;
mod slot;

pub use console::StdinConsole;
pub use error::HwError;
#[cfg(feature = "hardware")]
pub use gpio::GpioOutputs;
pub use sim::{
    SimBusInjector, SimFrameBus, SimOutputs, SimOutputsHandle, SimTable, position_frame, sim_bus,
};
pub use slot::FileSlot;
