//! Raspberry Pi GPIO output backend (feature `hardware`).

use rppal::gpio::{Gpio, OutputPin};

use lift_traits::{LineLevel, MotionOutputs};

use crate::error::HwError;

/// Two relay-driving pins. With `active_low` set (the common relay-board
/// wiring) a released line drives the pin high.
pub struct GpioOutputs {
    up: OutputPin,
    down: OutputPin,
    active_low: bool,
}

impl GpioOutputs {
    pub fn new(up_pin: u8, down_pin: u8, active_low: bool) -> Result<Self, HwError> {
        let gpio = Gpio::new().map_err(|e| HwError::Gpio(e.to_string()))?;
        let up = gpio
            .get(up_pin)
            .map_err(|e| HwError::Gpio(e.to_string()))?
            .into_output();
        let down = gpio
            .get(down_pin)
            .map_err(|e| HwError::Gpio(e.to_string()))?
            .into_output();
        let mut outputs = Self {
            up,
            down,
            active_low,
        };
        outputs.drive(Line::Up, LineLevel::Released);
        outputs.drive(Line::Down, LineLevel::Released);
        Ok(outputs)
    }

    fn drive(&mut self, line: Line, level: LineLevel) {
        let high = match level {
            LineLevel::Asserted => !self.active_low,
            LineLevel::Released => self.active_low,
        };
        let pin = match line {
            Line::Up => &mut self.up,
            Line::Down => &mut self.down,
        };
        if high {
            pin.set_high();
        } else {
            pin.set_low();
        }
    }
}

enum Line {
    Up,
    Down,
}

impl MotionOutputs for GpioOutputs {
    fn set_up(
        &mut self,
        level: LineLevel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.drive(Line::Up, level);
        Ok(())
    }

    fn set_down(
        &mut self,
        level: LineLevel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.drive(Line::Down, level);
        Ok(())
    }
}
