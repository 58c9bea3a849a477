//! Test and helper mocks for lift_core.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use lift_traits::{CalSlot, ConsoleIo, FrameBus, LinFrame, LineLevel, MotionOutputs};

/// Bus that replays a prepared frame sequence, then runs dry.
pub struct ScriptBus {
    frames: VecDeque<LinFrame>,
}

impl ScriptBus {
    pub fn new(frames: impl IntoIterator<Item = LinFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl FrameBus for ScriptBus {
    fn poll_frame(&mut self) -> Option<LinFrame> {
        self.frames.pop_front()
    }
}

/// One recorded write to a motion output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputWrite {
    Up(LineLevel),
    Down(LineLevel),
}

/// Observable output state shared with the test through an `Rc` handle.
#[derive(Debug)]
pub struct OutputLog {
    pub writes: Vec<OutputWrite>,
    pub up: LineLevel,
    pub down: LineLevel,
}

impl Default for OutputLog {
    fn default() -> Self {
        Self {
            writes: Vec::new(),
            up: LineLevel::Released,
            down: LineLevel::Released,
        }
    }
}

impl OutputLog {
    pub fn both_asserted(&self) -> bool {
        self.up == LineLevel::Asserted && self.down == LineLevel::Asserted
    }
}

/// Motion outputs that record every write.
#[derive(Default)]
pub struct RecordingOutputs {
    log: Rc<RefCell<OutputLog>>,
}

impl RecordingOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Rc<RefCell<OutputLog>> {
        Rc::clone(&self.log)
    }
}

impl MotionOutputs for RecordingOutputs {
    fn set_up(
        &mut self,
        level: LineLevel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut log = self.log.borrow_mut();
        log.writes.push(OutputWrite::Up(level));
        log.up = level;
        Ok(())
    }

    fn set_down(
        &mut self,
        level: LineLevel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut log = self.log.borrow_mut();
        log.writes.push(OutputWrite::Down(level));
        log.down = level;
        Ok(())
    }
}

/// In-memory calibration slot.
pub struct MemorySlot {
    value: u8,
    stores: Rc<RefCell<Vec<u8>>>,
}

impl MemorySlot {
    pub fn new(value: u8) -> Self {
        Self {
            value,
            stores: Rc::default(),
        }
    }

    /// Every value ever written, in order.
    pub fn stores(&self) -> Rc<RefCell<Vec<u8>>> {
        Rc::clone(&self.stores)
    }
}

impl CalSlot for MemorySlot {
    fn load(&mut self) -> Result<u8, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.value)
    }

    fn store(&mut self, value: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.value = value;
        self.stores.borrow_mut().push(value);
        Ok(())
    }
}

/// Console that replays scripted input lines and captures output.
#[derive(Default)]
pub struct ScriptConsole {
    input: VecDeque<String>,
    output: Rc<RefCell<Vec<String>>>,
}

impl ScriptConsole {
    pub fn new(lines: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            input: lines.into_iter().map(String::from).collect(),
            output: Rc::default(),
        }
    }

    pub fn output(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.output)
    }
}

impl ConsoleIo for ScriptConsole {
    fn poll_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }

    fn write_line(
        &mut self,
        line: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.output.borrow_mut().push(line.to_string());
        Ok(())
    }
}
