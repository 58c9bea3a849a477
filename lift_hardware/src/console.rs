//! Stdin/stdout console backend.

use std::io::{self, BufRead, Write};
use std::thread;

use crossbeam_channel::{Receiver, bounded};
use lift_traits::ConsoleIo;

use crate::error::HwError;

/// Line-oriented console over the process stdin and stdout.
///
/// A reader thread blocks on stdin and hands complete lines over a bounded
/// channel so the control loop can poll without blocking. The thread is not
/// joined on drop: a blocking stdin read cannot be interrupted portably, and
/// it exits on its own once stdin closes.
pub struct StdinConsole {
    rx: Receiver<String>,
}

impl StdinConsole {
    pub fn spawn() -> Result<Self, HwError> {
        let (tx, rx) = bounded(8);
        let _reader = thread::Builder::new()
            .name("console-stdin".into())
            .spawn(move || {
                let stdin = io::stdin();
                for line in stdin.lock().lines() {
                    let Ok(line) = line else { break };
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            })
            .map_err(HwError::Io)?;
        Ok(Self { rx })
    }
}

impl ConsoleIo for StdinConsole {
    fn poll_line(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }

    fn write_line(&mut self, line: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}").map_err(|e| Box::new(HwError::Io(e)) as _)
    }
}
