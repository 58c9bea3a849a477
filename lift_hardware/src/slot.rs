//! File-backed calibration slot.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use lift_traits::CalSlot;

use crate::error::HwError;

/// The persisted-byte sentinel an erased slot reads as; mirrors an erased
/// EEPROM cell so a missing file means "never configured".
const ERASED: u8 = 255;

/// One calibration byte stored in a file, written atomically via rename.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = path.with_extension("new");
    {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    fs::rename(tmp, path)
}

impl CalSlot for FileSlot {
    fn load(&mut self) -> Result<u8, Box<dyn std::error::Error + Send + Sync>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes.first().copied().unwrap_or(ERASED)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ERASED),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "calibration slot read failed");
                Err(Box::new(HwError::Io(e)))
            }
        }
    }

    fn store(&mut self, value: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        write_atomic(&self.path, &[value]).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "calibration slot write failed");
            Box::new(HwError::Io(e)) as _
        })
    }
}
