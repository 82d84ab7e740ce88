use crate::error::{RenameditError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append-only, timestamped record of attempted renames.
pub struct RenameLog {
    file: Option<File>,
}

impl RenameLog {
    /// A log that records nothing.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };

        let open_err = |e: std::io::Error| {
            RenameditError::io(format!("Failed to open log file {}", path.display()), e)
        };

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(open_err)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(open_err)?;

        Ok(Self { file: Some(file) })
    }

    /// Write one line. Logging failures are not allowed to interrupt renaming,
    /// so write errors are swallowed after the first one disables the log.
    pub fn log(&mut self, message: &str) {
        if let Some(ref mut file) = self.file {
            let written = writeln!(
                file,
                "[{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                message
            )
            .and_then(|()| file.flush());

            if written.is_err() {
                self.file = None;
            }
        }
    }
}
