//! File sink
//!
//! Appends one line per record to a file. Useful when stdout/stderr aren't
//! visible, or as an audit log next to the console.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::console::format_line;
use super::traits::Sink;
use crate::config::ConfigResult;
use crate::level::Severity;
use crate::record::Metadata;

/// A sink that appends lines to a file
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open (or create) `path` for appending
    pub fn open(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Default log file location in the system temp directory
    pub fn default_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push("srclog.log");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the file and keep appending to the fresh one
    pub fn clear(&self) -> ConfigResult<()> {
        File::create(&self.path)?;
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        *self.file.lock() = file;
        Ok(())
    }
}

impl Sink for FileSink {
    fn log_at_severity(&self, severity: Severity, message: &str, metadata: Option<&Metadata>) {
        let line = format_line(severity, message, metadata);
        let mut file = self.file.lock();
        let _ = writeln!(file, "{}", line);
        let _ = file.flush();
    }
}
