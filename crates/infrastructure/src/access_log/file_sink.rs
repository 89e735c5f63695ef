use dns_access_log_application::ports::AccessLogSink;
use dns_access_log_domain::DomainError;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Appends lines to a file, creating it when missing. Rotation is left to
/// external tooling.
#[derive(Debug)]
pub struct FileAccessLogSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileAccessLogSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "Opened DNS access log file");
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_writer<T>(
        &self,
        f: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<T>,
    ) -> Result<T, DomainError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| DomainError::SinkError("access log writer lock poisoned".to_string()))?;
        f(&mut *writer).map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))
    }
}

impl AccessLogSink for FileAccessLogSink {
    fn write_line(&self, line: &str) -> Result<(), DomainError> {
        self.with_writer(|w| {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()
        })
    }

    fn flush(&self) -> Result<(), DomainError> {
        self.with_writer(|w| w.flush())
    }
}
