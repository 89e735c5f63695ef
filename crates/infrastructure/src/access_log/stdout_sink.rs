use dns_access_log_application::ports::AccessLogSink;
use dns_access_log_domain::DomainError;
use std::io::Write;

/// Writes one line per exchange to standard output.
#[derive(Debug, Default)]
pub struct StdoutAccessLogSink;

impl StdoutAccessLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl AccessLogSink for StdoutAccessLogSink {
    fn write_line(&self, line: &str) -> Result<(), DomainError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line).map_err(|e| DomainError::IoError(e.to_string()))
    }

    fn flush(&self) -> Result<(), DomainError> {
        std::io::stdout()
            .flush()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }
}
