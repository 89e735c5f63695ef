use dns_access_log_domain::DomainError;

/// Port for writing rendered access-log lines to a destination.
///
/// Lines arrive without a trailing newline; framing is the sink's job.
pub trait AccessLogSink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<(), DomainError>;

    fn flush(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
