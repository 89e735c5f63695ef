#![allow(dead_code)]

use dns_access_log_application::ports::AccessLogSink;
use dns_access_log_domain::DomainError;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockAccessLogSink {
    lines: Mutex<Vec<String>>,
    flushes: Mutex<usize>,
}

impl MockAccessLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn flush_count(&self) -> usize {
        *self.flushes.lock().unwrap()
    }
}

impl AccessLogSink for MockAccessLogSink {
    fn write_line(&self, line: &str) -> Result<(), DomainError> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<(), DomainError> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}

pub struct FailingAccessLogSink;

impl AccessLogSink for FailingAccessLogSink {
    fn write_line(&self, _line: &str) -> Result<(), DomainError> {
        Err(DomainError::SinkError("disk full".to_string()))
    }
}
