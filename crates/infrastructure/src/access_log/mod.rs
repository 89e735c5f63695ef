mod file_sink;
mod stdout_sink;

pub use file_sink::FileAccessLogSink;
pub use stdout_sink::StdoutAccessLogSink;

use dns_access_log_application::ports::AccessLogSink;
use dns_access_log_domain::{AccessLogConfig, DomainError, SinkKind};
use std::sync::Arc;
use tracing::info;

/// Builds the sink selected by the access-log configuration.
pub fn build_sink(config: &AccessLogConfig) -> Result<Arc<dyn AccessLogSink>, DomainError> {
    match config.sink {
        SinkKind::Stdout => {
            info!("Writing DNS access log to stdout");
            Ok(Arc::new(StdoutAccessLogSink::new()))
        }
        SinkKind::File => {
            let path = config.path.as_deref().ok_or_else(|| {
                DomainError::ConfigError("file sink requires access_log.path".to_string())
            })?;
            info!(path, "Writing DNS access log to file");
            Ok(Arc::new(FileAccessLogSink::open(path)?))
        }
    }
}
