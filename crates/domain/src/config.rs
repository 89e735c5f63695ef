pub mod access_log;
pub mod errors;
pub mod logging;
pub mod root;

pub use access_log::{AccessLogConfig, AccessLogFormat, SinkKind, DEFAULT_TEXT_FORMAT};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
