mod access_log_sink;

pub use access_log_sink::AccessLogSink;
