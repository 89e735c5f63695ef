//! DNS Access Log Infrastructure Layer
pub mod access_log;
pub mod exchange;
