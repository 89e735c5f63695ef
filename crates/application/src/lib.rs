//! DNS Access Log Application Layer
pub mod formatter;
pub mod ports;
pub mod use_cases;
