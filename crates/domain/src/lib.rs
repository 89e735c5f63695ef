//! DNS Access Log Domain Layer
pub mod config;
pub mod dns_codes;
pub mod dns_exchange;
pub mod dns_question;
pub mod dns_record;
pub mod errors;

pub use config::{
    AccessLogConfig, AccessLogFormat, CliOverrides, Config, ConfigError, LoggingConfig, SinkKind,
};
pub use dns_codes::{dns_class_name, response_code_name, DNS_CLASS_IN};
pub use dns_exchange::{ExchangeContext, ResolutionStatus};
pub use dns_question::Question;
pub use dns_record::{AddressFamily, DnsRecord, RecordData, RecordType, SrvTarget, SrvTargets};
pub use errors::DomainError;
