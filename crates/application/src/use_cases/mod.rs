pub mod access_log;

// Re-export use cases
pub use access_log::LogDnsExchangeUseCase;
