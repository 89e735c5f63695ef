mod log_exchange;

pub use log_exchange::LogDnsExchangeUseCase;
