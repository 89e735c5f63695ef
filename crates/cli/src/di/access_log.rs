use dns_access_log_application::formatter::{AccessLogFormatter, TokenRegistry};
use dns_access_log_application::use_cases::LogDnsExchangeUseCase;
use dns_access_log_domain::Config;
use dns_access_log_infrastructure::access_log::build_sink;
use std::sync::Arc;
use tracing::info;

pub struct AccessLogServices {
    pub registry: Arc<TokenRegistry>,
    pub log_exchange: Arc<LogDnsExchangeUseCase>,
}

impl AccessLogServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let registry = Arc::new(TokenRegistry::new());
        let formatter = AccessLogFormatter::from_config(&config.access_log, &registry)?;
        let sink = build_sink(&config.access_log)?;

        info!(
            format = ?config.access_log.format,
            tokens = registry.tokens().len(),
            "Access log formatter ready"
        );

        Ok(Self {
            log_exchange: Arc::new(LogDnsExchangeUseCase::new(Arc::new(formatter), sink)),
            registry,
        })
    }
}
