use crate::formatter::AccessLogFormatter;
use crate::ports::AccessLogSink;
use dns_access_log_domain::{dns_class_name, response_code_name, DomainError, ExchangeContext};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct LogDnsExchangeUseCase {
    formatter: Arc<AccessLogFormatter>,
    sink: Arc<dyn AccessLogSink>,
}

impl LogDnsExchangeUseCase {
    pub fn new(formatter: Arc<AccessLogFormatter>, sink: Arc<dyn AccessLogSink>) -> Self {
        Self { formatter, sink }
    }

    /// Renders one exchange and hands the line to the sink. Returns the line.
    pub fn execute(&self, exchange: &ExchangeContext) -> Result<String, DomainError> {
        let line = self.formatter.format(exchange);

        debug!(
            question = exchange.first_question().map(|q| &*q.name),
            qclass = exchange.first_question().map(|q| dns_class_name(q.qclass)),
            rcode = response_code_name(exchange.response_code),
            answers = exchange.answer_count(),
            started = ?exchange.request_start_time,
            "Rendered DNS access log line"
        );

        self.sink.write_line(&line).map_err(|e| {
            warn!(error = %e, "Failed to write DNS access log line");
            e
        })?;
        Ok(line)
    }

    pub fn flush(&self) -> Result<(), DomainError> {
        self.sink.flush()
    }
}
