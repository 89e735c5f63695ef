use dns_access_log_domain::{ExchangeContext, Question};
use serde_json::Value;
use std::fmt;

pub(crate) type QuestionAccessor = fn(&Question) -> String;
pub(crate) type ContextAccessor = fn(&ExchangeContext) -> String;

#[derive(Clone, Copy)]
enum Field {
    /// Reads the first question; absent when the exchange has none.
    Question(QuestionAccessor),
    /// Reads the exchange itself; always present once an exchange exists.
    Context(ContextAccessor),
}

/// Stateless accessor for one access-log token.
///
/// Absence propagates level by level: no exchange, then no question, and
/// only then the per-token convention (some tokens report `""` rather than
/// nothing). Callers must keep `None` and `Some("")` apart.
#[derive(Clone, Copy)]
pub struct FieldExtractor {
    token: &'static str,
    field: Field,
}

impl FieldExtractor {
    pub(crate) fn question(token: &'static str, accessor: QuestionAccessor) -> Self {
        Self {
            token,
            field: Field::Question(accessor),
        }
    }

    pub(crate) fn context(token: &'static str, accessor: ContextAccessor) -> Self {
        Self {
            token,
            field: Field::Context(accessor),
        }
    }

    pub fn token(&self) -> &'static str {
        self.token
    }

    pub fn extract(&self, exchange: Option<&ExchangeContext>) -> Option<String> {
        let exchange = exchange?;
        match self.field {
            Field::Question(accessor) => exchange.first_question().map(accessor),
            Field::Context(accessor) => Some(accessor(exchange)),
        }
    }

    /// Structured form: a JSON string, or `null` when absent.
    pub fn extract_value(&self, exchange: Option<&ExchangeContext>) -> Value {
        self.extract(exchange).map_or(Value::Null, Value::String)
    }
}

impl fmt::Debug for FieldExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = match self.field {
            Field::Question(_) => "question",
            Field::Context(_) => "context",
        };
        f.debug_struct("FieldExtractor")
            .field("token", &self.token)
            .field("scope", &scope)
            .finish()
    }
}

pub(crate) mod fields {
    use crate::formatter::serialize_answers;
    use dns_access_log_domain::{ExchangeContext, Question};
    use std::net::SocketAddr;

    pub fn query_name(q: &Question) -> String {
        q.name.to_string()
    }

    pub fn query_type(q: &Question) -> String {
        q.qtype.to_string()
    }

    pub fn query_class(q: &Question) -> String {
        q.qclass.to_string()
    }

    pub fn answer_count(ctx: &ExchangeContext) -> String {
        ctx.answer_count().to_string()
    }

    pub fn response_code(ctx: &ExchangeContext) -> String {
        ctx.response_code.to_string()
    }

    pub fn parse_status(ctx: &ExchangeContext) -> String {
        let status = if ctx.parse_status { "true" } else { "false" };
        status.to_string()
    }

    pub fn local_ip(ctx: &ExchangeContext) -> String {
        address_or_empty(ctx.local_address)
    }

    pub fn peer_ip(ctx: &ExchangeContext) -> String {
        address_or_empty(ctx.peer_address)
    }

    pub fn resolution_status(ctx: &ExchangeContext) -> String {
        let status = if ctx.resolution_status.is_completed() {
            "Completed"
        } else {
            "Failure"
        };
        status.to_string()
    }

    pub fn retry_count(ctx: &ExchangeContext) -> String {
        ctx.retry_count.to_string()
    }

    pub fn dns_answers(ctx: &ExchangeContext) -> String {
        serialize_answers(&ctx.answers)
    }

    fn address_or_empty(addr: Option<SocketAddr>) -> String {
        addr.map(|a| a.to_string()).unwrap_or_default()
    }
}
