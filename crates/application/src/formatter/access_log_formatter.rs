use super::template::{truncate, AccessLogTemplate};
use super::TokenRegistry;
use dns_access_log_domain::{AccessLogConfig, AccessLogFormat, DomainError, ExchangeContext};
use serde_json::{Map, Value};

/// Turns an exchange into one access-log line, as plain text or as a JSON
/// object.
#[derive(Debug, Clone)]
pub enum AccessLogFormatter {
    Text {
        template: AccessLogTemplate,
        absent_value: String,
    },
    Json {
        fields: Vec<(String, AccessLogTemplate)>,
        absent_value: String,
    },
}

impl AccessLogFormatter {
    pub fn text(format: &str, registry: &TokenRegistry) -> Result<Self, DomainError> {
        Ok(AccessLogFormatter::Text {
            template: AccessLogTemplate::parse(format, registry)?,
            absent_value: "-".to_string(),
        })
    }

    pub fn from_config(
        config: &AccessLogConfig,
        registry: &TokenRegistry,
    ) -> Result<Self, DomainError> {
        let absent_value = config.absent_value.clone();
        match config.format {
            AccessLogFormat::Text => Ok(AccessLogFormatter::Text {
                template: AccessLogTemplate::parse(&config.text_format, registry)?,
                absent_value,
            }),
            AccessLogFormat::Json => {
                let fields = config
                    .json_format
                    .iter()
                    .map(|(key, format)| {
                        AccessLogTemplate::parse(format, registry).map(|t| (key.clone(), t))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(AccessLogFormatter::Json {
                    fields,
                    absent_value,
                })
            }
        }
    }

    pub fn format(&self, exchange: &ExchangeContext) -> String {
        match self {
            AccessLogFormatter::Text {
                template,
                absent_value,
            } => template.render(exchange, absent_value),
            AccessLogFormatter::Json {
                fields,
                absent_value,
            } => {
                let mut object = Map::new();
                for (key, template) in fields {
                    object.insert(key.clone(), json_field(template, exchange, absent_value));
                }
                Value::Object(object).to_string()
            }
        }
    }
}

/// A lone token keeps its structured value (`null` when absent); anything
/// else is rendered as text.
fn json_field(template: &AccessLogTemplate, exchange: &ExchangeContext, absent: &str) -> Value {
    match template.single_field() {
        Some((extractor, max_length)) => match extractor.extract_value(Some(exchange)) {
            Value::String(s) => Value::String(truncate(s, max_length)),
            other => other,
        },
        None => Value::String(template.render(exchange, absent)),
    }
}
