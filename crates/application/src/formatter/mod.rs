mod access_log_formatter;
mod answer_serializer;
mod field_extractor;
mod template;
mod token_registry;

pub use access_log_formatter::AccessLogFormatter;
pub use answer_serializer::{format_record, serialize_answers};
pub use field_extractor::FieldExtractor;
pub use template::AccessLogTemplate;
pub use token_registry::TokenRegistry;
