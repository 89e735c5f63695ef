use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_TEXT_FORMAT: &str = "peer_ip=%PEER_IP% local_ip=%LOCAL_IP% \
     dns_question_name=%QUERY_NAME% dns_question_class=%QUERY_CLASS% \
     dns_question_type=%QUERY_TYPE% response_code=%RESPONSE_CODE% %DNS_ANSWERS%";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessLogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for AccessLogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(AccessLogFormat::Text),
            "json" => Ok(AccessLogFormat::Json),
            _ => Err(format!("Unknown access log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stdout,
    File,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessLogConfig {
    #[serde(default)]
    pub format: AccessLogFormat,

    /// Template used when `format = "text"`.
    #[serde(default = "default_text_format")]
    pub text_format: String,

    /// Key → template map used when `format = "json"`.
    #[serde(default = "default_json_format")]
    pub json_format: BTreeMap<String, String>,

    /// Rendered in place of a field that has no value.
    #[serde(default = "default_absent_value")]
    pub absent_value: String,

    #[serde(default)]
    pub sink: SinkKind,

    /// Destination for the file sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for AccessLogConfig {
    fn default() -> Self {
        Self {
            format: AccessLogFormat::default(),
            text_format: default_text_format(),
            json_format: default_json_format(),
            absent_value: default_absent_value(),
            sink: SinkKind::default(),
            path: None,
        }
    }
}

fn default_text_format() -> String {
    DEFAULT_TEXT_FORMAT.to_string()
}

fn default_json_format() -> BTreeMap<String, String> {
    [
        ("peer_ip", "%PEER_IP%"),
        ("local_ip", "%LOCAL_IP%"),
        ("dns_question_name", "%QUERY_NAME%"),
        ("dns_question_class", "%QUERY_CLASS%"),
        ("dns_question_type", "%QUERY_TYPE%"),
        ("response_code", "%RESPONSE_CODE%"),
        ("dns_answer", "%DNS_ANSWERS%"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_absent_value() -> String {
    "-".to_string()
}
