use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Wire shape of one exchange as handed over by the resolver, in JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeDto {
    #[serde(default)]
    pub queries: Vec<QuestionDto>,
    #[serde(default)]
    pub answers: Vec<RecordDto>,
    #[serde(default)]
    pub response_code: u16,
    #[serde(default)]
    pub parse_status: bool,
    #[serde(default)]
    pub resolution_status: ResolutionStatusDto,
    #[serde(default)]
    pub retry_count: u32,
    pub peer_address: Option<String>,
    pub local_address: Option<String>,
    pub request_start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDto {
    pub name: String,
    #[serde(rename = "type")]
    pub qtype: u16,
    #[serde(rename = "class", default = "default_class")]
    pub qclass: u16,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub enum ResolutionStatusDto {
    Completed,
    #[default]
    #[serde(other)]
    Failure,
}

/// Record type given either as a number or as `A`, `SRV`, `TYPE15`, ...
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordTypeDto {
    Code(u16),
    Name(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordDto {
    pub name: String,
    #[serde(default)]
    pub ttl: u64,
    #[serde(rename = "type")]
    pub rtype: RecordTypeDto,
    pub address: Option<String>,
    pub targets: Option<Vec<SrvTargetDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SrvTargetDto {
    pub target: String,
    #[serde(default)]
    pub priority: u16,
    #[serde(default)]
    pub weight: u16,
    pub port: u16,
}

/// A document may hold one exchange or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExchangeDocument {
    Many(Vec<ExchangeDto>),
    One(Box<ExchangeDto>),
}

fn default_class() -> u16 {
    dns_access_log_domain::DNS_CLASS_IN
}
