use super::{DnsRecord, Question};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;

/// Outcome of the resolution that produced an exchange.
///
/// Marked non-exhaustive: consumers must treat anything other than
/// `Completed` as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ResolutionStatus {
    Completed,
    #[default]
    Failure,
}

impl ResolutionStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, ResolutionStatus::Completed)
    }
}

/// Immutable snapshot of one finished DNS query/answer cycle.
///
/// Built by the resolver once resolution is over and handed to the access
/// log by shared reference; nothing in this workspace mutates it afterwards.
/// `answers` keeps insertion order and may hold several records with the
/// same owner name.
#[derive(Debug, Clone, Default)]
pub struct ExchangeContext {
    pub queries: Vec<Question>,
    pub answers: Vec<DnsRecord>,
    pub response_code: u16,
    pub parse_status: bool,
    pub resolution_status: ResolutionStatus,
    pub retry_count: u32,
    pub peer_address: Option<SocketAddr>,
    pub local_address: Option<SocketAddr>,
    pub request_start_time: Option<DateTime<Utc>>,
}

impl ExchangeContext {
    /// The question every per-question field reads. Later questions are ignored.
    pub fn first_question(&self) -> Option<&Question> {
        self.queries.first()
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}
