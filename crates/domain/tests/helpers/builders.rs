#![allow(dead_code)]
use dns_access_log_domain::{
    DnsRecord, ExchangeContext, Question, ResolutionStatus, SrvTarget, SrvTargets,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

pub struct ExchangeContextBuilder {
    queries: Vec<Question>,
    answers: Vec<DnsRecord>,
    response_code: u16,
    parse_status: bool,
    resolution_status: ResolutionStatus,
    retry_count: u32,
    peer_address: Option<SocketAddr>,
    local_address: Option<SocketAddr>,
}

impl ExchangeContextBuilder {
    pub fn new() -> Self {
        Self {
            queries: vec![],
            answers: vec![],
            response_code: 0,
            parse_status: true,
            resolution_status: ResolutionStatus::Completed,
            retry_count: 0,
            peer_address: None,
            local_address: None,
        }
    }

    pub fn question(mut self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.queries.push(Question::new(name, qtype, qclass));
        self
    }

    pub fn answer(mut self, record: DnsRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn response_code(mut self, code: u16) -> Self {
        self.response_code = code;
        self
    }

    pub fn resolution_status(mut self, status: ResolutionStatus) -> Self {
        self.resolution_status = status;
        self
    }

    pub fn peer(mut self, addr: &str) -> Self {
        self.peer_address = Some(addr.parse().unwrap());
        self
    }

    pub fn build(self) -> ExchangeContext {
        ExchangeContext {
            queries: self.queries,
            answers: self.answers,
            response_code: self.response_code,
            parse_status: self.parse_status,
            resolution_status: self.resolution_status,
            retry_count: self.retry_count,
            peer_address: self.peer_address,
            local_address: self.local_address,
            request_start_time: None,
        }
    }
}

impl Default for ExchangeContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn a_record(name: &str, ttl: u64, ip: &str) -> DnsRecord {
    DnsRecord::a(name, Duration::from_secs(ttl), Some(ip.parse::<Ipv4Addr>().unwrap()))
}

pub fn srv_record(name: &str, ttl: u64, targets: &[(&str, u16, u16, u16)]) -> DnsRecord {
    let targets: SrvTargets = targets
        .iter()
        .map(|(host, p, w, port)| (*host, SrvTarget::new(*p, *w, *port)))
        .collect();
    DnsRecord::srv(name, Duration::from_secs(ttl), targets)
}
