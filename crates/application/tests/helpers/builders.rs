#![allow(dead_code)]

use dns_access_log_domain::{
    DnsRecord, ExchangeContext, Question, ResolutionStatus, SrvTarget, SrvTargets,
};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

pub struct ExchangeContextBuilder {
    ctx: ExchangeContext,
}

impl ExchangeContextBuilder {
    pub fn new() -> Self {
        Self {
            ctx: ExchangeContext {
                parse_status: true,
                resolution_status: ResolutionStatus::Completed,
                ..ExchangeContext::default()
            },
        }
    }

    pub fn question(mut self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.ctx.queries.push(Question::new(name, qtype, qclass));
        self
    }

    pub fn answer(mut self, record: DnsRecord) -> Self {
        self.ctx.answers.push(record);
        self
    }

    pub fn response_code(mut self, code: u16) -> Self {
        self.ctx.response_code = code;
        self
    }

    pub fn parse_status(mut self, ok: bool) -> Self {
        self.ctx.parse_status = ok;
        self
    }

    pub fn resolution_status(mut self, status: ResolutionStatus) -> Self {
        self.ctx.resolution_status = status;
        self
    }

    pub fn retry_count(mut self, retries: u32) -> Self {
        self.ctx.retry_count = retries;
        self
    }

    pub fn peer(mut self, addr: &str) -> Self {
        self.ctx.peer_address = Some(addr.parse::<SocketAddr>().unwrap());
        self
    }

    pub fn local(mut self, addr: &str) -> Self {
        self.ctx.local_address = Some(addr.parse::<SocketAddr>().unwrap());
        self
    }

    pub fn started_at(mut self, rfc3339: &str) -> Self {
        self.ctx.request_start_time = Some(rfc3339.parse::<chrono::DateTime<chrono::Utc>>().unwrap());
        self
    }

    pub fn build(self) -> ExchangeContext {
        self.ctx
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

pub fn empty_a_record(name: &str, ttl: u64) -> DnsRecord {
    DnsRecord::a(name, Duration::from_secs(ttl), None)
}

pub fn aaaa_record(name: &str, ttl: u64, ip: &str) -> DnsRecord {
    DnsRecord::aaaa(name, Duration::from_secs(ttl), Some(ip.parse::<Ipv6Addr>().unwrap()))
}

pub fn srv_record(name: &str, ttl: u64, targets: &[(&str, u16, u16, u16)]) -> DnsRecord {
    let targets: SrvTargets = targets
        .iter()
        .map(|(host, p, w, port)| (*host, SrvTarget::new(*p, *w, *port)))
        .collect();
    DnsRecord::srv(name, Duration::from_secs(ttl), targets)
}

pub fn opt_record(ttl: u64) -> DnsRecord {
    DnsRecord::opt("", Duration::from_secs(ttl))
}

pub fn other_record(name: &str, ttl: u64, code: u16) -> DnsRecord {
    DnsRecord::other(name, Duration::from_secs(ttl), code).unwrap()
}

/// A fully populated exchange for `svc.local A`.
pub fn svc_exchange() -> ExchangeContext {
    ExchangeContextBuilder::new()
        .question("svc.local", 1, 1)
        .answer(a_record("svc.local", 30, "10.0.0.5"))
        .peer("192.168.1.100:5353")
        .local("10.0.0.1:53")
        .build()
}
