use super::dto::{ExchangeDto, RecordDto, RecordTypeDto, ResolutionStatusDto};
use dns_access_log_domain::{
    DnsRecord, DomainError, ExchangeContext, Question, RecordType, ResolutionStatus, SrvTarget,
    SrvTargets,
};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::warn;

pub(crate) fn to_exchange(dto: ExchangeDto) -> Result<ExchangeContext, DomainError> {
    let answers = dto
        .answers
        .into_iter()
        .map(to_record)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect();

    Ok(ExchangeContext {
        queries: dto
            .queries
            .into_iter()
            .map(|q| Question::new(q.name, q.qtype, q.qclass))
            .collect(),
        answers,
        response_code: dto.response_code,
        parse_status: dto.parse_status,
        resolution_status: match dto.resolution_status {
            ResolutionStatusDto::Completed => ResolutionStatus::Completed,
            ResolutionStatusDto::Failure => ResolutionStatus::Failure,
        },
        retry_count: dto.retry_count,
        peer_address: parse_socket_addr(dto.peer_address.as_deref(), "peer_address")?,
        local_address: parse_socket_addr(dto.local_address.as_deref(), "local_address")?,
        request_start_time: dto.request_start_time,
    })
}

/// `Ok(None)` drops a record whose declared type disagrees with its payload;
/// the rest of the answer set is kept.
fn to_record(dto: RecordDto) -> Result<Option<DnsRecord>, DomainError> {
    let record_type = match &dto.rtype {
        RecordTypeDto::Code(code) => RecordType::from_u16(*code),
        RecordTypeDto::Name(name) => name
            .parse::<RecordType>()
            .map_err(DomainError::InvalidExchange)?,
    };
    let ttl = Duration::from_secs(dto.ttl);
    let address = dto
        .address
        .as_deref()
        .map(|a| {
            a.parse::<IpAddr>().map_err(|e| {
                DomainError::InvalidExchange(format!("record {}: address '{}': {}", dto.name, a, e))
            })
        })
        .transpose()?;

    let mismatch = |reason: &str| {
        warn!(
            name = %dto.name,
            record_type = %record_type,
            reason,
            "Dropping DNS record whose type does not match its data"
        );
        Ok(None)
    };

    if dto.targets.is_some() && record_type != RecordType::SRV {
        return mismatch("targets on a non-SRV record");
    }
    if address.is_some() && !matches!(record_type, RecordType::A | RecordType::AAAA) {
        return mismatch("address on a non-address record");
    }

    let record = match record_type {
        RecordType::A => match address {
            Some(IpAddr::V6(_)) => return mismatch("IPv6 address on an A record"),
            Some(IpAddr::V4(v4)) => DnsRecord::a(dto.name, ttl, Some(v4)),
            None => DnsRecord::a(dto.name, ttl, None),
        },
        RecordType::AAAA => match address {
            Some(IpAddr::V4(_)) => return mismatch("IPv4 address on an AAAA record"),
            Some(IpAddr::V6(v6)) => DnsRecord::aaaa(dto.name, ttl, Some(v6)),
            None => DnsRecord::aaaa(dto.name, ttl, None),
        },
        RecordType::SRV => {
            let Some(targets) = dto.targets else {
                return mismatch("SRV record without targets");
            };
            let targets: SrvTargets = targets
                .into_iter()
                .map(|t| (t.target, SrvTarget::new(t.priority, t.weight, t.port)))
                .collect();
            DnsRecord::srv(dto.name, ttl, targets)
        }
        RecordType::OPT => DnsRecord::opt(dto.name, ttl),
        RecordType::Unknown(code) => DnsRecord::other(dto.name, ttl, code)?,
    };
    Ok(Some(record))
}

fn parse_socket_addr(
    value: Option<&str>,
    field: &str,
) -> Result<Option<SocketAddr>, DomainError> {
    value
        .map(|v| {
            v.parse::<SocketAddr>()
                .map_err(|e| DomainError::InvalidExchange(format!("{} '{}': {}", field, v, e)))
        })
        .transpose()
}
