use super::{RecordType, SrvTargets};
use crate::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

/// Type-specific payload of a record. The record type is derived from the
/// variant, so a type code can never disagree with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// A or AAAA; the address may be missing when the resolver produced none.
    Address {
        family: AddressFamily,
        address: Option<IpAddr>,
    },
    Service(SrvTargets),
    /// EDNS pseudo-record. Options are not decoded.
    Options,
    /// Any type without a dedicated variant. Never holds a modeled code.
    Other(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: Arc<str>,
    pub ttl: Duration,
    pub data: RecordData,
}

impl DnsRecord {
    pub fn a(name: impl Into<Arc<str>>, ttl: Duration, address: Option<Ipv4Addr>) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::Address {
                family: AddressFamily::V4,
                address: address.map(IpAddr::V4),
            },
        }
    }

    pub fn aaaa(name: impl Into<Arc<str>>, ttl: Duration, address: Option<Ipv6Addr>) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::Address {
                family: AddressFamily::V6,
                address: address.map(IpAddr::V6),
            },
        }
    }

    /// Picks A or AAAA from the address itself.
    pub fn address(name: impl Into<Arc<str>>, ttl: Duration, address: IpAddr) -> Self {
        match address {
            IpAddr::V4(v4) => Self::a(name, ttl, Some(v4)),
            IpAddr::V6(v6) => Self::aaaa(name, ttl, Some(v6)),
        }
    }

    pub fn srv(name: impl Into<Arc<str>>, ttl: Duration, targets: SrvTargets) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::Service(targets),
        }
    }

    pub fn opt(name: impl Into<Arc<str>>, ttl: Duration) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::Options,
        }
    }

    /// Record of a type without its own payload shape.
    ///
    /// Fails with [`DomainError::RecordTypeMismatch`] for A, AAAA, SRV and OPT,
    /// which must be built through their dedicated constructors.
    pub fn other(
        name: impl Into<Arc<str>>,
        ttl: Duration,
        record_type: u16,
    ) -> Result<Self, DomainError> {
        if RecordType::from_u16(record_type).is_modeled() {
            return Err(DomainError::RecordTypeMismatch(record_type));
        }
        Ok(Self {
            name: name.into(),
            ttl,
            data: RecordData::Other(record_type),
        })
    }

    pub fn record_type(&self) -> RecordType {
        match &self.data {
            RecordData::Address {
                family: AddressFamily::V4,
                ..
            } => RecordType::A,
            RecordData::Address {
                family: AddressFamily::V6,
                ..
            } => RecordType::AAAA,
            RecordData::Service(_) => RecordType::SRV,
            RecordData::Options => RecordType::OPT,
            RecordData::Other(code) => RecordType::Unknown(*code),
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl.as_secs()
    }
}
