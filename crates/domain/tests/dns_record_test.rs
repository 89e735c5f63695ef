use dns_access_log_domain::{
    AddressFamily, DnsRecord, DomainError, RecordData, RecordType, SrvTarget, SrvTargets,
};
use std::net::{IpAddr, Ipv6Addr};
use std::time::Duration;

mod helpers;
use helpers::{a_record, srv_record};

#[test]
fn test_a_record_type_follows_variant() {
    let record = a_record("svc.local", 30, "10.0.0.5");

    assert_eq!(record.record_type(), RecordType::A);
    assert_eq!(record.record_type().to_u16(), 0x01);
    assert_eq!(record.ttl_secs(), 30);
    assert_eq!(
        record.data,
        RecordData::Address {
            family: AddressFamily::V4,
            address: Some("10.0.0.5".parse().unwrap()),
        }
    );
}

#[test]
fn test_aaaa_record_without_address() {
    let record = DnsRecord::aaaa("svc.local", Duration::from_secs(10), None);

    assert_eq!(record.record_type(), RecordType::AAAA);
    assert!(matches!(
        record.data,
        RecordData::Address { address: None, .. }
    ));
}

#[test]
fn test_address_constructor_picks_family() {
    let v6 = DnsRecord::address("svc.local", Duration::from_secs(1), IpAddr::V6(Ipv6Addr::LOCALHOST));
    let v4 = DnsRecord::address("svc.local", Duration::from_secs(1), "127.0.0.1".parse().unwrap());

    assert_eq!(v6.record_type(), RecordType::AAAA);
    assert_eq!(v4.record_type(), RecordType::A);
}

#[test]
fn test_ttl_truncates_to_whole_seconds() {
    let record = DnsRecord::opt("", Duration::from_millis(2_999));
    assert_eq!(record.ttl_secs(), 2);
}

#[test]
fn test_other_rejects_modeled_types() {
    for code in [0x01, 0x1C, 0x21, 0x29] {
        let result = DnsRecord::other("svc.local", Duration::from_secs(5), code);
        assert_eq!(result, Err(DomainError::RecordTypeMismatch(code)));
    }
}

#[test]
fn test_other_accepts_unmodeled_types() {
    let record = DnsRecord::other("mail.local", Duration::from_secs(5), 15).unwrap();
    assert_eq!(record.record_type(), RecordType::Unknown(15));
}

#[test]
fn test_record_type_display() {
    assert_eq!(RecordType::A.to_string(), "A");
    assert_eq!(RecordType::AAAA.to_string(), "AAAA");
    assert_eq!(RecordType::SRV.to_string(), "SRV");
    assert_eq!(RecordType::OPT.to_string(), "OPT");
    assert_eq!(RecordType::Unknown(15).to_string(), "TYPE15");
    assert_eq!(RecordType::from_u16(65).to_string(), "TYPE65");
}

#[test]
fn test_record_type_from_u16_maps_modeled_codes() {
    assert_eq!(RecordType::from_u16(28), RecordType::AAAA);
    assert_eq!(RecordType::from_u16(33), RecordType::SRV);
    assert_eq!(RecordType::from_u16(41), RecordType::OPT);
    assert!(!RecordType::from_u16(16).is_modeled());
}

#[test]
fn test_record_type_from_str() {
    assert_eq!("aaaa".parse::<RecordType>(), Ok(RecordType::AAAA));
    assert_eq!("TYPE15".parse::<RecordType>(), Ok(RecordType::Unknown(15)));
    assert_eq!("type33".parse::<RecordType>(), Ok(RecordType::SRV));
    assert!("MX".parse::<RecordType>().is_err());
}

#[test]
fn test_srv_targets_keep_insertion_order() {
    let record = srv_record(
        "_sip._udp.local",
        60,
        &[("z.local", 1, 2, 5000), ("a.local", 3, 4, 5001)],
    );

    let RecordData::Service(targets) = &record.data else {
        panic!("Expected Service variant");
    };
    let hosts: Vec<&str> = targets.iter().map(|(h, _)| h).collect();
    assert_eq!(hosts, vec!["z.local", "a.local"]);
    assert_eq!(targets.to_string(), "1 2 5000 z.local,3 4 5001 a.local");
}

#[test]
fn test_srv_targets_reinsert_replaces_in_place() {
    let mut targets = SrvTargets::new();
    targets.insert("a.local", SrvTarget::new(1, 1, 80));
    targets.insert("b.local", SrvTarget::new(2, 2, 81));
    targets.insert("a.local", SrvTarget::new(9, 9, 90));

    assert_eq!(targets.len(), 2);
    assert_eq!(targets.get("a.local"), Some(&SrvTarget::new(9, 9, 90)));
    assert_eq!(targets.iter().next().map(|(h, _)| h), Some("a.local"));
}

#[test]
fn test_empty_srv_targets_display_empty() {
    assert!(SrvTargets::new().is_empty());
    assert_eq!(SrvTargets::new().to_string(), "");
}
