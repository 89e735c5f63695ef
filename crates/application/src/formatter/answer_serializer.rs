use dns_access_log_domain::{dns_class_name, DnsRecord, RecordData, DNS_CLASS_IN};

const EDNS_OPTIONS_PLACEHOLDER: &str = "<edns_options>";
const UNSUPPORTED_PLACEHOLDER: &str = "<unsupported>";

/// Renders the whole answer set as `dns_answer=['<rr>','<rr>',...]`.
///
/// Records are visited in stored order. A record that renders to nothing
/// (an address record without an address) is left out of the join, so the
/// result can be empty even when `answers` is not.
pub fn serialize_answers(answers: &[DnsRecord]) -> String {
    let records: Vec<String> = answers.iter().filter_map(format_record).collect();

    if records.is_empty() {
        return String::new();
    }
    format!("dns_answer=[{}]", records.join(","))
}

/// `'<name> <ttl> IN <type> <rdata>'`, or `None` when there is nothing to show.
pub fn format_record(record: &DnsRecord) -> Option<String> {
    let rdata = match &record.data {
        RecordData::Address { address, .. } => address.as_ref()?.to_string(),
        RecordData::Service(targets) => targets.to_string(),
        RecordData::Options => EDNS_OPTIONS_PLACEHOLDER.to_string(),
        RecordData::Other(_) => UNSUPPORTED_PLACEHOLDER.to_string(),
    };

    Some(format!(
        "'{} {} {} {} {}'",
        record.name,
        record.ttl_secs(),
        dns_class_name(DNS_CLASS_IN),
        record.record_type(),
        rdata
    ))
}
