mod record;
mod record_type;
mod srv;

pub use record::{AddressFamily, DnsRecord, RecordData};
pub use record_type::RecordType;
pub use srv::{SrvTarget, SrvTargets};
