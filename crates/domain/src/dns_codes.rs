//! Numeric DNS code tables used when rendering access-log fields.

pub const DNS_CLASS_IN: u16 = 1;

pub const DNS_RESPONSE_CODE_NO_ERROR: u16 = 0;
pub const DNS_RESPONSE_CODE_FORMAT_ERROR: u16 = 1;
pub const DNS_RESPONSE_CODE_NAME_ERROR: u16 = 3;
pub const DNS_RESPONSE_CODE_NOT_IMPLEMENTED: u16 = 4;

/// Only the Internet class is modeled; everything else is `UNKNOWN_CLASS`.
pub fn dns_class_name(class: u16) -> &'static str {
    match class {
        DNS_CLASS_IN => "IN",
        _ => "UNKNOWN_CLASS",
    }
}

pub fn response_code_name(code: u16) -> &'static str {
    match code {
        DNS_RESPONSE_CODE_NO_ERROR => "NO_ERROR",
        DNS_RESPONSE_CODE_FORMAT_ERROR => "FORMAT_ERROR",
        DNS_RESPONSE_CODE_NAME_ERROR => "NAME_ERROR",
        DNS_RESPONSE_CODE_NOT_IMPLEMENTED => "NOT_IMPLEMENTED",
        _ => "UNKNOWN_RESPONSE_CODE",
    }
}
