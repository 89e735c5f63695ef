use std::fmt;
use std::str::FromStr;

/// Record types the access log knows how to label. Anything else keeps its
/// numeric code and is rendered as `TYPE<code>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    SRV,
    OPT,
    Unknown(u16),
}

impl RecordType {
    pub const A_CODE: u16 = 0x01;
    pub const AAAA_CODE: u16 = 0x1C;
    pub const SRV_CODE: u16 = 0x21;
    pub const OPT_CODE: u16 = 0x29;

    /// Mnemonic for modeled types, `None` for `Unknown`.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            RecordType::A => Some("A"),
            RecordType::AAAA => Some("AAAA"),
            RecordType::SRV => Some("SRV"),
            RecordType::OPT => Some("OPT"),
            RecordType::Unknown(_) => None,
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => Self::A_CODE,
            RecordType::AAAA => Self::AAAA_CODE,
            RecordType::SRV => Self::SRV_CODE,
            RecordType::OPT => Self::OPT_CODE,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            Self::A_CODE => RecordType::A,
            Self::AAAA_CODE => RecordType::AAAA,
            Self::SRV_CODE => RecordType::SRV,
            Self::OPT_CODE => RecordType::OPT,
            other => RecordType::Unknown(other),
        }
    }

    pub fn is_modeled(&self) -> bool {
        !matches!(self, RecordType::Unknown(_))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => f.write_str(name),
            None => write!(f, "TYPE{}", self.to_u16()),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    /// Accepts mnemonics (case-insensitive) and the `TYPE<n>` generic form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "SRV" => Ok(RecordType::SRV),
            "OPT" => Ok(RecordType::OPT),
            _ => upper
                .strip_prefix("TYPE")
                .and_then(|code| code.parse::<u16>().ok())
                .map(RecordType::from_u16)
                .ok_or_else(|| format!("Unknown record type: {}", s)),
        }
    }
}
