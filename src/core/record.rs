use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DNSRecordType {
    #[default]
    A,
    AAAA,
    ANAME,
    CNAME,
    MX,
    NS,
    SRV,
    TXT,
}

impl DNSRecordType {
    pub const ALL: [DNSRecordType; 8] = [
        DNSRecordType::A,
        DNSRecordType::AAAA,
        DNSRecordType::ANAME,
        DNSRecordType::CNAME,
        DNSRecordType::MX,
        DNSRecordType::NS,
        DNSRecordType::SRV,
        DNSRecordType::TXT,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DNSRecordType::A => "A",
            DNSRecordType::AAAA => "AAAA",
            DNSRecordType::ANAME => "ANAME",
            DNSRecordType::CNAME => "CNAME",
            DNSRecordType::MX => "MX",
            DNSRecordType::NS => "NS",
            DNSRecordType::SRV => "SRV",
            DNSRecordType::TXT => "TXT",
        }
    }
}

impl fmt::Display for DNSRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: "a" is not a record type.
impl FromStr for DNSRecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DNSRecordType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown record type: {s}")))
    }
}

/// A DNS record independent of any provider.
///
/// An empty `id` means the record has not been created yet. Until then it is
/// identified by `(host, record_type)` within its domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DNSRecord {
    pub id: String,
    pub domain: String,
    /// Empty for the zone apex.
    pub host: String,
    pub record_type: DNSRecordType,
    pub answer: String,
    pub ttl: u32,
    pub priority: u32,
}

impl DNSRecord {
    pub fn new(
        domain: impl Into<String>,
        host: impl Into<String>,
        record_type: DNSRecordType,
        answer: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            id: String::new(),
            domain: domain.into(),
            host: host.into(),
            record_type,
            answer: answer.into(),
            ttl,
            priority: 0,
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Upsert key comparison.
    pub fn matches(&self, other: &DNSRecord) -> bool {
        self.host == other.host && self.record_type == other.record_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_record_type_parse_all() {
        for t in DNSRecordType::ALL {
            assert_eq!(t.as_str().parse::<DNSRecordType>().unwrap(), t);
        }
    }

    #[test]
    fn test_record_type_parse_is_case_sensitive() {
        assert_matches!("cname".parse::<DNSRecordType>(), Err(Error::InvalidInput(_)));
        assert_matches!("Txt".parse::<DNSRecordType>(), Err(Error::InvalidInput(_)));
        assert_matches!("CAA".parse::<DNSRecordType>(), Err(Error::InvalidInput(_)));
        assert_matches!("".parse::<DNSRecordType>(), Err(Error::InvalidInput(_)));
    }

    #[test]
    fn test_record_type_serde_uses_wire_strings() {
        let json = serde_json::to_string(&DNSRecordType::AAAA).unwrap();
        assert_eq!(json, "\"AAAA\"");
        let parsed: DNSRecordType = serde_json::from_str("\"ANAME\"").unwrap();
        assert_eq!(parsed, DNSRecordType::ANAME);
        assert!(serde_json::from_str::<DNSRecordType>("\"mx\"").is_err());
    }

    #[test]
    fn test_new_record_has_no_id() {
        let rec = DNSRecord::new("example.com", "www", DNSRecordType::A, "1.2.3.4", 300);
        assert!(!rec.has_id());
        assert_eq!(rec.priority, 0);
        assert_eq!(rec.ttl, 300);
    }

    #[test]
    fn test_matches_on_host_and_type_only() {
        let a = DNSRecord::new("example.com", "www", DNSRecordType::A, "1.2.3.4", 300);
        let mut b = DNSRecord::new("example.com", "www", DNSRecordType::A, "5.6.7.8", 60);
        b.id = "7".into();
        assert!(a.matches(&b));

        let c = DNSRecord::new("example.com", "www", DNSRecordType::AAAA, "::1", 300);
        assert!(!a.matches(&c));
        let d = DNSRecord::new("example.com", "", DNSRecordType::A, "1.2.3.4", 300);
        assert!(!a.matches(&d));
    }
}
