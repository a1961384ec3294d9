use serde::{Deserialize, Serialize};

use crate::core::record::{DNSRecord, DNSRecordType};
use crate::providers::namedotcom::error::NameDotComProviderError;

fn is_zero(v: &u64) -> bool {
    *v == 0
}

fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}

/// Record as name.com sends and accepts it. Zero and empty fields are left out
/// on write, except `host`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NameDotComRecord {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain_name: String,
    #[serde(default)]
    pub host: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fqdn: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub answer: String,
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub priority: u32,
}

#[derive(Deserialize, Debug, Default)]
pub struct ListRecordsResponse {
    #[serde(default)]
    pub records: Vec<NameDotComRecord>,
}

pub fn to_dns_record(nr: &NameDotComRecord) -> Result<DNSRecord, NameDotComProviderError> {
    let record_type: DNSRecordType = nr.record_type.parse().map_err(|_| {
        NameDotComProviderError::InvalidInput(format!(
            "unsupported record type {:?} on record {}",
            nr.record_type, nr.id
        ))
    })?;
    Ok(DNSRecord {
        id: if nr.id == 0 {
            String::new()
        } else {
            nr.id.to_string()
        },
        domain: nr.domain_name.clone(),
        host: nr.host.clone(),
        record_type,
        answer: nr.answer.clone(),
        ttl: nr.ttl,
        priority: nr.priority,
    })
}

/// name.com ids are integers.
pub fn parse_id(id: &str) -> Result<u64, NameDotComProviderError> {
    id.parse::<u64>()
        .map_err(|e| NameDotComProviderError::InvalidInput(format!("record id {id:?}: {e}")))
}

pub fn to_namedotcom_record(rec: &DNSRecord) -> Result<NameDotComRecord, NameDotComProviderError> {
    let id = if rec.has_id() { parse_id(&rec.id)? } else { 0 };
    Ok(NameDotComRecord {
        id,
        domain_name: rec.domain.clone(),
        host: rec.host.clone(),
        fqdn: String::new(),
        record_type: rec.record_type.to_string(),
        answer: rec.answer.clone(),
        ttl: rec.ttl,
        priority: rec.priority,
    })
}
