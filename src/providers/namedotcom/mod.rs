//! name.com provider implementation

pub mod client;
pub mod error;
pub mod types;


pub use client::{DEFAULT_API_URL, NameDotComConfig, NameDotComProvider};
pub use error::NameDotComProviderError;
pub use types::NameDotComRecord;

// --- DNSProvider trait implementation for NameDotComProvider ---
use crate::core::provider::{DNSProvider, RecordSet};
use crate::core::record::DNSRecord;
use crate::error::Error;
use async_trait::async_trait;
use error::map_error;
use tracing::{info, warn};
use types::to_dns_record;

#[async_trait]
impl DNSProvider for NameDotComProvider {
    fn name(&self) -> &str {
        "namedotcom"
    }

    async fn list(&self, domain: &str) -> Result<Vec<DNSRecord>, Error> {
        self.list_set(domain).await.map(|set| set.records)
    }

    async fn list_set(&self, domain: &str) -> Result<RecordSet, Error> {
        let records = self.list_records(domain).await.map_err(map_error)?;
        let mut set = RecordSet::default();
        for nr in &records {
            match to_dns_record(nr) {
                Ok(mut rec) => {
                    if rec.domain.is_empty() {
                        rec.domain = domain.to_string();
                    }
                    set.records.push(rec);
                }
                Err(e) => {
                    warn!(domain, error = %e, "skipping record");
                    set.unsupported += 1;
                }
            }
        }
        Ok(set)
    }

    async fn put(&self, mut record: DNSRecord) -> Result<(), Error> {
        if !record.has_id() {
            // First (host, type) match in list order wins.
            let existing = self.list(&record.domain).await?;
            if let Some(found) = existing.iter().find(|r| r.matches(&record)) {
                record.id = found.id.clone();
            }
        }

        let result = if record.has_id() {
            info!(
                domain = %record.domain,
                host = %record.host,
                record_type = %record.record_type,
                id = %record.id,
                "updating record"
            );
            self.update_record(&record).await
        } else {
            info!(
                domain = %record.domain,
                host = %record.host,
                record_type = %record.record_type,
                "creating record"
            );
            self.create_record(&record).await
        };
        result.map(|_| ()).map_err(map_error)
    }

    async fn delete(&self, domain: &str, id: &str) -> Result<(), Error> {
        info!(domain, id, "deleting record");
        self.delete_record(domain, id).await.map_err(map_error)
    }
}
