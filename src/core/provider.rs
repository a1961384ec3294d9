use crate::core::record::DNSRecord;
use crate::error::Error;
use async_trait::async_trait;

/// Result of listing a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub records: Vec<DNSRecord>,
    /// Records the backend returned whose type has no [`DNSRecordType`](crate::core::record::DNSRecordType).
    pub unsupported: usize,
}

/// Operations every DNS hosting backend supports.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DNSProvider: Send + Sync {
    fn name(&self) -> &str;

    /// All records of `domain`, in the order the backend returns them.
    async fn list(&self, domain: &str) -> Result<Vec<DNSRecord>, Error>;

    /// Like [`list`](DNSProvider::list), also counting records that could not
    /// be represented.
    async fn list_set(&self, domain: &str) -> Result<RecordSet, Error> {
        Ok(RecordSet {
            records: self.list(domain).await?,
            unsupported: 0,
        })
    }

    /// Create or update `record`.
    ///
    /// Without an id the record is matched against the existing records of its
    /// domain by host and type, and the first match is updated. No match
    /// creates a new record.
    async fn put(&self, record: DNSRecord) -> Result<(), Error>;

    async fn delete(&self, domain: &str, id: &str) -> Result<(), Error>;
}
