//! Manage DNS records across hosting providers through one interface.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod providers;

pub use crate::core::provider::{DNSProvider, RecordSet};
pub use crate::core::record::{DNSRecord, DNSRecordType};
pub use crate::error::{Error, StatusError};
