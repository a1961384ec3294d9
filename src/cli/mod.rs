//! Interactive command layer on top of [`DNSProvider`](crate::core::provider::DNSProvider).

pub mod command;
pub mod format;
pub mod session;

pub use command::{Command, CommandError, DEFAULT_TTL};
pub use session::{Outcome, Session};
