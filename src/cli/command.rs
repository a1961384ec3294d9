use thiserror::Error;
use tracing::warn;

use crate::core::record::{DNSRecord, DNSRecordType};

/// TTL used when a `put` gives none, or 0.
pub const DEFAULT_TTL: u32 = 300;

pub const LOGIN_USAGE: &str = "namedotcom <username> <token>";
pub const LIST_USAGE: &str = "list <domain>";
pub const PUT_USAGE: &str = "put <domain> <host> <type> <answer> <ttl>";
pub const DELETE_USAGE: &str = "delete <domain> <id>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Login { username: String, token: String },
    List { domain: String },
    Put(DNSRecord),
    Delete { domain: String, id: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid usage. Expected: namedotcom username token")]
    LoginUsage,

    #[error("Invalid command - Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid record type: {0}")]
    RecordType(String),

    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Commands that need a provider to be set first.
    pub fn needs_provider(&self) -> bool {
        matches!(
            self,
            Command::List { .. } | Command::Put(_) | Command::Delete { .. }
        )
    }
}

fn expect_args<'a>(
    tokens: &[&'a str],
    count: usize,
    usage: &'static str,
) -> Result<Vec<&'a str>, CommandError> {
    if tokens.len() == count {
        Ok(tokens[1..].to_vec())
    } else {
        Err(CommandError::Usage(usage))
    }
}

/// Falls back to [`DEFAULT_TTL`] when the value is not a number or is 0.
pub fn parse_ttl(s: &str) -> u32 {
    match s.parse::<u32>() {
        Ok(0) => DEFAULT_TTL,
        Ok(ttl) => ttl,
        Err(e) => {
            warn!(value = s, error = %e, "unable to parse ttl, using default");
            DEFAULT_TTL
        }
    }
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&name) = tokens.first() else {
        return Err(CommandError::Unknown(line.to_string()));
    };

    match name {
        "help" if tokens.len() == 1 => Ok(Command::Help),
        "exit" if tokens.len() == 1 => Ok(Command::Exit),
        "namedotcom" => {
            let args =
                expect_args(&tokens, 3, LOGIN_USAGE).map_err(|_| CommandError::LoginUsage)?;
            Ok(Command::Login {
                username: args[0].to_string(),
                token: args[1].to_string(),
            })
        }
        "list" => {
            let args = expect_args(&tokens, 2, LIST_USAGE)?;
            Ok(Command::List {
                domain: args[0].to_string(),
            })
        }
        "put" => {
            let args = expect_args(&tokens, 6, PUT_USAGE)?;
            let record_type: DNSRecordType = args[2]
                .to_uppercase()
                .parse()
                .map_err(|_| CommandError::RecordType(args[2].to_string()))?;
            Ok(Command::Put(DNSRecord::new(
                args[0],
                args[1],
                record_type,
                args[3],
                parse_ttl(args[4]),
            )))
        }
        "delete" => {
            let args = expect_args(&tokens, 3, DELETE_USAGE)?;
            Ok(Command::Delete {
                domain: args[0].to_string(),
                id: args[1].to_string(),
            })
        }
        _ => Err(CommandError::Unknown(line.to_string())),
    }
}
