use std::sync::Arc;
use tracing::info;

use crate::cli::command::{self, Command};
use crate::cli::format::{HELP, format_record_set};
use crate::config::Config;
use crate::core::provider::DNSProvider;
use crate::providers::namedotcom::{NameDotComProvider, NameDotComProviderError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit,
}

/// State shared by the commands of one interactive run.
pub struct Session {
    config: Config,
    provider: Option<Arc<dyn DNSProvider>>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            provider: None,
        }
    }

    pub fn with_provider(config: Config, provider: Arc<dyn DNSProvider>) -> Self {
        Self {
            config,
            provider: Some(provider),
        }
    }

    pub fn provider(&self) -> Option<&Arc<dyn DNSProvider>> {
        self.provider.as_ref()
    }

    /// Replaces the current provider with a name.com provider for these
    /// credentials.
    pub fn login(&mut self, username: &str, token: &str) -> Result<(), NameDotComProviderError> {
        let provider = NameDotComProvider::new(self.config.namedotcom(username, token))?;
        info!(username, api_url = %self.config.api_url, "namedotcom provider set");
        self.provider = Some(Arc::new(provider));
        Ok(())
    }

    pub async fn eval(&mut self, line: &str) -> Outcome {
        let command = match command::parse(line) {
            Ok(command) => command,
            Err(e) => return Outcome::Reply(e.to_string()),
        };

        let provider = match (&self.provider, command.needs_provider()) {
            (None, true) => return Outcome::Reply("No provider set yet".to_string()),
            (provider, _) => provider.clone(),
        };

        let reply = match (command, provider) {
            (Command::Exit, _) => return Outcome::Exit,
            (Command::Help, _) => HELP.to_string(),
            (Command::Login { username, token }, _) => match self.login(&username, &token) {
                Ok(()) => format!("Set provider to namedotcom with username: {username}"),
                Err(e) => format!("Error in Login: {e}"),
            },
            (Command::List { domain }, Some(p)) => match p.list_set(&domain).await {
                Ok(set) => format_record_set(&set),
                Err(e) => format!("Error in List: {e}"),
            },
            (Command::Put(record), Some(p)) => match p.put(record).await {
                Ok(()) => "Put OK".to_string(),
                Err(e) => format!("Error in Put: {e}"),
            },
            (Command::Delete { domain, id }, Some(p)) => match p.delete(&domain, &id).await {
                Ok(()) => "Delete OK".to_string(),
                Err(e) => format!("Error in Delete: {e}"),
            },
            (_, None) => "No provider set yet".to_string(),
        };
        Outcome::Reply(reply)
    }
}
