use std::env;
use std::time::Duration;

use crate::providers::namedotcom::{DEFAULT_API_URL, NameDotComConfig};

#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub username: Option<String>,
    pub token: Option<String>,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            api_url: var("NAMEDOTCOM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            username: var("NAMEDOTCOM_USERNAME").filter(|v| !v.is_empty()),
            token: var("NAMEDOTCOM_TOKEN").filter(|v| !v.is_empty()),
            http_timeout: Duration::from_secs(
                var("HTTP_TIMEOUT")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
        }
    }

    /// Provider settings for the given credentials, using this endpoint and
    /// timeout.
    pub fn namedotcom(&self, username: &str, token: &str) -> NameDotComConfig {
        NameDotComConfig {
            username: username.to_string(),
            token: token.to_string(),
            api_url: self.api_url.clone(),
            timeout: self.http_timeout,
        }
    }

    /// Credentials from the environment, when both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.token) {
            (Some(user), Some(token)) => Some((user.as_str(), token.as_str())),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            username: None,
            token: None,
            http_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(|_| None);
        assert_eq!(config.api_url, "https://api.name.com/v4");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let env = vars(&[
            ("NAMEDOTCOM_API_URL", "https://api.dev.name.com/v4"),
            ("NAMEDOTCOM_USERNAME", "user"),
            ("NAMEDOTCOM_TOKEN", "token"),
            ("HTTP_TIMEOUT", "5"),
        ]);
        let config = Config::from_vars(|k| env.get(k).cloned());
        assert_eq!(config.api_url, "https://api.dev.name.com/v4");
        assert_eq!(config.credentials(), Some(("user", "token")));
        assert_eq!(config.http_timeout, Duration::from_secs(5));

        let nc = config.namedotcom("other", "secret");
        assert_eq!(nc.username, "other");
        assert_eq!(nc.api_url, "https://api.dev.name.com/v4");
        assert_eq!(nc.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout_and_partial_credentials() {
        let env = vars(&[("HTTP_TIMEOUT", "soon"), ("NAMEDOTCOM_USERNAME", "user")]);
        let config = Config::from_vars(|k| env.get(k).cloned());
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.credentials().is_none());
    }
}
