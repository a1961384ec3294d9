use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use std::time::Duration;
use tracing::debug;

use crate::core::record::DNSRecord;
use crate::error::StatusError;
use crate::providers::namedotcom::error::NameDotComProviderError;
use crate::providers::namedotcom::types::*;

pub const DEFAULT_API_URL: &str = "https://api.name.com/v4";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct NameDotComConfig {
    pub username: String,
    pub token: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl NameDotComConfig {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// name.com v4 API client. Holds only credentials, endpoint and the HTTP
/// client, so one instance can be shared between tasks.
pub struct NameDotComProvider {
    config: NameDotComConfig,
    base_url: Url,
    client: Client,
}

impl NameDotComProvider {
    pub fn new(config: NameDotComConfig) -> Result<Self, NameDotComProviderError> {
        let base_url = Url::parse(&config.api_url).map_err(|e| {
            NameDotComProviderError::InvalidInput(format!("api url {:?}: {e}", config.api_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(NameDotComProviderError::InvalidInput(format!(
                "api url {:?} cannot hold a path",
                config.api_url
            )));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    pub fn username(&self) -> &str {
        &self.config.username
    }

    /// Appends `segments` to the API url, percent-encoding each one so a
    /// domain or id can never leave its path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) fn records_url(&self, domain: &str) -> Url {
        self.endpoint(&["domains", domain, "records"])
    }

    pub(crate) fn record_url(&self, domain: &str, id: &str) -> Url {
        self.endpoint(&["domains", domain, "records", id])
    }

    /// Sends one authenticated request and returns the response body.
    ///
    /// Any status outside 200..=299 is an error. Request and response bodies
    /// are attached to the error only when a body was sent.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<String, NameDotComProviderError> {
        debug!(%method, %url, "namedotcom request");
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .basic_auth(&self.config.username, Some(&self.config.token));
        if let Some(body) = &body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let response_body = match body {
                Some(_) => Some(response.text().await.unwrap_or_default()),
                None => None,
            };
            return Err(NameDotComProviderError::Status(StatusError {
                method: method.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
                request_body: body,
                response_body,
            }));
        }

        Ok(response.text().await?)
    }

    async fn write_record(
        &self,
        method: Method,
        url: Url,
        record: &DNSRecord,
    ) -> Result<NameDotComRecord, NameDotComProviderError> {
        let payload = to_namedotcom_record(record)?;
        let body = serde_json::to_string(&payload)?;
        let text = self.execute(method, url, Some(body)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn list_records(
        &self,
        domain: &str,
    ) -> Result<Vec<NameDotComRecord>, NameDotComProviderError> {
        let text = self
            .execute(Method::GET, self.records_url(domain), None)
            .await?;
        let response: ListRecordsResponse = serde_json::from_str(&text)?;
        Ok(response.records)
    }

    pub async fn create_record(
        &self,
        record: &DNSRecord,
    ) -> Result<NameDotComRecord, NameDotComProviderError> {
        let url = self.records_url(&record.domain);
        self.write_record(Method::POST, url, record).await
    }

    pub async fn update_record(
        &self,
        record: &DNSRecord,
    ) -> Result<NameDotComRecord, NameDotComProviderError> {
        if !record.has_id() {
            return Err(NameDotComProviderError::InvalidInput(
                "update requires a record id".to_string(),
            ));
        }
        let url = self.record_url(&record.domain, &record.id);
        self.write_record(Method::PUT, url, record).await
    }

    pub async fn delete_record(&self, domain: &str, id: &str) -> Result<(), NameDotComProviderError> {
        parse_id(id)?;
        self.execute(Method::DELETE, self.record_url(domain, id), None)
            .await
            .map(|_| ())
    }
}
