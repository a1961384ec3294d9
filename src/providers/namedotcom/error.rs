use crate::error::{Error, StatusError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameDotComProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("namedotcom: {0}")]
    Status(StatusError),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub fn map_error(e: NameDotComProviderError) -> Error {
    use NameDotComProviderError::*;
    match e {
        Http(err) => Error::Transport(err.to_string()),
        Status(err) => Error::Status(err),
        Decode(err) => Error::Decode(err.to_string()),
        InvalidInput(msg) => Error::InvalidInput(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_map_error_variants() {
        use NameDotComProviderError::*;

        let status = StatusError {
            method: "GET".into(),
            url: "http://localhost/domains/example.com/records".into(),
            status: 404,
            request_body: None,
            response_body: None,
        };
        let err = map_error(Status(status.clone()));
        assert_matches!(err, Error::Status(s) if s == status);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_matches!(map_error(Decode(json_err)), Error::Decode(_));
        assert_matches!(
            map_error(InvalidInput("bad".to_string())),
            Error::InvalidInput(msg) if msg == "bad"
        );
    }

    #[test]
    fn test_status_display_is_prefixed() {
        let err = NameDotComProviderError::Status(StatusError {
            method: "PUT".into(),
            url: "http://localhost/domains/example.com/records/1".into(),
            status: 500,
            request_body: Some("{}".into()),
            response_body: Some("oops".into()),
        });
        assert_eq!(
            err.to_string(),
            "namedotcom: invalid status code method=PUT \
             url=http://localhost/domains/example.com/records/1 code=500 req={} resp=oops"
        );
    }
}
