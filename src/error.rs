use std::fmt;

/// A response whose status code fell outside 200..=299.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    pub method: String,
    pub url: String,
    pub status: u16,
    /// JSON sent with the request, only for create and update.
    pub request_body: Option<String>,
    pub response_body: Option<String>,
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid status code method={} url={} code={}",
            self.method, self.url, self.status
        )?;
        if let Some(req) = &self.request_body {
            write!(f, " req={req}")?;
        }
        if let Some(resp) = &self.response_body {
            write!(f, " resp={resp}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum Error {
    Transport(String),
    Status(StatusError),
    Decode(String),
    InvalidInput(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(msg) => write!(f, "Transport error: {msg}"),
            Error::Status(err) => write!(f, "Status error: {err}"),
            Error::Decode(msg) => write!(f, "Decode error: {msg}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}
