use thiserror::Error;

/// Failure to obtain a usable response envelope from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("fetch error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Decode(String),
    /// Non-2xx response whose body was not an envelope either.
    #[error("HTTP {status}")]
    Http { status: u16 },
}
