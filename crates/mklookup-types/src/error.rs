use std::fmt;

/// Result type for lookup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a lookup or generate action.
///
/// Variants carry plain messages so errors can travel back to the UI thread
/// inside completion events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input rejected before any request was made
    Validation(String),

    /// Server answered with an explicit `error` field
    Api(String),

    /// Request could not be sent or the connection failed
    Network(String),

    /// Body was not JSON or did not match the expected shape
    Parse(String),
}

impl Error {
    /// Message shown to the operator after the `Error: ` prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::Validation(msg) | Error::Api(msg) | Error::Network(msg) | Error::Parse(msg) => {
                msg
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "{}", msg),
            Error::Api(msg) => write!(f, "{}", msg),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Parse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
