use alloc::sync::Arc;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use http::StatusCode;

/// A record fetch error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FetchError {
    /// An HTTP transport error.
    Http(Arc<str>),
    /// An undecodable response body.
    Json(Arc<str>),
    /// An unsuccessful status code.
    Status(StatusCode),
}

impl Error for FetchError {}

impl Display for FetchError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(error) => write!(formatter, "{error}"),
            Self::Json(error) => write!(formatter, "invalid records: {error}"),
            Self::Status(status) => write!(formatter, "unexpected status: {status}"),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string().into())
    }
}
