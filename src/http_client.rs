mod reqwest;
#[cfg(test)]
mod stub;

pub use self::reqwest::ReqwestHttpClient;
#[cfg(test)]
pub use self::stub::StubHttpClient;
use crate::data_source::FetchError;
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use url::Url;

/// An HTTP client fetching record payloads.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends a GET request and reads its whole response body.
    ///
    /// A response with any status is returned as it is. Only a transport
    /// failure is an error.
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// A GET request to a record endpoint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpRequest {
    /// An endpoint URL.
    pub url: Url,
    /// Extra headers.
    pub headers: HeaderMap,
}

/// A response with its body read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpResponse {
    /// A status code.
    pub status: StatusCode,
    /// A body.
    pub body: Vec<u8>,
}
