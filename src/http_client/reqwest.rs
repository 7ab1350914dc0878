use super::{HttpClient, HttpRequest, HttpResponse};
use crate::data_source::FetchError;
use async_trait::async_trait;
use http::{HeaderValue, header::ACCEPT};
use log::trace;
use reqwest::{Client, ClientBuilder};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// An HTTP client based on [`reqwest`].
#[derive(Debug)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates an HTTP client.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            client: ClientBuilder::new().user_agent(USER_AGENT).build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        trace!("requesting {}", request.url);

        let mut headers = request.headers.clone();
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }

        let response = self
            .client
            .get(request.url.clone())
            .headers(headers)
            .send()
            .await?;
        let status = response.status();

        trace!("{} responded with {status}", request.url);

        Ok(HttpResponse {
            status,
            body: response.bytes().await?.to_vec(),
        })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string().into())
    }
}
