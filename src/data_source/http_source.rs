use super::{DataSource, FetchError};
use crate::{
    http_client::{HttpClient, HttpRequest},
    record::Record,
};
use async_trait::async_trait;
use http::HeaderMap;
use log::{debug, trace};
use url::Url;

/// A data source fetching records as a JSON array over HTTP.
pub struct HttpDataSource {
    client: Box<dyn HttpClient>,
    request: HttpRequest,
}

impl HttpDataSource {
    /// Creates a data source.
    pub fn new(client: impl HttpClient + 'static, url: Url, headers: HeaderMap) -> Self {
        Self {
            client: Box::new(client),
            request: HttpRequest { url, headers },
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> Result<Vec<Record>, FetchError> {
        debug!("fetching records from {}", self.request.url);

        let response = self.client.get(&self.request).await?;

        if !response.status.is_success() {
            return Err(FetchError::Status(response.status));
        }

        let records = serde_json::from_slice::<Vec<Record>>(&response.body)?;

        trace!("fetched {} records from {}", records.len(), self.request.url);

        Ok(records)
    }
}
