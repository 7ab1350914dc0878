mod error;
mod http_source;
#[cfg(test)]
mod stub;

#[cfg(test)]
pub use self::stub::StubDataSource;
pub use self::{error::FetchError, http_source::HttpDataSource};
use crate::record::Record;
use alloc::sync::Arc;
use async_trait::async_trait;

/// A data source of records.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches records in the order the source returns them.
    async fn fetch(&self) -> Result<Vec<Record>, FetchError>;
}

#[async_trait]
impl<T: DataSource + ?Sized> DataSource for Arc<T> {
    async fn fetch(&self) -> Result<Vec<Record>, FetchError> {
        self.as_ref().fetch().await
    }
}
