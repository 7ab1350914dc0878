use super::{DataSource, FetchError};
use crate::record::Record;
use async_trait::async_trait;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct StubDataSource {
    result: Result<Vec<Record>, FetchError>,
    count: AtomicUsize,
}

impl StubDataSource {
    pub fn new(result: Result<Vec<Record>, FetchError>) -> Self {
        Self {
            result,
            count: Default::default(),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for StubDataSource {
    async fn fetch(&self) -> Result<Vec<Record>, FetchError> {
        self.count.fetch_add(1, Ordering::SeqCst);

        self.result.clone()
    }
}
