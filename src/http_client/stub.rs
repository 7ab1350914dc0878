use super::{HttpClient, HttpRequest, HttpResponse};
use crate::data_source::FetchError;
use alloc::sync::Arc;
use async_trait::async_trait;
use http::StatusCode;
use std::sync::Mutex;

#[derive(Debug)]
pub struct StubHttpClient {
    result: Result<HttpResponse, FetchError>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl StubHttpClient {
    pub fn new(result: Result<HttpResponse, FetchError>) -> Self {
        Self {
            result,
            requests: Default::default(),
        }
    }

    pub fn respond(status: StatusCode, body: &str) -> Self {
        Self::new(Ok(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }))
    }

    pub fn requests(&self) -> Arc<Mutex<Vec<HttpRequest>>> {
        self.requests.clone()
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        self.requests.lock().unwrap().push(request.clone());

        self.result.clone()
    }
}
