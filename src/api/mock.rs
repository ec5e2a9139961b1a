use std::{
    collections::HashMap,
    sync::Mutex,
};

use async_trait::async_trait;

use crate::core::{
    http::Transport,
    ApiError,
};

enum Canned {
    Body(String),
    Status(u16),
}

/// In-memory transport serving canned bodies per path. Unknown paths answer 404.
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<String, Canned>,
    requests: Mutex<Vec<String>>,
    yields: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, path: &str, body: &str) -> Self {
        self.responses.insert(path.to_string(), Canned::Body(body.to_string()));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.responses.insert(path.to_string(), Canned::Status(status));
        self
    }

    /// Suspends every request `yields` times before answering so concurrent
    /// callers get a chance to interleave.
    pub fn with_yields(mut self, yields: usize) -> Self {
        self.yields = yields;
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, path: &str) -> usize {
        self.requests.lock().unwrap().iter().filter(|p| p.as_str() == path).count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<String, ApiError> {
        self.requests.lock().unwrap().push(path.to_string());

        for _ in 0..self.yields {
            tokio::task::yield_now().await;
        }

        match self.responses.get(path) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => {
                Err(ApiError::Status { status: *status, url: path.to_string(), body: String::new() })
            }
            None => Err(ApiError::Status { status: 404, url: path.to_string(), body: String::new() }),
        }
    }
}
