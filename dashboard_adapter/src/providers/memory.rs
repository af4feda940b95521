//! In-memory provider serving canned responses.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::providers::{AnalyticsProvider, Endpoint, FetchCause};

#[derive(Debug, Clone)]
struct CannedResponse {
    status: u16,
    body: String,
}

/// Serves fixed bodies per endpoint. Endpoints without a canned response
/// answer 404, like a backend that does not know the route.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    responses: HashMap<Endpoint, CannedResponse>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a 200 response for `endpoint`.
    pub fn with_body(self, endpoint: Endpoint, body: impl Into<String>) -> Self {
        self.with_status(endpoint, 200, body)
    }

    /// Registers a response with an explicit status code.
    pub fn with_status(mut self, endpoint: Endpoint, status: u16, body: impl Into<String>) -> Self {
        self.responses.insert(
            endpoint,
            CannedResponse {
                status,
                body: body.into(),
            },
        );
        self
    }
}

#[async_trait]
impl AnalyticsProvider for MemoryProvider {
    async fn fetch_body(&self, endpoint: Endpoint) -> Result<String, FetchCause> {
        match self.responses.get(&endpoint) {
            Some(canned) if (200..300).contains(&canned.status) => Ok(canned.body.clone()),
            Some(canned) => Err(FetchCause::Status {
                status: canned.status,
                body: canned.body.clone(),
            }),
            None => Err(FetchCause::Status {
                status: 404,
                body: format!("no route for {}", endpoint.path()),
            }),
        }
    }
}
