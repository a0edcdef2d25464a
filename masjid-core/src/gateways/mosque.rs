use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{Coordinate, MosqueId};

/// Search radius in kilometers if nothing else was requested.
pub const DEFAULT_SEARCH_DISTANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub center: Coordinate,
    /// Radius in kilometers
    pub distance: f64,
}

/// The unprocessed answer of the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("Unable to reach upstream API: {0}")]
    Transport(String),
    #[error("Upstream API responded with status: {0}")]
    Status(u16),
    #[error("Upstream API returned an HTML error page")]
    Markup,
    #[error("Upstream API returned invalid JSON: {0}")]
    Json(String),
    #[error("Upstream API returned unexpected data: {0}")]
    Shape(String),
}

/// Access to the third-party prayer-times service.
///
/// Implementations issue exactly one request per call
/// and must not interpret the response body.
#[async_trait]
pub trait MosqueGateway {
    async fn search(&self, query: &SearchQuery) -> Result<UpstreamResponse, UpstreamError>;
    async fn mosque(&self, id: &MosqueId) -> Result<UpstreamResponse, UpstreamError>;
}
