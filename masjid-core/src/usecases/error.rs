use thiserror::Error;

use crate::gateways::mosque::UpstreamError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),
    #[error("Invalid {0} parameter: {1}")]
    InvalidParameter(&'static str, String),
    #[error("Failed to fetch mosques: {0}")]
    Search(#[source] UpstreamError),
    #[error("Failed to fetch prayer times: {0}")]
    Details(#[source] UpstreamError),
}

impl Error {
    pub fn upstream(&self) -> Option<&UpstreamError> {
        match self {
            Self::Search(err) | Self::Details(err) => Some(err),
            Self::MissingParameter(_) | Self::InvalidParameter(..) => None,
        }
    }
}
