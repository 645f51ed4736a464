use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::grid::{FetchResult, PageRequest};
use crate::domain::entities::user::UserRow;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ApiError {
    /// Only transport failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> Result<FetchResult, ApiError>;
    async fn update_row(&self, row: &UserRow) -> Result<(), ApiError>;
}
