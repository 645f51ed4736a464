use serde::Deserialize;

use crate::domain::entities::grid::{FetchMeta, FetchResult};
use crate::domain::entities::user::UserRow;
use crate::usecase::ports::user_api::ApiError;

/// Body of `GET /user`: `{ "data": [...], "total": n }`.
#[derive(Debug, Deserialize)]
struct ServerEnvelope {
    data: Vec<UserRow>,
    total: u64,
}

impl From<ServerEnvelope> for FetchResult {
    fn from(envelope: ServerEnvelope) -> Self {
        FetchResult {
            data: envelope.data,
            meta: FetchMeta {
                total: envelope.total,
            },
        }
    }
}

pub fn parse_fetch_body(body: &[u8]) -> Result<FetchResult, ApiError> {
    serde_json::from_slice::<ServerEnvelope>(body)
        .map(FetchResult::from)
        .map_err(|err| ApiError::MalformedResponse(err.to_string()))
}

/// Keeps error banners readable when a server answers with an HTML page.
pub fn truncate_body(body: &str) -> String {
    const LIMIT: usize = 200;
    let trimmed = body.trim();
    match trimmed.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
