use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use url::Url;

use crate::domain::entities::grid::{FetchResult, PageRequest};
use crate::domain::entities::user::UserRow;
use crate::infra::http::envelope::{parse_fetch_body, truncate_body};
use crate::infra::http::query::{build_fetch_url, build_update_url};
use crate::usecase::ports::user_api::{ApiError, UserApi};

const JSON: &str = "application/json";

/// `UserApi` over HTTP against a `/user` style endpoint.
pub struct HttpUserApi {
    client: Client,
    endpoint: Url,
}

impl HttpUserApi {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self { client, endpoint })
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Server {
        status: status.as_u16(),
        body: truncate_body(&body),
    })
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn fetch_page(&self, request: &PageRequest) -> Result<FetchResult, ApiError> {
        let url = build_fetch_url(&self.endpoint, request.page, request.size, &request.options);
        tracing::debug!(%url, "fetching page");

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, JSON)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = ensure_success(response).await?;
        let body = response
            .bytes()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let result = parse_fetch_body(&body)?;
        tracing::debug!(
            rows = result.data.len(),
            total = result.meta.total,
            "page fetched"
        );
        Ok(result)
    }

    async fn update_row(&self, row: &UserRow) -> Result<(), ApiError> {
        let url = build_update_url(&self.endpoint, &row.id);
        tracing::debug!(%url, "updating row");

        // Only the editable fields go on the wire; the id lives in the path.
        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, JSON)
            .json(&row.fields)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        ensure_success(response).await?;
        Ok(())
    }
}
