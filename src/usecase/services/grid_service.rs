use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::entities::grid::{FetchResult, PageRequest};
use crate::domain::entities::user::UserRow;
use crate::usecase::ports::user_api::{ApiError, UserApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Hands out increasing tickets; only the newest one is current.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn issue(&self) -> FetchTicket {
        FetchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

pub struct GridService {
    api: Arc<dyn UserApi>,
    sequencer: RequestSequencer,
    fetch_retries: u32,
}

impl GridService {
    pub fn new(api: Arc<dyn UserApi>, fetch_retries: u32) -> Self {
        Self {
            api,
            sequencer: RequestSequencer::default(),
            fetch_retries,
        }
    }

    /// Fetch with bounded retry on transport failures.
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<FetchResult, ApiError> {
        let mut attempt = 0;
        loop {
            match self.api.fetch_page(request).await {
                Err(err) if err.is_retryable() && attempt < self.fetch_retries => {
                    attempt += 1;
                    tracing::warn!(%err, attempt, "fetch failed, retrying");
                }
                other => return other,
            }
        }
    }

    /// Last request wins: `None` means a newer fetch was issued while this one
    /// was in flight and its outcome must be dropped.
    pub async fn fetch_latest(
        &self,
        request: &PageRequest,
    ) -> Option<Result<FetchResult, ApiError>> {
        let ticket = self.sequencer.issue();
        let result = self.fetch_page(request).await;
        if self.sequencer.is_current(ticket) {
            Some(result)
        } else {
            tracing::debug!(page = request.page, "dropping stale page response");
            None
        }
    }

    /// Not retried: a lost response could otherwise apply the same edit twice.
    pub async fn update_row(&self, row: &UserRow) -> Result<(), ApiError> {
        self.api.update_row(row).await.inspect_err(|err| {
            tracing::warn!(id = %row.id, %err, "row update failed");
        })
    }
}
