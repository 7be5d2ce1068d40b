//! The REST API seam and URL construction for it.
use crate::filters::FilterSelection;
use crate::item::{CatalogItem, DeleteReviewResponse, ItemId, ItemSummary, NewReview, Review};
use crate::kind::CatalogKind;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Deserialize;
use thiserror::Error;

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Failure of one API call. All variants are terminal for the triggering
/// user action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Build a status error, preferring the server's `{"error": ...}` message.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("HTTP {status}")
                } else {
                    trimmed.chars().take(200).collect()
                }
            });
        Self::Status { status, message }
    }

    /// Short reason suitable for an alert.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Network(msg) | Self::Decode(msg) | Self::Status { message: msg, .. } => msg,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Async access to the catalog backend.
///
/// Futures are not `Send`: the browser implementation awaits JavaScript
/// promises on the UI thread.
#[async_trait::async_trait(?Send)]
pub trait CatalogApi {
    /// `GET /api/{kind}?<filters>`
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status or a malformed body.
    async fn list_items(
        &self,
        kind: CatalogKind,
        filters: &FilterSelection,
    ) -> Result<Vec<ItemSummary>, ApiError>;

    /// `GET /api/{kind}/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status or a malformed body.
    async fn get_item(&self, kind: CatalogKind, id: &ItemId) -> Result<CatalogItem, ApiError>;

    /// `POST /api/{kind}/{id}/reviews`
    ///
    /// # Errors
    ///
    /// Returns an error when the server rejects the review or cannot be reached.
    async fn submit_review(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        review: &NewReview,
    ) -> Result<Review, ApiError>;

    /// `DELETE /api/{kind}/{id}/reviews/{index}`
    ///
    /// # Errors
    ///
    /// Returns an error when the index is invalid or the server cannot be reached.
    async fn delete_review(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        index: usize,
    ) -> Result<DeleteReviewResponse, ApiError>;
}

/// URL builder for the catalog endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// `base` is an origin or path prefix; empty means same origin.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn list(&self, kind: CatalogKind, filters: &FilterSelection) -> String {
        let query = filters.to_query_string();
        if query.is_empty() {
            format!("{}/api/{}", self.base, kind.slug())
        } else {
            format!("{}/api/{}?{query}", self.base, kind.slug())
        }
    }

    #[must_use]
    pub fn item(&self, kind: CatalogKind, id: &ItemId) -> String {
        format!(
            "{}/api/{}/{}",
            self.base,
            kind.slug(),
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }

    #[must_use]
    pub fn reviews(&self, kind: CatalogKind, id: &ItemId) -> String {
        format!("{}/reviews", self.item(kind, id))
    }

    #[must_use]
    pub fn review(&self, kind: CatalogKind, id: &ItemId, index: usize) -> String {
        format!("{}/reviews/{index}", self.item(kind, id))
    }
}
