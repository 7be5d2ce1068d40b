//! Browser `fetch` implementation of [`CatalogApi`].
use crate::dom::{fetch_response, js_error_message, response_text};
use catalog_core::{
    ApiError, CatalogApi, CatalogItem, CatalogKind, DeleteReviewResponse, Endpoints,
    FilterSelection, ItemId, ItemSummary, NewReview, Review,
};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchClient {
    endpoints: Endpoints,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new(Endpoints::new(crate::paths::api_base()))
    }
}

impl FetchClient {
    #[must_use]
    pub const fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    #[allow(clippy::future_not_send)]
    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        url: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        tracing::debug!("{method} {url}");
        let response = fetch_response(method, url, body.as_deref())
            .await
            .map_err(|err| ApiError::Network(js_error_message(&err)))?;
        let text = response_text(&response)
            .await
            .map_err(|err| ApiError::Network(js_error_message(&err)))?;
        if !response.ok() {
            return Err(ApiError::from_status(response.status(), &text));
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait::async_trait(?Send)]
impl CatalogApi for FetchClient {
    async fn list_items(
        &self,
        kind: CatalogKind,
        filters: &FilterSelection,
    ) -> Result<Vec<ItemSummary>, ApiError> {
        self.request("GET", &self.endpoints.list(kind, filters), None)
            .await
    }

    async fn get_item(&self, kind: CatalogKind, id: &ItemId) -> Result<CatalogItem, ApiError> {
        self.request("GET", &self.endpoints.item(kind, id), None)
            .await
    }

    async fn submit_review(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        review: &NewReview,
    ) -> Result<Review, ApiError> {
        let body = serde_json::to_string(review)?;
        self.request("POST", &self.endpoints.reviews(kind, id), Some(body))
            .await
    }

    async fn delete_review(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        index: usize,
    ) -> Result<DeleteReviewResponse, ApiError> {
        self.request("DELETE", &self.endpoints.review(kind, id, index), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_same_origin() {
        let client = FetchClient::default();
        assert_eq!(
            client.endpoints().item(CatalogKind::Movies, &ItemId::from(7)),
            "/api/movies/7"
        );
    }
}
