use async_trait::async_trait;
use catalog_core::{
    ApiError, CatalogApi, CatalogItem, CatalogKind, DeleteReviewResponse, Endpoints,
    FilterSelection, ItemId, ItemSummary, MemoryCatalog, NewReview, Review,
};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// `CatalogApi` over HTTP with `reqwest`.
pub struct HttpCatalog {
    client: Client,
    endpoints: Endpoints,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoints: Endpoints::new(base_url),
        })
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Option<&NewReview>,
    ) -> Result<T, ApiError> {
        log::debug!("{method} {url}");
        let mut builder = self.client.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &text));
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalog {
    async fn list_items(
        &self,
        kind: CatalogKind,
        filters: &FilterSelection,
    ) -> Result<Vec<ItemSummary>, ApiError> {
        self.request(Method::GET, self.endpoints.list(kind, filters), None)
            .await
    }

    async fn get_item(&self, kind: CatalogKind, id: &ItemId) -> Result<CatalogItem, ApiError> {
        self.request(Method::GET, self.endpoints.item(kind, id), None)
            .await
    }

    async fn submit_review(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        review: &NewReview,
    ) -> Result<Review, ApiError> {
        self.request(Method::POST, self.endpoints.reviews(kind, id), Some(review))
            .await
    }

    async fn delete_review(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        index: usize,
    ) -> Result<DeleteReviewResponse, ApiError> {
        self.request(Method::DELETE, self.endpoints.review(kind, id, index), None)
            .await
    }
}

/// Where scenarios send their requests.
pub enum Backend {
    Memory(MemoryCatalog),
    Http(HttpCatalog),
}

impl Backend {
    /// The in-memory catalog, when running offline. Used to inject failures.
    pub const fn memory(&self) -> Option<&MemoryCatalog> {
        match self {
            Self::Memory(catalog) => Some(catalog),
            Self::Http(_) => None,
        }
    }

    fn api(&self) -> &dyn CatalogApi {
        match self {
            Self::Memory(catalog) => catalog,
            Self::Http(http) => http,
        }
    }
}

#[async_trait(?Send)]
impl CatalogApi for Backend {
    async fn list_items(
        &self,
        kind: CatalogKind,
        filters: &FilterSelection,
    ) -> Result<Vec<ItemSummary>, ApiError> {
        self.api().list_items(kind, filters).await
    }

    async fn get_item(&self, kind: CatalogKind, id: &ItemId) -> Result<CatalogItem, ApiError> {
        self.api().get_item(kind, id).await
    }

    async fn submit_review(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        review: &NewReview,
    ) -> Result<Review, ApiError> {
        self.api().submit_review(kind, id, review).await
    }

    async fn delete_review(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        index: usize,
    ) -> Result<DeleteReviewResponse, ApiError> {
        self.api().delete_review(kind, id, index).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_memory_backend_exposes_failure_injection() {
        let memory = Backend::Memory(MemoryCatalog::new());
        assert!(memory.memory().is_some());
        let http = Backend::Http(
            HttpCatalog::new("http://localhost:5000", Duration::from_secs(1)).expect("client"),
        );
        assert!(http.memory().is_none());
    }
}
