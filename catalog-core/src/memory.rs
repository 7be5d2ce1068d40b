//! In-memory catalog backend with the same observable behavior as the REST API.
//!
//! Used by tests and the QA tester to drive the store without a server.
use crate::api::{ApiError, CatalogApi, Endpoints};
use crate::filters::FilterSelection;
use crate::item::{CatalogItem, DeleteReviewResponse, ItemId, ItemSummary, NewReview, Review};
use crate::kind::CatalogKind;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

const SAMPLE_DATA: &str = include_str!("../data/sample.json");

#[derive(Debug, Default, Deserialize)]
struct SampleData {
    #[serde(default)]
    books: Vec<CatalogItem>,
    #[serde(default)]
    games: Vec<CatalogItem>,
    #[serde(default)]
    movies: Vec<CatalogItem>,
}

type Clock = Box<dyn Fn() -> String>;

pub struct MemoryCatalog {
    items: RefCell<BTreeMap<CatalogKind, Vec<CatalogItem>>>,
    failures: RefCell<VecDeque<ApiError>>,
    requests: RefCell<Vec<String>>,
    endpoints: Endpoints,
    today: Clock,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: RefCell::new(BTreeMap::new()),
            failures: RefCell::new(VecDeque::new()),
            requests: RefCell::new(Vec::new()),
            endpoints: Endpoints::new(""),
            today: Box::new(|| chrono::Local::now().format("%d.%m.%Y").to_string()),
        }
    }

    /// Catalog preloaded with the bundled sample records.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled sample data is malformed.
    pub fn sample() -> Result<Self, serde_json::Error> {
        let data: SampleData = serde_json::from_str(SAMPLE_DATA)?;
        Ok(Self::new()
            .with_items(CatalogKind::Books, data.books)
            .with_items(CatalogKind::Games, data.games)
            .with_items(CatalogKind::Movies, data.movies))
    }

    #[must_use]
    pub fn with_items(self, kind: CatalogKind, items: Vec<CatalogItem>) -> Self {
        self.items.borrow_mut().insert(kind, items);
        self
    }

    /// Replace the date stamp given to new reviews.
    #[must_use]
    pub fn with_clock(mut self, today: impl Fn() -> String + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    /// Make the next call fail with `error` instead of touching the data.
    pub fn fail_next(&self, error: ApiError) {
        self.failures.borrow_mut().push_back(error);
    }

    /// Request lines served so far, e.g. `GET /api/movies?genre=drama`.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    #[must_use]
    pub fn item(&self, kind: CatalogKind, id: &ItemId) -> Option<CatalogItem> {
        self.items
            .borrow()
            .get(&kind)
            .and_then(|items| items.iter().find(|item| &item.id == id).cloned())
    }

    fn begin(&self, method: &str, url: String) -> Result<(), ApiError> {
        self.requests.borrow_mut().push(format!("{method} {url}"));
        self.failures.borrow_mut().pop_front().map_or(Ok(()), Err)
    }

    fn not_found(kind: CatalogKind) -> ApiError {
        ApiError::Status {
            status: 404,
            message: format!("{} not found", kind.singular()),
        }
    }

    fn with_item_mut<R>(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        f: impl FnOnce(&mut CatalogItem) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let mut items = self.items.borrow_mut();
        let item = items
            .get_mut(&kind)
            .and_then(|items| items.iter_mut().find(|item| &item.id == id))
            .ok_or_else(|| Self::not_found(kind))?;
        f(item)
    }
}

fn bad_filter(key: &str, value: &str) -> ApiError {
    ApiError::Status {
        status: 400,
        message: format!("invalid value '{value}' for filter '{key}'"),
    }
}

/// Apply the backend's combined filters: `genre`, `min_reviews`,
/// `min_rating`, `max_rating`. Unknown keys are ignored.
///
/// # Errors
///
/// Returns a 400 status error when a numeric filter does not parse.
pub fn apply_filters(
    items: &[CatalogItem],
    filters: &FilterSelection,
) -> Result<Vec<CatalogItem>, ApiError> {
    let mut selected: Vec<CatalogItem> = items.to_vec();
    for (key, value) in filters.query_pairs() {
        match key {
            "genre" => {
                let genre = value.to_lowercase();
                selected.retain(|item| item.genres.iter().any(|g| g.to_lowercase() == genre));
            }
            "min_reviews" => {
                let min: usize = value.trim().parse().map_err(|_| bad_filter(key, value))?;
                selected.retain(|item| item.reviews.len() >= min);
            }
            "min_rating" => {
                let min: f64 = value.trim().parse().map_err(|_| bad_filter(key, value))?;
                selected.retain(|item| item.rating >= min);
            }
            "max_rating" => {
                let max: f64 = value.trim().parse().map_err(|_| bad_filter(key, value))?;
                selected.retain(|item| item.rating <= max);
            }
            _ => {}
        }
    }
    Ok(selected)
}

#[async_trait::async_trait(?Send)]
impl CatalogApi for MemoryCatalog {
    async fn list_items(
        &self,
        kind: CatalogKind,
        filters: &FilterSelection,
    ) -> Result<Vec<ItemSummary>, ApiError> {
        self.begin("GET", self.endpoints.list(kind, filters))?;
        let items = self.items.borrow();
        let all = items.get(&kind).map_or(&[][..], Vec::as_slice);
        Ok(apply_filters(all, filters)?
            .iter()
            .map(CatalogItem::summary)
            .collect())
    }

    async fn get_item(&self, kind: CatalogKind, id: &ItemId) -> Result<CatalogItem, ApiError> {
        self.begin("GET", self.endpoints.item(kind, id))?;
        self.item(kind, id).ok_or_else(|| Self::not_found(kind))
    }

    async fn submit_review(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        review: &NewReview,
    ) -> Result<Review, ApiError> {
        self.begin("POST", self.endpoints.reviews(kind, id))?;
        self.with_item_mut(kind, id, |item| {
            if !(0.0..=10.0).contains(&review.rating) {
                return Err(ApiError::Status {
                    status: 400,
                    message: "Rating must be a number between 0 and 10".to_string(),
                });
            }
            let stored = Review {
                author: review.author.clone(),
                date: (self.today)(),
                rating: review.rating,
                text: review.text.clone(),
            };
            item.reviews.push(stored.clone());
            item.rating = item.average_rating();
            Ok(stored.clone())
        })
    }

    async fn delete_review(
        &self,
        kind: CatalogKind,
        id: &ItemId,
        index: usize,
    ) -> Result<DeleteReviewResponse, ApiError> {
        self.begin("DELETE", self.endpoints.review(kind, id, index))?;
        self.with_item_mut(kind, id, |item| {
            if index >= item.reviews.len() {
                return Err(ApiError::Status {
                    status: 404,
                    message: "Review not found".to_string(),
                });
            }
            let removed = item.reviews.remove(index);
            item.rating = item.average_rating();
            Ok(DeleteReviewResponse {
                message: "Review deleted successfully".to_string(),
                review: Some(removed),
            })
        })
    }
}
