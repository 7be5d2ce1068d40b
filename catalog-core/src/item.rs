//! Catalog records as exchanged with the API.
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Opaque item identifier. The API sends integers, but any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.parse::<u64>() {
            Ok(n) => serializer.serialize_u64(n),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = ItemId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or string identifier")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ItemId, E> {
                Ok(ItemId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ItemId, E> {
                Ok(ItemId(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ItemId, E> {
                Ok(ItemId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A user-submitted review. Its identity within the parent item is its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// Display string assigned by the server (`dd.mm.yyyy`).
    #[serde(default)]
    pub date: String,
    pub rating: f64,
    pub text: String,
}

/// Body of `POST /api/{kind}/{id}/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub author: String,
    pub text: String,
    pub rating: f64,
}

/// Body returned by `DELETE /api/{kind}/{id}/reviews/{index}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteReviewResponse {
    pub message: String,
    #[serde(default)]
    pub review: Option<Review>,
}

/// One entry of the list response. Rating, description and reviews are only
/// present when the server includes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: ItemId,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl ItemSummary {
    /// Creator line to display; blank creators count as absent.
    #[must_use]
    pub fn creator(&self) -> Option<&str> {
        non_blank(self.creator.as_deref())
    }
}

/// Full record returned by `GET /api/{kind}/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl CatalogItem {
    #[must_use]
    pub fn creator(&self) -> Option<&str> {
        non_blank(self.creator.as_deref())
    }

    #[must_use]
    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            image: self.image.clone(),
            creator: self.creator.clone(),
            genres: self.genres.clone(),
            rating: Some(self.rating),
            description: Some(self.description.clone()),
            reviews: self.reviews.clone(),
        }
    }

    /// Mean review rating rounded half to even at one decimal, or `0.0` without
    /// reviews.
    #[must_use]
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.reviews.len() as f64;
        let total: f64 = self.reviews.iter().map(|r| r.rating).sum();
        (total / count * 10.0).round_ties_even() / 10.0
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Format a 0–10 rating without a trailing `.0` for whole values.
#[must_use]
pub fn format_rating(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
