//! Catalog kinds and their per-kind schema.
use crate::review::RatingScale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The catalogs served by the API. Every page is the same component
/// parameterized by one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Books,
    Games,
    Movies,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catalog kind: {0}")]
pub struct UnknownKind(pub String);

impl CatalogKind {
    pub const ALL: [Self; 3] = [Self::Books, Self::Games, Self::Movies];

    /// Path segment used by the API (`/api/{slug}`) and the router.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Books => "books",
            Self::Games => "games",
            Self::Movies => "movies",
        }
    }

    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Books => "book",
            Self::Games => "game",
            Self::Movies => "movie",
        }
    }

    /// Element id of the list container in the page markup.
    #[must_use]
    pub const fn list_container_id(self) -> &'static str {
        match self {
            Self::Books => "bookList",
            Self::Games => "gameList",
            Self::Movies => "movieList",
        }
    }

    /// Element id of the detail modal container.
    #[must_use]
    pub const fn modal_id(self) -> &'static str {
        match self {
            Self::Books => "bookModal",
            Self::Games => "gameModal",
            Self::Movies => "movieModal",
        }
    }

    /// Movies accept tenths of a point, books and games whole points only.
    #[must_use]
    pub const fn rating_scale(self) -> RatingScale {
        match self {
            Self::Books | Self::Games => RatingScale::WHOLE,
            Self::Movies => RatingScale::FRACTIONAL,
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CatalogKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == needle || kind.singular() == needle)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
