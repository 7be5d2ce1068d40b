//! What the list container shows.
use crate::api::ApiError;
use crate::item::{ItemId, ItemSummary};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    Loading,
    Failed {
        reason: String,
    },
    Empty,
    Loaded(Vec<ItemSummary>),
}

impl ListState {
    #[must_use]
    pub fn from_result(result: Result<Vec<ItemSummary>, ApiError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Loaded(items),
            Err(err) => Self::Failed {
                reason: err.to_string(),
            },
        }
    }

    /// Cards to render; empty unless loaded.
    #[must_use]
    pub fn items(&self) -> &[ItemSummary] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }

    #[must_use]
    pub fn find(&self, id: &ItemId) -> Option<&ItemSummary> {
        self.items().iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
