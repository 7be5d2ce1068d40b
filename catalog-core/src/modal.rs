//! Detail modal state machine.
//!
//! `Closed -> Loading -> Open`, `Open -> Loading -> Open` on re-render, and a
//! failed load falls back to whatever was visible before it started.
use crate::item::{CatalogItem, ItemId};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Loading {
        item_id: ItemId,
        /// Content kept on screen while a re-render is in flight.
        showing: Option<CatalogItem>,
    },
    Open(CatalogItem),
}

impl ModalState {
    /// Start loading `item_id`, keeping the current content visible if any.
    pub fn begin_load(&mut self, item_id: ItemId) {
        let showing = match std::mem::take(self) {
            Self::Open(item) => Some(item),
            Self::Loading { showing, .. } => showing,
            Self::Closed => None,
        };
        *self = Self::Loading { item_id, showing };
    }

    /// Commit a fetched record. Ignored unless a load for that id is pending.
    pub fn complete(&mut self, item: CatalogItem) -> bool {
        if self.loading_id() != Some(&item.id) {
            return false;
        }
        *self = Self::Open(item);
        true
    }

    /// Show `item` whatever is pending, unless the modal was closed.
    pub fn replace(&mut self, item: CatalogItem) -> bool {
        if *self == Self::Closed {
            return false;
        }
        *self = Self::Open(item);
        true
    }

    /// Abandon a pending load for `item_id`, restoring the previous state.
    pub fn fail(&mut self, item_id: &ItemId) -> bool {
        if self.loading_id() != Some(item_id) {
            return false;
        }
        *self = match std::mem::take(self) {
            Self::Loading {
                showing: Some(item),
                ..
            } => Self::Open(item),
            _ => Self::Closed,
        };
        true
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn loading_id(&self) -> Option<&ItemId> {
        match self {
            Self::Loading { item_id, .. } => Some(item_id),
            _ => None,
        }
    }

    /// Record currently rendered in the modal body.
    #[must_use]
    pub fn item(&self) -> Option<&CatalogItem> {
        match self {
            Self::Open(item)
            | Self::Loading {
                showing: Some(item),
                ..
            } => Some(item),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.item().is_some()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}
