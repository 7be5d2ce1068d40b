//! Catalog Browser Core
//!
//! Platform-agnostic state and workflow for browsing the book, game and movie
//! catalogs: filter selection, list and detail loading, and the review
//! add/delete cycle. No DOM or HTTP dependencies live here; the web crate
//! renders the state and supplies a [`CatalogApi`] implementation.

pub mod api;
pub mod filters;
pub mod item;
pub mod kind;
pub mod list;
pub mod memory;
pub mod modal;
pub mod notice;
pub mod preview;
pub mod review;
pub mod runtime;
pub mod sequence;
pub mod store;

// Re-export commonly used types
pub use api::{ApiError, CatalogApi, Endpoints};
pub use filters::{FilterCatalog, FilterGroup, FilterOption, FilterSelection};
pub use item::{
    CatalogItem, DeleteReviewResponse, ItemId, ItemSummary, NewReview, Review, format_rating,
};
pub use kind::{CatalogKind, UnknownKind};
pub use list::ListState;
pub use memory::MemoryCatalog;
pub use modal::ModalState;
pub use notice::Notice;
pub use preview::{PREVIEW_LIMIT, ReviewPreview};
pub use review::{DraftField, RatingScale, ReviewDraft, ReviewError};
pub use runtime::{CatalogRuntime, Prompter, RecordingPrompter, execute};
pub use sequence::{LoadTicket, RequestSequence, ResponseOrdering};
pub use store::{Action, CatalogStore, Effect};
