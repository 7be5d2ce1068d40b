//! Page state and its transitions.
//!
//! The store never performs I/O. Every user interaction or network completion
//! is an [`Action`]; dispatching one mutates state and returns the [`Effect`]s a
//! runtime must execute. Completed effects come back as further actions.
use crate::api::ApiError;
use crate::filters::FilterSelection;
use crate::item::{CatalogItem, DeleteReviewResponse, ItemId, ItemSummary, NewReview, Review};
use crate::kind::CatalogKind;
use crate::list::ListState;
use crate::modal::ModalState;
use crate::notice::Notice;
use crate::review::{DraftField, RatingScale, ReviewDraft};
use crate::sequence::{LoadTicket, RequestSequence, ResponseOrdering};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Re-run the list query with the current filters.
    Refresh,
    ToggleFilter {
        category: String,
        value: String,
    },
    ResetFilters,
    ListLoaded {
        ticket: LoadTicket,
        result: Result<Vec<ItemSummary>, ApiError>,
    },
    OpenItem(ItemId),
    ItemLoaded {
        ticket: LoadTicket,
        item_id: ItemId,
        result: Result<CatalogItem, ApiError>,
    },
    CloseModal,
    EditDraft {
        field: DraftField,
        value: String,
    },
    SubmitReview {
        item_id: ItemId,
    },
    ReviewSubmitted {
        item_id: ItemId,
        result: Result<Review, ApiError>,
    },
    /// Delete control activated; confirmation is still pending.
    RequestDelete {
        item_id: ItemId,
        index: usize,
    },
    DeleteConfirmed {
        item_id: ItemId,
        index: usize,
    },
    ReviewDeleted {
        item_id: ItemId,
        index: usize,
        result: Result<DeleteReviewResponse, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchList {
        ticket: LoadTicket,
        filters: FilterSelection,
    },
    FetchItem {
        ticket: LoadTicket,
        item_id: ItemId,
    },
    PostReview {
        item_id: ItemId,
        review: NewReview,
    },
    /// Ask the user; dispatch [`Action::DeleteConfirmed`] only on approval.
    ConfirmDelete {
        item_id: ItemId,
        index: usize,
    },
    DeleteReview {
        item_id: ItemId,
        index: usize,
    },
    Alert(Notice),
}

/// Everything one catalog page knows.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    kind: CatalogKind,
    ordering: ResponseOrdering,
    filters: FilterSelection,
    list: ListState,
    modal: ModalState,
    draft: ReviewDraft,
    list_seq: RequestSequence,
    modal_seq: RequestSequence,
    revision: u64,
}

impl CatalogStore {
    #[must_use]
    pub fn new(kind: CatalogKind) -> Self {
        Self::with_ordering(kind, ResponseOrdering::default())
    }

    #[must_use]
    pub fn with_ordering(kind: CatalogKind, ordering: ResponseOrdering) -> Self {
        Self {
            kind,
            ordering,
            filters: FilterSelection::new(),
            list: ListState::default(),
            modal: ModalState::default(),
            draft: ReviewDraft::default(),
            list_seq: RequestSequence::new(),
            modal_seq: RequestSequence::new(),
            revision: 0,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CatalogKind {
        self.kind
    }

    #[must_use]
    pub const fn rating_scale(&self) -> RatingScale {
        self.kind.rating_scale()
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    #[must_use]
    pub const fn list(&self) -> &ListState {
        &self.list
    }

    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    #[must_use]
    pub const fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// Bumped on every dispatch; views re-render when it changes.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        self.revision += 1;
        match action {
            Action::Refresh => vec![self.start_list_load()],
            Action::ToggleFilter { category, value } => {
                self.filters.toggle(&category, &value);
                vec![self.start_list_load()]
            }
            Action::ResetFilters => {
                self.filters.reset();
                vec![self.start_list_load()]
            }
            Action::ListLoaded { ticket, result } => {
                self.finish_list_load(ticket, result);
                Vec::new()
            }
            Action::OpenItem(item_id) => {
                let same_item = self.modal.item().map(|item| &item.id) == Some(&item_id)
                    || self.modal.loading_id() == Some(&item_id);
                if !same_item {
                    self.draft.clear();
                }
                vec![self.start_item_load(item_id)]
            }
            Action::ItemLoaded {
                ticket,
                item_id,
                result,
            } => self.finish_item_load(ticket, &item_id, result),
            Action::CloseModal => {
                self.modal.close();
                Vec::new()
            }
            Action::EditDraft { field, value } => {
                self.draft.set(field, value);
                Vec::new()
            }
            Action::SubmitReview { item_id } => match self.draft.validate(&self.rating_scale()) {
                Ok(review) => vec![Effect::PostReview { item_id, review }],
                Err(err) => {
                    log::warn!("review for {}/{item_id} not sent: {err}", self.kind);
                    vec![Effect::Alert(Notice::InvalidReview(err))]
                }
            },
            Action::ReviewSubmitted { item_id, result } => match result {
                Ok(review) => {
                    log::debug!(
                        "review by {} added to {}/{item_id}",
                        review.author,
                        self.kind
                    );
                    self.draft.clear();
                    vec![self.start_item_load(item_id)]
                }
                Err(err) => {
                    log::error!("failed to add review to {}/{item_id}: {err}", self.kind);
                    vec![Effect::Alert(Notice::ReviewNotAdded {
                        reason: err.reason().to_string(),
                    })]
                }
            },
            Action::RequestDelete { item_id, index } => {
                vec![Effect::ConfirmDelete { item_id, index }]
            }
            Action::DeleteConfirmed { item_id, index } => {
                vec![Effect::DeleteReview { item_id, index }]
            }
            Action::ReviewDeleted {
                item_id,
                index,
                result,
            } => match result {
                Ok(response) => {
                    log::info!("{}", response.message);
                    vec![self.start_item_load(item_id)]
                }
                Err(err) => {
                    log::error!(
                        "failed to delete review {index} of {}/{item_id}: {err}",
                        self.kind
                    );
                    vec![Effect::Alert(Notice::ReviewNotDeleted {
                        reason: err.reason().to_string(),
                    })]
                }
            },
        }
    }

    fn start_list_load(&mut self) -> Effect {
        self.list = ListState::Loading;
        let ticket = self.list_seq.issue();
        log::debug!(
            "loading {} list (ticket {}) with {} filter(s)",
            self.kind,
            ticket.number(),
            self.filters.len()
        );
        Effect::FetchList {
            ticket,
            filters: self.filters.clone(),
        }
    }

    fn finish_list_load(&mut self, ticket: LoadTicket, result: Result<Vec<ItemSummary>, ApiError>) {
        if !self.list_seq.accepts(ticket, self.ordering) {
            log::debug!(
                "dropping stale {} list response (ticket {})",
                self.kind,
                ticket.number()
            );
            return;
        }
        if let Err(err) = &result {
            log::error!("failed to load {} list: {err}", self.kind);
        }
        self.list = ListState::from_result(result);
    }

    fn start_item_load(&mut self, item_id: ItemId) -> Effect {
        self.modal.begin_load(item_id.clone());
        let ticket = self.modal_seq.issue();
        Effect::FetchItem { ticket, item_id }
    }

    fn finish_item_load(
        &mut self,
        ticket: LoadTicket,
        item_id: &ItemId,
        result: Result<CatalogItem, ApiError>,
    ) -> Vec<Effect> {
        if !self.modal_seq.accepts(ticket, self.ordering) {
            log::debug!(
                "dropping stale {}/{item_id} detail response (ticket {})",
                self.kind,
                ticket.number()
            );
            return Vec::new();
        }
        let legacy = self.ordering == ResponseOrdering::LastResponse;
        match result {
            Ok(item) => {
                let shown = if legacy {
                    self.modal.replace(item)
                } else {
                    self.modal.complete(item)
                };
                if !shown {
                    log::debug!("detail for {}/{item_id} arrived after close", self.kind);
                }
                Vec::new()
            }
            Err(err) => {
                log::error!("failed to load {}/{item_id}: {err}", self.kind);
                let pending = self.modal.fail(item_id);
                if pending || (legacy && self.modal != ModalState::Closed) {
                    vec![Effect::Alert(Notice::DetailUnavailable)]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64, genre: &str) -> ItemSummary {
        ItemSummary {
            id: ItemId::from(id),
            title: format!("Item {id}"),
            image: format!("/img/{id}.jpg"),
            creator: None,
            genres: vec![genre.to_string()],
            rating: None,
            description: None,
            reviews: Vec::new(),
        }
    }

    fn item(id: u64, reviews: usize) -> CatalogItem {
        CatalogItem {
            id: ItemId::from(id),
            title: format!("Item {id}"),
            image: String::new(),
            creator: Some("Someone".into()),
            genres: vec!["drama".into()],
            rating: 7.0,
            description: "desc".into(),
            reviews: (0..reviews)
                .map(|i| Review {
                    author: format!("r{i}"),
                    date: "01.02.2024".into(),
                    rating: 7.0,
                    text: "ok".into(),
                })
                .collect(),
        }
    }

    fn fetch_list_ticket(effects: &[Effect]) -> LoadTicket {
        match effects {
            [Effect::FetchList { ticket, .. }] => *ticket,
            other => panic!("expected a single list fetch, got {other:?}"),
        }
    }

    fn fetch_item_ticket(effects: &[Effect]) -> LoadTicket {
        match effects {
            [Effect::FetchItem { ticket, .. }] => *ticket,
            other => panic!("expected a single item fetch, got {other:?}"),
        }
    }

    #[test]
    fn toggling_filters_fetches_with_current_selection() {
        let mut store = CatalogStore::new(CatalogKind::Movies);
        let effects = store.dispatch(Action::ToggleFilter {
            category: "genre".into(),
            value: "drama".into(),
        });
        assert!(store.list().is_loading());
        match effects.as_slice() {
            [Effect::FetchList { filters, .. }] => {
                assert_eq!(filters.get("genre"), Some("drama"));
            }
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn stale_list_responses_are_dropped() {
        let mut store = CatalogStore::new(CatalogKind::Books);
        let first = fetch_list_ticket(&store.dispatch(Action::Refresh));
        let second = fetch_list_ticket(&store.dispatch(Action::ToggleFilter {
            category: "genre".into(),
            value: "fantasy".into(),
        }));

        store.dispatch(Action::ListLoaded {
            ticket: second,
            result: Ok(vec![summary(2, "fantasy")]),
        });
        store.dispatch(Action::ListLoaded {
            ticket: first,
            result: Ok(vec![summary(1, "classic"), summary(2, "fantasy")]),
        });
        assert_eq!(store.list().items().len(), 1);
    }

    #[test]
    fn legacy_ordering_lets_the_last_response_win() {
        let mut store = CatalogStore::with_ordering(CatalogKind::Books, ResponseOrdering::LastResponse);
        let first = fetch_list_ticket(&store.dispatch(Action::Refresh));
        let second = fetch_list_ticket(&store.dispatch(Action::Refresh));
        store.dispatch(Action::ListLoaded {
            ticket: second,
            result: Ok(vec![summary(2, "fantasy")]),
        });
        store.dispatch(Action::ListLoaded {
            ticket: first,
            result: Ok(Vec::new()),
        });
        assert_eq!(store.list(), &ListState::Empty);
    }

    #[test]
    fn detail_failure_alerts_and_keeps_modal_closed() {
        let mut store = CatalogStore::new(CatalogKind::Games);
        let ticket = fetch_item_ticket(&store.dispatch(Action::OpenItem(ItemId::from(9))));
        let effects = store.dispatch(Action::ItemLoaded {
            ticket,
            item_id: ItemId::from(9),
            result: Err(ApiError::from_status(404, r#"{"error": "Game not found"}"#)),
        });
        assert_eq!(effects, vec![Effect::Alert(Notice::DetailUnavailable)]);
        assert_eq!(store.modal(), &ModalState::Closed);
    }

    #[test]
    fn invalid_draft_alerts_without_posting() {
        let mut store = CatalogStore::new(CatalogKind::Books);
        store.dispatch(Action::EditDraft {
            field: DraftField::Author,
            value: "Ann".into(),
        });
        store.dispatch(Action::EditDraft {
            field: DraftField::Text,
            value: "Fine".into(),
        });
        store.dispatch(Action::EditDraft {
            field: DraftField::Rating,
            value: "7.5".into(),
        });
        let effects = store.dispatch(Action::SubmitReview {
            item_id: ItemId::from(1),
        });
        assert!(matches!(
            effects.as_slice(),
            [Effect::Alert(Notice::InvalidReview(_))]
        ));
        assert_eq!(store.draft().author, "Ann");
    }

    #[test]
    fn failed_submit_keeps_draft_and_successful_submit_clears_it() {
        let mut store = CatalogStore::new(CatalogKind::Movies);
        let ticket = fetch_item_ticket(&store.dispatch(Action::OpenItem(ItemId::from(1))));
        store.dispatch(Action::ItemLoaded {
            ticket,
            item_id: ItemId::from(1),
            result: Ok(item(1, 0)),
        });
        store.dispatch(Action::EditDraft {
            field: DraftField::Author,
            value: "Ann".into(),
        });

        let effects = store.dispatch(Action::ReviewSubmitted {
            item_id: ItemId::from(1),
            result: Err(ApiError::from_status(400, r#"{"error": "bad"}"#)),
        });
        assert_eq!(
            effects,
            vec![Effect::Alert(Notice::ReviewNotAdded {
                reason: "bad".into()
            })]
        );
        assert_eq!(store.draft().author, "Ann");

        let effects = store.dispatch(Action::ReviewSubmitted {
            item_id: ItemId::from(1),
            result: Ok(Review {
                author: "Ann".into(),
                date: "01.01.2024".into(),
                rating: 8.0,
                text: "Good".into(),
            }),
        });
        assert!(store.draft().is_blank());
        let _ = fetch_item_ticket(&effects);
        assert!(store.modal().is_visible());
    }

    #[test]
    fn delete_requires_confirmation_first() {
        let mut store = CatalogStore::new(CatalogKind::Books);
        let effects = store.dispatch(Action::RequestDelete {
            item_id: ItemId::from(3),
            index: 1,
        });
        assert_eq!(
            effects,
            vec![Effect::ConfirmDelete {
                item_id: ItemId::from(3),
                index: 1
            }]
        );
        let effects = store.dispatch(Action::DeleteConfirmed {
            item_id: ItemId::from(3),
            index: 1,
        });
        assert_eq!(
            effects,
            vec![Effect::DeleteReview {
                item_id: ItemId::from(3),
                index: 1
            }]
        );
    }

    #[test]
    fn opening_another_item_clears_the_draft() {
        let mut store = CatalogStore::new(CatalogKind::Books);
        let ticket = fetch_item_ticket(&store.dispatch(Action::OpenItem(ItemId::from(1))));
        store.dispatch(Action::ItemLoaded {
            ticket,
            item_id: ItemId::from(1),
            result: Ok(item(1, 2)),
        });
        store.dispatch(Action::EditDraft {
            field: DraftField::Text,
            value: "half written".into(),
        });
        store.dispatch(Action::OpenItem(ItemId::from(1)));
        assert_eq!(store.draft().text, "half written");
        store.dispatch(Action::OpenItem(ItemId::from(2)));
        assert!(store.draft().is_blank());
    }

    #[test]
    fn stale_detail_response_does_not_replace_newer_one() {
        let mut store = CatalogStore::new(CatalogKind::Movies);
        let first = fetch_item_ticket(&store.dispatch(Action::OpenItem(ItemId::from(1))));
        let second = fetch_item_ticket(&store.dispatch(Action::OpenItem(ItemId::from(2))));
        store.dispatch(Action::ItemLoaded {
            ticket: second,
            item_id: ItemId::from(2),
            result: Ok(item(2, 0)),
        });
        store.dispatch(Action::ItemLoaded {
            ticket: first,
            item_id: ItemId::from(1),
            result: Ok(item(1, 0)),
        });
        assert_eq!(
            store.modal().item().map(|i| i.id.clone()),
            Some(ItemId::from(2))
        );
    }

    #[test]
    fn legacy_ordering_shows_the_last_detail_to_resolve() {
        let mut store =
            CatalogStore::with_ordering(CatalogKind::Movies, ResponseOrdering::LastResponse);
        let first = fetch_item_ticket(&store.dispatch(Action::OpenItem(ItemId::from(1))));
        let second = fetch_item_ticket(&store.dispatch(Action::OpenItem(ItemId::from(2))));
        store.dispatch(Action::ItemLoaded {
            ticket: second,
            item_id: ItemId::from(2),
            result: Ok(item(2, 0)),
        });
        store.dispatch(Action::ItemLoaded {
            ticket: first,
            item_id: ItemId::from(1),
            result: Ok(item(1, 0)),
        });
        assert_eq!(
            store.modal().item().map(|i| i.id.clone()),
            Some(ItemId::from(1))
        );
    }

    #[test]
    fn legacy_ordering_still_discards_details_after_close() {
        let mut store =
            CatalogStore::with_ordering(CatalogKind::Movies, ResponseOrdering::LastResponse);
        let ticket = fetch_item_ticket(&store.dispatch(Action::OpenItem(ItemId::from(1))));
        store.dispatch(Action::CloseModal);
        let effects = store.dispatch(Action::ItemLoaded {
            ticket,
            item_id: ItemId::from(1),
            result: Ok(item(1, 0)),
        });
        assert!(effects.is_empty());
        assert_eq!(store.modal(), &ModalState::Closed);
    }

    #[test]
    fn every_dispatch_bumps_revision() {
        let mut store = CatalogStore::new(CatalogKind::Games);
        let before = store.revision();
        store.dispatch(Action::CloseModal);
        assert_eq!(store.revision(), before + 1);
    }
}
