//! Executes store effects against a [`CatalogApi`] and a [`Prompter`].
use crate::api::CatalogApi;
use crate::item::ItemId;
use crate::kind::CatalogKind;
use crate::notice::Notice;
use crate::store::{Action, CatalogStore, Effect};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Blocking user interaction: alerts and delete confirmation.
pub trait Prompter {
    fn alert(&self, notice: &Notice);

    /// Ask before deleting review `index` of `item_id`.
    fn confirm_delete(&self, item_id: &ItemId, index: usize) -> bool;
}

/// Perform one effect and return the action describing its completion, if any.
pub async fn execute<A, P>(api: &A, prompter: &P, kind: CatalogKind, effect: Effect) -> Option<Action>
where
    A: CatalogApi + ?Sized,
    P: Prompter + ?Sized,
{
    match effect {
        Effect::FetchList { ticket, filters } => Some(Action::ListLoaded {
            ticket,
            result: api.list_items(kind, &filters).await,
        }),
        Effect::FetchItem { ticket, item_id } => {
            let result = api.get_item(kind, &item_id).await;
            Some(Action::ItemLoaded {
                ticket,
                item_id,
                result,
            })
        }
        Effect::PostReview { item_id, review } => {
            let result = api.submit_review(kind, &item_id, &review).await;
            Some(Action::ReviewSubmitted { item_id, result })
        }
        Effect::DeleteReview { item_id, index } => {
            let result = api.delete_review(kind, &item_id, index).await;
            Some(Action::ReviewDeleted {
                item_id,
                index,
                result,
            })
        }
        Effect::ConfirmDelete { item_id, index } => prompter
            .confirm_delete(&item_id, index)
            .then_some(Action::DeleteConfirmed { item_id, index }),
        Effect::Alert(notice) => {
            prompter.alert(&notice);
            None
        }
    }
}

/// Sequential driver: each dispatch runs until no effects remain.
pub struct CatalogRuntime<A, P> {
    store: CatalogStore,
    api: A,
    prompter: P,
}

impl<A, P> CatalogRuntime<A, P>
where
    A: CatalogApi,
    P: Prompter,
{
    pub const fn new(store: CatalogStore, api: A, prompter: P) -> Self {
        Self {
            store,
            api,
            prompter,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub const fn prompter(&self) -> &P {
        &self.prompter
    }

    pub async fn dispatch(&mut self, action: Action) {
        let kind = self.store.kind();
        let mut queue: VecDeque<Effect> = self.store.dispatch(action).into();
        while let Some(effect) = queue.pop_front() {
            if let Some(next) = execute(&self.api, &self.prompter, kind, effect).await {
                queue.extend(self.store.dispatch(next));
            }
        }
    }

    /// Initial page load: unfiltered list fetch.
    pub async fn load(&mut self) {
        self.dispatch(Action::Refresh).await;
    }

    pub async fn toggle_filter(&mut self, category: &str, value: &str) {
        self.dispatch(Action::ToggleFilter {
            category: category.to_string(),
            value: value.to_string(),
        })
        .await;
    }

    pub async fn reset_filters(&mut self) {
        self.dispatch(Action::ResetFilters).await;
    }

    pub async fn show_item_details(&mut self, item_id: ItemId) {
        self.dispatch(Action::OpenItem(item_id)).await;
    }

    pub async fn close_modal(&mut self) {
        self.dispatch(Action::CloseModal).await;
    }

    pub async fn submit_review(&mut self, item_id: ItemId) {
        self.dispatch(Action::SubmitReview { item_id }).await;
    }

    pub async fn delete_review(&mut self, item_id: ItemId, index: usize) {
        self.dispatch(Action::RequestDelete { item_id, index }).await;
    }
}

/// Prompter that records alerts and answers confirmations with a fixed value.
#[derive(Debug, Default)]
pub struct RecordingPrompter {
    approve: Cell<bool>,
    alerts: RefCell<Vec<Notice>>,
    confirmations: Cell<usize>,
}

impl RecordingPrompter {
    #[must_use]
    pub fn approving() -> Self {
        let prompter = Self::default();
        prompter.approve.set(true);
        prompter
    }

    #[must_use]
    pub fn declining() -> Self {
        Self::default()
    }

    pub fn set_approve(&self, approve: bool) {
        self.approve.set(approve);
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<Notice> {
        self.alerts.borrow().clone()
    }

    pub fn take_alerts(&self) -> Vec<Notice> {
        self.alerts.take()
    }

    #[must_use]
    pub fn confirmations(&self) -> usize {
        self.confirmations.get()
    }
}

impl Prompter for RecordingPrompter {
    fn alert(&self, notice: &Notice) {
        self.alerts.borrow_mut().push(notice.clone());
    }

    fn confirm_delete(&self, _item_id: &ItemId, _index: usize) -> bool {
        self.confirmations.set(self.confirmations.get() + 1);
        self.approve.get()
    }
}
