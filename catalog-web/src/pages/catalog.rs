use crate::app::use_catalog;
use crate::components::detail_view::DetailView;
use crate::components::filter_bar::FilterBar;
use crate::components::item_card::details_button_id;
use crate::components::item_list::ItemList;
use crate::components::modal::Modal;
use crate::components::review_form::ReviewForm;
use crate::i18n::{t, tr1};
use catalog_core::{Action, CatalogKind, ListState, ModalState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: CatalogKind,
}

/// Screen-reader summary of a settled list; `None` while loading or failed.
fn list_status(list: &ListState) -> Option<String> {
    match list {
        ListState::Loaded(items) => Some(tr1("list.count", "count", &items.len().to_string())),
        ListState::Empty => Some(t("list.no_results")),
        ListState::Loading | ListState::Failed { .. } => None,
    }
}

/// Filters, list and detail modal for one catalog kind.
#[function_component(CatalogPage)]
pub fn catalog_page(props: &Props) -> Html {
    let kind = props.kind;
    let catalog = use_catalog(kind);
    let groups = use_memo(kind, |kind| crate::assets::filter_groups(*kind));

    let on_toggle = catalog.reform(|(category, value)| Action::ToggleFilter { category, value });
    let on_reset = catalog.reform(|()| Action::ResetFilters);
    let on_open = catalog.reform(Action::OpenItem);
    let on_close = catalog.reform(|()| Action::CloseModal);
    let on_edit = catalog.reform(|(field, value)| Action::EditDraft { field, value });

    let status = list_status(catalog.store().list());
    use_effect_with(status, |status| {
        if let Some(msg) = status {
            crate::a11y::set_status(msg);
        }
        || {}
    });

    let store = catalog.store();
    let modal = store.modal();
    let title = modal
        .item()
        .map_or_else(|| t("detail.title"), |item| item.title.clone());
    let return_focus = modal
        .item()
        .map(|item| AttrValue::from(details_button_id(&item.id)));

    let body = match modal {
        ModalState::Closed | ModalState::Loading { showing: None, .. } => Html::default(),
        ModalState::Open(item) | ModalState::Loading { showing: Some(item), .. } => {
            let on_delete = {
                let item_id = item.id.clone();
                catalog.reform(move |index| Action::RequestDelete {
                    item_id: item_id.clone(),
                    index,
                })
            };
            let on_submit = {
                let item_id = item.id.clone();
                catalog.reform(move |()| Action::SubmitReview {
                    item_id: item_id.clone(),
                })
            };
            html! {
                <>
                    <DetailView item={item.clone()} {on_delete} busy={modal.is_loading()} />
                    <ReviewForm
                        item_id={item.id.clone()}
                        scale={store.rating_scale()}
                        draft={store.draft().clone()}
                        on_edit={on_edit.clone()}
                        {on_submit}
                    />
                </>
            }
        }
    };

    html! {
        <section class={classes!("catalog-page", kind.slug())}>
            <h1>{ t(&format!("kinds.{}", kind.slug())) }</h1>
            <FilterBar
                groups={(*groups).clone()}
                selection={store.filters().clone()}
                {on_toggle}
                {on_reset}
            />
            <div id="catalog-status" class="sr-only" role="status" aria-live="polite"></div>
            <ItemList {kind} state={store.list().clone()} {on_open} />
            <Modal
                open={modal.is_visible()}
                id={kind.modal_id()}
                title={title}
                busy={modal.is_loading()}
                return_focus_id={return_focus}
                {on_close}
            >
                { body }
            </Modal>
        </section>
    }
}
