use crate::components::item_card::ItemCard;
use crate::i18n::t;
use catalog_core::{CatalogKind, ItemId, ListState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: CatalogKind,
    pub state: ListState,
    pub on_open: Callback<ItemId>,
}

/// The list container. Its content is fully replaced on every state change.
#[function_component(ItemList)]
pub fn item_list(props: &Props) -> Html {
    let body = match &props.state {
        ListState::Loading => html! { <div class="loading">{ t("list.loading") }</div> },
        ListState::Failed { .. } => html! { <p class="error">{ t("list.error") }</p> },
        ListState::Empty => html! { <p class="no-results">{ t("list.no_results") }</p> },
        ListState::Loaded(items) => html! {
            { for items.iter().map(|item| html! {
                <ItemCard
                    key={item.id.to_string()}
                    kind={props.kind}
                    item={item.clone()}
                    on_open={props.on_open.clone()}
                />
            }) }
        },
    };

    html! {
        <div id={props.kind.list_container_id()} class="item-list" aria-live="polite">
            { body }
        </div>
    }
}
