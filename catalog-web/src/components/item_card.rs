use crate::i18n::{t, tr1};
use catalog_core::{CatalogKind, ItemId, ItemSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: CatalogKind,
    pub item: ItemSummary,
    pub on_open: Callback<ItemId>,
}

/// Id of the details button, used to return focus after the modal closes.
#[must_use]
pub fn details_button_id(id: &ItemId) -> String {
    format!("details-{id}")
}

#[function_component(ItemCard)]
pub fn item_card(props: &Props) -> Html {
    let item = &props.item;
    let on_card = {
        let cb = props.on_open.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    // The card itself also opens the modal, so the click must not bubble.
    let on_details = {
        let cb = props.on_open.clone();
        let id = item.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id.clone());
        })
    };
    let singular = props.kind.singular();

    html! {
        <div
            class={classes!("item-card", format!("{singular}-card"))}
            data-item-id={item.id.to_string()}
            onclick={on_card}
        >
            <div class="item-image-container">
                <img src={crate::paths::asset_path(&item.image)} alt={item.title.clone()} class="item-image" />
            </div>
            <div class="item-content">
                <h3 class="item-title">{ item.title.clone() }</h3>
                if let Some(creator) = item.creator() {
                    <div class="item-creator">{ tr1("card.creator", "name", creator) }</div>
                }
                <div class="item-genres">
                    { for item.genres.iter().map(|genre| html! { <span class="genre-tag">{ genre.clone() }</span> }) }
                </div>
                <button
                    type="button"
                    id={details_button_id(&item.id)}
                    class="show-more-btn"
                    onclick={on_details}
                >
                    { t("card.details") }
                </button>
            </div>
        </div>
    }
}
