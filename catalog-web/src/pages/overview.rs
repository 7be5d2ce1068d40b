use crate::app::use_catalog;
use crate::components::filter_bar::FilterBar;
use crate::components::review_preview::ReviewPreviewCard;
use crate::i18n::t;
use catalog_core::{Action, CatalogKind, ListState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: CatalogKind,
}

/// Expanded cards with inline reviews instead of a detail modal.
#[function_component(OverviewPage)]
pub fn overview_page(props: &Props) -> Html {
    let kind = props.kind;
    let catalog = use_catalog(kind);
    let groups = use_memo(kind, |kind| crate::assets::filter_groups(*kind));

    let on_toggle = catalog.reform(|(category, value)| Action::ToggleFilter { category, value });
    let on_reset = catalog.reform(|()| Action::ResetFilters);

    let store = catalog.store();
    let body = match store.list() {
        ListState::Loading => html! { <div class="loading">{ t("list.loading") }</div> },
        ListState::Failed { .. } => html! { <p class="error">{ t("list.error") }</p> },
        ListState::Empty => html! { <p class="no-results">{ t("list.no_results") }</p> },
        ListState::Loaded(items) => html! {
            { for items.iter().map(|item| html! {
                <ReviewPreviewCard key={item.id.to_string()} item={item.clone()} />
            }) }
        },
    };

    html! {
        <section class={classes!("overview-page", kind.slug())}>
            <h1>{ format!("{}: {}", t("nav.overview"), t(&format!("kinds.{}", kind.slug()))) }</h1>
            <FilterBar
                groups={(*groups).clone()}
                selection={store.filters().clone()}
                {on_toggle}
                {on_reset}
            />
            <div class="overview-list">
                { body }
            </div>
        </section>
    }
}
