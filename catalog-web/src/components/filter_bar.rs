use crate::i18n::t;
use catalog_core::{FilterGroup, FilterSelection};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub groups: Vec<FilterGroup>,
    pub selection: FilterSelection,
    /// Emits `(category, value)`.
    pub on_toggle: Callback<(String, String)>,
    pub on_reset: Callback<()>,
}

/// Rows of filter buttons. A button is active exactly when the selection maps
/// its category to its value.
#[function_component(FilterBar)]
pub fn filter_bar(props: &Props) -> Html {
    let on_reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="filters" aria-label={t("filters.heading")}>
            { for props.groups.iter().map(|group| render_group(group, &props.selection, &props.on_toggle)) }
            <button type="button" id="resetFilters" class="reset-btn" onclick={on_reset}>
                { t("filters.reset") }
            </button>
        </section>
    }
}

fn render_group(
    group: &FilterGroup,
    selection: &FilterSelection,
    on_toggle: &Callback<(String, String)>,
) -> Html {
    let buttons = group.options.iter().map(|option| {
        let active = selection.is_active(&group.category, &option.value);
        let onclick = {
            let cb = on_toggle.clone();
            let category = group.category.clone();
            let value = option.value.clone();
            Callback::from(move |_: MouseEvent| cb.emit((category.clone(), value.clone())))
        };
        html! {
            <button
                type="button"
                class={classes!("filter-btn", active.then_some("active"))}
                data-filter={group.category.clone()}
                data-value={option.value.clone()}
                aria-pressed={active.to_string()}
                {onclick}
            >
                { option.label.clone() }
            </button>
        }
    });

    html! {
        <div class="filter-group" role="group" aria-label={t(&group.label_key)}>
            <span class="filter-label">{ t(&group.label_key) }</span>
            { for buttons }
        </div>
    }
}
