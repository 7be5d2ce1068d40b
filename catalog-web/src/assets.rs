//! Static assets compiled into the bundle.
use catalog_core::{CatalogKind, FilterCatalog, FilterGroup};

const FILTERS_JSON: &str = include_str!("../static/filters.json");

thread_local! {
    static FILTERS: FilterCatalog = FilterCatalog::from_json(FILTERS_JSON).unwrap_or_else(|err| {
        tracing::error!("filter definitions are invalid: {err}");
        FilterCatalog::default()
    });
}

/// Filter button groups shown on the `kind` pages.
#[must_use]
pub fn filter_groups(kind: CatalogKind) -> Vec<FilterGroup> {
    FILTERS.with(|filters| filters.groups(kind).to_vec())
}
