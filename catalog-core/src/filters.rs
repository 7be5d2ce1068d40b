//! Filter selection and the filter button definitions it is rendered from.
use crate::kind::CatalogKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Active filters: at most one value per category. A missing category means
/// "no constraint".
///
/// Button state is never stored separately; a button is active exactly when
/// [`FilterSelection::is_active`] says so.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    entries: BTreeMap<String, String>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the button identified by `category`/`value`.
    ///
    /// Returns `true` when the button is active afterwards. Activating a value
    /// replaces any other value of the same category.
    pub fn toggle(&mut self, category: &str, value: &str) -> bool {
        if self.is_active(category, value) {
            self.entries.remove(category);
            false
        } else {
            self.entries.insert(category.to_string(), value.to_string());
            true
        }
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_active(&self, category: &str, value: &str) -> bool {
        self.entries.get(category).is_some_and(|v| v == value)
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries.get(category).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries sent to the server; empty values are omitted.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, v)| !v.is_empty())
    }

    /// `application/x-www-form-urlencoded` query without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// A row of mutually exclusive filter buttons sharing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub category: String,
    /// Translation key for the row heading.
    pub label_key: String,
    pub options: Vec<FilterOption>,
}

impl FilterGroup {
    /// Options of this group currently marked active.
    pub fn active_options<'a>(
        &'a self,
        selection: &'a FilterSelection,
    ) -> impl Iterator<Item = &'a FilterOption> + 'a {
        self.options
            .iter()
            .filter(|opt| selection.is_active(&self.category, &opt.value))
    }
}

/// Filter groups for every catalog kind, as shipped in the static asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCatalog {
    #[serde(default)]
    pub books: Vec<FilterGroup>,
    #[serde(default)]
    pub games: Vec<FilterGroup>,
    #[serde(default)]
    pub movies: Vec<FilterGroup>,
}

impl FilterCatalog {
    /// Parse the filter asset.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe filter groups.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn groups(&self, kind: CatalogKind) -> &[FilterGroup] {
        match kind {
            CatalogKind::Books => &self.books,
            CatalogKind::Games => &self.games,
            CatalogKind::Movies => &self.movies,
        }
    }
}
