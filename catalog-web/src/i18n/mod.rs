mod bundle;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};

use std::collections::BTreeMap;

/// Translate a key with a single `{name}` placeholder filled.
#[must_use]
pub fn tr1(key: &str, name: &str, value: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert(name, value);
    tr(key, Some(&args))
}
