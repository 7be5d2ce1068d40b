//! `window.alert` / `window.confirm` prompts for store effects.
use crate::i18n::{t, tr1};
use catalog_core::{ItemId, Notice, Prompter};

/// Localized text shown for a notice.
#[must_use]
pub fn notice_message(notice: &Notice) -> String {
    notice.reason().map_or_else(
        || t(notice.key()),
        |reason| tr1(notice.key(), "reason", &reason),
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn alert(&self, notice: &Notice) {
        crate::dom::alert(&notice_message(notice));
    }

    fn confirm_delete(&self, item_id: &ItemId, index: usize) -> bool {
        let approved = crate::dom::confirm(&t("alerts.confirm_delete"));
        if !approved {
            tracing::debug!("delete of review {index} on {item_id} declined");
        }
        approved
    }
}
