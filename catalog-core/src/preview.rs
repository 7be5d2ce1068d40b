//! Inline review preview used by the expanded card layout.
use crate::item::Review;

/// Reviews shown before the card is expanded.
pub const PREVIEW_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewPreview<'a> {
    pub visible: &'a [Review],
    /// Reviews hidden behind the toggle while collapsed.
    pub hidden: usize,
    pub expanded: bool,
}

impl<'a> ReviewPreview<'a> {
    #[must_use]
    pub fn new(reviews: &'a [Review], expanded: bool) -> Self {
        let hidden = reviews.len().saturating_sub(PREVIEW_LIMIT);
        let visible = if expanded {
            reviews
        } else {
            &reviews[..reviews.len().min(PREVIEW_LIMIT)]
        };
        Self {
            visible,
            hidden,
            expanded,
        }
    }

    /// The toggle only exists when there is something to hide.
    #[must_use]
    pub const fn has_toggle(&self) -> bool {
        self.hidden > 0
    }
}
