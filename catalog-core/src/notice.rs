//! User-visible failure signals raised as blocking alerts.
use crate::review::ReviewError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The detail record could not be loaded.
    DetailUnavailable,
    /// The server rejected or never received a new review.
    ReviewNotAdded { reason: String },
    /// The server rejected or never received a delete.
    ReviewNotDeleted { reason: String },
    /// The draft failed local validation; nothing was sent.
    InvalidReview(ReviewError),
}

impl Notice {
    /// Stable key used to look up the localized message.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::DetailUnavailable => "alerts.detail_unavailable",
            Self::ReviewNotAdded { .. } => "alerts.review_not_added",
            Self::ReviewNotDeleted { .. } => "alerts.review_not_deleted",
            Self::InvalidReview(_) => "alerts.invalid_review",
        }
    }

    /// Detail appended to the localized message, if any.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::DetailUnavailable => None,
            Self::ReviewNotAdded { reason } | Self::ReviewNotDeleted { reason } => {
                Some(reason.clone())
            }
            Self::InvalidReview(err) => Some(err.to_string()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DetailUnavailable => f.write_str("could not load item details"),
            Self::ReviewNotAdded { reason } => write!(f, "could not add review: {reason}"),
            Self::ReviewNotDeleted { reason } => write!(f, "could not delete review: {reason}"),
            Self::InvalidReview(err) => write!(f, "review not sent: {err}"),
        }
    }
}
