//! Review form state and rating validation.
use crate::item::NewReview;
use thiserror::Error;

/// Allowed rating values for a catalog kind: `min..=max` in multiples of `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RatingScale {
    pub const WHOLE: Self = Self {
        min: 0.0,
        max: 10.0,
        step: 1.0,
    };
    pub const FRACTIONAL: Self = Self {
        min: 0.0,
        max: 10.0,
        step: 0.1,
    };

    /// Value for the form input's `step` attribute.
    #[must_use]
    pub fn step_attr(&self) -> String {
        crate::item::format_rating(self.step)
    }

    /// Parse a raw form value. A comma is accepted as decimal separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is blank, not a number, out of range or
    /// not a multiple of the step.
    pub fn parse(&self, raw: &str) -> Result<f64, ReviewError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ReviewError::MissingField(DraftField::Rating));
        }
        let value: f64 = trimmed
            .replace(',', ".")
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| ReviewError::InvalidRating(trimmed.to_string()))?;
        if value < self.min || value > self.max {
            return Err(ReviewError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        let steps = (value - self.min) / self.step;
        if (steps - steps.round()).abs() > 1e-6 {
            return Err(ReviewError::OffStep {
                value,
                step: self.step,
            });
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Author,
    Text,
    Rating,
}

impl DraftField {
    /// Form control name, matching the JSON body key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Text => "text",
            Self::Rating => "rating",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    #[error("{} is required", .0.name())]
    MissingField(DraftField),
    #[error("rating '{0}' is not a number")]
    InvalidRating(String),
    #[error("rating {value} must be between {min} and {max}")]
    OutOfRange { value: f64, min: f64, max: f64 },
    #[error("rating {value} must be a multiple of {step}")]
    OffStep { value: f64, step: f64 },
}

/// Contents of the review form. Left untouched when a submission fails so the
/// user can retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub author: String,
    pub text: String,
    pub rating: String,
}

impl ReviewDraft {
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Author => self.author = value,
            DraftField::Text => self.text = value,
            DraftField::Rating => self.rating = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Author => &self.author,
            DraftField::Text => &self.text,
            DraftField::Rating => &self.rating,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.author.trim().is_empty() && self.text.trim().is_empty() && self.rating.trim().is_empty()
    }

    /// Validate the draft into a request body.
    ///
    /// # Errors
    ///
    /// Returns the first missing field or the rating validation failure.
    pub fn validate(&self, scale: &RatingScale) -> Result<NewReview, ReviewError> {
        for field in [DraftField::Author, DraftField::Text] {
            if self.get(field).trim().is_empty() {
                return Err(ReviewError::MissingField(field));
            }
        }
        let rating = scale.parse(&self.rating)?;
        Ok(NewReview {
            author: self.author.trim().to_string(),
            text: self.text.trim().to_string(),
            rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(author: &str, text: &str, rating: &str) -> ReviewDraft {
        ReviewDraft {
            author: author.into(),
            text: text.into(),
            rating: rating.into(),
        }
    }

    #[test]
    fn whole_scale_rejects_fractions() {
        assert_eq!(RatingScale::WHOLE.parse("7"), Ok(7.0));
        assert!(matches!(
            RatingScale::WHOLE.parse("7.5"),
            Err(ReviewError::OffStep { .. })
        ));
    }

    #[test]
    fn fractional_scale_accepts_tenths_and_commas() {
        assert_eq!(RatingScale::FRACTIONAL.parse("7.3"), Ok(7.3));
        assert_eq!(RatingScale::FRACTIONAL.parse("8,4"), Ok(8.4));
        assert!(matches!(
            RatingScale::FRACTIONAL.parse("7.35"),
            Err(ReviewError::OffStep { .. })
        ));
    }

    #[test]
    fn out_of_range_and_garbage_are_rejected() {
        assert!(matches!(
            RatingScale::WHOLE.parse("11"),
            Err(ReviewError::OutOfRange { .. })
        ));
        assert!(matches!(
            RatingScale::WHOLE.parse("-1"),
            Err(ReviewError::OutOfRange { .. })
        ));
        assert_eq!(
            RatingScale::WHOLE.parse("great"),
            Err(ReviewError::InvalidRating("great".into()))
        );
        assert_eq!(
            RatingScale::WHOLE.parse("NaN"),
            Err(ReviewError::InvalidRating("NaN".into()))
        );
    }

    #[test]
    fn step_attribute_matches_scale() {
        assert_eq!(RatingScale::WHOLE.step_attr(), "1");
        assert_eq!(RatingScale::FRACTIONAL.step_attr(), "0.1");
    }

    #[test]
    fn validation_reports_first_missing_field() {
        let err = draft("", "", "5").validate(&RatingScale::WHOLE).unwrap_err();
        assert_eq!(err, ReviewError::MissingField(DraftField::Author));
        assert_eq!(err.to_string(), "author is required");
        let err = draft("Ann", " ", "5").validate(&RatingScale::WHOLE).unwrap_err();
        assert_eq!(err, ReviewError::MissingField(DraftField::Text));
        let err = draft("Ann", "Nice", "").validate(&RatingScale::WHOLE).unwrap_err();
        assert_eq!(err, ReviewError::MissingField(DraftField::Rating));
    }

    #[test]
    fn valid_draft_trims_fields() {
        let review = draft(" Ann ", " Nice read ", "9")
            .validate(&RatingScale::WHOLE)
            .unwrap();
        assert_eq!(review.author, "Ann");
        assert_eq!(review.text, "Nice read");
        assert!((review.rating - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut d = draft("a", "b", "1");
        assert!(!d.is_blank());
        d.clear();
        assert!(d.is_blank());
    }
}
