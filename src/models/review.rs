// src/models/review.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ApiError;

/// Star rating, always within 1..=5.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct RatingError(pub u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (1..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Unsaved user input of a review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: Option<Rating>,
    pub comment: String,
}

/// The order line a review is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewTarget {
    pub item_id: u64,
    pub order_id: u64,
}

/// Request body of the review mutation. Item reviews never target a delivery person.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    pub rating: Option<Rating>,
    pub comment: String,
    pub delivery_man_id: Option<u64>,
    pub item_id: u64,
    pub order_id: u64,
}

impl ReviewSubmission {
    pub fn new(draft: &ReviewDraft, target: ReviewTarget) -> Self {
        Self {
            rating: draft.rating,
            comment: draft.comment.clone(),
            delivery_man_id: None,
            item_id: target.item_id,
            order_id: target.order_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a rating")]
    MissingRating,
    #[error("Please write a comment")]
    MissingComment,
}

/// Client-side checks run before a submission leaves the form.
/// Both checks are off by default: the backend decides what a valid review is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    #[serde(default)]
    pub require_rating: bool,
    #[serde(default)]
    pub require_comment: bool,
}

impl ValidationPolicy {
    pub fn validate(&self, draft: &ReviewDraft) -> Result<(), ValidationError> {
        if self.require_rating && draft.rating.is_none() {
            return Err(ValidationError::MissingRating);
        }
        if self.require_comment && draft.comment.trim().is_empty() {
            return Err(ValidationError::MissingComment);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("this review was already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// What the form wants shown after the mutation settles.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Failure(ApiError),
}

/// Draft plus submission phase of one review form instance.
///
/// `Editing -> Submitting -> Succeeded`, or back to `Editing` on failure with the
/// draft left exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFormState {
    draft: ReviewDraft,
    phase: FormPhase,
}

impl ReviewFormState {
    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Whether the submit control should be live.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    pub fn set_rating(&mut self, value: u8) -> Result<(), RatingError> {
        let rating = Rating::new(value)?;
        if self.touch() {
            self.draft.rating = Some(rating);
        }
        Ok(())
    }

    pub fn set_comment(&mut self, comment: String) {
        if self.touch() {
            self.draft.comment = comment;
        }
    }

    // Inputs are frozen while a request is out; editing a sent review starts a new one.
    fn touch(&mut self) -> bool {
        match self.phase {
            FormPhase::Submitting => false,
            FormPhase::Succeeded => {
                self.phase = FormPhase::Editing;
                true
            }
            FormPhase::Editing => true,
        }
    }

    pub fn begin_submit(
        &mut self,
        target: ReviewTarget,
        policy: &ValidationPolicy,
    ) -> Result<ReviewSubmission, SubmitRejected> {
        match self.phase {
            FormPhase::Submitting => return Err(SubmitRejected::InFlight),
            FormPhase::Succeeded => return Err(SubmitRejected::AlreadySubmitted),
            FormPhase::Editing => {}
        }
        policy.validate(&self.draft)?;
        self.phase = FormPhase::Submitting;
        Ok(ReviewSubmission::new(&self.draft, target))
    }

    pub fn settle(&mut self, outcome: Result<ReviewResponse, ApiError>) -> Notice {
        match outcome {
            Ok(response) => {
                self.draft = ReviewDraft::default();
                self.phase = FormPhase::Succeeded;
                Notice::Success(response.message)
            }
            Err(err) => {
                self.phase = FormPhase::Editing;
                Notice::Failure(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: ReviewTarget = ReviewTarget { item_id: 12, order_id: 99 };

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert_eq!(Rating::new(1).map(Rating::get), Ok(1));
        assert_eq!(Rating::new(5).map(Rating::get), Ok(5));
        assert_eq!(Rating::new(6), Err(RatingError(6)));
    }

    #[test]
    fn submission_payload_shape() {
        let mut form = ReviewFormState::default();
        form.set_rating(4).unwrap();
        form.set_comment("Great item".into());
        let submission = form.begin_submit(TARGET, &ValidationPolicy::default()).unwrap();

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rating": 4,
                "comment": "Great item",
                "delivery_man_id": null,
                "item_id": 12,
                "order_id": 99
            })
        );
    }

    #[test]
    fn empty_draft_submits_under_default_policy() {
        let mut form = ReviewFormState::default();
        let submission = form.begin_submit(TARGET, &ValidationPolicy::default()).unwrap();
        assert_eq!(submission.rating, None);
        assert_eq!(submission.comment, "");
        assert!(form.is_submitting());
    }

    #[test]
    fn strict_policy_blocks_without_leaving_editing() {
        let policy = ValidationPolicy { require_rating: true, require_comment: true };
        let mut form = ReviewFormState::default();
        assert_eq!(
            form.begin_submit(TARGET, &policy),
            Err(SubmitRejected::Invalid(ValidationError::MissingRating))
        );
        form.set_rating(3).unwrap();
        form.set_comment("   ".into());
        assert_eq!(
            form.begin_submit(TARGET, &policy),
            Err(SubmitRejected::Invalid(ValidationError::MissingComment))
        );
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = ReviewFormState::default();
        form.begin_submit(TARGET, &ValidationPolicy::default()).unwrap();
        assert_eq!(
            form.begin_submit(TARGET, &ValidationPolicy::default()),
            Err(SubmitRejected::InFlight)
        );
    }

    #[test]
    fn inputs_frozen_while_submitting() {
        let mut form = ReviewFormState::default();
        form.set_rating(2).unwrap();
        form.begin_submit(TARGET, &ValidationPolicy::default()).unwrap();
        form.set_rating(5).unwrap();
        form.set_comment("changed".into());
        assert_eq!(form.draft().rating.map(Rating::get), Some(2));
        assert_eq!(form.draft().comment, "");
    }

    #[test]
    fn failure_keeps_draft_and_reopens_form() {
        let mut form = ReviewFormState::default();
        form.set_rating(4).unwrap();
        form.set_comment("Great item".into());
        form.begin_submit(TARGET, &ValidationPolicy::default()).unwrap();

        let notice = form.settle(Err(ApiError::Network("offline".into())));
        assert!(matches!(notice, Notice::Failure(ApiError::Network(_))));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft().rating.map(Rating::get), Some(4));
        assert_eq!(form.draft().comment, "Great item");
    }

    #[test]
    fn success_clears_draft() {
        let mut form = ReviewFormState::default();
        form.set_rating(5).unwrap();
        form.begin_submit(TARGET, &ValidationPolicy::default()).unwrap();

        let notice = form.settle(Ok(ReviewResponse { message: "Thanks!".into() }));
        assert_eq!(notice, Notice::Success("Thanks!".into()));
        assert_eq!(form.phase(), FormPhase::Succeeded);
        assert_eq!(form.draft(), &ReviewDraft::default());
        assert_eq!(
            form.begin_submit(TARGET, &ValidationPolicy::default()),
            Err(SubmitRejected::AlreadySubmitted)
        );

        form.set_comment("one more thing".into());
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn submit_control_only_live_while_editing() {
        let mut form = ReviewFormState::default();
        assert!(form.can_submit());

        form.begin_submit(TARGET, &ValidationPolicy::default()).unwrap();
        assert!(!form.can_submit());

        form.settle(Ok(ReviewResponse { message: "Thanks!".into() }));
        assert!(!form.can_submit());

        form.set_rating(5).unwrap();
        assert!(form.can_submit());
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut form = ReviewFormState::default();
        assert_eq!(form.set_rating(9), Err(RatingError(9)));
        assert_eq!(form.draft().rating, None);
    }
}
