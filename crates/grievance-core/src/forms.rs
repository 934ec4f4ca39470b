//! Form controllers.
//!
//! Each form keeps the raw field values the UI binds to and turns them into a
//! wire payload with `prepare`. Validation happens there, before any
//! confirmation prompt, so invalid input never reaches the gateway.

use crate::config::{DEFAULT_DEPARTMENT, MAX_RATING, MIN_RATING};
use crate::error::ValidationError;
use crate::model::{
    ComplaintStatus, FeedbackCategory, NewComplaint, NewFeedback, Priority, Rating, Timestamp,
};

/// Submitter identity for a payload: none when anonymous.
fn submitter(anonymous: bool, identity: Option<&str>) -> Option<String> {
    if anonymous {
        None
    } else {
        identity.filter(|id| !id.is_empty()).map(str::to_string)
    }
}

/// Raw complaint form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintForm {
    pub title: String,
    pub description: String,
    /// `High`, `Medium`, `Low`, or empty when nothing is selected
    pub priority: String,
    /// Empty means `General`
    pub department: String,
    pub anonymous: bool,
}

impl ComplaintForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(
        &self,
        identity: Option<&str>,
        now: Timestamp,
    ) -> Result<NewComplaint, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }
        let priority: Priority = self.priority.parse()?;

        let department = match self.department.trim() {
            "" => DEFAULT_DEPARTMENT.to_string(),
            d => d.to_string(),
        };

        Ok(NewComplaint {
            title: self.title.clone(),
            description: self.description.clone(),
            priority,
            anonymous: self.anonymous,
            department,
            user_email: submitter(self.anonymous, identity),
            status: ComplaintStatus::Pending,
            created_at: now,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Star and emoji rating widgets. At most one of them holds a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingSelector {
    selection: Option<(FeedbackCategory, Rating)>,
}

impl RatingSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects star `k`; stars `1..=k` light up and any emoji is cleared.
    pub fn select_star(&mut self, k: u8) -> Result<(), ValidationError> {
        self.selection = Some((FeedbackCategory::Star, Rating::new(k)?));
        Ok(())
    }

    /// Selects exactly one emoji and clears the stars.
    pub fn select_emoji(&mut self, k: u8) -> Result<(), ValidationError> {
        self.selection = Some((FeedbackCategory::Emoji, Rating::new(k)?));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<(FeedbackCategory, Rating)> {
        self.selection
    }

    pub fn star_selected(&self, k: u8) -> bool {
        matches!(self.selection, Some((FeedbackCategory::Star, r)) if k >= MIN_RATING && k <= r.value())
    }

    pub fn emoji_selected(&self, k: u8) -> bool {
        matches!(self.selection, Some((FeedbackCategory::Emoji, r)) if k == r.value())
    }

    /// Number of lit stars.
    pub fn stars_lit(&self) -> usize {
        (MIN_RATING..=MAX_RATING)
            .filter(|&k| self.star_selected(k))
            .count()
    }

    /// Number of lit emoji (0 or 1).
    pub fn emoji_lit(&self) -> usize {
        (MIN_RATING..=MAX_RATING)
            .filter(|&k| self.emoji_selected(k))
            .count()
    }
}

/// Raw feedback form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub text: String,
    pub anonymous: bool,
    pub rating: RatingSelector,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&self, identity: Option<&str>) -> Result<NewFeedback, ValidationError> {
        let (category, rating) = self
            .rating
            .selection()
            .ok_or(ValidationError::MissingRating)?;

        Ok(NewFeedback {
            category,
            rating,
            feedback_text: self.text.trim().to_string(),
            anonymous: self.anonymous,
            user_email: submitter(self.anonymous, identity),
            status: ComplaintStatus::Pending,
        })
    }

    /// Clears text, anonymity and the rating selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Returns the email to send once both login fields are filled in. The
/// password is checked for presence only and never sent.
pub fn validate_credentials<'a>(email: &'a str, password: &str) -> Result<&'a str, ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken_ac() -> ComplaintForm {
        ComplaintForm {
            title: "Broken AC".into(),
            description: "Room 204 AC not working".into(),
            priority: "High".into(),
            department: String::new(),
            anonymous: false,
        }
    }

    #[test]
    fn test_complaint_defaults() {
        let now = Timestamp::now();
        let payload = broken_ac()
            .prepare(Some("arun.kumar123@gmail.com"), now)
            .unwrap();
        assert_eq!(payload.department, "General");
        assert_eq!(payload.status, ComplaintStatus::Pending);
        assert_eq!(payload.user_email.as_deref(), Some("arun.kumar123@gmail.com"));
        assert_eq!(payload.created_at, now);
        assert_eq!(payload.priority, Priority::High);
    }

    #[test]
    fn test_anonymous_complaint_has_no_submitter() {
        let mut form = broken_ac();
        form.anonymous = true;
        let payload = form.prepare(Some("a@x.com"), Timestamp::now()).unwrap();
        assert_eq!(payload.user_email, None);
    }

    #[test]
    fn test_complaint_missing_fields() {
        let mut form = broken_ac();
        form.title = "  ".into();
        assert_eq!(
            form.prepare(None, Timestamp::now()),
            Err(ValidationError::MissingField("title"))
        );

        let mut form = broken_ac();
        form.priority.clear();
        assert_eq!(
            form.prepare(None, Timestamp::now()),
            Err(ValidationError::MissingField("priority"))
        );
    }

    #[test]
    fn test_star_then_emoji_is_exclusive() {
        let mut selector = RatingSelector::new();
        selector.select_star(3).unwrap();
        assert_eq!(selector.stars_lit(), 3);
        assert!(selector.star_selected(1));
        assert!(!selector.star_selected(4));
        assert_eq!(selector.emoji_lit(), 0);

        selector.select_emoji(4).unwrap();
        assert_eq!(selector.stars_lit(), 0);
        assert_eq!(selector.emoji_lit(), 1);
        assert!(selector.emoji_selected(4));
        assert_eq!(
            selector.selection(),
            Some((FeedbackCategory::Emoji, Rating::new(4).unwrap()))
        );

        selector.clear();
        assert_eq!(selector.selection(), None);
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let mut selector = RatingSelector::new();
        assert_eq!(selector.select_star(6), Err(ValidationError::InvalidRating(6)));
        assert_eq!(selector.selection(), None);
    }

    #[test]
    fn test_feedback_requires_rating() {
        let form = FeedbackForm::new();
        assert_eq!(form.prepare(None), Err(ValidationError::MissingRating));

        let mut form = FeedbackForm::new();
        form.text = "  Labs are great ".into();
        form.rating.select_star(5).unwrap();
        let payload = form.prepare(Some("s@x.com")).unwrap();
        assert_eq!(payload.category, FeedbackCategory::Star);
        assert_eq!(payload.rating.value(), 5);
        assert_eq!(payload.feedback_text, "Labs are great");
        assert_eq!(payload.user_email.as_deref(), Some("s@x.com"));

        form.reset();
        assert_eq!(form.rating.selection(), None);
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(
            validate_credentials("a@x.com", ""),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            validate_credentials("", "pw"),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(validate_credentials("a@x.com", "pw"), Ok("a@x.com"));
    }
}
