//! Complaint and feedback history lists, newest first.

use super::{department_label, display_date};
use crate::model::{Complaint, ComplaintStatus, Feedback, Submission};

/// One row of the complaint history.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintHistoryRow {
    pub title: String,
    pub date: String,
    pub description: String,
    pub priority_line: String,
    pub department_label: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

impl ComplaintHistoryRow {
    fn from_complaint(complaint: &Complaint) -> Self {
        let status_class = match complaint.status {
            ComplaintStatus::Pending => "status-pending",
            ComplaintStatus::Resolved => "status-resolved",
        };
        Self {
            title: complaint.title.clone(),
            date: display_date(complaint.submitted_at),
            description: complaint.description.clone(),
            priority_line: format!("Priority: {}", complaint.priority),
            department_label: department_label(complaint),
            status_label: complaint.status.label(),
            status_class,
        }
    }
}

/// One row of the feedback history.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackHistoryRow {
    /// `⭐ 4/5` or `😊 3/5`
    pub rating_line: String,
    pub date: String,
    pub text: String,
}

impl FeedbackHistoryRow {
    fn from_feedback(feedback: &Feedback) -> Self {
        Self {
            rating_line: format!("{} {}/5", feedback.category.glyph(), feedback.rating),
            date: display_date(feedback.submitted_at),
            text: feedback.text().unwrap_or("No feedback text").to_string(),
        }
    }
}

/// Stable sort by submission time, newest first. Ties keep input order.
fn newest_first<T: Submission>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| b.submitted_at().cmp(&a.submitted_at()));
    sorted
}

pub fn complaint_history(complaints: &[Complaint]) -> Vec<ComplaintHistoryRow> {
    newest_first(complaints)
        .into_iter()
        .map(ComplaintHistoryRow::from_complaint)
        .collect()
}

pub fn feedback_history(feedback: &[Feedback]) -> Vec<FeedbackHistoryRow> {
    newest_first(feedback)
        .into_iter()
        .map(FeedbackHistoryRow::from_feedback)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComplaintId, FeedbackCategory, Priority, Rating, Timestamp};

    fn complaint(title: &str, at: &str, status: ComplaintStatus) -> Complaint {
        Complaint {
            id: ComplaintId::from_u64(1),
            title: title.into(),
            description: "d".into(),
            priority: Priority::Medium,
            department: None,
            anonymous: true,
            user_email: None,
            status,
            submitted_at: Timestamp::parse(at).unwrap(),
            created_at: None,
            resolved_at: None,
        }
    }

    #[test]
    fn test_complaints_newest_first_and_stable() {
        let complaints = vec![
            complaint("old", "2025-01-01T00:00:00Z", ComplaintStatus::Pending),
            complaint("new", "2025-03-01T00:00:00Z", ComplaintStatus::Resolved),
            complaint("tie-a", "2025-02-01T00:00:00Z", ComplaintStatus::Pending),
            complaint("tie-b", "2025-02-01T00:00:00Z", ComplaintStatus::Pending),
        ];
        let rows = complaint_history(&complaints);
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "tie-a", "tie-b", "old"]);
        assert_eq!(rows[0].status_class, "status-resolved");
        assert_eq!(rows[0].status_label, "Resolved");
        assert_eq!(rows[1].priority_line, "Priority: Medium");
        assert_eq!(rows[1].department_label, "General Complaint");
    }

    #[test]
    fn test_feedback_rating_glyphs() {
        let entry = |category, rating| Feedback {
            id: None,
            category,
            rating: Rating::new(rating).unwrap(),
            feedback_text: None,
            anonymous: false,
            user_email: None,
            status: ComplaintStatus::Pending,
            submitted_at: Timestamp::parse("2025-03-01T00:00:00Z").unwrap(),
        };
        let rows = feedback_history(&[
            entry(FeedbackCategory::Star, 4),
            entry(FeedbackCategory::Emoji, 3),
        ]);
        assert_eq!(rows[0].rating_line, "⭐ 4/5");
        assert_eq!(rows[1].rating_line, "😊 3/5");
        assert_eq!(rows[1].text, "No feedback text");
    }
}
