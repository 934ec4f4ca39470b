//! Student self views: own complaint statuses and own feedback.

use crate::filter::owned_by;
use crate::model::{Complaint, ComplaintStatus, Feedback};

/// One line of the student's complaint status list.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEntry {
    pub title: String,
    /// Lowercase status text shown inside the badge
    pub status: &'static str,
    pub badge_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusList {
    pub entries: Vec<StatusEntry>,
}

impl StatusList {
    /// The "no complaints" message is shown instead of an empty list.
    pub fn shows_empty_message(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn status_list(complaints: &[Complaint], identity: Option<&str>) -> StatusList {
    let entries = owned_by(complaints, identity)
        .into_iter()
        .map(|c| StatusEntry {
            title: c.title.clone(),
            status: c.status.as_str(),
            badge_class: match c.status {
                ComplaintStatus::Pending => "student-badge student-badge-pending",
                ComplaintStatus::Resolved => "student-badge student-badge-resolved",
            },
        })
        .collect();
    StatusList { entries }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnFeedbackList {
    pub lines: Vec<String>,
}

impl OwnFeedbackList {
    /// The section is hidden entirely when the student has no feedback.
    pub fn is_hidden(&self) -> bool {
        self.lines.is_empty()
    }
}

/// `Rating: n (category) - text - status`, with `No text` for empty text.
pub fn feedback_line(feedback: &Feedback) -> String {
    format!(
        "Rating: {} ({}) - {} - {}",
        feedback.rating,
        feedback.category,
        feedback.text().unwrap_or("No text"),
        feedback.status
    )
}

pub fn feedback_list(feedback: &[Feedback], identity: Option<&str>) -> OwnFeedbackList {
    OwnFeedbackList {
        lines: owned_by(feedback, identity)
            .into_iter()
            .map(feedback_line)
            .collect(),
    }
}
