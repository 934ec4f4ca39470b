//! Admin triage board and feedback panel.

use super::{department_label, display_date};
use crate::config::ADMIN_PREVIEW_LIMIT;
use crate::filter::Selection;
use crate::mirror::Mirror;
use crate::model::{Complaint, ComplaintId, ComplaintStatus, Feedback, Priority};

/// One complaint on the triage board.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintCard {
    pub id: ComplaintId,
    pub title: String,
    pub status: ComplaintStatus,
    pub badge_label: &'static str,
    pub badge_class: &'static str,
    /// `Submitted by: ...`, absent when a named complaint carries no identity
    pub submitter_line: Option<String>,
    pub date: String,
    pub department_label: String,
    pub description: String,
    /// Whether the card offers a "Resolve" action (pending complaints only)
    pub resolvable: bool,
}

impl ComplaintCard {
    pub fn from_complaint(complaint: &Complaint) -> Self {
        let (badge_label, badge_class) = match complaint.status {
            ComplaintStatus::Pending => ("Pending", "status-badge badge-pending"),
            ComplaintStatus::Resolved => ("Resolved", "status-badge badge-resolved"),
        };
        let submitter_line = if complaint.anonymous {
            Some("Submitted by: Anonymous".to_string())
        } else {
            complaint
                .submitter()
                .map(|email| format!("Submitted by: {}", email))
        };

        Self {
            id: complaint.id,
            title: complaint.title.clone(),
            status: complaint.status,
            badge_label,
            badge_class,
            submitter_line,
            date: display_date(complaint.submitted_at),
            department_label: department_label(complaint),
            description: complaint.description.clone(),
            resolvable: complaint.is_pending(),
        }
    }
}

/// Cards of one priority column.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityGroup {
    pub priority: Priority,
    pub cards: Vec<ComplaintCard>,
}

impl PriorityGroup {
    pub fn heading(&self) -> &'static str {
        match self.priority {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }

    /// DOM id of the column, kept stable for styling hooks.
    pub fn section_id(&self) -> &'static str {
        match self.priority {
            Priority::High => "high-priority",
            Priority::Medium => "medium-priority",
            Priority::Low => "low-priority",
        }
    }
}

/// The triage board: High, Medium, Low columns in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageBoard {
    pub groups: Vec<PriorityGroup>,
}

impl TriageBoard {
    /// Groups `complaints` by priority, preserving their order within a group.
    pub fn from_complaints(complaints: &[Complaint]) -> Self {
        let groups = Priority::ALL
            .iter()
            .map(|&priority| PriorityGroup {
                priority,
                cards: complaints
                    .iter()
                    .filter(|c| c.priority == priority)
                    .map(ComplaintCard::from_complaint)
                    .collect(),
            })
            .collect();
        Self { groups }
    }

    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|g| g.cards.len()).sum()
    }
}

/// Board for the current selection, or the first five mirror complaints
/// when unfiltered.
pub fn triage_board(selection: &Selection, mirror: &Mirror) -> TriageBoard {
    match &selection.complaints {
        Some(complaints) => TriageBoard::from_complaints(complaints),
        None => {
            let preview = &mirror.complaints()[..mirror.complaints().len().min(ADMIN_PREVIEW_LIMIT)];
            TriageBoard::from_complaints(preview)
        }
    }
}

/// One feedback entry on the admin panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackCard {
    pub submitter_line: Option<String>,
    pub date: String,
    pub rating_line: String,
    pub text: String,
}

impl FeedbackCard {
    pub fn from_feedback(feedback: &Feedback) -> Self {
        let submitter_line = if feedback.anonymous {
            Some("Submitted anonymously".to_string())
        } else {
            feedback
                .submitter()
                .map(|email| format!("Submitted by: {}", email))
        };
        Self {
            submitter_line,
            date: display_date(feedback.submitted_at),
            rating_line: format!("Rating: {} ({})", feedback.rating, feedback.category),
            text: feedback.text().unwrap_or("No feedback text").to_string(),
        }
    }
}

/// Feedback cards for the current selection, or the first five mirror
/// entries when unfiltered.
pub fn feedback_panel(selection: &Selection, mirror: &Mirror) -> Vec<FeedbackCard> {
    let source: &[Feedback] = match &selection.feedback {
        Some(feedback) => feedback,
        None => &mirror.feedback()[..mirror.feedback().len().min(ADMIN_PREVIEW_LIMIT)],
    };
    source.iter().map(FeedbackCard::from_feedback).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeedbackCategory, Rating, Timestamp};

    fn complaint(id: u64, priority: Priority, status: ComplaintStatus) -> Complaint {
        Complaint {
            id: ComplaintId::from_u64(id),
            title: format!("c{}", id),
            description: "desc".into(),
            priority,
            department: None,
            anonymous: false,
            user_email: Some("s@x.com".into()),
            status,
            submitted_at: Timestamp::now(),
            created_at: None,
            resolved_at: None,
        }
    }

    fn feedback(text: Option<&str>, anonymous: bool) -> Feedback {
        Feedback {
            id: Some(1),
            category: FeedbackCategory::Star,
            rating: Rating::new(4).unwrap(),
            feedback_text: text.map(String::from),
            anonymous,
            user_email: Some("s@x.com".into()),
            status: ComplaintStatus::Pending,
            submitted_at: Timestamp::now(),
        }
    }

    #[test]
    fn test_resolve_action_iff_pending() {
        let pending = ComplaintCard::from_complaint(&complaint(1, Priority::High, ComplaintStatus::Pending));
        let resolved =
            ComplaintCard::from_complaint(&complaint(2, Priority::High, ComplaintStatus::Resolved));
        assert!(pending.resolvable);
        assert_eq!(pending.badge_label, "Pending");
        assert!(!resolved.resolvable);
        assert_eq!(resolved.badge_class, "status-badge badge-resolved");
    }

    #[test]
    fn test_submitter_lines() {
        let mut c = complaint(1, Priority::Low, ComplaintStatus::Pending);
        assert_eq!(
            ComplaintCard::from_complaint(&c).submitter_line.as_deref(),
            Some("Submitted by: s@x.com")
        );
        c.anonymous = true;
        assert_eq!(
            ComplaintCard::from_complaint(&c).submitter_line.as_deref(),
            Some("Submitted by: Anonymous")
        );
        c.anonymous = false;
        c.user_email = None;
        assert_eq!(ComplaintCard::from_complaint(&c).submitter_line, None);
    }

    #[test]
    fn test_board_groups_by_priority() {
        let complaints = vec![
            complaint(1, Priority::Low, ComplaintStatus::Pending),
            complaint(2, Priority::High, ComplaintStatus::Pending),
            complaint(3, Priority::Medium, ComplaintStatus::Resolved),
            complaint(4, Priority::High, ComplaintStatus::Resolved),
        ];
        let board = TriageBoard::from_complaints(&complaints);
        let priorities: Vec<Priority> = board.groups.iter().map(|g| g.priority).collect();
        assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
        let high_ids: Vec<u64> = board.groups[0].cards.iter().map(|c| c.id.as_u64()).collect();
        assert_eq!(high_ids, vec![2, 4]);
        assert_eq!(board.groups[0].section_id(), "high-priority");
    }

    #[test]
    fn test_unfiltered_board_previews_five() {
        let complaints: Vec<Complaint> = (1..=8)
            .map(|i| complaint(i, Priority::High, ComplaintStatus::Pending))
            .collect();
        let mirror = Mirror::from_parts(complaints.clone(), Vec::new());

        let preview = triage_board(&Selection::unfiltered(), &mirror);
        assert_eq!(preview.card_count(), 5);

        let filtered = triage_board(
            &Selection {
                complaints: Some(complaints),
                feedback: None,
            },
            &mirror,
        );
        assert_eq!(filtered.card_count(), 8);
    }

    #[test]
    fn test_feedback_card_text() {
        let card = FeedbackCard::from_feedback(&feedback(None, true));
        assert_eq!(card.text, "No feedback text");
        assert_eq!(card.rating_line, "Rating: 4 (star)");
        assert_eq!(card.submitter_line.as_deref(), Some("Submitted anonymously"));

        let named = FeedbackCard::from_feedback(&feedback(Some("Great labs"), false));
        assert_eq!(named.text, "Great labs");
    }

    #[test]
    fn test_feedback_panel_preview() {
        let entries: Vec<Feedback> = (0..7).map(|_| feedback(None, false)).collect();
        let mirror = Mirror::from_parts(Vec::new(), entries);
        assert_eq!(feedback_panel(&Selection::unfiltered(), &mirror).len(), 5);
    }
}
