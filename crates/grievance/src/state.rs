//! Shared UI state: the portal handle, the published snapshot, screens and
//! acknowledgments.
//!
//! Components never read the [`Portal`] directly while rendering. After each
//! command the handler captures a [`PortalSnapshot`] (every view model the
//! dashboards show) and writes it into a signal, so rendering is a pure
//! function of that snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::lock::Mutex;
use grievance_core::error::PortalError;
use grievance_core::gateway::PortalGateway;
use grievance_core::model::{Role, SummaryCounts};
use grievance_core::portal::{ComplaintAck, Portal};
use grievance_core::session::SessionStore;
use grievance_core::view::board::{FeedbackCard, TriageBoard};
use grievance_core::view::chart::{CategoryCounts, PieChart};
use grievance_core::view::history::{ComplaintHistoryRow, FeedbackHistoryRow};
use grievance_core::view::notifications::NotificationBadge;
use grievance_core::view::student::{OwnFeedbackList, StatusList};

use crate::gateway::HttpGateway;
use crate::storage::PlatformSessionStore;

pub type PlatformPortal = Portal<HttpGateway, PlatformSessionStore>;

/// Portal shared through context. Handlers lock it for the whole command, so
/// commands never interleave.
pub type SharedPortal = Arc<Mutex<PlatformPortal>>;

// =============================================================================
// Acknowledgment texts
// =============================================================================

pub const COMPLAINT_FAILED: &str = "Error submitting complaint. Please try again.";
pub const FEEDBACK_SUBMITTED: &str = "Feedback submitted successfully!";
pub const FEEDBACK_FAILED: &str = "Error submitting feedback. Please try again.";
pub const RESOLVED: &str = "Complaint resolved successfully!";
pub const RESOLVE_FAILED: &str = "Error resolving complaint. Please try again.";
pub const LOGIN_ERROR: &str = "Login failed. Please try again.";
pub const CONFIRM_COMPLAINT: &str = "Are you sure you want to submit this complaint?";
pub const CONFIRM_FEEDBACK: &str = "Are you sure you want to submit this feedback?";

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Login,
    Admin,
    Student,
}

impl From<Role> for Screen {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Screen::Admin,
            Role::Student => Screen::Student,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Acknowledgment shown after a command, dismissed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "gp-toast gp-toast--success",
            ToastKind::Error => "gp-toast gp-toast--error",
        }
    }
}

/// Duplicate-complaint banner, owned by the student dashboard so it stays up
/// while the complaint form is collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuplicateBanner {
    visible: bool,
}

impl DuplicateBanner {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records an accepted complaint. A plain submission hides the banner and
    /// yields the success toast instead.
    pub fn acknowledge(&mut self, ack: ComplaintAck) -> Option<Toast> {
        match ack {
            ComplaintAck::Duplicate => {
                self.visible = true;
                None
            }
            ComplaintAck::Submitted => {
                self.visible = false;
                Some(Toast::success(ack.message()))
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

/// Message for a failed command: validation and login denials speak for
/// themselves, everything else gets the generic `fallback`.
pub fn failure_message(err: &PortalError, fallback: &str) -> String {
    match err {
        PortalError::Validation(e) => e.to_string(),
        PortalError::LoginDenied(message) => message.clone(),
        PortalError::Gateway(_) | PortalError::Session(_) => fallback.to_string(),
    }
}

/// Everything the dashboards render, captured after a command.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalSnapshot {
    pub identity: Option<String>,
    pub filtered: bool,
    pub board: TriageBoard,
    pub feedback_panel: Vec<FeedbackCard>,
    pub chart: PieChart,
    pub chart_counts: CategoryCounts,
    pub complaint_history: Vec<ComplaintHistoryRow>,
    pub feedback_history: Vec<FeedbackHistoryRow>,
    pub status_list: StatusList,
    pub own_feedback: OwnFeedbackList,
    pub badge: NotificationBadge,
    pub notification_lines: Vec<String>,
    pub summary: SummaryCounts,
}

impl PortalSnapshot {
    /// Nothing loaded yet.
    pub fn empty() -> Self {
        let counts = CategoryCounts::default();
        Self {
            identity: None,
            filtered: false,
            board: TriageBoard::from_complaints(&[]),
            feedback_panel: Vec::new(),
            chart: PieChart::from_counts(&counts),
            chart_counts: counts,
            complaint_history: Vec::new(),
            feedback_history: Vec::new(),
            status_list: StatusList {
                entries: Vec::new(),
            },
            own_feedback: OwnFeedbackList { lines: Vec::new() },
            badge: NotificationBadge { count: 0 },
            notification_lines: Vec::new(),
            summary: SummaryCounts::default(),
        }
    }

    pub fn capture<G: PortalGateway, S: SessionStore>(
        portal: &Portal<G, S>,
        summary: SummaryCounts,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            identity: portal.identity(),
            filtered: portal.selection().is_filtered(),
            board: portal.triage_board(),
            feedback_panel: portal.feedback_panel(),
            chart: portal.chart(),
            chart_counts: portal.chart_counts(),
            complaint_history: portal.complaint_history(),
            feedback_history: portal.feedback_history(),
            status_list: portal.status_list(),
            own_feedback: portal.own_feedback(),
            badge: portal.notification_badge(now),
            notification_lines: portal.notification_lines(now),
            summary,
        }
    }
}

/// Fetches the summary counters and captures a snapshot of the portal.
pub async fn snapshot_of<G: PortalGateway, S: SessionStore>(
    portal: &Portal<G, S>,
) -> PortalSnapshot {
    let summary = portal.summary_counts().await;
    PortalSnapshot::capture(portal, summary, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grievance_core::error::{GatewayError, ValidationError};
    use grievance_core::forms::ComplaintForm;
    use grievance_core::gateway::InMemoryGateway;
    use grievance_core::session::InMemorySessionStore;

    #[test]
    fn test_duplicate_banner_survives_until_dismissed() {
        let mut banner = DuplicateBanner::default();
        assert_eq!(banner.acknowledge(ComplaintAck::Duplicate), None);
        assert!(banner.is_visible());

        banner.dismiss();
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_plain_submission_hides_banner_and_toasts() {
        let mut banner = DuplicateBanner::default();
        banner.acknowledge(ComplaintAck::Duplicate);

        let toast = banner.acknowledge(ComplaintAck::Submitted);
        assert!(!banner.is_visible());
        assert_eq!(toast, Some(Toast::success(ComplaintAck::Submitted.message())));
    }

    #[tokio::test]
    async fn test_snapshot_reflects_submission() {
        let mut portal = Portal::new(
            InMemoryGateway::new().with_student("s@x.com"),
            InMemorySessionStore::new(),
        );
        portal.login("s@x.com", "pw").await.unwrap();
        let form = ComplaintForm {
            title: "Broken AC".into(),
            description: "Room 204".into(),
            priority: "High".into(),
            ..ComplaintForm::default()
        };
        let payload = portal.prepare_complaint(&form).unwrap();
        portal.submit_complaint(&payload).await.unwrap();

        let snapshot = snapshot_of(&portal).await;
        assert_eq!(snapshot.identity.as_deref(), Some("s@x.com"));
        assert_eq!(snapshot.board.card_count(), 1);
        assert_eq!(snapshot.summary.complaints.total, 1);
        assert_eq!(snapshot.status_list.entries.len(), 1);
        assert!(!snapshot.badge.is_visible());
        assert!(!snapshot.chart.is_empty());
    }

    #[test]
    fn test_empty_snapshot_draws_neutral_chart() {
        let snapshot = PortalSnapshot::empty();
        assert!(snapshot.chart.is_empty());
        assert_eq!(snapshot.board.groups.len(), 3);
    }

    #[test]
    fn test_failure_messages() {
        let validation = PortalError::Validation(ValidationError::MissingCredentials);
        assert_eq!(failure_message(&validation, LOGIN_ERROR), "Please fill in all fields");

        let denied = PortalError::LoginDenied("Access denied".into());
        assert_eq!(failure_message(&denied, LOGIN_ERROR), "Access denied");

        let network = PortalError::Gateway(GatewayError::Network("down".into()));
        assert_eq!(failure_message(&network, COMPLAINT_FAILED), COMPLAINT_FAILED);
    }

    #[test]
    fn test_role_routes_to_dashboard() {
        assert_eq!(Screen::from(Role::Admin), Screen::Admin);
        assert_eq!(Screen::from(Role::Student), Screen::Student);
    }
}
