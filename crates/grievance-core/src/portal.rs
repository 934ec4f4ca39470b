//! The portal application state and its command handlers.
//!
//! [`Portal`] owns the gateway, the session store, the local [`Mirror`] and
//! the current filter [`Selection`]. Every command runs to completion before
//! the next one starts (the UI serialises them through a mutex), and every
//! mutation is followed by a full mirror refresh, so the views always show
//! the backend's state as of the last successful refresh.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::error::{PortalError, ValidationError};
use crate::filter::{self, FilterOutcome, Selection};
use crate::forms::{validate_credentials, ComplaintForm, FeedbackForm};
use crate::gateway::PortalGateway;
use crate::mirror::{Mirror, RefreshReport};
use crate::model::{
    ComplaintId, NewComplaint, NewFeedback, Role, SummaryCounts, Timestamp,
};
use crate::session::SessionStore;
use crate::view::board::{self, FeedbackCard, TriageBoard};
use crate::view::chart::{self, CategoryCounts, PieChart};
use crate::view::history::{self, ComplaintHistoryRow, FeedbackHistoryRow};
use crate::view::notifications::{self, NotificationBadge};
use crate::view::student::{self, OwnFeedbackList, StatusList};

/// Message shown when the backend refuses a login without saying why.
pub const LOGIN_FAILED: &str = "Login failed";

/// How the backend acknowledged a new complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintAck {
    /// Stored; show the plain success acknowledgment
    Submitted,
    /// Stored, but the backend flagged it as a duplicate; show the banner
    Duplicate,
}

impl ComplaintAck {
    pub fn message(&self) -> &'static str {
        match self {
            ComplaintAck::Submitted => "Complaint submitted successfully!",
            ComplaintAck::Duplicate => {
                "A similar complaint has already been submitted. It has been recorded again."
            }
        }
    }
}

pub struct Portal<G, S> {
    gateway: G,
    session: S,
    mirror: Mirror,
    selection: Selection,
}

impl<G: PortalGateway, S: SessionStore> Portal<G, S> {
    pub fn new(gateway: G, session: S) -> Self {
        Self {
            gateway,
            session,
            mirror: Mirror::new(),
            selection: Selection::unfiltered(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The stored session identity. Storage errors read as "no identity".
    pub fn identity(&self) -> Option<String> {
        match self.session.identity() {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Could not read session identity: {}", e);
                None
            }
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Initial load (and manual reload) of both lists.
    pub async fn load(&mut self) -> RefreshReport {
        let report = self.mirror.refresh(&self.gateway).await;
        if report.is_complete() {
            info!(
                "Loaded {} complaints and {} feedback entries",
                self.mirror.complaints().len(),
                self.mirror.feedback().len()
            );
        }
        report
    }

    /// Validates the credentials, asks the backend for a role and stores the
    /// entered email as the session identity. The password is never sent.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Role, PortalError> {
        let email = validate_credentials(email, password)?;

        let response = self.gateway.login(email).await.map_err(|e| {
            error!("Login request failed: {}", e);
            PortalError::from(e)
        })?;

        let role = match (response.success, response.role) {
            (true, Some(role)) => role,
            _ => {
                let message = response.error.unwrap_or_else(|| LOGIN_FAILED.to_string());
                info!("Login denied for {}: {}", email, message);
                return Err(PortalError::LoginDenied(message));
            }
        };

        self.session.set_identity(email)?;
        self.selection = Selection::unfiltered();
        info!("Signed in as {:?}", role);
        self.mirror.refresh(&self.gateway).await;
        Ok(role)
    }

    /// Returns to the landing view. The stored identity is kept until the
    /// next login overwrites it.
    pub fn logout(&mut self) {
        self.selection = Selection::unfiltered();
        debug!("Logged out");
    }

    /// Builds a complaint payload from the form, stamped with the session
    /// identity and the current time.
    pub fn prepare_complaint(&self, form: &ComplaintForm) -> Result<NewComplaint, ValidationError> {
        form.prepare(self.identity().as_deref(), Timestamp::now())
    }

    pub fn prepare_feedback(&self, form: &FeedbackForm) -> Result<NewFeedback, ValidationError> {
        form.prepare(self.identity().as_deref())
    }

    /// Submits a confirmed complaint, then refreshes the mirror.
    ///
    /// On failure the mirror is left untouched.
    pub async fn submit_complaint(
        &mut self,
        payload: &NewComplaint,
    ) -> Result<ComplaintAck, PortalError> {
        let created = self.gateway.create_complaint(payload).await.map_err(|e| {
            error!("Complaint submission failed: {}", e);
            PortalError::from(e)
        })?;

        self.after_mutation().await;

        if created.is_duplicate {
            info!("Complaint {} flagged as duplicate", created.complaint.id);
            Ok(ComplaintAck::Duplicate)
        } else {
            info!("Complaint {} submitted", created.complaint.id);
            Ok(ComplaintAck::Submitted)
        }
    }

    /// Submits confirmed feedback, then refreshes the mirror.
    pub async fn submit_feedback(&mut self, payload: &NewFeedback) -> Result<(), PortalError> {
        self.gateway.create_feedback(payload).await.map_err(|e| {
            error!("Feedback submission failed: {}", e);
            PortalError::from(e)
        })?;
        self.after_mutation().await;
        info!("Feedback submitted ({} {})", payload.category, payload.rating);
        Ok(())
    }

    /// Marks a complaint resolved, then refreshes the mirror.
    pub async fn resolve(&mut self, id: ComplaintId) -> Result<(), PortalError> {
        self.gateway.resolve_complaint(id).await.map_err(|e| {
            error!("Resolving complaint {} failed: {}", id, e);
            PortalError::from(e)
        })?;
        self.after_mutation().await;
        info!("Complaint {} resolved", id);
        Ok(())
    }

    /// Mutations re-render from the refreshed mirror, dropping any filter.
    async fn after_mutation(&mut self) {
        self.mirror.refresh(&self.gateway).await;
        self.selection = Selection::unfiltered();
    }

    pub async fn search(&mut self, query: &str) -> FilterOutcome {
        let result = filter::search(&self.gateway, &mut self.mirror, query).await;
        self.selection = result.selection;
        result.outcome
    }

    pub async fn filter_by_date(&mut self, date: &str) -> FilterOutcome {
        let result = filter::by_date(&self.gateway, &mut self.mirror, date).await;
        self.selection = result.selection;
        result.outcome
    }

    pub fn filter_by_department(&mut self, department: &str) -> FilterOutcome {
        let result = filter::by_department(&self.mirror, department);
        self.selection = result.selection;
        result.outcome
    }

    /// Drops any filter and refreshes.
    pub async fn clear_filter(&mut self) -> RefreshReport {
        self.selection = Selection::unfiltered();
        self.mirror.refresh(&self.gateway).await
    }

    /// Dashboard counters from the stats endpoints. Each half that fails is
    /// recomputed from the mirror independently.
    pub async fn summary_counts(&self) -> SummaryCounts {
        let (complaints, feedback) = futures::join!(
            self.gateway.complaint_stats(),
            self.gateway.feedback_stats()
        );

        let (complaints, complaints_local) = match complaints {
            Ok(stats) => (stats, false),
            Err(e) => {
                warn!("Complaint stats unavailable, counting locally: {}", e);
                (self.mirror.local_complaint_stats(), true)
            }
        };
        let (feedback, feedback_local) = match feedback {
            Ok(stats) => (stats, false),
            Err(e) => {
                warn!("Feedback stats unavailable, counting locally: {}", e);
                (self.mirror.local_feedback_stats(), true)
            }
        };

        SummaryCounts {
            complaints,
            feedback,
            complaints_local,
            feedback_local,
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn triage_board(&self) -> TriageBoard {
        board::triage_board(&self.selection, &self.mirror)
    }

    pub fn feedback_panel(&self) -> Vec<FeedbackCard> {
        board::feedback_panel(&self.selection, &self.mirror)
    }

    pub fn chart_counts(&self) -> CategoryCounts {
        chart::chart_counts(&self.selection, &self.mirror)
    }

    pub fn chart(&self) -> PieChart {
        PieChart::from_counts(&self.chart_counts())
    }

    pub fn complaint_history(&self) -> Vec<ComplaintHistoryRow> {
        history::complaint_history(self.mirror.complaints())
    }

    pub fn feedback_history(&self) -> Vec<FeedbackHistoryRow> {
        history::feedback_history(self.mirror.feedback())
    }

    pub fn status_list(&self) -> StatusList {
        student::status_list(self.mirror.complaints(), self.identity().as_deref())
    }

    pub fn own_feedback(&self) -> OwnFeedbackList {
        student::feedback_list(self.mirror.feedback(), self.identity().as_deref())
    }

    pub fn notification_badge(&self, now: DateTime<Utc>) -> NotificationBadge {
        notifications::badge(self.mirror.complaints(), now)
    }

    pub fn notification_lines(&self, now: DateTime<Utc>) -> Vec<String> {
        notifications::modal_lines(self.mirror.complaints(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayOp, InMemoryGateway};
    use crate::model::Priority;
    use crate::session::InMemorySessionStore;

    fn portal() -> Portal<InMemoryGateway, InMemorySessionStore> {
        Portal::new(
            InMemoryGateway::new()
                .with_admin("admin@college.edu")
                .with_student("arun.kumar123@gmail.com"),
            InMemorySessionStore::new(),
        )
    }

    fn complaint_form(title: &str) -> ComplaintForm {
        ComplaintForm {
            title: title.into(),
            description: "Room 204 AC not working".into(),
            priority: "High".into(),
            department: String::new(),
            anonymous: false,
        }
    }

    #[tokio::test]
    async fn test_login_requires_both_fields_without_network() {
        let mut portal = portal();
        let err = portal.login("admin@college.edu", "").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(portal.gateway().call_count(GatewayOp::Login), 0);
    }

    #[tokio::test]
    async fn test_login_stores_identity_and_routes_by_role() {
        let mut portal = portal();
        let role = portal.login("arun.kumar123@gmail.com", "pw").await.unwrap();
        assert_eq!(role, Role::Student);
        assert_eq!(portal.identity().as_deref(), Some("arun.kumar123@gmail.com"));

        let role = portal.login("admin@college.edu", "pw").await.unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[tokio::test]
    async fn test_login_denied_uses_backend_message() {
        let mut portal = portal();
        let err = portal.login("stranger@x.com", "pw").await.unwrap_err();
        assert_eq!(
            err,
            PortalError::LoginDenied("Access denied. Email not in allowed list.".into())
        );
        assert_eq!(portal.identity(), None);
    }

    #[tokio::test]
    async fn test_failed_submission_leaves_mirror_unchanged() {
        let mut portal = portal();
        portal.login("arun.kumar123@gmail.com", "pw").await.unwrap();
        let payload = portal.prepare_complaint(&complaint_form("Broken AC")).unwrap();
        portal.submit_complaint(&payload).await.unwrap();
        let before = portal.mirror().clone();
        let lists_before = portal.gateway().call_count(GatewayOp::ListComplaints);

        portal.gateway().fail(GatewayOp::CreateComplaint);
        let err = portal.submit_complaint(&payload).await.unwrap_err();
        assert!(matches!(err, PortalError::Gateway(_)));
        assert_eq!(portal.mirror(), &before);
        assert_eq!(
            portal.gateway().call_count(GatewayOp::ListComplaints),
            lists_before
        );
    }

    #[tokio::test]
    async fn test_duplicate_submission_acknowledged() {
        let mut portal = portal();
        portal.login("arun.kumar123@gmail.com", "pw").await.unwrap();
        let payload = portal.prepare_complaint(&complaint_form("Broken AC")).unwrap();
        assert_eq!(
            portal.submit_complaint(&payload).await.unwrap(),
            ComplaintAck::Submitted
        );

        let again = portal
            .prepare_complaint(&complaint_form("  broken ac "))
            .unwrap();
        assert_eq!(
            portal.submit_complaint(&again).await.unwrap(),
            ComplaintAck::Duplicate
        );
        assert_eq!(portal.mirror().complaints().len(), 2);
    }

    #[tokio::test]
    async fn test_resolve_refreshes_and_removes_action() {
        let mut portal = portal();
        let payload = portal.prepare_complaint(&complaint_form("Broken AC")).unwrap();
        portal.submit_complaint(&payload).await.unwrap();
        let id = portal.mirror().complaints()[0].id;
        assert!(portal.triage_board().groups[0].cards[0].resolvable);

        portal.resolve(id).await.unwrap();
        let card = &portal.triage_board().groups[0].cards[0];
        assert!(!card.resolvable);
        assert_eq!(card.badge_label, "Resolved");
    }

    #[tokio::test]
    async fn test_summary_counts_fall_back_per_part() {
        let mut portal = portal();
        let payload = portal.prepare_complaint(&complaint_form("Broken AC")).unwrap();
        portal.submit_complaint(&payload).await.unwrap();

        portal.gateway().fail(GatewayOp::FeedbackStats);
        let counts = portal.summary_counts().await;
        assert!(!counts.complaints_local);
        assert!(counts.feedback_local);
        assert_eq!(counts.complaints.total, 1);
        assert_eq!(counts.complaints.pending, 1);
        assert_eq!(counts.feedback.total, 0);
    }

    #[tokio::test]
    async fn test_department_filter_and_clear() {
        let mut portal = portal();
        let mut form = complaint_form("Fan broken");
        form.department = "Hostel".into();
        form.priority = Priority::Low.to_string();
        let payload = portal.prepare_complaint(&form).unwrap();
        portal.submit_complaint(&payload).await.unwrap();
        let payload = portal.prepare_complaint(&complaint_form("Broken AC")).unwrap();
        portal.submit_complaint(&payload).await.unwrap();

        assert_eq!(portal.filter_by_department("Hostel"), FilterOutcome::Applied);
        assert_eq!(portal.triage_board().card_count(), 1);

        portal.clear_filter().await;
        assert!(!portal.selection().is_filtered());
        assert_eq!(portal.triage_board().card_count(), 2);
    }
}
