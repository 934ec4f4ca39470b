//! Filter engine for the admin dashboard and the student self views.
//!
//! Three admin filters are driven by separate controls and never composed:
//!
//! - **Search**: delegated to the backend; failure falls back to an
//!   unfiltered refresh
//! - **Date**: both date endpoints must succeed, otherwise unfiltered refresh
//! - **Department**: purely local over the mirror
//!
//! Each one produces a fresh [`Selection`] that supersedes the previous view.

use tracing::{debug, warn};

use crate::config::DEFAULT_DEPARTMENT;
use crate::error::GatewayError;
use crate::gateway::PortalGateway;
use crate::mirror::Mirror;
use crate::model::{Complaint, Feedback, Submission};

/// The subset of data the dashboard should display.
///
/// `None` means "unfiltered": the views fall back to the mirror (and the
/// triage board to its five-entry preview).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub complaints: Option<Vec<Complaint>>,
    pub feedback: Option<Vec<Feedback>>,
}

impl Selection {
    pub fn unfiltered() -> Self {
        Self::default()
    }

    pub fn is_filtered(&self) -> bool {
        self.complaints.is_some() || self.feedback.is_some()
    }
}

/// How a filter request was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The filter produced a selection
    Applied,
    /// The input was empty; the view was reset to unfiltered
    Cleared,
    /// The backend failed; the view was reset to unfiltered after a refresh
    FellBack(GatewayError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    pub selection: Selection,
    pub outcome: FilterOutcome,
}

impl FilterResult {
    fn applied(selection: Selection) -> Self {
        Self {
            selection,
            outcome: FilterOutcome::Applied,
        }
    }

    fn cleared() -> Self {
        Self {
            selection: Selection::unfiltered(),
            outcome: FilterOutcome::Cleared,
        }
    }

    fn fell_back(err: GatewayError) -> Self {
        Self {
            selection: Selection::unfiltered(),
            outcome: FilterOutcome::FellBack(err),
        }
    }
}

/// Free-text search over complaints.
///
/// The query is trimmed and lowercased. An empty query, or a failed search,
/// refreshes the mirror and returns an unfiltered selection. On success the
/// feedback side shows the whole mirror.
pub async fn search<G: PortalGateway + ?Sized>(
    gateway: &G,
    mirror: &mut Mirror,
    query: &str,
) -> FilterResult {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        mirror.refresh(gateway).await;
        return FilterResult::cleared();
    }

    match gateway.search_complaints(&query).await {
        Ok(found) => {
            debug!("Search '{}' matched {} complaints", query, found.len());
            FilterResult::applied(Selection {
                complaints: Some(found),
                feedback: Some(mirror.feedback().to_vec()),
            })
        }
        Err(e) => {
            warn!("Search '{}' failed, showing unfiltered view: {}", query, e);
            mirror.refresh(gateway).await;
            FilterResult::fell_back(e)
        }
    }
}

/// Date filter over complaints and feedback (`YYYY-MM-DD`).
///
/// Both endpoints must succeed; otherwise the mirror is refreshed and the
/// view is unfiltered.
pub async fn by_date<G: PortalGateway + ?Sized>(
    gateway: &G,
    mirror: &mut Mirror,
    date: &str,
) -> FilterResult {
    let date = date.trim();
    if date.is_empty() {
        mirror.refresh(gateway).await;
        return FilterResult::cleared();
    }

    let (complaints, feedback) = futures::join!(
        gateway.search_complaints_by_date(date),
        gateway.search_feedback_by_date(date)
    );

    match (complaints, feedback) {
        (Ok(complaints), Ok(feedback)) => {
            debug!(
                "Date filter {}: {} complaints, {} feedback",
                date,
                complaints.len(),
                feedback.len()
            );
            FilterResult::applied(Selection {
                complaints: Some(complaints),
                feedback: Some(feedback),
            })
        }
        (Err(e), _) | (_, Err(e)) => {
            warn!("Date filter {} failed, showing unfiltered view: {}", date, e);
            mirror.refresh(gateway).await;
            FilterResult::fell_back(e)
        }
    }
}

/// Department filter over the mirror. Empty selection means unfiltered.
pub fn by_department(mirror: &Mirror, department: &str) -> FilterResult {
    let department = department.trim();
    if department.is_empty() {
        return FilterResult::cleared();
    }
    FilterResult::applied(Selection {
        complaints: Some(in_department(mirror.complaints(), department)),
        feedback: Some(mirror.feedback().to_vec()),
    })
}

/// Complaints whose department equals `department`, reading a missing
/// department as `General`.
pub fn in_department(complaints: &[Complaint], department: &str) -> Vec<Complaint> {
    let wanted = if department.is_empty() {
        DEFAULT_DEPARTMENT
    } else {
        department
    };
    complaints
        .iter()
        .filter(|c| c.department() == wanted)
        .cloned()
        .collect()
}

/// Entries submitted under `identity`. Anonymous entries never match, and
/// nothing matches when there is no identity.
pub fn owned_by<'a, T: Submission>(items: &'a [T], identity: Option<&str>) -> Vec<&'a T> {
    let Some(identity) = identity.filter(|id| !id.is_empty()) else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.submitter() == Some(identity))
        .collect()
}
