//! Local mirror of the backend's complaint and feedback lists.
//!
//! The mirror is only ever replaced wholesale by [`Mirror::refresh`]; there is
//! no incremental merge. After a mutation the portal refreshes before it
//! re-renders, so what is displayed is always the backend's view as of the
//! last successful refresh.

use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::gateway::PortalGateway;
use crate::model::{Complaint, ComplaintStats, Feedback, FeedbackStats};

/// What happened to each list during a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub complaints: Result<usize, GatewayError>,
    pub feedback: Result<usize, GatewayError>,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        self.complaints.is_ok() && self.feedback.is_ok()
    }
}

/// Last-fetched snapshot of both collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mirror {
    complaints: Vec<Complaint>,
    feedback: Vec<Feedback>,
    complaints_loaded: bool,
    feedback_loaded: bool,
}

impl Mirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mirror from known lists (tests, fixtures).
    pub fn from_parts(complaints: Vec<Complaint>, feedback: Vec<Feedback>) -> Self {
        Self {
            complaints,
            feedback,
            complaints_loaded: true,
            feedback_loaded: true,
        }
    }

    pub fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// True once both lists have been fetched successfully at least once.
    pub fn is_loaded(&self) -> bool {
        self.complaints_loaded && self.feedback_loaded
    }

    /// Re-fetches both lists and replaces them.
    ///
    /// A list that fails to load is reset to empty if it was never populated,
    /// and kept as-is (stale) otherwise.
    pub async fn refresh<G: PortalGateway + ?Sized>(&mut self, gateway: &G) -> RefreshReport {
        let (complaints, feedback) =
            futures::join!(gateway.list_complaints(), gateway.list_feedback());

        let complaints = match complaints {
            Ok(list) => {
                let count = list.len();
                self.complaints = list;
                self.complaints_loaded = true;
                Ok(count)
            }
            Err(e) => {
                if self.complaints_loaded {
                    warn!("Complaint refresh failed, keeping stale mirror: {}", e);
                } else {
                    warn!("Initial complaint load failed: {}", e);
                    self.complaints.clear();
                }
                Err(e)
            }
        };

        let feedback = match feedback {
            Ok(list) => {
                let count = list.len();
                self.feedback = list;
                self.feedback_loaded = true;
                Ok(count)
            }
            Err(e) => {
                if self.feedback_loaded {
                    warn!("Feedback refresh failed, keeping stale mirror: {}", e);
                } else {
                    warn!("Initial feedback load failed: {}", e);
                    self.feedback.clear();
                }
                Err(e)
            }
        };

        debug!(
            "Mirror refreshed: {} complaints, {} feedback",
            self.complaints.len(),
            self.feedback.len()
        );

        RefreshReport {
            complaints,
            feedback,
        }
    }

    /// Complaint counts recomputed from the mirror.
    pub fn local_complaint_stats(&self) -> ComplaintStats {
        let pending = self.complaints.iter().filter(|c| c.is_pending()).count();
        ComplaintStats {
            total: self.complaints.len(),
            pending,
            resolved: self.complaints.len() - pending,
        }
    }

    pub fn local_feedback_stats(&self) -> FeedbackStats {
        FeedbackStats {
            total: self.feedback.len(),
        }
    }
}
