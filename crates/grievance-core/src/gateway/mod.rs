//! Remote data gateway.
//!
//! [`PortalGateway`] abstracts the complaint/feedback backend so the portal
//! logic never touches HTTP directly:
//!
//! - **Browser / desktop**: `HttpGateway` in the `grievance` crate (reqwest)
//! - **Tests / demos**: [`InMemoryGateway`], which reproduces the backend's
//!   observable behaviour (ordering, search rules, duplicate flag, login lists)
//!
//! # Error Handling
//!
//! Every operation returns `Result<T, GatewayError>`:
//! - `Network` - no response at all
//! - `Http` - non-success status, message from the body's `error` field
//! - `Decode` - body did not match the closed data model
//!
//! Callers decide how to degrade; the gateway never retries.

mod memory;

pub use memory::{GatewayOp, InMemoryGateway};

use crate::error::GatewayError;
use crate::model::{
    Complaint, ComplaintId, ComplaintStats, CreatedComplaint, Feedback, FeedbackStats,
    LoginResponse, NewComplaint, NewFeedback,
};

/// Backend operations consumed by the portal.
///
/// `?Send` because browser futures are single-threaded.
#[async_trait::async_trait(?Send)]
pub trait PortalGateway {
    // =========================================================================
    // Reads
    // =========================================================================

    /// All complaints, newest submission first.
    async fn list_complaints(&self) -> Result<Vec<Complaint>, GatewayError>;

    /// All feedback, newest submission first.
    async fn list_feedback(&self) -> Result<Vec<Feedback>, GatewayError>;

    /// Complaints whose title, description or status contain `query`.
    async fn search_complaints(&self, query: &str) -> Result<Vec<Complaint>, GatewayError>;

    /// Complaints submitted on `date` (`YYYY-MM-DD`) first, then the rest.
    async fn search_complaints_by_date(&self, date: &str)
        -> Result<Vec<Complaint>, GatewayError>;

    /// Feedback submitted on `date` (`YYYY-MM-DD`) first, then the rest.
    async fn search_feedback_by_date(&self, date: &str) -> Result<Vec<Feedback>, GatewayError>;

    async fn complaint_stats(&self) -> Result<ComplaintStats, GatewayError>;

    async fn feedback_stats(&self) -> Result<FeedbackStats, GatewayError>;

    // =========================================================================
    // Writes
    // =========================================================================

    /// Persists a complaint. The response says whether the backend judged it
    /// a duplicate.
    async fn create_complaint(
        &self,
        payload: &NewComplaint,
    ) -> Result<CreatedComplaint, GatewayError>;

    async fn create_feedback(&self, payload: &NewFeedback) -> Result<Feedback, GatewayError>;

    /// Marks a complaint resolved and returns the updated record.
    async fn resolve_complaint(&self, id: ComplaintId) -> Result<Complaint, GatewayError>;

    // =========================================================================
    // Identity
    // =========================================================================

    /// Checks `email` against the backend's allow lists.
    ///
    /// A denial is `Ok` with `success == false`; `Err` means the call itself failed.
    async fn login(&self, email: &str) -> Result<LoginResponse, GatewayError>;
}
