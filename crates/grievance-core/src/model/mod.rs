//! Data model shared by the gateway, mirror, filters and views.
//!
//! Wire formats follow the backend's camelCase JSON. Status, priority,
//! category and rating are closed types, so a malformed record is rejected
//! when the gateway decodes it instead of leaking string comparisons into
//! the views.

mod records;
mod types;

pub use records::{
    Complaint, ComplaintStats, CreatedComplaint, Feedback, FeedbackStats, LoginRequest,
    LoginResponse, NewComplaint, NewFeedback, Submission, SummaryCounts,
};
pub use types::{
    ComplaintId, ComplaintStatus, FeedbackCategory, Priority, Rating, Role, Timestamp,
};
