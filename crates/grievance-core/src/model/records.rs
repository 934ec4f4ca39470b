use serde::{Deserialize, Serialize};

use super::types::{
    ComplaintId, ComplaintStatus, FeedbackCategory, Priority, Rating, Role, Timestamp,
};
use crate::config::DEFAULT_DEPARTMENT;

/// A complaint as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: ComplaintId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub status: ComplaintStatus,
    pub submitted_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<Timestamp>,
}

impl Complaint {
    /// Department, with a missing or blank value read as `General`.
    pub fn department(&self) -> &str {
        match self.department.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => DEFAULT_DEPARTMENT,
        }
    }

    /// Submitter identity. Always `None` for anonymous complaints, whatever
    /// the record carries.
    pub fn submitter(&self) -> Option<&str> {
        if self.anonymous {
            None
        } else {
            self.user_email.as_deref()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ComplaintStatus::Pending
    }

    /// Creation time used for age checks: `createdAt` when present,
    /// otherwise the backend's `submittedAt`.
    pub fn created(&self) -> Timestamp {
        self.created_at.unwrap_or(self.submitted_at)
    }
}

/// A feedback entry as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(default)]
    pub id: Option<u64>,
    pub category: FeedbackCategory,
    pub rating: Rating,
    #[serde(default)]
    pub feedback_text: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub status: ComplaintStatus,
    pub submitted_at: Timestamp,
}

impl Feedback {
    pub fn submitter(&self) -> Option<&str> {
        if self.anonymous {
            None
        } else {
            self.user_email.as_deref()
        }
    }

    /// Free text, `None` when empty.
    pub fn text(&self) -> Option<&str> {
        self.feedback_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Common view of complaints and feedback for ownership filters and
/// chronological ordering.
pub trait Submission {
    fn submitter(&self) -> Option<&str>;
    fn submitted_at(&self) -> Timestamp;
}

impl Submission for Complaint {
    fn submitter(&self) -> Option<&str> {
        Complaint::submitter(self)
    }

    fn submitted_at(&self) -> Timestamp {
        self.submitted_at
    }
}

impl Submission for Feedback {
    fn submitter(&self) -> Option<&str> {
        Feedback::submitter(self)
    }

    fn submitted_at(&self) -> Timestamp {
        self.submitted_at
    }
}

/// Payload of `POST /complaints`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub anonymous: bool,
    pub department: String,
    pub user_email: Option<String>,
    pub status: ComplaintStatus,
    pub created_at: Timestamp,
}

/// Payload of `POST /feedback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    pub category: FeedbackCategory,
    pub rating: Rating,
    pub feedback_text: String,
    pub anonymous: bool,
    pub user_email: Option<String>,
    pub status: ComplaintStatus,
}

/// Response of `POST /complaints`.
///
/// Duplicate detection is decided by the backend; the client only surfaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedComplaint {
    pub complaint: Complaint,
    #[serde(rename = "isDuplicate", default)]
    pub is_duplicate: bool,
}

/// Response of `GET /complaints/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintStats {
    pub total: usize,
    pub pending: usize,
    pub resolved: usize,
}

/// Response of `GET /feedback/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub total: usize,
}

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    pub complaints: ComplaintStats,
    pub feedback: FeedbackStats,
    /// Complaint counts were recomputed from the mirror because the stats call failed
    pub complaints_local: bool,
    /// Feedback count was recomputed from the mirror because the stats call failed
    pub feedback_local: bool,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Response of `POST /login`, for both accepted and denied attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
