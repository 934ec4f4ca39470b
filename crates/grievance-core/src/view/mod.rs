//! View models for every dashboard region.
//!
//! Each function turns mirror data (or a filter [`Selection`](crate::filter::Selection))
//! into plain structs holding exactly what a component displays: labels,
//! CSS classes, ordering, chart geometry. The Dioxus components only lay
//! these out, so every rendering rule is testable without a DOM.
//!
//! - [`board`] - admin triage board and feedback panel
//! - [`chart`] - proportion chart wedges, legend, count summary
//! - [`history`] - complaint and feedback history lists
//! - [`student`] - student status list and own-feedback list
//! - [`notifications`] - old pending complaint badge and modal

pub mod board;
pub mod chart;
pub mod history;
pub mod notifications;
pub mod student;

use crate::config::DEFAULT_DEPARTMENT;
use crate::model::{Complaint, Timestamp};

/// Short local calendar date as shown on cards (`3/1/2025`).
pub fn display_date(ts: Timestamp) -> String {
    ts.local().format("%-m/%-d/%Y").to_string()
}

/// `General Complaint` for general (or unset) departments, otherwise
/// `Department: {name}`.
pub fn department_label(complaint: &Complaint) -> String {
    let department = complaint.department();
    if department == DEFAULT_DEPARTMENT {
        "General Complaint".to_string()
    } else {
        format!("Department: {}", department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComplaintId, ComplaintStatus, Priority};

    fn with_department(department: Option<&str>) -> Complaint {
        Complaint {
            id: ComplaintId::from_u64(1),
            title: "t".into(),
            description: "d".into(),
            priority: Priority::High,
            department: department.map(String::from),
            anonymous: false,
            user_email: None,
            status: ComplaintStatus::Pending,
            submitted_at: Timestamp::now(),
            created_at: None,
            resolved_at: None,
        }
    }

    #[test]
    fn test_department_label() {
        assert_eq!(department_label(&with_department(None)), "General Complaint");
        assert_eq!(department_label(&with_department(Some(""))), "General Complaint");
        assert_eq!(
            department_label(&with_department(Some("General"))),
            "General Complaint"
        );
        assert_eq!(
            department_label(&with_department(Some("Hostel"))),
            "Department: Hostel"
        );
    }

    #[test]
    fn test_display_date() {
        let ts = Timestamp::parse("2025-03-01T23:30:00").unwrap();
        assert_eq!(display_date(ts), "3/1/2025");
    }
}
