//! Old pending complaint notifications.

use chrono::{DateTime, Duration, Utc};

use crate::config::OLD_PENDING_DAYS;
use crate::model::Complaint;

pub const MODAL_TITLE: &str = "Pending complaints older than 5 days";
pub const NOTHING_OLD: &str = "No pending complaints older than 5 days";

/// Pending complaints created strictly before `now - OLD_PENDING_DAYS`.
pub fn old_pending(complaints: &[Complaint], now: DateTime<Utc>) -> Vec<&Complaint> {
    let cutoff = now - Duration::days(OLD_PENDING_DAYS);
    complaints
        .iter()
        .filter(|c| c.is_pending() && c.created().as_datetime() < cutoff)
        .collect()
}

/// Bell badge. Hidden at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationBadge {
    pub count: usize,
}

impl NotificationBadge {
    pub fn is_visible(&self) -> bool {
        self.count > 0
    }
}

pub fn badge(complaints: &[Complaint], now: DateTime<Utc>) -> NotificationBadge {
    NotificationBadge {
        count: old_pending(complaints, now).len(),
    }
}

/// Lines of the notification modal body.
pub fn modal_lines(complaints: &[Complaint], now: DateTime<Utc>) -> Vec<String> {
    let old = old_pending(complaints, now);
    if old.is_empty() {
        return vec![NOTHING_OLD.to_string()];
    }
    old.iter().map(|c| format!("{} - pending", c.title)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComplaintId, ComplaintStatus, Priority, Timestamp};

    fn aged(title: &str, days: i64, status: ComplaintStatus, now: DateTime<Utc>) -> Complaint {
        let created = Timestamp::from_datetime(now - Duration::days(days));
        Complaint {
            id: ComplaintId::from_u64(1),
            title: title.into(),
            description: "d".into(),
            priority: Priority::Low,
            department: None,
            anonymous: true,
            user_email: None,
            status,
            submitted_at: created,
            created_at: Some(created),
            resolved_at: None,
        }
    }

    #[test]
    fn test_six_and_two_days_gives_one() {
        let now = Utc::now();
        let complaints = vec![
            aged("Leaky tap", 6, ComplaintStatus::Pending, now),
            aged("Projector", 2, ComplaintStatus::Pending, now),
        ];
        let badge = badge(&complaints, now);
        assert_eq!(badge.count, 1);
        assert!(badge.is_visible());
        assert_eq!(modal_lines(&complaints, now), vec!["Leaky tap - pending"]);
    }

    #[test]
    fn test_resolved_and_boundary_excluded() {
        let now = Utc::now();
        let complaints = vec![
            aged("Done", 9, ComplaintStatus::Resolved, now),
            aged("Exactly five", 5, ComplaintStatus::Pending, now),
        ];
        assert!(!badge(&complaints, now).is_visible());
        assert_eq!(modal_lines(&complaints, now), vec![NOTHING_OLD]);
    }

    #[test]
    fn test_created_at_takes_precedence() {
        let now = Utc::now();
        let mut complaint = aged("Recent", 1, ComplaintStatus::Pending, now);
        complaint.submitted_at = Timestamp::from_datetime(now - Duration::days(10));
        assert!(old_pending(&[complaint], now).is_empty());
    }

    #[test]
    fn test_backend_wall_clock_age_counts_in_local_zone() {
        use chrono::{Local, TimeZone};

        let now = Local
            .with_ymd_and_hms(2025, 3, 10, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let mut complaint = aged("Broken fan", 0, ComplaintStatus::Pending, now);
        // Five days and three hours before local noon, as the backend writes it
        let created = Timestamp::parse("2025-03-05T09:00:00").unwrap();
        complaint.submitted_at = created;
        complaint.created_at = Some(created);

        assert_eq!(badge(&[complaint], now).count, 1);
    }
}
