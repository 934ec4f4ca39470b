use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use super::PortalGateway;
use crate::error::GatewayError;
use crate::model::{
    Complaint, ComplaintId, ComplaintStats, ComplaintStatus, CreatedComplaint, Feedback,
    FeedbackStats, LoginResponse, NewComplaint, NewFeedback, Role, Timestamp,
};

/// Gateway operations, used to inject failures and to inspect call history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOp {
    ListComplaints,
    ListFeedback,
    SearchComplaints,
    SearchComplaintsByDate,
    SearchFeedbackByDate,
    ComplaintStats,
    FeedbackStats,
    CreateComplaint,
    CreateFeedback,
    ResolveComplaint,
    Login,
}

#[derive(Default)]
struct BackendState {
    complaints: Vec<Complaint>,
    feedback: Vec<Feedback>,
    admins: Vec<String>,
    students: Vec<String>,
    last_id: u64,
    offline: bool,
    failing: HashSet<GatewayOp>,
    calls: Vec<(GatewayOp, String)>,
}

/// In-memory backend for tests and offline demos.
///
/// Behaves like the real backend as far as the client can observe: lists are
/// newest first, searches follow the same matching rules, a complaint is
/// flagged duplicate when the same submitter already filed one with the same
/// title (case-insensitive, trimmed), and logins are checked against allow
/// lists. Outages can be simulated globally ([`set_offline`](Self::set_offline))
/// or per operation ([`fail`](Self::fail)).
#[derive(Default)]
pub struct InMemoryGateway {
    state: Mutex<BackendState>,
}

impl InMemoryGateway {
    /// Creates an empty backend with no allowed logins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an email that logs in as administrator.
    pub fn with_admin(self, email: &str) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.admins.push(email.trim().to_lowercase());
        }
        self
    }

    /// Adds an email that logs in as student.
    pub fn with_student(self, email: &str) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.students.push(email.trim().to_lowercase());
        }
        self
    }

    /// Inserts a stored complaint as-is (no duplicate check, no new id).
    pub fn seed_complaint(&self, complaint: Complaint) {
        if let Ok(mut state) = self.state.lock() {
            state.last_id = state.last_id.max(complaint.id.as_u64());
            state.complaints.push(complaint);
        }
    }

    /// Inserts a stored feedback entry as-is.
    pub fn seed_feedback(&self, feedback: Feedback) {
        if let Ok(mut state) = self.state.lock() {
            state.feedback.push(feedback);
        }
    }

    /// Makes every operation fail with a network error while `offline` is true.
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.offline = offline;
        }
    }

    /// Makes `op` fail with an HTTP 500 until [`restore`](Self::restore) is called.
    pub fn fail(&self, op: GatewayOp) {
        if let Ok(mut state) = self.state.lock() {
            state.failing.insert(op);
        }
    }

    pub fn restore(&self, op: GatewayOp) {
        if let Ok(mut state) = self.state.lock() {
            state.failing.remove(&op);
        }
    }

    /// Operations received so far, with their main argument (query, date,
    /// id, title or email; empty for argument-less calls).
    pub fn calls(&self) -> Vec<(GatewayOp, String)> {
        self.state
            .lock()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }

    /// Number of times `op` was invoked.
    pub fn call_count(&self, op: GatewayOp) -> usize {
        self.calls().iter().filter(|(o, _)| *o == op).count()
    }

    /// Records the call and applies simulated outages.
    fn enter(&self, op: GatewayOp, arg: &str) -> Result<MutexGuard<'_, BackendState>, GatewayError> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| GatewayError::Network(format!("Lock poisoned: {}", e)))?;
        state.calls.push((op, arg.to_string()));
        if state.offline {
            return Err(GatewayError::Network("backend unreachable".to_string()));
        }
        if state.failing.contains(&op) {
            return Err(GatewayError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(state)
    }
}

fn newest_first<T>(items: &mut [T], submitted: impl Fn(&T) -> Timestamp) {
    items.sort_by_key(|item| std::cmp::Reverse(submitted(item)));
}

/// Records submitted on `date` first, then the rest, each group newest first.
fn date_ordered<T: Clone>(items: &[T], date: &str, submitted: impl Fn(&T) -> Timestamp) -> Vec<T> {
    let date = date.trim();
    if date.is_empty() {
        return Vec::new();
    }
    let (mut on_date, mut others): (Vec<T>, Vec<T>) = items
        .iter()
        .cloned()
        .partition(|item| submitted(item).date_key() == date);
    newest_first(&mut on_date, &submitted);
    newest_first(&mut others, &submitted);
    on_date.extend(others);
    on_date
}

#[async_trait::async_trait(?Send)]
impl PortalGateway for InMemoryGateway {
    async fn list_complaints(&self) -> Result<Vec<Complaint>, GatewayError> {
        let state = self.enter(GatewayOp::ListComplaints, "")?;
        let mut complaints = state.complaints.clone();
        newest_first(&mut complaints, |c| c.submitted_at);
        Ok(complaints)
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, GatewayError> {
        let state = self.enter(GatewayOp::ListFeedback, "")?;
        let mut feedback = state.feedback.clone();
        newest_first(&mut feedback, |f| f.submitted_at);
        Ok(feedback)
    }

    async fn search_complaints(&self, query: &str) -> Result<Vec<Complaint>, GatewayError> {
        let state = self.enter(GatewayOp::SearchComplaints, query)?;
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let mut matches: Vec<Complaint> = state
            .complaints
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&query)
                    || c.description.to_lowercase().contains(&query)
                    || c.status.as_str().contains(&query)
            })
            .cloned()
            .collect();
        newest_first(&mut matches, |c| c.submitted_at);
        Ok(matches)
    }

    async fn search_complaints_by_date(
        &self,
        date: &str,
    ) -> Result<Vec<Complaint>, GatewayError> {
        let state = self.enter(GatewayOp::SearchComplaintsByDate, date)?;
        Ok(date_ordered(&state.complaints, date, |c| c.submitted_at))
    }

    async fn search_feedback_by_date(&self, date: &str) -> Result<Vec<Feedback>, GatewayError> {
        let state = self.enter(GatewayOp::SearchFeedbackByDate, date)?;
        Ok(date_ordered(&state.feedback, date, |f| f.submitted_at))
    }

    async fn complaint_stats(&self) -> Result<ComplaintStats, GatewayError> {
        let state = self.enter(GatewayOp::ComplaintStats, "")?;
        let pending = state.complaints.iter().filter(|c| c.is_pending()).count();
        Ok(ComplaintStats {
            total: state.complaints.len(),
            pending,
            resolved: state.complaints.len() - pending,
        })
    }

    async fn feedback_stats(&self) -> Result<FeedbackStats, GatewayError> {
        let state = self.enter(GatewayOp::FeedbackStats, "")?;
        Ok(FeedbackStats {
            total: state.feedback.len(),
        })
    }

    async fn create_complaint(
        &self,
        payload: &NewComplaint,
    ) -> Result<CreatedComplaint, GatewayError> {
        let mut state = self.enter(GatewayOp::CreateComplaint, &payload.title)?;
        if payload.title.trim().is_empty() || payload.description.trim().is_empty() {
            return Err(GatewayError::Http {
                status: 400,
                message: "Missing required fields".to_string(),
            });
        }

        let normalized_title = payload.title.trim().to_lowercase();
        let is_duplicate = state.complaints.iter().any(|c| {
            c.user_email == payload.user_email
                && c.title.trim().to_lowercase() == normalized_title
        });

        let now = Timestamp::now();
        let id = (now.as_datetime().timestamp_millis().max(0) as u64).max(state.last_id + 1);
        state.last_id = id;

        let complaint = Complaint {
            id: ComplaintId::from_u64(id),
            title: payload.title.clone(),
            description: payload.description.clone(),
            priority: payload.priority,
            department: Some(payload.department.clone()),
            anonymous: payload.anonymous,
            user_email: payload.user_email.clone(),
            status: ComplaintStatus::Pending,
            submitted_at: now,
            created_at: Some(payload.created_at),
            resolved_at: None,
        };
        state.complaints.push(complaint.clone());

        Ok(CreatedComplaint {
            complaint,
            is_duplicate,
        })
    }

    async fn create_feedback(&self, payload: &NewFeedback) -> Result<Feedback, GatewayError> {
        let mut state = self.enter(GatewayOp::CreateFeedback, payload.category.as_str())?;
        let now = Timestamp::now();
        let id = (now.as_datetime().timestamp_millis().max(0) as u64).max(state.last_id + 1);
        state.last_id = id;

        let feedback = Feedback {
            id: Some(id),
            category: payload.category,
            rating: payload.rating,
            feedback_text: Some(payload.feedback_text.clone()),
            anonymous: payload.anonymous,
            user_email: payload.user_email.clone(),
            status: payload.status,
            submitted_at: now,
        };
        state.feedback.push(feedback.clone());
        Ok(feedback)
    }

    async fn resolve_complaint(&self, id: ComplaintId) -> Result<Complaint, GatewayError> {
        let mut state = self.enter(GatewayOp::ResolveComplaint, &id.to_string())?;
        let complaint = state
            .complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| GatewayError::Http {
                status: 404,
                message: "Complaint not found".to_string(),
            })?;
        complaint.status = ComplaintStatus::Resolved;
        complaint.resolved_at = Some(Timestamp::now());
        Ok(complaint.clone())
    }

    async fn login(&self, email: &str) -> Result<LoginResponse, GatewayError> {
        let state = self.enter(GatewayOp::Login, email)?;
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(GatewayError::Http {
                status: 400,
                message: "Email is required".to_string(),
            });
        }

        let role = if state.admins.contains(&email) {
            Some(Role::Admin)
        } else if state.students.contains(&email) {
            Some(Role::Student)
        } else {
            None
        };

        Ok(match role {
            Some(role) => LoginResponse {
                success: true,
                role: Some(role),
                email: Some(email),
                error: None,
            },
            None => LoginResponse {
                success: false,
                role: None,
                email: None,
                error: Some("Access denied. Email not in allowed list.".to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeedbackCategory, Priority, Rating};
    use chrono::{Local, TimeZone, Utc};

    fn at(day: u32, hour: u32) -> Timestamp {
        let local = Local.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap();
        Timestamp::from_datetime(local.with_timezone(&Utc))
    }

    fn complaint(id: u64, title: &str, submitted: Timestamp) -> Complaint {
        Complaint {
            id: ComplaintId::from_u64(id),
            title: title.to_string(),
            description: format!("{} description", title),
            priority: Priority::Medium,
            department: None,
            anonymous: false,
            user_email: Some("student@example.com".into()),
            status: ComplaintStatus::Pending,
            submitted_at: submitted,
            created_at: None,
            resolved_at: None,
        }
    }

    fn new_complaint(title: &str, user: Option<&str>) -> NewComplaint {
        NewComplaint {
            title: title.into(),
            description: "desc".into(),
            priority: Priority::Low,
            anonymous: user.is_none(),
            department: "General".into(),
            user_email: user.map(String::from),
            status: ComplaintStatus::Pending,
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let gateway = InMemoryGateway::new();
        gateway.seed_complaint(complaint(1, "old", at(1, 9)));
        gateway.seed_complaint(complaint(2, "new", at(3, 9)));
        gateway.seed_complaint(complaint(3, "mid", at(2, 9)));

        let titles: Vec<String> = gateway
            .list_complaints()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_search_matches_title_description_and_status() {
        let gateway = InMemoryGateway::new();
        gateway.seed_complaint(complaint(1, "WiFi down", at(1, 9)));
        gateway.seed_complaint(complaint(2, "Leaky tap", at(2, 9)));

        let wifi = gateway.search_complaints("  WIFI ").await.unwrap();
        assert_eq!(wifi.len(), 1);
        assert_eq!(wifi[0].title, "WiFi down");

        let pending = gateway.search_complaints("pend").await.unwrap();
        assert_eq!(pending.len(), 2);

        assert!(gateway.search_complaints("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_date_search_puts_selected_day_first() {
        let gateway = InMemoryGateway::new();
        gateway.seed_complaint(complaint(1, "a", at(1, 9)));
        gateway.seed_complaint(complaint(2, "b", at(2, 9)));
        gateway.seed_complaint(complaint(3, "c", at(3, 9)));
        gateway.seed_complaint(complaint(4, "d", at(2, 18)));

        let titles: Vec<String> = gateway
            .search_complaints_by_date("2025-03-02")
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["d", "b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_duplicate_flag_same_user_same_title() {
        let gateway = InMemoryGateway::new();
        let first = gateway
            .create_complaint(&new_complaint("Broken AC", Some("a@x.com")))
            .await
            .unwrap();
        assert!(!first.is_duplicate);

        let again = gateway
            .create_complaint(&new_complaint("  broken ac ", Some("a@x.com")))
            .await
            .unwrap();
        assert!(again.is_duplicate);

        let other_user = gateway
            .create_complaint(&new_complaint("Broken AC", Some("b@x.com")))
            .await
            .unwrap();
        assert!(!other_user.is_duplicate);
        assert_ne!(first.complaint.id, again.complaint.id);
    }

    #[tokio::test]
    async fn test_resolve_unknown_id_is_404() {
        let gateway = InMemoryGateway::new();
        let err = gateway
            .resolve_complaint(ComplaintId::from_u64(42))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Http { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_resolve_sets_status() {
        let gateway = InMemoryGateway::new();
        gateway.seed_complaint(complaint(7, "x", at(1, 9)));
        let resolved = gateway
            .resolve_complaint(ComplaintId::from_u64(7))
            .await
            .unwrap();
        assert_eq!(resolved.status, ComplaintStatus::Resolved);
        assert!(resolved.resolved_at.is_some());

        let stats = gateway.complaint_stats().await.unwrap();
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.pending, 0);
    }

    #[tokio::test]
    async fn test_offline_and_injected_failures() {
        let gateway = InMemoryGateway::new();
        gateway.set_offline(true);
        assert!(matches!(
            gateway.list_feedback().await,
            Err(GatewayError::Network(_))
        ));
        gateway.set_offline(false);

        gateway.fail(GatewayOp::FeedbackStats);
        assert!(matches!(
            gateway.feedback_stats().await,
            Err(GatewayError::Http { status: 500, .. })
        ));
        gateway.restore(GatewayOp::FeedbackStats);
        assert!(gateway.feedback_stats().await.is_ok());
        assert_eq!(gateway.call_count(GatewayOp::FeedbackStats), 2);
    }

    #[tokio::test]
    async fn test_login_roles() {
        let gateway = InMemoryGateway::new()
            .with_admin("Admin@Example.com")
            .with_student("student@example.com");

        let admin = gateway.login(" admin@example.com ").await.unwrap();
        assert_eq!(admin.role, Some(Role::Admin));

        let student = gateway.login("student@example.com").await.unwrap();
        assert_eq!(student.role, Some(Role::Student));

        let stranger = gateway.login("who@example.com").await.unwrap();
        assert!(!stranger.success);
        assert!(stranger.error.is_some());
    }

    #[tokio::test]
    async fn test_create_feedback_stores_entry() {
        let gateway = InMemoryGateway::new();
        let payload = NewFeedback {
            category: FeedbackCategory::Star,
            rating: Rating::new(4).unwrap(),
            feedback_text: "Nice library".into(),
            anonymous: false,
            user_email: Some("s@x.com".into()),
            status: ComplaintStatus::Pending,
        };
        let stored = gateway.create_feedback(&payload).await.unwrap();
        assert_eq!(stored.rating.value(), 4);
        assert_eq!(gateway.feedback_stats().await.unwrap().total, 1);
    }
}
