//! HTTP implementation of [`PortalGateway`].
//!
//! reqwest works on both targets:
//! - Native (desktop): hyper with rustls
//! - WASM (web): the browser `fetch()` API
//!
//! Every failure is mapped onto [`GatewayError`]. Non-success responses carry
//! the body's `error` field when present, otherwise [`GENERIC_SERVER_ERROR`].

use dioxus::logger::tracing::{debug, warn};
use grievance_core::config::GENERIC_SERVER_ERROR;
use grievance_core::error::GatewayError;
use grievance_core::gateway::PortalGateway;
use grievance_core::model::{
    Complaint, ComplaintId, ComplaintStats, CreatedComplaint, Feedback, FeedbackStats,
    LoginRequest, LoginResponse, NewComplaint, NewFeedback,
};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config;

/// Shared client; reqwest pools connections internally.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Error body shape used by the backend for every failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Builds the error for a non-success response from its status and body.
fn http_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
    GatewayError::Http { status, message }
}

fn network_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Network(err.to_string())
}

/// Gateway talking to the portal backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base: String,
}

impl HttpGateway {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Gateway for the configured backend.
    pub fn from_config() -> Self {
        Self::new(config::api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Sends the request and returns status and body text.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), GatewayError> {
        let response = request.send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;
        Ok((status, body))
    }

    /// Sends the request, failing on non-success statuses, and decodes the body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let (status, body) = self.send(request).await?;
        if !(200..300).contains(&status) {
            return Err(http_error(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        let url = self.url(path);
        debug!("GET {}", url);
        self.fetch(HTTP_CLIENT.get(url).query(query)).await
    }

    /// GET of a record list. Records that do not decode are skipped.
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, GatewayError> {
        let values: Vec<serde_json::Value> = self.get(path, query).await?;
        Ok(decode_records(path, values))
    }
}

fn decode_records<T: DeserializeOwned>(path: &str, values: Vec<serde_json::Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping record {} from {}: {}", idx, path, e);
                None
            }
        })
        .collect()
}

#[async_trait::async_trait(?Send)]
impl PortalGateway for HttpGateway {
    async fn list_complaints(&self) -> Result<Vec<Complaint>, GatewayError> {
        self.get_list("/complaints", &[]).await
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, GatewayError> {
        self.get_list("/feedback", &[]).await
    }

    async fn search_complaints(&self, query: &str) -> Result<Vec<Complaint>, GatewayError> {
        self.get_list("/complaints/search", &[("query", query)]).await
    }

    async fn search_complaints_by_date(
        &self,
        date: &str,
    ) -> Result<Vec<Complaint>, GatewayError> {
        self.get_list("/complaints/search/date", &[("date", date)]).await
    }

    async fn search_feedback_by_date(&self, date: &str) -> Result<Vec<Feedback>, GatewayError> {
        self.get_list("/feedback/search/date", &[("date", date)]).await
    }

    async fn complaint_stats(&self) -> Result<ComplaintStats, GatewayError> {
        self.get("/complaints/stats", &[]).await
    }

    async fn feedback_stats(&self) -> Result<FeedbackStats, GatewayError> {
        self.get("/feedback/stats", &[]).await
    }

    async fn create_complaint(
        &self,
        payload: &NewComplaint,
    ) -> Result<CreatedComplaint, GatewayError> {
        debug!("POST /complaints '{}'", payload.title);
        self.fetch(HTTP_CLIENT.post(self.url("/complaints")).json(payload))
            .await
    }

    async fn create_feedback(&self, payload: &NewFeedback) -> Result<Feedback, GatewayError> {
        debug!("POST /feedback ({})", payload.category);
        self.fetch(HTTP_CLIENT.post(self.url("/feedback")).json(payload))
            .await
    }

    async fn resolve_complaint(&self, id: ComplaintId) -> Result<Complaint, GatewayError> {
        let url = self.url(&format!("/complaints/{}/resolve", id));
        debug!("PUT {}", url);
        self.fetch(HTTP_CLIENT.put(url)).await
    }

    /// Denials come back as 403 with `{ success: false, error }`; that body is
    /// returned as a normal response so the caller can show the message.
    async fn login(&self, email: &str) -> Result<LoginResponse, GatewayError> {
        let request = HTTP_CLIENT.post(self.url("/login")).json(&LoginRequest {
            email: email.to_string(),
        });
        let (status, body) = self.send(request).await?;
        decode_login(status, &body)
    }
}

fn decode_login(status: u16, body: &str) -> Result<LoginResponse, GatewayError> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)?);
    }
    match serde_json::from_str::<LoginResponse>(body) {
        Ok(response) if status == 401 || status == 403 => Ok(response),
        _ => Err(http_error(status, body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_uses_body_message() {
        let err = http_error(404, r#"{"error": "Complaint not found"}"#);
        assert_eq!(
            err,
            GatewayError::Http {
                status: 404,
                message: "Complaint not found".into()
            }
        );
    }

    #[test]
    fn test_http_error_falls_back_to_generic() {
        for body in ["", "<html>oops</html>", r#"{"detail": "x"}"#] {
            let err = http_error(500, body);
            assert_eq!(
                err,
                GatewayError::Http {
                    status: 500,
                    message: "Server error".into()
                }
            );
        }
    }

    #[test]
    fn test_login_denial_is_decoded() {
        let body = r#"{"success": false, "error": "Access denied. Email not in allowed list."}"#;
        let response = decode_login(403, body).unwrap();
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Access denied. Email not in allowed list.")
        );
    }

    #[test]
    fn test_login_missing_email_is_error() {
        let err = decode_login(400, r#"{"error": "Email is required"}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Http { status: 400, .. }));
    }

    #[test]
    fn test_off_enum_record_is_skipped() {
        let body = r#"[
            {"id": 1, "title": "Broken AC", "description": "Room 204", "priority": "High", "status": "pending", "anonymous": true, "submittedAt": "2025-03-01T10:00:00"},
            {"id": 2, "title": "Wifi", "description": "Down", "priority": "high", "status": "pending", "anonymous": true, "submittedAt": "2025-03-02T10:00:00"}
        ]"#;
        let values: Vec<serde_json::Value> = serde_json::from_str(body).unwrap();
        let complaints: Vec<Complaint> = decode_records("/complaints", values);
        assert_eq!(complaints.len(), 1);
        assert_eq!(complaints[0].title, "Broken AC");
    }

    #[test]
    fn test_out_of_range_rating_is_skipped() {
        let body = r#"[
            {"category": "star", "rating": 9, "feedbackText": "", "anonymous": true, "status": "pending", "submittedAt": "2025-03-01T10:00:00"},
            {"category": "emoji", "rating": 4, "feedbackText": "Nice", "anonymous": true, "status": "pending", "submittedAt": "2025-03-01T11:00:00"}
        ]"#;
        let values: Vec<serde_json::Value> = serde_json::from_str(body).unwrap();
        let feedback: Vec<Feedback> = decode_records("/feedback", values);
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].rating.value(), 4);
    }

    #[test]
    fn test_base_url_trimmed() {
        let gateway = HttpGateway::new("http://localhost:5000/api/");
        assert_eq!(gateway.url("/complaints"), "http://localhost:5000/api/complaints");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let gateway = HttpGateway::new("http://127.0.0.1:9/api");
        let err = gateway.list_complaints().await.unwrap_err();
        assert!(matches!(err, GatewayError::Network(_)));
    }
}
