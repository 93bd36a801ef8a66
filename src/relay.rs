//! Contact relay.
//!
//! Receives the contact form's JSON body, checks it again on the server and
//! forwards it to the mail API. Each request is independent; the relay keeps
//! no state besides its configuration.

mod config;
mod mailer;

pub use config::RelayConfig;
pub use mailer::{
    build_outbound, escape_html, render_message_html, MailError, Mailer, OutboundMail,
    ResendMailer,
};

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::contact::{is_valid_email, ContactMessage, CONTACT_ENDPOINT};

#[derive(Clone)]
pub struct RelayState {
    pub config: Arc<RelayConfig>,
    /// `None` when no mail credential is configured.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl RelayState {
    pub fn new(config: RelayConfig, mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self {
            config: Arc::new(config),
            mailer,
        }
    }

    /// Uses the Resend API when a credential is present.
    pub fn from_config(config: RelayConfig) -> Self {
        let mailer = config.api_key.as_ref().map(|key| {
            Arc::new(ResendMailer::new(key.clone(), config.api_url.clone())) as Arc<dyn Mailer>
        });
        Self::new(config, mailer)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Bad request.")]
    BadRequest,
    #[error("Missing fields.")]
    MissingFields,
    #[error("Invalid email.")]
    InvalidEmail,
    #[error("Server email is not configured.")]
    NotConfigured,
    #[error("Failed to send email.")]
    Upstream(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        match self {
            RelayError::BadRequest | RelayError::MissingFields | RelayError::InvalidEmail => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": error }))).into_response()
            }
            RelayError::NotConfigured => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": error }))).into_response()
            }
            RelayError::Upstream(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error, "details": details })),
            )
                .into_response(),
        }
    }
}

/// Reads a body field as trimmed text. Missing or null fields read as empty.
fn field_text(body: &Value, key: &str) -> String {
    match body.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

/// Checks a raw request body and turns it into a message.
pub fn parse_message(body: &[u8]) -> Result<ContactMessage, RelayError> {
    let body = serde_json::from_slice::<Value>(body).map_err(|_| RelayError::BadRequest)?;
    let msg = ContactMessage {
        name: field_text(&body, "name"),
        email: field_text(&body, "email"),
        message: field_text(&body, "message"),
    };
    if msg.name.is_empty() || msg.email.is_empty() || msg.message.is_empty() {
        return Err(RelayError::MissingFields);
    }
    if !is_valid_email(&msg.email) {
        return Err(RelayError::InvalidEmail);
    }
    Ok(msg)
}

pub async fn contact(State(state): State<RelayState>, body: Bytes) -> Result<Json<Value>, RelayError> {
    let msg = parse_message(&body).inspect_err(|e| tracing::debug!(error = %e, "contact rejected"))?;

    let Some(mailer) = state.mailer.as_ref() else {
        tracing::error!("RESEND_API_KEY is not set, contact message dropped");
        return Err(RelayError::NotConfigured);
    };

    let mail = build_outbound(&state.config, &msg);
    match mailer.send(&mail).await {
        Ok(()) => {
            tracing::info!("contact message relayed");
            Ok(Json(json!({ "ok": true })))
        }
        Err(MailError::Upstream { status, body }) => {
            tracing::warn!(%status, "mail api rejected contact message");
            Err(RelayError::Upstream(body))
        }
        Err(e @ MailError::Transport(_)) => {
            tracing::warn!(error = %e, "mail api dispatch failed");
            Err(RelayError::BadRequest)
        }
    }
}

pub fn router(state: RelayState) -> Router {
    Router::new()
        .route(CONTACT_ENDPOINT, post(contact))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;

    struct RecordingMailer {
        sent: Mutex<Vec<OutboundMail>>,
        result: Result<(), MailError>,
    }

    impl RecordingMailer {
        fn new(result: Result<(), MailError>) -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                result,
            })
        }

        fn sent(&self) -> Vec<OutboundMail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, mail: &OutboundMail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(mail.clone());
            self.result.clone()
        }
    }

    fn state_with(mailer: &Arc<RecordingMailer>) -> RelayState {
        RelayState::new(RelayConfig::default(), Some(mailer.clone() as Arc<dyn Mailer>))
    }

    async fn post_contact(state: RelayState, body: &str) -> (StatusCode, Value) {
        let response = router(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(CONTACT_ENDPOINT)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_message_is_relayed() {
        let mailer = RecordingMailer::new(Ok(()));
        let (status, body) = post_contact(
            state_with(&mailer),
            r#"{"name":" Ada ","email":"ada@example.com","message":"hi\nthere"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Portfolio message from Ada");
        assert_eq!(sent[0].reply_to, "ada@example.com");
        assert!(sent[0].html.contains("hi<br/>there"));
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_without_sending() {
        let mailer = RecordingMailer::new(Ok(()));
        let (status, body) = post_contact(
            state_with(&mailer),
            r#"{"name":"A","email":"bad","message":"hi"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email.");
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let mailer = RecordingMailer::new(Ok(()));
        for payload in [
            r#"{"name":"A","email":"a@b.co"}"#,
            r#"{"name":"   ","email":"a@b.co","message":"hi"}"#,
            r#"{"name":null,"email":"a@b.co","message":"hi"}"#,
            r#"[1, 2, 3]"#,
        ] {
            let (status, body) = post_contact(state_with(&mailer), payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
            assert_eq!(body["error"], "Missing fields.", "{payload}");
        }
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_body() {
        let mailer = RecordingMailer::new(Ok(()));
        let (status, body) = post_contact(state_with(&mailer), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad request.");
    }

    #[tokio::test]
    async fn test_missing_credential() {
        let state = RelayState::from_config(RelayConfig::default());
        assert!(state.mailer.is_none());
        let (status, body) = post_contact(
            state,
            r#"{"name":"A","email":"a@b.co","message":"hi"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server email is not configured.");
    }

    #[tokio::test]
    async fn test_upstream_failure_carries_details() {
        let mailer = RecordingMailer::new(Err(MailError::Upstream {
            status: 422,
            body: "invalid from address".to_string(),
        }));
        let (status, body) = post_contact(
            state_with(&mailer),
            r#"{"name":"A","email":"a@b.co","message":"hi"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to send email.");
        assert_eq!(body["details"], "invalid from address");
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_generic_client_error() {
        let mailer = RecordingMailer::new(Err(MailError::Transport("connection reset".to_string())));
        let (status, body) = post_contact(
            state_with(&mailer),
            r#"{"name":"A","email":"a@b.co","message":"hi"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad request.");
    }

    #[tokio::test]
    async fn test_script_in_message_is_escaped() {
        let mailer = RecordingMailer::new(Ok(()));
        post_contact(
            state_with(&mailer),
            r#"{"name":"A","email":"a@b.co","message":"<script>alert(1)</script>"}"#,
        )
        .await;
        let html = &mailer.sent()[0].html;
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_parse_message_stringifies_scalars() {
        let msg = parse_message(br#"{"name":42,"email":"a@b.co","message":true}"#).unwrap();
        assert_eq!(msg.name, "42");
        assert_eq!(msg.message, "true");
    }
}
