use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use super::config::RelayConfig;
use crate::contact::ContactMessage;

/// Payload accepted by the mail API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    #[error("mail api returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("mail api unreachable: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutboundMail) -> Result<(), MailError>;
}

/// Escapes the characters that would otherwise be read as markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_message_html(msg: &ContactMessage) -> String {
    let name = escape_html(&msg.name);
    let email = escape_html(&msg.email);
    let message = escape_html(&msg.message).replace('\n', "<br/>");
    format!(
        r#"<div style="font-family:Arial,sans-serif;line-height:1.6">
  <h2>New message from portfolio</h2>
  <p><b>Name:</b> {name}</p>
  <p><b>Email:</b> {email}</p>
  <p><b>Message:</b><br/>{message}</p>
</div>"#
    )
}

pub fn build_outbound(config: &RelayConfig, msg: &ContactMessage) -> OutboundMail {
    OutboundMail {
        from: config.from_email.clone(),
        to: vec![config.to_email.clone()],
        subject: format!("Portfolio message from {}", msg.name),
        html: render_message_html(msg),
        reply_to: msg.email.clone(),
    }
}

/// Delivers mail through the Resend HTTP API.
pub struct ResendMailer {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl ResendMailer {
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), MailError> {
        let resp = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(mail)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(MailError::Upstream { status, body });
        }
        Ok(())
    }
}
