#[cfg(feature = "hydrate")]
mod client;

#[cfg(feature = "hydrate")]
pub use client::send_contact;

use std::sync::LazyLock;

use http::StatusCode;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::site::Lang;

/// Path the contact form posts to.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern should compile"));

/// Loose `local@domain.tld` shape check, shared by the form and the relay.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A submitted message. Every field is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Joined per-field messages, used as the failure detail.
    fn summary(&self) -> String {
        [&self.name, &self.email, &self.message]
            .into_iter()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Checks the form fields and produces the trimmed message to send.
pub fn validate(fields: &ContactFields, lang: Lang) -> Result<ContactMessage, FieldErrors> {
    let texts = &lang.texts().form;
    let name = fields.name.trim();
    let email = fields.email.trim();
    let message = fields.message.trim();

    let mut errors = FieldErrors::default();
    if name.is_empty() {
        errors.name = Some(texts.name_required.to_string());
    }
    if email.is_empty() {
        errors.email = Some(texts.email_required.to_string());
    } else if !is_valid_email(email) {
        errors.email = Some(texts.email_invalid.to_string());
    }
    if message.is_empty() {
        errors.message = Some(texts.message_required.to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    Validation,
    Network,
    Server,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure {
        reason: FailureReason,
        detail: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Validating,
    Sending,
    Settled(SubmissionResult),
}

/// What a single call to the relay produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Accepted,
    /// The relay answered with a non-success status, optionally with its
    /// `error` text.
    Rejected { error: Option<String> },
    /// The request never completed.
    Unreachable,
}

#[derive(Deserialize)]
struct RelayErrorBody {
    error: Option<String>,
}

/// Maps a relay HTTP response onto an outcome.
pub fn classify_response(status: u16, body: &str) -> RelayOutcome {
    let ok = StatusCode::from_u16(status)
        .map(|s| s.is_success())
        .unwrap_or(false);
    if ok {
        return RelayOutcome::Accepted;
    }
    let error = serde_json::from_str::<RelayErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty());
    RelayOutcome::Rejected { error }
}

/// Client-side state of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    state: FormState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            errors: FieldErrors::default(),
            state: FormState::Editing,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, FormState::Sending)
    }

    /// Updates one field. Clears that field's error and any settled result.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        *self.errors.slot(field) = None;
        if matches!(self.state, FormState::Settled(_)) {
            self.state = FormState::Editing;
        }
    }

    /// Validates the fields. Returns the message to send, or `None` when
    /// validation failed or a submission is already in flight.
    pub fn begin_submit(&mut self, lang: Lang) -> Option<ContactMessage> {
        if self.is_sending() {
            return None;
        }
        self.state = FormState::Validating;
        match validate(&self.fields, lang) {
            Ok(message) => {
                self.errors = FieldErrors::default();
                self.state = FormState::Sending;
                Some(message)
            }
            Err(errors) => {
                let detail = errors.summary();
                self.errors = errors;
                self.state = FormState::Settled(SubmissionResult::Failure {
                    reason: FailureReason::Validation,
                    detail,
                });
                None
            }
        }
    }

    /// Records the outcome of the request started by [`Self::begin_submit`].
    pub fn settle(&mut self, outcome: RelayOutcome, lang: Lang) {
        let texts = &lang.texts().form;
        let result = match outcome {
            RelayOutcome::Accepted => {
                self.fields = ContactFields::default();
                SubmissionResult::Success
            }
            RelayOutcome::Rejected { error } => SubmissionResult::Failure {
                reason: FailureReason::Server,
                detail: error.unwrap_or_else(|| texts.send_failed.to_string()),
            },
            RelayOutcome::Unreachable => SubmissionResult::Failure {
                reason: FailureReason::Network,
                detail: texts.network_error.to_string(),
            },
        };
        self.state = FormState::Settled(result);
    }

    /// Banner shown under the form: `Ok` for the confirmation, `Err` for a
    /// send failure. Validation failures are shown per field instead.
    pub fn banner(&self, lang: Lang) -> Option<Result<&'static str, &str>> {
        match &self.state {
            FormState::Settled(SubmissionResult::Success) => Some(Ok(lang.texts().form.sent)),
            FormState::Settled(SubmissionResult::Failure { reason, detail })
                if *reason != FailureReason::Validation =>
            {
                Some(Err(detail.as_str()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, name);
        form.edit(Field::Email, email);
        form.edit(Field::Message, message);
        form
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("x@y.z"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.c"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_empty_name_fails_name_only_without_request() {
        let mut form = filled("", "a@b.c", "hi");
        assert!(form.begin_submit(Lang::En).is_none());
        assert_eq!(form.error(Field::Name), Some("Name is required."));
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error(Field::Message), None);
        assert!(matches!(
            form.state(),
            FormState::Settled(SubmissionResult::Failure {
                reason: FailureReason::Validation,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_email_fails_email_field() {
        let mut form = filled("A", "not-an-email", "hi");
        assert!(form.begin_submit(Lang::En).is_none());
        assert_eq!(form.error(Field::Email), Some("Enter a valid email."));
        assert_eq!(form.error(Field::Name), None);
    }

    #[test]
    fn test_whitespace_only_fields_are_empty() {
        let mut form = filled("   ", " \t", "\n");
        assert!(form.begin_submit(Lang::En).is_none());
        assert_eq!(form.error(Field::Name), Some("Name is required."));
        assert_eq!(form.error(Field::Email), Some("Email is required."));
        assert_eq!(form.error(Field::Message), Some("Message is required."));
    }

    #[test]
    fn test_validation_messages_are_localized() {
        let mut form = filled("", "x", "");
        form.begin_submit(Lang::Az);
        assert_eq!(form.error(Field::Name), Some("Ad vacibdir."));
        assert_eq!(form.error(Field::Email), Some("Düzgün email daxil et."));
        assert_eq!(form.error(Field::Message), Some("Mesaj vacibdir."));
    }

    #[test]
    fn test_valid_submit_sends_trimmed_message() {
        let mut form = filled("  Ada ", " ada@example.com ", " hello\n");
        let message = form.begin_submit(Lang::En).expect("form is valid");
        assert_eq!(
            message,
            ContactMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "hello".to_string(),
            }
        );
        assert!(form.is_sending());
        // a second click while in flight does nothing
        assert!(form.begin_submit(Lang::En).is_none());
        assert!(form.is_sending());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled("A", "a@b.co", "hi");
        form.begin_submit(Lang::En).unwrap();
        form.settle(classify_response(200, r#"{"ok":true}"#), Lang::En);
        assert_eq!(form.state(), &FormState::Settled(SubmissionResult::Success));
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.value(Field::Message), "");
        assert_eq!(form.banner(Lang::En), Some(Ok("Message sent successfully.")));
    }

    #[test]
    fn test_server_error_text_is_shown_and_fields_kept() {
        let mut form = filled("A", "a@b.co", "hi");
        form.begin_submit(Lang::En).unwrap();
        form.settle(
            classify_response(500, r#"{"error":"Failed to send email.","details":"quota"}"#),
            Lang::En,
        );
        assert_eq!(
            form.state(),
            &FormState::Settled(SubmissionResult::Failure {
                reason: FailureReason::Server,
                detail: "Failed to send email.".to_string(),
            })
        );
        assert_eq!(form.banner(Lang::En), Some(Err("Failed to send email.")));
        assert_eq!(form.value(Field::Name), "A");
        assert_eq!(form.value(Field::Email), "a@b.co");
        assert_eq!(form.value(Field::Message), "hi");
    }

    #[test]
    fn test_server_error_without_text_uses_generic_message() {
        let mut form = filled("A", "a@b.co", "hi");
        form.begin_submit(Lang::En).unwrap();
        form.settle(classify_response(502, "<html>bad gateway</html>"), Lang::En);
        assert_eq!(form.banner(Lang::En), Some(Err("Failed to send. Try again.")));
    }

    #[test]
    fn test_network_failure() {
        let mut form = filled("A", "a@b.co", "hi");
        form.begin_submit(Lang::Az).unwrap();
        form.settle(RelayOutcome::Unreachable, Lang::Az);
        assert!(matches!(
            form.state(),
            FormState::Settled(SubmissionResult::Failure {
                reason: FailureReason::Network,
                ..
            })
        ));
        assert_eq!(form.banner(Lang::Az), Some(Err("Şəbəkə xətası. Yenidən yoxla.")));
        assert_eq!(form.value(Field::Message), "hi");
    }

    #[test]
    fn test_editing_after_settle_returns_to_editing() {
        let mut form = filled("", "bad", "hi");
        form.begin_submit(Lang::En);
        form.edit(Field::Name, "A");
        assert_eq!(form.state(), &FormState::Editing);
        assert_eq!(form.error(Field::Name), None);
        // other field errors stay until that field is edited
        assert_eq!(form.error(Field::Email), Some("Enter a valid email."));

        let mut form = filled("A", "a@b.co", "hi");
        form.begin_submit(Lang::En).unwrap();
        form.settle(RelayOutcome::Accepted, Lang::En);
        form.edit(Field::Message, "again");
        assert_eq!(form.state(), &FormState::Editing);
        assert_eq!(form.banner(Lang::En), None);
    }

    #[test]
    fn test_classify_response() {
        assert_eq!(classify_response(200, ""), RelayOutcome::Accepted);
        assert_eq!(
            classify_response(400, r#"{"error":"Invalid email."}"#),
            RelayOutcome::Rejected {
                error: Some("Invalid email.".to_string())
            }
        );
        assert_eq!(
            classify_response(500, r#"{"error":""}"#),
            RelayOutcome::Rejected { error: None }
        );
        assert_eq!(
            classify_response(999, ""),
            RelayOutcome::Rejected { error: None }
        );
    }
}
