//! Contact form state, validation and relay payload.
//!
//! The relay itself is an opaque collaborator: `submit(payload) -> ok | error`.
//! This module decides whether to call it at all and turns its answer into
//! a status line.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MSG_SENT: &str = "Thanks! I'll get back to you shortly.";
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong. Try again?";
pub const MSG_NETWORK_FAILURE: &str = "Network error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Form control `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{} is required", .0.name())]
    Required(Field),
    #[error("enter a valid email address")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(f) => *f,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Form endpoint not set.")]
    EndpointMissing,
    #[error("network error: {0}")]
    Network(String),
    #[error("relay rejected submission ({status})")]
    Rejected { status: u16, message: Option<String> },
}

impl ContactError {
    /// Line shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::EndpointMissing => self.to_string(),
            ContactError::Network(_) => MSG_NETWORK_FAILURE.to_string(),
            ContactError::Rejected { message, .. } => message
                .clone()
                .unwrap_or_else(|| MSG_GENERIC_FAILURE.to_string()),
        }
    }
}

/// JSON body POSTed to the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Vec<RelayErrorItem>,
}

#[derive(Deserialize)]
struct RelayErrorItem {
    message: Option<String>,
}

/// `errors[0].message` from a relay error body, if present and non-blank.
pub fn relay_error_message(body: &str) -> Option<String> {
    let parsed: RelayErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .next()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden honeypot; people never fill it in.
    pub company: String,
}

impl ContactForm {
    pub fn is_spam(&self) -> bool {
        !self.company.is_empty()
    }

    pub fn validate(&self) -> Result<ContactPayload, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() {
            errors.push(FieldError::Required(Field::Name));
        }
        if email.is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !looks_like_email(email) {
            errors.push(FieldError::InvalidEmail);
        }
        if message.is_empty() {
            errors.push(FieldError::Required(Field::Message));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactPayload {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !domain.ends_with('.')
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

impl SubmitStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Sent(m) | SubmitStatus::Failed(m) => Some(m),
            _ => None,
        }
    }
}

/// What the caller should do after [`ContactState::submit`].
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitAction {
    /// Nothing to send and nothing to show (honeypot, or already sending).
    Ignore,
    /// Per-field errors are set; fix and resubmit.
    Invalid,
    /// Status carries a message explaining why nothing was sent.
    Blocked,
    /// POST this payload to the endpoint, then call [`ContactState::finish`].
    Send { endpoint: String, payload: ContactPayload },
}

#[derive(Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
    pub errors: Vec<FieldError>,
}

impl ContactState {
    pub fn submit(&mut self, endpoint: Option<&str>) -> SubmitAction {
        if self.status.is_sending() {
            return SubmitAction::Ignore;
        }
        if self.form.is_spam() {
            log::debug!("[contact] honeypot filled, dropping submission");
            return SubmitAction::Ignore;
        }
        let payload = match self.form.validate() {
            Ok(p) => p,
            Err(errors) => {
                self.errors = errors;
                return SubmitAction::Invalid;
            }
        };
        self.errors.clear();
        let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) else {
            self.status = SubmitStatus::Failed(ContactError::EndpointMissing.user_message());
            return SubmitAction::Blocked;
        };
        self.status = SubmitStatus::Sending;
        SubmitAction::Send {
            endpoint: endpoint.to_string(),
            payload,
        }
    }

    pub fn finish(&mut self, result: Result<(), ContactError>) {
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Sent(MSG_SENT.to_string());
                self.form.clear();
            }
            Err(e) => {
                log::warn!("[contact] submission failed: {}", e);
                self.status = SubmitStatus::Failed(e.user_message());
            }
        }
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }
}
