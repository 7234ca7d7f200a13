//! Contact form contract
//!
//! Request payload, validation rules and the stored submission record.
//! Validation lives here so a client can run the exact same checks
//! locally and skip the network round-trip on failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Field limits ────────────────────────────────────────────────────

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_SUBJECT_LEN: usize = 3;
pub const MIN_MESSAGE_LEN: usize = 10;

/// Entity names (RFC 5321 for email; the rest are UX limits)
pub const MAX_NAME_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 2000;
pub const MAX_PHONE_LEN: usize = 50;

/// Contact form payload as posted by the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    /// What the visitor is interested in (product line, advisory, ...)
    pub interest: String,
    pub message: String,
}

impl ContactRequest {
    /// Run all validation rules, collecting every issue found.
    ///
    /// Returns `Ok(())` when the payload is submittable, otherwise the
    /// full list of human-readable problems for display.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();

        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            issues.push(format!(
                "name must be at least {MIN_NAME_LEN} characters"
            ));
        } else if name.len() > MAX_NAME_LEN {
            issues.push(format!("name is too long (max {MAX_NAME_LEN} chars)"));
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            issues.push("please provide a valid email address".to_string());
        } else if email.len() > MAX_EMAIL_LEN {
            issues.push(format!("email is too long (max {MAX_EMAIL_LEN} chars)"));
        }

        let subject = self.subject.trim();
        if subject.chars().count() < MIN_SUBJECT_LEN {
            issues.push(format!(
                "subject must be at least {MIN_SUBJECT_LEN} characters"
            ));
        } else if subject.len() > MAX_SUBJECT_LEN {
            issues.push(format!(
                "subject is too long (max {MAX_SUBJECT_LEN} chars)"
            ));
        }

        if self.interest.trim().is_empty() {
            issues.push("interest must not be empty".to_string());
        }

        let message = self.message.trim();
        if message.chars().count() < MIN_MESSAGE_LEN {
            issues.push(format!(
                "message must be at least {MIN_MESSAGE_LEN} characters"
            ));
        } else if message.len() > MAX_MESSAGE_LEN {
            issues.push(format!(
                "message is too long (max {MAX_MESSAGE_LEN} chars)"
            ));
        }

        if let Some(phone) = &self.phone
            && phone.len() > MAX_PHONE_LEN
        {
            issues.push(format!("phone is too long (max {MAX_PHONE_LEN} chars)"));
        }

        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }
}

/// Basic structural email check: one `@`, non-empty local part and a
/// dot somewhere inside the domain. Deliverability is the mail
/// provider's problem, not ours.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if email.contains(char::is_whitespace) {
        return false;
    }
    // Domain needs an interior dot
    match domain.find('.') {
        Some(idx) => idx > 0 && idx < domain.len() - 1,
        None => false,
    }
}

/// A received submission as persisted by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub request: ContactRequest,
}

impl ContactSubmission {
    pub fn new(request: ContactRequest) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            received_at: Utc::now(),
            request,
        }
    }
}

/// Acknowledgement returned to the submitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: String,
    pub status: &'static str,
}

impl ContactReceipt {
    pub fn received(id: String) -> Self {
        Self {
            id,
            status: "received",
        }
    }
}
