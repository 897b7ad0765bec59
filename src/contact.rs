//! Contact form payload and validation.
//!
//! The form's only contract is to collect three free-text fields and hand
//! them to the submit action; anything beyond logging the message
//! server-side is out of scope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("Please include an email address so I can reply")]
    MissingEmail,
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("Please write a message")]
    MissingMessage,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// First failing check wins, top to bottom, so the form shows one
    /// actionable hint at a time.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !plausible_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

/// Loose shape check, not RFC 5322: one `@` with a dotted, non-empty
/// domain. Real verification would need a round trip we don't do.
fn plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage::new("Ada", "ada@example.com", "Let's collaborate.")
    }

    #[test]
    fn complete_message_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn fields_are_trimmed() {
        let msg = ContactMessage::new("  Ada  ", " ada@example.com ", "  hi  ");
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn blank_fields_fail_in_order() {
        let mut msg = filled();
        msg.name.clear();
        assert_eq!(msg.validate(), Err(ContactError::MissingName));

        let mut msg = filled();
        msg.email.clear();
        assert_eq!(msg.validate(), Err(ContactError::MissingEmail));

        let mut msg = filled();
        msg.message.clear();
        assert_eq!(msg.validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn implausible_emails_are_rejected() {
        for email in ["ada", "@example.com", "ada@", "ada@example", "a@b@c.com", "ada@example..com"] {
            let mut msg = filled();
            msg.email = email.to_string();
            assert_eq!(msg.validate(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn plausible_emails_are_accepted() {
        for email in ["ada@example.com", "a.b@sub.example.co"] {
            let mut msg = filled();
            msg.email = email.to_string();
            assert_eq!(msg.validate(), Ok(()), "{email}");
        }
    }
}
