use gloo_net::http::Request;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("submission looked automated")]
    Spam,
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("The server rejected the message (status {0}).")]
    Rejected(u16),
}

impl ContactError {
    /// Problems the visitor can fix by editing the form.
    pub fn is_validation(&self) -> bool {
        matches!(self, ContactError::MissingField(_) | ContactError::InvalidEmail)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden from people; anything typed here came from a bot.
    pub bot_field: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if !self.bot_field.trim().is_empty() {
            return Err(ContactError::Spam);
        }
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }

    /// `application/x-www-form-urlencoded` body in the shape the host's form
    /// handler expects, `form-name` first.
    pub fn encode(&self) -> String {
        [
            ("form-name", config::CONTACT_FORM_NAME),
            (config::HONEYPOT_FIELD, self.bot_field.as_str()),
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("message", self.message.trim()),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Validates and posts the form. `Err(Spam)` is returned without sending
/// anything.
pub async fn submit(form: &ContactForm) -> Result<(), ContactError> {
    form.validate()?;

    let response = Request::post(config::get_form_endpoint())
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form.encode())
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Hello there & welcome".into(),
            bot_field: String::new(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_reported_in_order() {
        let mut form = filled();
        form.message = "   ".into();
        assert_eq!(form.validate(), Err(ContactError::MissingField("message")));

        form.name.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingField("name")));
        assert!(form.validate().unwrap_err().is_validation());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "jane",
            "@example.com",
            "jane@",
            "jane@example",
            "jane@example..com",
            "ja ne@example.com",
            "jane@evil@example.com",
        ] {
            let form = ContactForm { email: email.into(), ..filled() };
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn honeypot_wins_over_everything() {
        let form = ContactForm {
            bot_field: "http://spam.example".into(),
            name: String::new(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, ContactError::Spam);
        assert!(!err.is_validation());
    }

    #[test]
    fn encodes_with_form_name_first() {
        assert_eq!(
            filled().encode(),
            "form-name=contact&bot-field=&name=Jane%20Doe&email=jane%40example.com&message=Hello%20there%20%26%20welcome"
        );
    }
}
