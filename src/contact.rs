use std::rc::Rc;

use gloo_net::http::Request;
use log::info;
use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RelayError {
    #[error("could not encode contact message: {0}")]
    Encode(String),
    #[error("relay rejected the submission with status {status}")]
    Rejected { status: u16 },
    #[error("relay unreachable: {0}")]
    Transport(String),
}

impl RelayError {
    /// Text shown to the visitor. The details only go to the log.
    pub fn notice_text(&self) -> &'static str {
        match self {
            RelayError::Rejected { .. } => "Failed to send email. Please try again.",
            RelayError::Encode(_) | RelayError::Transport(_) => {
                "An error occurred. Please try again."
            }
        }
    }
}

pub const DELIVERED_TEXT: &str = "Email sent successfully!";

pub fn classify(status: u16) -> Result<(), RelayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RelayError::Rejected { status })
    }
}

/// Posts the message to the relay once. No retry, no timeout.
pub async fn deliver(endpoint: &str, message: &ContactMessage) -> Result<(), RelayError> {
    let request = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .json(message)
        .map_err(|e| RelayError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    info!("Relay answered with status {}", response.status());
    classify(response.status())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

pub enum ContactAction {
    Edit(Field, String),
    Begin,
    Finish { delivered: bool },
}

/// Controlled contact form fields plus the in-flight flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub in_flight: bool,
}

impl ContactForm {
    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => match field {
                Field::Name => self.name = value,
                Field::Email => self.email = value,
                Field::Message => self.message = value,
            },
            ContactAction::Begin => self.in_flight = true,
            ContactAction::Finish { delivered } => {
                if delivered {
                    self.name.clear();
                    self.email.clear();
                    self.message.clear();
                }
                self.in_flight = false;
            }
        }
    }

    pub fn outgoing(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Edit(Field::Name, "Ada".into()));
        form.apply(ContactAction::Edit(Field::Email, "ada@example.com".into()));
        form.apply(ContactAction::Edit(Field::Message, "Hello there".into()));
        form
    }

    #[test]
    fn success_clears_fields_and_flag() {
        let mut form = filled();
        form.apply(ContactAction::Begin);
        assert!(form.in_flight);

        let result = classify(200);
        form.apply(ContactAction::Finish { delivered: result.is_ok() });
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn failure_keeps_fields_and_clears_flag() {
        let mut form = filled();
        form.apply(ContactAction::Begin);

        let result = classify(500);
        form.apply(ContactAction::Finish { delivered: result.is_ok() });
        assert!(!form.in_flight);
        assert_eq!(form.outgoing(), filled().outgoing());
    }

    #[test]
    fn status_classification() {
        assert!(classify(200).is_ok());
        assert!(classify(204).is_ok());
        assert_eq!(classify(302), Err(RelayError::Rejected { status: 302 }));
        assert_eq!(classify(422), Err(RelayError::Rejected { status: 422 }));
    }

    #[test]
    fn notices_distinguish_rejection_from_transport() {
        assert_eq!(
            RelayError::Rejected { status: 400 }.notice_text(),
            "Failed to send email. Please try again."
        );
        assert_eq!(
            RelayError::Transport("offline".into()).notice_text(),
            "An error occurred. Please try again."
        );
    }

    #[test]
    fn message_serialises_with_relay_field_names() {
        let body = serde_json::to_value(filled().outgoing()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
            })
        );
    }
}
