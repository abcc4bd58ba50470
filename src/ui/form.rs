//! Contact form validation and the simulated send cycle
//!
//! Nothing is transmitted. A valid submission puts the button into a
//! disabled "Sending..." state for a fixed delay, then acknowledges and
//! resets.

use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const SENDING_LABEL: &str = "Sending...";

/// Form fields, in the order they appear on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Selector of the control inside the form
    pub fn selector(&self) -> &'static str {
        match self {
            Field::Name => "input[name=\"name\"]",
            Field::Email => "input[name=\"email\"]",
            Field::Subject => "input[name=\"subject\"]",
            Field::Message => "textarea[name=\"message\"]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingField(Field),
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Build from raw field values. Whitespace-only counts as empty; the
    /// first empty field is reported.
    pub fn validate(name: &str, email: &str, subject: &str, message: &str) -> Result<Self, FormError> {
        let values = [name, email, subject, message];
        for (field, value) in Field::ALL.iter().zip(values) {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(*field));
            }
        }
        Ok(Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            subject: subject.trim().to_owned(),
            message: message.trim().to_owned(),
        })
    }
}

/// Submit button state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    /// Waiting out the fake send; keeps the label to put back
    Sending { original_label: String },
}

/// What the page should show for a submit button state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
}

/// Drives the submit button through idle → sending → idle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFlow {
    state: SubmitState,
}

impl Default for SubmitFlow {
    fn default() -> Self {
        Self {
            state: SubmitState::Idle,
        }
    }
}

impl SubmitFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, SubmitState::Sending { .. })
    }

    /// Handle a submit. Invalid input leaves the flow idle; a submit while
    /// already sending is ignored.
    pub fn submit(
        &mut self,
        fields: [&str; 4],
        current_label: &str,
    ) -> Result<Option<ButtonView>, FormError> {
        let [name, email, subject, message] = fields;
        ContactMessage::validate(name, email, subject, message)?;
        if self.is_sending() {
            return Ok(None);
        }
        self.state = SubmitState::Sending {
            original_label: current_label.to_owned(),
        };
        Ok(Some(ButtonView {
            label: SENDING_LABEL.to_owned(),
            disabled: true,
        }))
    }

    /// The send delay elapsed. Returns the view to restore, if a send was
    /// in flight.
    pub fn finish(&mut self) -> Option<ButtonView> {
        match std::mem::replace(&mut self.state, SubmitState::Idle) {
            SubmitState::Sending { original_label } => Some(ButtonView {
                label: original_label,
                disabled: false,
            }),
            SubmitState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_each_empty_field() {
        let full = ["Ada", "ada@example.com", "Hello", "Hi there"];
        for (i, field) in Field::ALL.iter().enumerate() {
            let mut values = full;
            values[i] = "   ";
            let err = ContactMessage::validate(values[0], values[1], values[2], values[3]).unwrap_err();
            assert_eq!(err, FormError::MissingField(*field));
            assert_eq!(err.to_string(), VALIDATION_MESSAGE);
        }
    }

    #[test]
    fn test_validate_trims() {
        let msg = ContactMessage::validate(" Ada ", "a@b.c", "Hi", " body\n").unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.message, "body");
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut flow = SubmitFlow::new();
        let result = flow.submit(["Ada", "", "Hello", "Hi"], "Send Message");
        assert_eq!(result, Err(FormError::MissingField(Field::Email)));
        assert_eq!(flow.state(), &SubmitState::Idle);
        assert_eq!(flow.finish(), None);
    }

    #[test]
    fn test_send_cycle() {
        let mut flow = SubmitFlow::new();
        let view = flow
            .submit(["Ada", "ada@example.com", "Hello", "Hi"], "Send Message")
            .unwrap()
            .unwrap();
        assert_eq!(view.label, SENDING_LABEL);
        assert!(view.disabled);
        assert!(flow.is_sending());

        // Double submit while sending is ignored
        assert_eq!(flow.submit(["a", "b", "c", "d"], SENDING_LABEL), Ok(None));

        let restored = flow.finish().unwrap();
        assert_eq!(restored.label, "Send Message");
        assert!(!restored.disabled);
        assert_eq!(flow.state(), &SubmitState::Idle);
    }
}
