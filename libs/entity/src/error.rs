use std::fmt::Display;

/// A record failed a schema-shape check: missing required field, length,
/// enum or pattern violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A free-form time string could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid time format `{input}`: use HH:MM or HH:MM AM/PM")]
    Pattern { input: String },

    #[error("invalid time values in `{input}`")]
    OutOfRange { input: String },
}

/// A booking referenced an event that is not in the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Event with ID {event_id} does not exist")]
pub struct ReferentialIntegrityError {
    pub event_id: String,
}

impl ReferentialIntegrityError {
    pub fn new(event_id: impl Display) -> Self {
        Self {
            event_id: event_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    ReferentialIntegrity(#[from] ReferentialIntegrityError),
}
