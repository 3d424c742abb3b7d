use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{validate_email, ValidationError};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub event_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn normalize(&mut self) {
        self.email = self.email.trim().to_lowercase();
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.event_id.is_nil() {
            return Err(ValidationError::new("eventId", "Event ID is required"));
        }

        if self.email.is_empty() {
            return Err(ValidationError::new("email", "Email is required"));
        }

        if !validate_email(&self.email) {
            return Err(ValidationError::new(
                "email",
                "Invalid email format. Please provide a valid email address.",
            ));
        }

        Ok(())
    }
}

/// Booking request as it arrives from outside.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBooking {
    pub event_id: String,
    pub email: String,
}

impl NewBooking {
    /// Parses the event reference and normalizes the email. Existence of the
    /// event is checked later, by the create pipeline.
    pub fn into_booking(
        self,
        now: DateTime<Utc>,
    ) -> Result<Booking, ValidationError> {
        let event_id = self.event_id.trim();
        if event_id.is_empty() {
            return Err(ValidationError::new("eventId", "Event ID is required"));
        }

        let event_id = Uuid::parse_str(event_id).map_err(|_| {
            ValidationError::new("eventId", "Invalid event ID format")
        })?;

        let mut booking = Booking {
            id: Uuid::new_v4(),
            event_id,
            email: self.email,
            created_at: now,
            updated_at: now,
        };
        booking.normalize();
        booking.validate()?;

        Ok(booking)
    }
}
