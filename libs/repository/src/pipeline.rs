//! Stages run by the write paths of [`EventRepository`] and
//! [`BookingRepository`] before anything reaches the database.
//!
//! Events get their slug derived here. Bookings get the write-time check that
//! the referenced event exists. The check holds only at call time: nothing
//! stops the event being removed afterwards.
//!
//! [`EventRepository`]: crate::event::EventRepository
//! [`BookingRepository`]: crate::booking::BookingRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entity::{
    prelude::*, EntityError, ReferentialIntegrityError, ValidationError,
};
use sea_orm::prelude::Uuid;
use tracing::{debug, warn};

use crate::Response;

/// What the booking existence check asks of the event store.
#[async_trait]
pub trait EventLookup: Send + Sync {
    async fn event_exists(&self, event_id: Uuid) -> Response<bool>;
}

pub fn before_create_event(event: &mut EventEntity) {
    event.assign_slug();
}

/// Carries identity and creation time over from the stored record and
/// decides the slug: re-derived when the title changed, otherwise the stored
/// one is kept.
pub fn before_update_event(
    current: &EventEntity,
    next: &mut EventEntity,
    now: DateTime<Utc>,
) -> Result<(), ValidationError> {
    next.id = current.id;
    next.created_at = current.created_at;
    next.updated_at = now;
    next.normalize();

    if next.title != current.title {
        next.assign_slug();
    } else {
        next.slug = current.slug.clone();
    }

    next.validate()
}

pub async fn before_create_booking<L>(
    lookup: &L,
    booking: &BookingEntity,
) -> Result<(), EntityError>
where
    L: EventLookup + ?Sized,
{
    ensure_event_exists(lookup, booking.event_id).await
}

/// Only a changed `event_id` is looked up again.
pub async fn before_update_booking<L>(
    lookup: &L,
    current: &BookingEntity,
    next: &BookingEntity,
) -> Result<(), EntityError>
where
    L: EventLookup + ?Sized,
{
    if current.event_id == next.event_id {
        debug!(task = "before update booking", booking_id = %next.id);
        return Ok(());
    }

    ensure_event_exists(lookup, next.event_id).await
}

async fn ensure_event_exists<L>(
    lookup: &L,
    event_id: Uuid,
) -> Result<(), EntityError>
where
    L: EventLookup + ?Sized,
{
    match lookup.event_exists(event_id).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            warn!(task = "check event", event_id = %event_id, "not found");
            Err(ReferentialIntegrityError::new(event_id).into())
        }
        Err(e) => {
            warn!(
                task = "check event",
                event_id = %event_id,
                error = %e
            );
            Err(ValidationError::new(
                "eventId",
                "Invalid event ID format or database error",
            )
            .into())
        }
    }
}
