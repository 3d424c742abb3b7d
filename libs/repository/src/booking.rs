use std::sync::Arc;

use chrono::Utc;
use entity::prelude::*;
use sea_orm::{
    prelude::Uuid, ActiveModelTrait, ActiveValue, ColumnTrait,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use tracing::info;

use crate::active_models::{prelude::*, *};
use crate::event::EventRepository;
use crate::pipeline::{before_create_booking, before_update_booking};
use crate::response::{IntoResponse, Response};
use crate::RepositoryError;

#[derive(Clone, Debug)]
pub struct BookingRepository {
    db: Arc<DatabaseConnection>,
    events: EventRepository,
}

impl BookingRepository {
    pub fn new(db: Arc<DatabaseConnection>, events: EventRepository) -> Self {
        Self { db, events }
    }
}

impl From<booking::Model> for BookingEntity {
    fn from(value: booking::Model) -> Self {
        Self {
            id: value.id,
            event_id: value.event_id,
            email: value.email,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

impl From<BookingEntity> for booking::ActiveModel {
    fn from(value: BookingEntity) -> Self {
        Self {
            id: ActiveValue::Set(value.id),
            event_id: ActiveValue::Set(value.event_id),
            email: ActiveValue::Set(value.email),
            created_at: ActiveValue::Set(value.created_at.naive_utc()),
            updated_at: ActiveValue::Set(value.updated_at.naive_utc()),
        }
    }
}

impl BookingRepository {
    /// Persists a booking once the referenced event is known to exist. A
    /// rejected booking writes nothing.
    pub async fn create(
        &self,
        booking: NewBookingEntity,
    ) -> Response<BookingEntity> {
        let booking = booking.into_booking(Utc::now())?;
        before_create_booking(&self.events, &booking).await?;

        let booking = booking::ActiveModel::from(booking)
            .insert(self.db.as_ref())
            .await
            .into_response("in booking insert")?;

        info!(
            task = "create booking",
            booking_id = %booking.id,
            event_id = %booking.event_id
        );

        Ok(BookingEntity::from(booking))
    }

    pub async fn update(
        &self,
        next: BookingEntity,
    ) -> Response<BookingEntity> {
        let current = self.find_by_id(next.id).await?.ok_or_else(|| {
            RepositoryError::NotFound {
                kind: "Booking",
                id: next.id.to_string(),
            }
        })?;

        let mut next = next;
        next.created_at = current.created_at;
        next.updated_at = Utc::now();
        next.normalize();
        next.validate()?;
        before_update_booking(&self.events, &current, &next).await?;

        let booking = booking::ActiveModel::from(next)
            .update(self.db.as_ref())
            .await
            .into_response("in booking update")?;

        Ok(BookingEntity::from(booking))
    }

    /// Bumps `updated_at` only. The event reference is untouched, so no
    /// existence check runs.
    pub async fn touch(&self, id: Uuid) -> Response<BookingEntity> {
        let booking = booking::ActiveModel {
            id: ActiveValue::Set(id),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await
        .into_response("in booking touch")?;

        Ok(BookingEntity::from(booking))
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Response<Option<BookingEntity>> {
        let booking = Booking::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .into_response("in booking find by id")?;

        Ok(booking.map(BookingEntity::from))
    }

    /// Newest first.
    pub async fn find_by_event(
        &self,
        event_id: Uuid,
    ) -> Response<Vec<BookingEntity>> {
        let bookings = Booking::find()
            .filter(booking::Column::EventId.eq(event_id))
            .order_by_desc(booking::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .into_response("in booking find by event")?;

        Ok(bookings.into_iter().map(BookingEntity::from).collect())
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Response<Vec<BookingEntity>> {
        let bookings = Booking::find()
            .filter(booking::Column::Email.eq(email.trim().to_lowercase()))
            .order_by_desc(booking::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .into_response("in booking find by email")?;

        Ok(bookings.into_iter().map(BookingEntity::from).collect())
    }

    pub async fn count_by_event(&self, event_id: Uuid) -> Response<u64> {
        Booking::find()
            .filter(booking::Column::EventId.eq(event_id))
            .count(self.db.as_ref())
            .await
            .into_response("in booking count by event")
    }
}
