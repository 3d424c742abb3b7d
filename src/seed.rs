use chrono::NaiveDate;
use entity::{
    format_display_date, generate_slug, parse_event_time, prelude::*,
    FormatError,
};
use repository::{Repository, Response};
use serde::Deserialize;
use tracing::{error, info, warn};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedFile {
    pub events: Vec<NewEventEntity>,
    pub bookings: Vec<SeedBooking>,
}

/// A booking that names its event by slug.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedBooking {
    pub event: String,
    pub email: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub events_created: usize,
    pub events_skipped: usize,
    pub events_failed: usize,
    pub bookings_created: usize,
    pub bookings_failed: usize,
}

/// Seed times are written the way people write them (`9:00 AM`); storage
/// only takes 24-hour `HH:MM`.
pub fn prepare_event(
    mut event: NewEventEntity,
) -> Result<NewEventEntity, FormatError> {
    event.time = parse_event_time(&event.time)?;
    Ok(event)
}

pub async fn run(repository: &Repository, seed: SeedFile) -> Summary {
    let mut summary = Summary::default();

    for event in seed.events {
        let title = event.title.clone();
        let event = match prepare_event(event) {
            Ok(event) => event,
            Err(e) => {
                error!(task = "seed event", title, error = e.to_string());
                summary.events_failed += 1;
                continue;
            }
        };

        let slug = generate_slug(&title);
        if !slug.is_empty() {
            match repository.event.find_by_slug(&slug).await {
                Ok(Some(_)) => {
                    info!(task = "seed event", slug, "already stored");
                    summary.events_skipped += 1;
                    continue;
                }
                Ok(None) => {}
                Err(e) => {
                    error!(task = "seed event", slug, error = e.to_string());
                    summary.events_failed += 1;
                    continue;
                }
            }
        }

        match repository.event.create(event).await {
            Ok(_) => summary.events_created += 1,
            Err(e) => {
                error!(task = "seed event", title, error = e.to_string());
                summary.events_failed += 1;
            }
        }
    }

    for booking in seed.bookings {
        match seed_booking(repository, &booking).await {
            Ok(true) => summary.bookings_created += 1,
            Ok(false) => {
                warn!(
                    task = "seed booking",
                    event = booking.event,
                    "event not stored"
                );
                summary.bookings_failed += 1;
            }
            Err(e) => {
                error!(
                    task = "seed booking",
                    event = booking.event,
                    error = e.to_string()
                );
                summary.bookings_failed += 1;
            }
        }
    }

    summary
}

async fn seed_booking(
    repository: &Repository,
    booking: &SeedBooking,
) -> Response<bool> {
    let Some(event) = repository.event.find_by_slug(&booking.event).await?
    else {
        return Ok(false);
    };

    repository
        .booking
        .create(NewBookingEntity {
            event_id: event.id.to_string(),
            email: booking.email.clone(),
        })
        .await?;

    Ok(true)
}

pub async fn report_upcoming(
    repository: &Repository,
    from: NaiveDate,
) -> Response<()> {
    let events = repository.event.find_upcoming(from, None).await?;

    for event in events {
        let bookings = repository.booking.count_by_event(event.id).await?;
        info!(
            task = "upcoming",
            slug = event.slug,
            date = format_display_date(event.date),
            time = event.time,
            mode = %event.mode,
            bookings
        );
    }

    Ok(())
}
