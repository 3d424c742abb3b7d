use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{generate_slug, is_storage_time, ValidationError};

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MAX_OVERVIEW_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    /// Derived from `title` by the write pipeline. Whatever a caller puts
    /// here is overwritten on create and restored on update.
    pub slug: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: String,
    pub mode: Mode,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Online,
    #[default]
    Offline,
    Hybrid,
}

impl Mode {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("mode", "Mode is required"));
        }

        Mode::from_str(value).map_err(|_| {
            ValidationError::new(
                "mode",
                "Mode must be either online, offline, or hybrid",
            )
        })
    }
}

impl Event {
    pub fn assign_slug(&mut self) {
        self.slug = generate_slug(&self.title);
    }

    /// Trims the free-text fields the way they are stored.
    pub fn normalize(&mut self) {
        for field in [
            &mut self.title,
            &mut self.description,
            &mut self.overview,
            &mut self.image,
            &mut self.venue,
            &mut self.location,
            &mut self.audience,
            &mut self.organizer,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
        self.slug = self.slug.trim().to_lowercase();

        // stored times are always `HH:MM`, so the text column sorts by time
        self.time = self.time.trim().to_string();
        if self.time.len() == 4 && is_storage_time(&self.time) {
            self.time.insert(0, '0');
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        required("title", "Title", &self.title)?;
        max_len("title", "Title", &self.title, MAX_TITLE_LEN)?;
        required("description", "Description", &self.description)?;
        max_len(
            "description",
            "Description",
            &self.description,
            MAX_DESCRIPTION_LEN,
        )?;
        required("overview", "Overview", &self.overview)?;
        max_len("overview", "Overview", &self.overview, MAX_OVERVIEW_LEN)?;
        required("image", "Image", &self.image)?;
        required("venue", "Venue", &self.venue)?;
        required("location", "Location", &self.location)?;
        required("time", "Event time", &self.time)?;
        if !is_storage_time(&self.time) {
            return Err(ValidationError::new(
                "time",
                "Time must be in HH:MM format (24-hour)",
            ));
        }
        required("audience", "Audience", &self.audience)?;
        if self.agenda.is_empty() {
            return Err(ValidationError::new(
                "agenda",
                "At least one agenda item is required.",
            ));
        }
        required("organizer", "Organizer", &self.organizer)?;
        if self.tags.is_empty() {
            return Err(ValidationError::new(
                "tags",
                "At least one tag is required.",
            ));
        }

        Ok(())
    }
}

fn required(
    field: &'static str,
    label: &str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{label} is required")));
    }
    Ok(())
}

fn max_len(
    field: &'static str,
    label: &str,
    value: &str,
    limit: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > limit {
        return Err(ValidationError::new(
            field,
            format!("{label} cannot exceed {limit} characters"),
        ));
    }
    Ok(())
}

/// Event fields as they arrive from outside, before any checks. Carries no
/// `slug`; that is always derived from the title.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
}

impl NewEvent {
    /// Checks the input once and builds a record with a fresh identity.
    /// The slug is left empty for the create pipeline to fill.
    pub fn into_event(
        self,
        now: DateTime<Utc>,
    ) -> Result<Event, ValidationError> {
        let date = self.date.ok_or_else(|| {
            ValidationError::new("date", "Event date is required")
        })?;
        let mode = Mode::parse(&self.mode)?;

        let mut event = Event {
            id: Uuid::new_v4(),
            title: self.title,
            slug: String::new(),
            description: self.description,
            overview: self.overview,
            image: self.image,
            venue: self.venue,
            location: self.location,
            date,
            time: self.time.trim().to_string(),
            mode,
            audience: self.audience,
            agenda: self.agenda,
            organizer: self.organizer,
            tags: self.tags,
            created_at: now,
            updated_at: now,
        };
        event.normalize();
        event.validate()?;

        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn new_event() -> NewEvent {
        NewEvent {
            title: "  React Summit 2025 ".to_string(),
            description: "The largest React conference worldwide.".to_string(),
            overview: "Deep dives into the React ecosystem.".to_string(),
            image: "/images/event1.png".to_string(),
            venue: "Kromhouthal".to_string(),
            location: "Amsterdam, Netherlands".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 12),
            time: "09:00".to_string(),
            mode: "hybrid".to_string(),
            audience: "Frontend engineers".to_string(),
            agenda: vec!["Keynote".to_string(), "Workshops".to_string()],
            organizer: "GitNation".to_string(),
            tags: vec!["react".to_string(), "frontend".to_string()],
        }
    }

    #[test]
    fn test_into_event_normalizes_and_leaves_slug_empty() {
        // Arrange
        let now = Utc::now();

        // Act
        let event = new_event().into_event(now).unwrap();

        // Assert
        assert_eq!(event.title, "React Summit 2025");
        assert_eq!(event.slug, "");
        assert_eq!(event.mode, Mode::Hybrid);
        assert_eq!(event.created_at, now);
        assert_eq!(event.updated_at, now);
        assert!(!event.id.is_nil());
    }

    #[test]
    fn test_assign_slug_follows_title() {
        let mut event = new_event().into_event(Utc::now()).unwrap();

        event.assign_slug();

        assert_eq!(event.slug, "react-summit-2025");
    }

    #[test]
    fn test_into_event_requires_fields() {
        let cases: [(fn(&mut NewEvent), &str, &str); 6] = [
            (|e| e.title = "   ".to_string(), "title", "Title is required"),
            (|e| e.date = None, "date", "Event date is required"),
            (|e| e.mode = String::new(), "mode", "Mode is required"),
            (|e| e.venue.clear(), "venue", "Venue is required"),
            (
                |e| e.agenda.clear(),
                "agenda",
                "At least one agenda item is required.",
            ),
            (|e| e.tags.clear(), "tags", "At least one tag is required."),
        ];

        for (mutate, field, message) in cases {
            // Arrange
            let mut input = new_event();
            mutate(&mut input);

            // Act
            let err = input.into_event(Utc::now()).unwrap_err();

            // Assert
            assert_eq!(err, ValidationError::new(field, message));
        }
    }

    #[test]
    fn test_into_event_length_limits() {
        let mut input = new_event();
        input.title = "t".repeat(MAX_TITLE_LEN);
        assert!(input.clone().into_event(Utc::now()).is_ok());

        input.title = "t".repeat(MAX_TITLE_LEN + 1);
        let err = input.into_event(Utc::now()).unwrap_err();
        assert_eq!(err.message, "Title cannot exceed 100 characters");

        let mut input = new_event();
        input.overview = "o".repeat(MAX_OVERVIEW_LEN + 1);
        let err = input.into_event(Utc::now()).unwrap_err();
        assert_eq!(err.field, "overview");

        let mut input = new_event();
        input.description = "d".repeat(MAX_DESCRIPTION_LEN + 1);
        let err = input.into_event(Utc::now()).unwrap_err();
        assert_eq!(err.field, "description");
    }

    #[test]
    fn test_into_event_pads_single_digit_hour() {
        // Arrange
        let mut input = new_event();
        input.time = " 9:30".to_string();

        // Act
        let event = input.into_event(Utc::now()).unwrap();

        // Assert
        assert_eq!(event.time, "09:30");
        assert!(event.time.as_str() < "10:00");
    }

    #[test]
    fn test_into_event_rejects_free_form_time() {
        let mut input = new_event();
        input.time = "9:00 AM".to_string();

        let err = input.into_event(Utc::now()).unwrap_err();

        assert_eq!(err.message, "Time must be in HH:MM format (24-hour)");
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("online").unwrap(), Mode::Online);
        assert_eq!(Mode::parse("offline").unwrap(), Mode::Offline);
        assert_eq!(Mode::parse("hybrid").unwrap(), Mode::Hybrid);
        assert_eq!(
            Mode::parse("in-person").unwrap_err().message,
            "Mode must be either online, offline, or hybrid"
        );
        assert!(Mode::parse("Online").is_err());
        assert_eq!(Mode::Hybrid.to_string(), "hybrid");
    }

    #[test]
    fn test_event_serializes_camel_case() {
        let event = new_event().into_event(Utc::now()).unwrap();

        let json = serde_json::to_value(&event).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["mode"], "hybrid");
    }
}
