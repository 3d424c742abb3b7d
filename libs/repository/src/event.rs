use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use entity::{is_valid_slug, prelude::*, ValidationError};
use sea_orm::sea_query::Expr;
use sea_orm::{
    prelude::Uuid, ActiveModelTrait, ActiveValue, ColumnTrait,
    DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::info;

use crate::active_models::{prelude::*, *};
use crate::pipeline::{before_create_event, before_update_event, EventLookup};
use crate::response::{IntoResponse, Response};
use crate::RepositoryError;

#[derive(Clone, Debug)]
pub struct EventRepository {
    db: Arc<DatabaseConnection>,
}

impl EventRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct EventId {
    #[allow(dead_code)]
    id: Uuid,
}

impl From<event::Model> for EventEntity {
    fn from(value: event::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug,
            description: value.description,
            overview: value.overview,
            image: value.image,
            venue: value.venue,
            location: value.location,
            date: value.date,
            time: value.time,
            mode: value.mode.into(),
            audience: value.audience,
            agenda: value.agenda,
            organizer: value.organizer,
            tags: value.tags,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

impl From<EventEntity> for event::ActiveModel {
    fn from(value: EventEntity) -> Self {
        Self {
            id: ActiveValue::Set(value.id),
            title: ActiveValue::Set(value.title),
            slug: ActiveValue::Set(value.slug),
            description: ActiveValue::Set(value.description),
            overview: ActiveValue::Set(value.overview),
            image: ActiveValue::Set(value.image),
            venue: ActiveValue::Set(value.venue),
            location: ActiveValue::Set(value.location),
            date: ActiveValue::Set(value.date),
            time: ActiveValue::Set(value.time),
            mode: ActiveValue::Set(value.mode.into()),
            audience: ActiveValue::Set(value.audience),
            agenda: ActiveValue::Set(value.agenda),
            organizer: ActiveValue::Set(value.organizer),
            tags: ActiveValue::Set(value.tags),
            created_at: ActiveValue::Set(value.created_at.naive_utc()),
            updated_at: ActiveValue::Set(value.updated_at.naive_utc()),
        }
    }
}

impl EventRepository {
    pub async fn create(&self, event: NewEventEntity) -> Response<EventEntity> {
        let mut event = event.into_event(Utc::now())?;
        before_create_event(&mut event);

        let event = event::ActiveModel::from(event)
            .insert(self.db.as_ref())
            .await
            .into_response("in event insert")?;

        info!(task = "create event", slug = %event.slug);

        Ok(EventEntity::from(event))
    }

    /// Replaces the stored event with `next`. Identity, creation time and
    /// slug are decided by the update pipeline, not by the caller.
    pub async fn update(&self, next: EventEntity) -> Response<EventEntity> {
        let current = self.find_by_id(next.id).await?.ok_or_else(|| {
            RepositoryError::NotFound {
                kind: "Event",
                id: next.id.to_string(),
            }
        })?;

        let mut next = next;
        before_update_event(&current, &mut next, Utc::now())?;

        let event = event::ActiveModel::from(next)
            .update(self.db.as_ref())
            .await
            .into_response("in event update")?;

        Ok(EventEntity::from(event))
    }

    pub async fn find_all(&self) -> Response<Vec<EventEntity>> {
        let events = Event::find()
            .order_by_desc(event::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .into_response("in event find all")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    pub async fn find(
        &self,
        offset: u64,
        limit: u64,
    ) -> Response<Vec<EventEntity>> {
        let events = Event::find()
            .order_by_desc(event::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await
            .into_response("in event find")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Response<Option<EventEntity>> {
        let event = Event::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .into_response("in event find by id")?;

        Ok(event.map(EventEntity::from))
    }

    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Response<Option<EventEntity>> {
        if !is_valid_slug(slug) {
            return Err(ValidationError::new(
                "slug",
                "Invalid slug format. Slug must contain only lowercase letters, numbers, and hyphens",
            )
            .into());
        }

        let event = Event::find()
            .filter(event::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await
            .into_response("in event find by slug")?;

        Ok(event.map(EventEntity::from))
    }

    /// Events on or after `from`, soonest first.
    pub async fn find_upcoming(
        &self,
        from: NaiveDate,
        mode: Option<Mode>,
    ) -> Response<Vec<EventEntity>> {
        let mut query = Event::find().filter(event::Column::Date.gte(from));

        if let Some(mode) = mode {
            query = query.filter(
                event::Column::Mode
                    .eq(sea_orm_active_enums::Mode::from(mode)),
            );
        }

        let events = query
            .order_by_asc(event::Column::Date)
            .order_by_asc(event::Column::Time)
            .all(self.db.as_ref())
            .await
            .into_response("in event find upcoming")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    pub async fn find_by_tag(&self, tag: &str) -> Response<Vec<EventEntity>> {
        let events = Event::find()
            .filter(Expr::cust_with_values(
                r#"$1 = ANY("event"."tags")"#,
                [tag.to_string()],
            ))
            .order_by_asc(event::Column::Date)
            .all(self.db.as_ref())
            .await
            .into_response("in event find by tag")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    /// Other events sharing at least one tag with the event at `slug`.
    pub async fn find_similar_by_slug(
        &self,
        slug: &str,
    ) -> Response<Vec<EventEntity>> {
        let Some(event) = self.find_by_slug(slug).await? else {
            return Ok(vec![]);
        };

        let events = Event::find()
            .filter(event::Column::Id.ne(event.id))
            .filter(Expr::cust_with_values(
                r#""event"."tags" && $1"#,
                [event.tags],
            ))
            .order_by_asc(event::Column::Date)
            .all(self.db.as_ref())
            .await
            .into_response("in event find similar")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    pub async fn exists(&self, id: Uuid) -> Response<bool> {
        let event = Event::find_by_id(id)
            .select_only()
            .column(event::Column::Id)
            .into_model::<EventId>()
            .one(self.db.as_ref())
            .await
            .into_response("in event exists")?;

        Ok(event.is_some())
    }
}

#[async_trait]
impl EventLookup for EventRepository {
    async fn event_exists(&self, event_id: Uuid) -> Response<bool> {
        self.exists(event_id).await
    }
}
