use std::sync::Arc;

use booking::BookingRepository;
use entity::EntityError;
use event::EventRepository;
use sea_orm::DatabaseConnection;

mod active_models;
pub mod booking;
pub mod event;
pub mod pipeline;
mod response;
pub mod store;

pub use response::Response;
pub use store::{Store, StoreOptions};

#[derive(Clone, Debug)]
pub struct Repository {
    pub event: EventRepository,
    pub booking: BookingRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },

    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error("{kind} with ID {id} was not found")]
    NotFound { kind: &'static str, id: String },

    #[error("invalid store configuration: {message}")]
    InvalidConfig { message: String },
}

impl Repository {
    /// Builds the repositories on top of the store's cached connection,
    /// connecting first if nothing is cached yet.
    pub async fn new(store: &Store) -> Response<Self> {
        let db = store.connection().await?;

        Ok(Self::from_connection(db))
    }

    pub fn from_connection(db: Arc<DatabaseConnection>) -> Self {
        let event = EventRepository::new(db.clone());

        Self {
            booking: BookingRepository::new(db, event.clone()),
            event,
        }
    }
}
