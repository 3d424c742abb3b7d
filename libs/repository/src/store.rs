use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::response::{IntoResponse, Response};
use crate::RepositoryError;

#[derive(Clone, Debug)]
pub struct StoreOptions {
    pub max_connections: u32,
    pub min_connections: u32,
    pub sqlx_logging: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_connections: 5,
            min_connections: 1,
            sqlx_logging: true,
        }
    }
}

/// Owns the database handle for the process.
///
/// The first call to [`Store::connection`] connects and migrates; later calls
/// reuse the cached handle. A failed connect caches nothing, so the next call
/// tries again. [`Store::reset`] drops the handle explicitly.
#[derive(Debug)]
pub struct Store {
    url: String,
    options: StoreOptions,
    conn: Mutex<Option<Arc<DatabaseConnection>>>,
}

impl Store {
    pub fn new(url: impl Into<String>, options: StoreOptions) -> Response<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(RepositoryError::InvalidConfig {
                message: "database url is empty".to_string(),
            });
        }

        Ok(Self {
            url,
            options,
            conn: Mutex::new(None),
        })
    }

    /// Wraps an already open connection, e.g. a mock one.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            url: String::new(),
            options: StoreOptions::default(),
            conn: Mutex::new(Some(Arc::new(db))),
        }
    }

    pub async fn connection(&self) -> Response<Arc<DatabaseConnection>> {
        let mut cached = self.conn.lock().await;
        if let Some(db) = cached.as_ref() {
            return Ok(db.clone());
        }

        match init_db(&self.url, &self.options).await {
            Ok(db) => {
                let db = Arc::new(db);
                info!(task = "connect", "database connected");
                *cached = Some(db.clone());
                Ok(db)
            }
            Err(e) => {
                error!(task = "connect", error = e.to_string());
                Err(e)
            }
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    pub async fn reset(&self) {
        if self.conn.lock().await.take().is_some() {
            info!(task = "reset", "cached database connection dropped");
        }
    }
}

async fn init_db(
    db_url: &str,
    options: &StoreOptions,
) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(options.max_connections)
        .min_connections(options.min_connections)
        .sqlx_logging(options.sqlx_logging)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}
