pub use sea_orm_migration::prelude::*;

mod m20251019_000001_create_event_table;
mod m20251019_000002_create_index_at_event;
mod m20251019_000003_create_booking_table;
mod m20251019_000004_create_index_at_booking;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_create_event_table::Migration),
            Box::new(m20251019_000002_create_index_at_event::Migration),
            Box::new(m20251019_000003_create_booking_table::Migration),
            Box::new(m20251019_000004_create_index_at_booking::Migration),
        ]
    }
}
