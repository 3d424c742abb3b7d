use sea_orm_migration::prelude::*;

use crate::m20251019_000003_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Booking::Table)
                    .name("idx_booking_event_id")
                    .col(Booking::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Booking::Table)
                    .name("idx_booking_event_id_created_at")
                    .col(Booking::EventId)
                    .col((Booking::CreatedAt, IndexOrder::Desc))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Booking::Table)
                    .name("idx_booking_email")
                    .col(Booking::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_booking_event_id",
            "idx_booking_event_id_created_at",
            "idx_booking_email",
        ] {
            manager
                .drop_index(
                    Index::drop().table(Booking::Table).name(name).to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
