use sea_orm_migration::prelude::*;

use crate::m20251019_000001_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Event::Table)
                    .name("idx_event_slug")
                    .col(Event::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Event::Table)
                    .name("idx_event_date_time_mode")
                    .col(Event::Date)
                    .col(Event::Time)
                    .col(Event::Mode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Event::Table)
                    .name("idx_event_tags")
                    .col(Event::Tags)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_event_slug",
            "idx_event_date_time_mode",
            "idx_event_tags",
        ] {
            manager
                .drop_index(
                    Index::drop().table(Event::Table).name(name).to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
