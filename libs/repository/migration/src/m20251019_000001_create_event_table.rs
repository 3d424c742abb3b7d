use sea_orm_migration::{
    prelude::*,
    sea_orm::{EnumIter, Iterable},
    sea_query::extension::postgres::Type,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("mode"))
                    .values(Mode::iter())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Event::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Event::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Event::Slug).string().not_null())
                    .col(
                        ColumnDef::new(Event::Description)
                            .string_len(1000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Event::Overview)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Event::Image).string().not_null())
                    .col(ColumnDef::new(Event::Venue).string().not_null())
                    .col(ColumnDef::new(Event::Location).string().not_null())
                    .col(ColumnDef::new(Event::Date).date().not_null())
                    .col(ColumnDef::new(Event::Time).string_len(5).not_null())
                    .col(
                        ColumnDef::new(Event::Mode)
                            .enumeration(Alias::new("mode"), Mode::iter())
                            .not_null(),
                    )
                    .col(ColumnDef::new(Event::Audience).string().not_null())
                    .col(
                        ColumnDef::new(Event::Agenda)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Event::Organizer).string().not_null())
                    .col(
                        ColumnDef::new(Event::Tags)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Event::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Event::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Alias::new("mode")).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Overview,
    Image,
    Venue,
    Location,
    Date,
    Time,
    Mode,
    Audience,
    Agenda,
    Organizer,
    Tags,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, EnumIter)]
pub enum Mode {
    #[iden = "online"]
    Online,
    #[iden = "offline"]
    Offline,
    #[iden = "hybrid"]
    Hybrid,
}
