use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "mode")]
pub enum Mode {
    #[sea_orm(string_value = "online")]
    Online,
    #[sea_orm(string_value = "offline")]
    Offline,
    #[sea_orm(string_value = "hybrid")]
    Hybrid,
}

impl From<Mode> for entity::event::Mode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Online => Self::Online,
            Mode::Offline => Self::Offline,
            Mode::Hybrid => Self::Hybrid,
        }
    }
}

impl From<entity::event::Mode> for Mode {
    fn from(value: entity::event::Mode) -> Self {
        match value {
            entity::event::Mode::Online => Self::Online,
            entity::event::Mode::Offline => Self::Offline,
            entity::event::Mode::Hybrid => Self::Hybrid,
        }
    }
}
