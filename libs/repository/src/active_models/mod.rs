//! Table models for the `event` and `booking` tables.

pub mod prelude;

pub mod booking;
pub mod event;
pub mod sea_orm_active_enums;
