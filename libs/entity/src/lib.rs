pub mod booking;
pub mod email;
pub mod error;
pub mod event;
pub mod slug;
pub mod time;

pub use email::validate_email;
pub use error::{
    EntityError, FormatError, ReferentialIntegrityError, ValidationError,
};
pub use slug::{generate_slug, is_valid_slug};
pub use time::{format_display_date, is_storage_time, parse_event_time};

pub mod prelude {
    pub use crate::booking::{
        Booking as BookingEntity, NewBooking as NewBookingEntity,
    };
    pub use crate::event::{
        Event as EventEntity, Mode, NewEvent as NewEventEntity,
    };
}
