pub mod availability;
pub mod booking;

pub use availability::SessionAvailability;
pub use booking::{Booking, CreateBookingRequest, RescheduleRequest};
