//! Seat reservation collaborator.
//!
//! Seats are reserved through a [`SeatReservationService`] before the
//! account is charged. [`LoggingSeatReservationService`] stands in for the
//! venue's booking system.

mod logging;
mod traits;

pub use logging::LoggingSeatReservationService;
pub use traits::SeatReservationService;
