//! Payment collaborator.
//!
//! The purchase flow charges the account through a [`TicketPaymentService`]
//! once seats are reserved. The venue's real payment gateway lives outside
//! this crate; [`LoggingTicketPaymentService`] stands in for it.

mod logging;
mod traits;

pub use logging::LoggingTicketPaymentService;
pub use traits::TicketPaymentService;
