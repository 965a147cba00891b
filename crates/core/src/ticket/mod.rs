//! Ticket purchasing for a single venue.
//!
//! A purchase is a list of [`TicketTypeRequest`]s for one account. The
//! requests are summed per type into a [`TicketAggregate`], checked against
//! the purchase rules, priced, and finally handed to the seat reservation
//! and payment collaborators in that order.
//!
//! # Rules
//!
//! - between 1 and 20 tickets per purchase
//! - exactly one adult ticket per infant ticket (infants sit on laps)
//! - child and infant tickets need at least one adult ticket
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use turnstile_core::{
//!     LoggingSeatReservationService, LoggingTicketPaymentService, TicketService, TicketType,
//!     TicketTypeRequest,
//! };
//!
//! let service = TicketService::new(
//!     Arc::new(LoggingSeatReservationService::new()),
//!     Arc::new(LoggingTicketPaymentService::new()),
//! );
//!
//! let outcome = service.purchase_tickets(
//!     1,
//!     &[
//!         TicketTypeRequest::new(TicketType::Adult, 2),
//!         TicketTypeRequest::new(TicketType::Child, 4),
//!         TicketTypeRequest::new(TicketType::Infant, 2),
//!     ],
//! )?;
//! assert_eq!(outcome.seats_to_reserve, 6);
//! assert_eq!(outcome.amount_due, 80);
//! ```

mod error;
mod service;
mod types;
mod validate;

pub use error::{PurchaseError, RejectionReason};
pub use service::TicketService;
pub use types::{
    PurchaseOutcome, TicketAggregate, TicketType, TicketTypeRequest, ADULT_PRICE, CHILD_PRICE,
    INFANT_PRICE, MAX_TICKETS_PER_PURCHASE,
};
pub use validate::validate;
