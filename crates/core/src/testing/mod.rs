//! Testing utilities and mock collaborators.
//!
//! The mocks record every call so tests can assert exactly what a purchase
//! reserved and charged, without a real booking system or payment gateway.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use turnstile_core::testing::{fixtures, MockSeatReservationService, MockTicketPaymentService};
//! use turnstile_core::TicketService;
//!
//! let reservations = Arc::new(MockSeatReservationService::new());
//! let payments = Arc::new(MockTicketPaymentService::new());
//! let service = TicketService::new(reservations.clone(), payments.clone());
//!
//! service.purchase_tickets(1, &fixtures::requests(2, 4, 2))?;
//!
//! assert_eq!(reservations.recorded_reservations(), vec![(1, 6)]);
//! assert_eq!(payments.recorded_payments(), vec![(1, 80)]);
//! ```

mod mock_payment;
mod mock_seat_reservation;

pub use mock_payment::MockTicketPaymentService;
pub use mock_seat_reservation::MockSeatReservationService;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::ticket::{TicketType, TicketTypeRequest};

    /// One request per ticket type, in adult, child, infant order.
    pub fn requests(adult: u32, child: u32, infant: u32) -> Vec<TicketTypeRequest> {
        vec![
            TicketTypeRequest::new(TicketType::Adult, adult),
            TicketTypeRequest::new(TicketType::Child, child),
            TicketTypeRequest::new(TicketType::Infant, infant),
        ]
    }

    /// `n` separate single-ticket requests of the same type.
    pub fn singles(ticket_type: TicketType, n: u32) -> Vec<TicketTypeRequest> {
        (0..n)
            .map(|_| TicketTypeRequest::new(ticket_type, 1))
            .collect()
    }
}
