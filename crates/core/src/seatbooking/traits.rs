//! Trait definitions for the seat reservation collaborator.

/// Reserves seats at the venue for an account.
///
/// Implementations are assumed to succeed, like [`crate::TicketPaymentService`].
pub trait SeatReservationService: Send + Sync {
    /// Returns the name of this reservation implementation.
    fn name(&self) -> &str;

    /// Reserves `seat_count` seats for the account.
    fn reserve_seat(&self, account_id: u64, seat_count: u32);
}
