use tracing::info;

use super::SeatReservationService;

/// Reservation service that only records the booking in the logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSeatReservationService;

impl LoggingSeatReservationService {
    pub fn new() -> Self {
        Self
    }
}

impl SeatReservationService for LoggingSeatReservationService {
    fn name(&self) -> &str {
        "logging"
    }

    fn reserve_seat(&self, account_id: u64, seat_count: u32) {
        info!(account_id, seat_count, "Seats reserved");
    }
}
