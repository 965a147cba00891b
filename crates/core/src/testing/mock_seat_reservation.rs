//! Mock seat reservation service for testing.

use std::sync::Mutex;

use crate::seatbooking::SeatReservationService;

/// Mock implementation of the SeatReservationService trait.
///
/// Records every `(account_id, seat_count)` pair it receives.
#[derive(Debug, Default)]
pub struct MockSeatReservationService {
    reservations: Mutex<Vec<(u64, u32)>>,
}

impl MockSeatReservationService {
    /// Create a new mock reservation service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded reservations.
    pub fn recorded_reservations(&self) -> Vec<(u64, u32)> {
        self.reservations.lock().unwrap().clone()
    }

    /// Get the number of reservations made.
    pub fn reservation_count(&self) -> usize {
        self.reservations.lock().unwrap().len()
    }

    /// Total seats reserved across all calls.
    pub fn total_seats(&self) -> u64 {
        self.reservations
            .lock()
            .unwrap()
            .iter()
            .map(|(_, seats)| u64::from(*seats))
            .sum()
    }

    /// Clear recorded reservations.
    pub fn clear(&self) {
        self.reservations.lock().unwrap().clear();
    }
}

impl SeatReservationService for MockSeatReservationService {
    fn name(&self) -> &str {
        "mock"
    }

    fn reserve_seat(&self, account_id: u64, seat_count: u32) {
        self.reservations
            .lock()
            .unwrap()
            .push((account_id, seat_count));
    }
}
