//! Mock payment service for testing.

use std::sync::Mutex;

use crate::payment::TicketPaymentService;

/// Mock implementation of the TicketPaymentService trait.
///
/// Records every `(account_id, amount)` pair it is asked to charge.
#[derive(Debug, Default)]
pub struct MockTicketPaymentService {
    payments: Mutex<Vec<(u64, u32)>>,
}

impl MockTicketPaymentService {
    /// Create a new mock payment service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded payments.
    pub fn recorded_payments(&self) -> Vec<(u64, u32)> {
        self.payments.lock().unwrap().clone()
    }

    /// Get the number of payments taken.
    pub fn payment_count(&self) -> usize {
        self.payments.lock().unwrap().len()
    }

    /// Sum of all amounts charged.
    pub fn total_charged(&self) -> u64 {
        self.payments
            .lock()
            .unwrap()
            .iter()
            .map(|(_, amount)| u64::from(*amount))
            .sum()
    }

    /// Clear recorded payments.
    pub fn clear(&self) {
        self.payments.lock().unwrap().clear();
    }
}

impl TicketPaymentService for MockTicketPaymentService {
    fn name(&self) -> &str {
        "mock"
    }

    fn make_payment(&self, account_id: u64, amount: u32) {
        self.payments.lock().unwrap().push((account_id, amount));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_payments() {
        let mock = MockTicketPaymentService::new();
        mock.make_payment(5, 80);
        mock.make_payment(5, 20);

        assert_eq!(mock.recorded_payments(), vec![(5, 80), (5, 20)]);
        assert_eq!(mock.payment_count(), 2);
        assert_eq!(mock.total_charged(), 100);
    }

    #[test]
    fn test_clear_forgets_payments() {
        let mock = MockTicketPaymentService::new();
        mock.make_payment(1, 20);

        mock.clear();

        assert_eq!(mock.payment_count(), 0);
        assert_eq!(mock.total_charged(), 0);
        assert!(mock.recorded_payments().is_empty());
    }
}
