use tracing::info;

use super::TicketPaymentService;

/// Payment service that only records the charge in the logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingTicketPaymentService;

impl LoggingTicketPaymentService {
    pub fn new() -> Self {
        Self
    }
}

impl TicketPaymentService for LoggingTicketPaymentService {
    fn name(&self) -> &str {
        "logging"
    }

    fn make_payment(&self, account_id: u64, amount: u32) {
        info!(account_id, amount, "Payment taken");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_payment_name() {
        assert_eq!(LoggingTicketPaymentService::new().name(), "logging");
    }

    #[test]
    fn test_logging_payment_accepts_any_amount() {
        let service = LoggingTicketPaymentService;
        service.make_payment(1, 0);
        service.make_payment(u64::MAX, u32::MAX);
    }
}
