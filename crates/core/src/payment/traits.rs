//! Trait definitions for the payment collaborator.

/// Charges an account for a ticket purchase.
///
/// Implementations are assumed to succeed; failures inside the gateway are
/// not part of the purchase contract.
pub trait TicketPaymentService: Send + Sync {
    /// Returns the name of this payment implementation.
    fn name(&self) -> &str;

    /// Charges `amount` (smallest currency unit) to the account.
    fn make_payment(&self, account_id: u64, amount: u32);
}
