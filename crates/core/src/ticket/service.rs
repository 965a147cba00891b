//! Purchase flow: aggregate, validate, price, then reserve and charge.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::PurchaseError;
use super::types::{PurchaseOutcome, TicketAggregate, TicketType, TicketTypeRequest};
use super::validate::validate;
use crate::metrics::{
    PURCHASES_TOTAL, PURCHASE_REJECTIONS, REVENUE_TOTAL, SEATS_RESERVED, TICKETS_SOLD,
};
use crate::payment::TicketPaymentService;
use crate::seatbooking::SeatReservationService;

/// Validates ticket purchases and hands valid ones to the collaborators.
///
/// Holds no state between calls, so a single instance can be shared across
/// threads. Every purchase either makes no collaborator call (rejected) or
/// exactly two: seats are reserved first, then the account is charged.
pub struct TicketService {
    reservations: Arc<dyn SeatReservationService>,
    payments: Arc<dyn TicketPaymentService>,
}

impl TicketService {
    pub fn new(
        reservations: Arc<dyn SeatReservationService>,
        payments: Arc<dyn TicketPaymentService>,
    ) -> Self {
        Self {
            reservations,
            payments,
        }
    }

    /// Purchase tickets for an account.
    ///
    /// The account id is passed through to both collaborators unchecked.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidPurchase`] if the requests break any
    /// purchase rule. Nothing is reserved or charged in that case.
    pub fn purchase_tickets(
        &self,
        account_id: u64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        let outcome = match self.quote(account_id, requests) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(account_id, reason = %e.reason(), "Purchase rejected");
                PURCHASES_TOTAL.with_label_values(&["rejected"]).inc();
                PURCHASE_REJECTIONS
                    .with_label_values(&[e.reason().as_label()])
                    .inc();
                return Err(e);
            }
        };

        self.reservations
            .reserve_seat(account_id, outcome.seats_to_reserve);
        self.payments.make_payment(account_id, outcome.amount_due);

        info!(
            account_id,
            seats = outcome.seats_to_reserve,
            amount = outcome.amount_due,
            "Purchase fulfilled"
        );
        record_fulfilled(&outcome);

        Ok(outcome)
    }

    /// Work out what a purchase would reserve and charge, without calling
    /// either collaborator.
    pub fn quote(
        &self,
        account_id: u64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        let aggregate = TicketAggregate::from_requests(requests)?;
        debug!(
            account_id,
            adult = aggregate.adult,
            child = aggregate.child,
            infant = aggregate.infant,
            "Aggregated ticket requests"
        );

        validate(&aggregate)?;

        PurchaseOutcome::from_aggregate(account_id, aggregate)
    }

    /// Names of the configured collaborators, for diagnostics.
    pub fn collaborators(&self) -> (&str, &str) {
        (self.reservations.name(), self.payments.name())
    }
}

fn record_fulfilled(outcome: &PurchaseOutcome) {
    PURCHASES_TOTAL.with_label_values(&["fulfilled"]).inc();
    for ticket_type in TicketType::ALL {
        TICKETS_SOLD
            .with_label_values(&[ticket_type.as_str()])
            .inc_by(u64::from(outcome.tickets.count(ticket_type)));
    }
    SEATS_RESERVED.inc_by(u64::from(outcome.seats_to_reserve));
    REVENUE_TOTAL.inc_by(u64::from(outcome.amount_due));
}
