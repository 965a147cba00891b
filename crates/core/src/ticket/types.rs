//! Core ticket data types.

use serde::{Deserialize, Serialize};

use super::error::{PurchaseError, RejectionReason};

// ============================================================================
// Pricing and Limits
// ============================================================================

/// Price of an adult ticket, in the smallest currency unit.
pub const ADULT_PRICE: u32 = 20;

/// Price of a child ticket, in the smallest currency unit.
pub const CHILD_PRICE: u32 = 10;

/// Infants travel on an adult's lap and are free.
pub const INFANT_PRICE: u32 = 0;

/// Maximum number of tickets (of any type) in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

// ============================================================================
// Ticket Types
// ============================================================================

/// Kind of ticket a customer can buy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// All ticket types, in display order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Fixed unit price for this ticket type.
    pub fn unit_price(&self) -> u32 {
        match self {
            TicketType::Adult => ADULT_PRICE,
            TicketType::Child => CHILD_PRICE,
            TicketType::Infant => INFANT_PRICE,
        }
    }

    /// Whether a ticket of this type needs a seat of its own.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    /// Lower-case name, used for logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "adult",
            TicketType::Child => "child",
            TicketType::Infant => "infant",
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for `count` tickets of one type.
///
/// Immutable once built; the same type may appear several times in one
/// purchase and the counts add up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Per-type ticket counts summed over every request of one purchase.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketAggregate {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl TicketAggregate {
    /// Fold a list of requests into per-type totals.
    ///
    /// Types missing from the input count as zero. A sum that does not fit
    /// in `u32` is rejected as too many tickets.
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Result<Self, PurchaseError> {
        let mut aggregate = Self::default();
        for request in requests {
            aggregate.add(request.ticket_type(), request.count())?;
        }
        Ok(aggregate)
    }

    fn add(&mut self, ticket_type: TicketType, count: u32) -> Result<(), PurchaseError> {
        let slot = match ticket_type {
            TicketType::Adult => &mut self.adult,
            TicketType::Child => &mut self.child,
            TicketType::Infant => &mut self.infant,
        };
        *slot = slot.checked_add(count).ok_or_else(overflow_error)?;
        Ok(())
    }

    /// Total count for one ticket type.
    pub fn count(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Total tickets across all types, or `None` if it overflows.
    pub fn total(&self) -> Option<u32> {
        self.adult.checked_add(self.child)?.checked_add(self.infant)
    }

    /// Seats needed: infants sit on an adult's lap.
    ///
    /// `None` if the count does not fit in a `u32`.
    pub fn seats_required(&self) -> Option<u32> {
        TicketType::ALL
            .iter()
            .filter(|t| t.occupies_seat())
            .try_fold(0u32, |seats, t| seats.checked_add(self.count(*t)))
    }

    /// Amount to charge for the whole aggregate.
    ///
    /// `None` if the amount does not fit in a `u32`, which can only happen
    /// for aggregates far above [`MAX_TICKETS_PER_PURCHASE`].
    pub fn amount_due(&self) -> Option<u32> {
        TicketType::ALL.iter().try_fold(0u32, |amount, t| {
            self.count(*t)
                .checked_mul(t.unit_price())
                .and_then(|line| amount.checked_add(line))
        })
    }
}

fn overflow_error() -> PurchaseError {
    PurchaseError::InvalidPurchase {
        reason: RejectionReason::TooManyTickets {
            requested: None,
            max: MAX_TICKETS_PER_PURCHASE,
        },
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// What a valid purchase reserves and charges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub account_id: u64,
    pub tickets: TicketAggregate,
    pub seats_to_reserve: u32,
    pub amount_due: u32,
}

impl PurchaseOutcome {
    pub(crate) fn from_aggregate(
        account_id: u64,
        tickets: TicketAggregate,
    ) -> Result<Self, PurchaseError> {
        Ok(Self {
            account_id,
            tickets,
            seats_to_reserve: tickets.seats_required().ok_or_else(overflow_error)?,
            amount_due: tickets.amount_due().ok_or_else(overflow_error)?,
        })
    }
}
