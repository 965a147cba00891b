//! Error types for ticket purchases.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while purchasing tickets.
///
/// Callers should treat every variant of [`PurchaseError::InvalidPurchase`]
/// the same way; the attached reason exists for logs and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// The request breaks one of the purchase rules.
    #[error("Invalid purchase: {reason}")]
    InvalidPurchase { reason: RejectionReason },
}

impl PurchaseError {
    pub(crate) fn invalid(reason: RejectionReason) -> Self {
        Self::InvalidPurchase { reason }
    }

    /// The rule that rejected the purchase.
    pub fn reason(&self) -> &RejectionReason {
        match self {
            Self::InvalidPurchase { reason } => reason,
        }
    }
}

/// Which purchase rule a rejected request broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RejectionReason {
    /// No tickets requested at all.
    #[error("no tickets requested")]
    NoTickets,

    /// More tickets than a single purchase allows.
    /// `requested` is `None` when the count did not fit in a `u32`.
    #[error("too many tickets requested (max {max})")]
    TooManyTickets { requested: Option<u32>, max: u32 },

    /// Infant tickets must match adult tickets one to one.
    #[error("{infants} infant ticket(s) for {adults} adult ticket(s)")]
    InfantAdultMismatch { adults: u32, infants: u32 },

    /// Child or infant tickets without an adult.
    #[error("child or infant tickets require an adult")]
    UnaccompaniedMinor,
}

impl RejectionReason {
    /// Short identifier used as a metric label.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::NoTickets => "no_tickets",
            Self::TooManyTickets { .. } => "too_many_tickets",
            Self::InfantAdultMismatch { .. } => "infant_adult_mismatch",
            Self::UnaccompaniedMinor => "unaccompanied_minor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PurchaseError::invalid(RejectionReason::InfantAdultMismatch {
            adults: 5,
            infants: 2,
        });
        assert_eq!(
            err.to_string(),
            "Invalid purchase: 2 infant ticket(s) for 5 adult ticket(s)"
        );
    }

    #[test]
    fn test_reason_serialization() {
        let json = serde_json::to_value(RejectionReason::TooManyTickets {
            requested: Some(21),
            max: 20,
        })
        .unwrap();
        assert_eq!(json["rule"], "too_many_tickets");
        assert_eq!(json["requested"], 21);
        assert_eq!(json["max"], 20);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RejectionReason::NoTickets.as_label(), "no_tickets");
        assert_eq!(
            RejectionReason::UnaccompaniedMinor.as_label(),
            "unaccompanied_minor"
        );
    }
}
