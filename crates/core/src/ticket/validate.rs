use super::error::{PurchaseError, RejectionReason};
use super::types::{TicketAggregate, MAX_TICKETS_PER_PURCHASE};

/// Check an aggregate against the purchase rules.
///
/// Rules are checked in a fixed order and the first broken one is reported:
/// 1. between 1 and [`MAX_TICKETS_PER_PURCHASE`] tickets in total
/// 2. exactly one adult per infant (strict equality)
/// 3. child or infant tickets need at least one adult
pub fn validate(aggregate: &TicketAggregate) -> Result<(), PurchaseError> {
    match aggregate.total() {
        Some(0) => return Err(PurchaseError::invalid(RejectionReason::NoTickets)),
        Some(total) if total <= MAX_TICKETS_PER_PURCHASE => {}
        requested => {
            return Err(PurchaseError::invalid(RejectionReason::TooManyTickets {
                requested,
                max: MAX_TICKETS_PER_PURCHASE,
            }))
        }
    }

    if aggregate.adult != aggregate.infant {
        return Err(PurchaseError::invalid(
            RejectionReason::InfantAdultMismatch {
                adults: aggregate.adult,
                infants: aggregate.infant,
            },
        ));
    }

    if (aggregate.child > 0 || aggregate.infant > 0) && aggregate.adult == 0 {
        return Err(PurchaseError::invalid(RejectionReason::UnaccompaniedMinor));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(adult: u32, child: u32, infant: u32) -> TicketAggregate {
        TicketAggregate {
            adult,
            child,
            infant,
        }
    }

    fn reason(aggregate: TicketAggregate) -> RejectionReason {
        validate(&aggregate).unwrap_err().reason().clone()
    }

    #[test]
    fn test_valid_family() {
        assert!(validate(&agg(2, 4, 2)).is_ok());
    }

    #[test]
    fn test_valid_at_limit() {
        assert!(validate(&agg(10, 0, 10)).is_ok());
        assert!(validate(&agg(1, 18, 1)).is_ok());
    }

    #[test]
    fn test_zero_tickets() {
        assert_eq!(reason(agg(0, 0, 0)), RejectionReason::NoTickets);
    }

    #[test]
    fn test_too_many_tickets() {
        assert_eq!(
            reason(agg(10, 5, 6)),
            RejectionReason::TooManyTickets {
                requested: Some(21),
                max: 20
            }
        );
    }

    #[test]
    fn test_total_overflow_reports_unknown_count() {
        assert_eq!(
            reason(agg(u32::MAX, u32::MAX, 0)),
            RejectionReason::TooManyTickets {
                requested: None,
                max: 20
            }
        );
    }

    #[test]
    fn test_limit_checked_before_other_rules() {
        // 21 children alone also break the accompaniment rule.
        assert!(matches!(
            reason(agg(0, 21, 0)),
            RejectionReason::TooManyTickets { .. }
        ));
    }

    #[test]
    fn test_more_adults_than_infants() {
        assert_eq!(
            reason(agg(5, 4, 2)),
            RejectionReason::InfantAdultMismatch {
                adults: 5,
                infants: 2
            }
        );
    }

    #[test]
    fn test_adults_without_infants_rejected() {
        assert_eq!(
            reason(agg(1, 0, 0)),
            RejectionReason::InfantAdultMismatch {
                adults: 1,
                infants: 0
            }
        );
    }

    #[test]
    fn test_more_infants_than_adults() {
        assert_eq!(
            reason(agg(5, 4, 6)),
            RejectionReason::InfantAdultMismatch {
                adults: 5,
                infants: 6
            }
        );
    }

    #[test]
    fn test_infant_without_adult() {
        assert_eq!(
            reason(agg(0, 0, 1)),
            RejectionReason::InfantAdultMismatch {
                adults: 0,
                infants: 1
            }
        );
    }

    #[test]
    fn test_child_without_adult() {
        assert_eq!(reason(agg(0, 1, 0)), RejectionReason::UnaccompaniedMinor);
    }
}
