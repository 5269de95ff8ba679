//! Business rules applied to an aggregated order.
//!
//! Rules run in a fixed order and the first one broken is the error reported:
//! ticket count first, then adult accompaniment.

use super::{AggregatedOrder, PurchaseConfig, PurchaseError, TicketCountError};
use crate::model::TicketType;

/// Checks every order-level rule.
pub fn validate_order(order: &AggregatedOrder, config: &PurchaseConfig) -> Result<(), PurchaseError> {
    validate_ticket_count(order, config)?;
    validate_required_adults(order)
}

/// The order must contain at least one ticket and no more than `config.max_tickets()`.
pub fn validate_ticket_count(
    order: &AggregatedOrder,
    config: &PurchaseConfig,
) -> Result<(), PurchaseError> {
    let requested = order.total_tickets();
    if requested == 0 {
        return Err(TicketCountError::NoTickets.into());
    }
    if requested > config.max_tickets() {
        return Err(TicketCountError::ExceedsMaximum {
            requested,
            maximum: config.max_tickets(),
        }
        .into());
    }
    Ok(())
}

/// Adults needed for this order.
///
/// Every infant sits on an adult's lap, so each needs its own adult. Without infants a
/// single adult is still required.
pub fn required_adults(order: &AggregatedOrder) -> u32 {
    order.count(TicketType::Infant).max(1)
}

pub fn validate_required_adults(order: &AggregatedOrder) -> Result<(), PurchaseError> {
    let required = required_adults(order);
    let adults = order.count(TicketType::Adult);
    if adults < required {
        return Err(PurchaseError::InsufficientAdults { required, adults });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TicketTypeRequest;

    fn order(counts: &[(TicketType, u32)]) -> AggregatedOrder {
        let requests: Vec<_> = counts
            .iter()
            .map(|(t, n)| TicketTypeRequest::new(*t, *n).unwrap())
            .collect();
        AggregatedOrder::from_requests(&requests)
    }

    #[test]
    fn test_empty_order_has_no_tickets() {
        let result = validate_order(&order(&[]), &PurchaseConfig::default());
        assert_eq!(
            result,
            Err(PurchaseError::InvalidNumberOfTickets(TicketCountError::NoTickets))
        );
    }

    #[test]
    fn test_maximum_is_inclusive() {
        let config = PurchaseConfig::default();
        assert!(validate_order(&order(&[(TicketType::Adult, 25)]), &config).is_ok());

        let result = validate_order(&order(&[(TicketType::Adult, 26)]), &config);
        assert_eq!(
            result,
            Err(PurchaseError::InvalidNumberOfTickets(
                TicketCountError::ExceedsMaximum {
                    requested: 26,
                    maximum: 25
                }
            ))
        );
    }

    #[test]
    fn test_infants_count_towards_maximum() {
        let result = validate_order(
            &order(&[(TicketType::Adult, 20), (TicketType::Infant, 10)]),
            &PurchaseConfig::default(),
        );
        assert!(matches!(
            result,
            Err(PurchaseError::InvalidNumberOfTickets(
                TicketCountError::ExceedsMaximum { requested: 30, .. }
            ))
        ));
    }

    #[test]
    fn test_configured_maximum() {
        let config = PurchaseConfig::new(20).unwrap();
        assert!(validate_ticket_count(&order(&[(TicketType::Adult, 20)]), &config).is_ok());
        assert!(validate_ticket_count(&order(&[(TicketType::Adult, 21)]), &config).is_err());
    }

    #[test]
    fn test_count_is_checked_before_adults() {
        // Both rules are broken; the count rule wins
        let result = validate_order(
            &order(&[(TicketType::Child, 30)]),
            &PurchaseConfig::default(),
        );
        assert!(matches!(result, Err(PurchaseError::InvalidNumberOfTickets(_))));
    }

    #[test]
    fn test_children_alone_need_one_adult() {
        let result = validate_required_adults(&order(&[(TicketType::Child, 2)]));
        assert_eq!(
            result,
            Err(PurchaseError::InsufficientAdults {
                required: 1,
                adults: 0
            })
        );
        assert!(validate_required_adults(&order(&[
            (TicketType::Child, 2),
            (TicketType::Adult, 1)
        ]))
        .is_ok());
    }

    #[test]
    fn test_each_infant_needs_an_adult() {
        let result = validate_required_adults(&order(&[
            (TicketType::Infant, 3),
            (TicketType::Adult, 1),
        ]));
        assert_eq!(
            result,
            Err(PurchaseError::InsufficientAdults {
                required: 3,
                adults: 1
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "At least 3 adult ticket(s) are required for this transaction"
        );

        assert!(validate_required_adults(&order(&[
            (TicketType::Infant, 3),
            (TicketType::Adult, 3)
        ]))
        .is_ok());
    }

    #[test]
    fn test_required_adults() {
        assert_eq!(required_adults(&order(&[])), 1);
        assert_eq!(required_adults(&order(&[(TicketType::Child, 4)])), 1);
        assert_eq!(required_adults(&order(&[(TicketType::Infant, 4)])), 4);
    }
}
