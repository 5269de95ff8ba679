//! Error types for the ticket service.

use crate::gateways::GatewayError;
use thiserror::Error;

/// Errors that can end a purchase.
///
/// Every variant except [`PurchaseError::Gateway`] is raised before any collaborator is
/// called, so a rejected purchase never charges or reserves anything.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PurchaseError {
    /// The account id is not a positive integer.
    #[error("Please provide a valid account number, got {0}")]
    AccountId(i64),

    /// A single ticket entry has an unknown type or a count below 1.
    #[error("Invalid ticket request found. Please ensure all tickets are of a valid type and have a count above 0 ({0})")]
    InvalidTicketRequest(String),

    /// The order as a whole asks for too few or too many tickets.
    #[error(transparent)]
    InvalidNumberOfTickets(#[from] TicketCountError),

    /// Fewer adult tickets than the infants (or the order itself) require.
    #[error("At least {required} adult ticket(s) are required for this transaction")]
    InsufficientAdults { required: u32, adults: u32 },

    /// A payment or reservation collaborator failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl PurchaseError {
    /// Whether the purchase was refused by a business rule, as opposed to a collaborator
    /// failing after the order was accepted.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, PurchaseError::Gateway(_))
    }
}

/// Why the total number of tickets in an order was refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TicketCountError {
    #[error("At least one ticket must be purchased")]
    NoTickets,

    #[error("A maximum of {maximum} tickets can be booked in one transaction, {requested} requested")]
    ExceedsMaximum { requested: u32, maximum: u32 },
}
