//! Error types for the payment and seat-booking collaborators.

use thiserror::Error;

/// Errors a collaborator can report back to the ticket service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// The payment gateway did not take the payment.
    #[error("Payment gateway error: {0}")]
    Payment(String),

    /// The seat-booking gateway did not reserve the seats.
    #[error("Seat reservation error: {0}")]
    Reservation(String),
}
