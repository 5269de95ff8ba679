//! The two collaborators the ticket service depends on.
//!
//! [`TicketService`](crate::ticket_service::TicketService) is generic over these traits, so
//! the in-process gateway clients, test doubles, or a real network integration can be
//! plugged in without touching the purchase logic.

use crate::gateways::GatewayError;
use crate::model::AccountId;
use async_trait::async_trait;

/// Takes payment for a purchase.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), GatewayError>;
}

/// Reserves seats for a purchase.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    async fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), GatewayError>;
}
