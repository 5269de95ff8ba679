//! Seat-booking gateway ledger.

use crate::clients::ReservationClient;
use crate::framework::{ActorEntity, ResourceActor};
use crate::model::AccountId;
use async_trait::async_trait;

/// Every seat reservation made for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatBooking {
    pub account_id: AccountId,
    pub reservations: Vec<u32>,
    pub seats_reserved: u64,
}

/// Actions for the seat-booking gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatAction {
    /// Reserves the given number of seats for the account.
    ReserveSeat(u32),
}

/// Results from [`SeatAction`]s - variants match 1:1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatActionResult {
    /// The seats were reserved; carries the account's running total.
    Reserved { seats_reserved: u64 },
}

#[async_trait]
impl ActorEntity for SeatBooking {
    type Id = AccountId;
    type Action = SeatAction;
    type ActionResult = SeatActionResult;

    fn open(account_id: AccountId) -> Self {
        Self {
            account_id,
            reservations: Vec::new(),
            seats_reserved: 0,
        }
    }

    async fn handle_action(&mut self, action: SeatAction) -> Result<SeatActionResult, String> {
        match action {
            SeatAction::ReserveSeat(seats) => {
                let seats_reserved = self
                    .seats_reserved
                    .checked_add(u64::from(seats))
                    .ok_or_else(|| format!("seat total overflow for {}", self.account_id))?;
                self.reservations.push(seats);
                self.seats_reserved = seats_reserved;
                Ok(SeatActionResult::Reserved { seats_reserved })
            }
        }
    }
}

/// Creates the seat-booking gateway actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<SeatBooking>, ReservationClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ReservationClient::new(generic_client))
}
