//! # Reservation Client
//!
//! Wraps a `ResourceClient<SeatBooking>` and exposes it as a [`SeatReservationService`].

use crate::clients::actor_client::ActorClient;
use crate::clients::SeatReservationService;
use crate::framework::{FrameworkError, ResourceClient};
use crate::gateways::{GatewayError, SeatAction, SeatActionResult, SeatBooking};
use crate::model::AccountId;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the seat-booking gateway actor.
#[derive(Clone)]
pub struct ReservationClient {
    inner: ResourceClient<SeatBooking>,
}

impl ReservationClient {
    pub fn new(inner: ResourceClient<SeatBooking>) -> Self {
        Self { inner }
    }

    /// Seats reserved for an account so far; 0 for an account with no bookings.
    #[instrument(skip(self))]
    pub async fn seats_reserved(&self, account_id: AccountId) -> Result<u64, GatewayError> {
        let booking = self.get(account_id).await?;
        Ok(booking.map_or(0, |booking| booking.seats_reserved))
    }
}

#[async_trait]
impl ActorClient<SeatBooking> for ReservationClient {
    type Error = GatewayError;

    fn inner(&self) -> &ResourceClient<SeatBooking> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        GatewayError::Reservation(e.to_string())
    }
}

#[async_trait]
impl SeatReservationService for ReservationClient {
    #[instrument(skip(self))]
    async fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), GatewayError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(account_id, SeatAction::ReserveSeat(seats))
            .await
        {
            Ok(SeatActionResult::Reserved { seats_reserved }) => {
                info!(%account_id, seats, seats_reserved, "Seats reserved");
                Ok(())
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
