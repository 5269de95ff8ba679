use crate::clients::{PaymentClient, ReservationClient};
use crate::gateways::{payment, seat_booking};
use crate::ticket_service::{PurchaseConfig, TicketService};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The ticket service running against in-process gateways.
///
/// `CinemaSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping both gateway actors
/// - **Dependency Wiring**: handing the gateway clients to the [`TicketService`]
///
/// # Example
///
/// ```ignore
/// let system = CinemaSystem::new(PurchaseConfig::from_env());
///
/// let receipt = system.ticket_service.purchase_tickets(1, &requests).await?;
/// let charged = system.payment_client.total_charged(account_id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CinemaSystem {
    /// The purchase entry point
    pub ticket_service: TicketService<PaymentClient, ReservationClient>,

    /// Client for inspecting the payment gateway's ledgers
    pub payment_client: PaymentClient,

    /// Client for inspecting the seat-booking gateway's ledgers
    pub reservation_client: ReservationClient,

    /// Task handles for both gateway actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl CinemaSystem {
    /// Pending requests each gateway actor will queue before callers wait.
    pub const GATEWAY_BUFFER: usize = 32;

    /// Spawns both gateway actors and wires the ticket service to them.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: PurchaseConfig) -> Self {
        let (payment_actor, payment_client) = payment::new(Self::GATEWAY_BUFFER);
        let (booking_actor, reservation_client) = seat_booking::new(Self::GATEWAY_BUFFER);

        let payment_handle = tokio::spawn(payment_actor.run());
        let booking_handle = tokio::spawn(booking_actor.run());

        let ticket_service = TicketService::with_config(
            payment_client.clone(),
            reservation_client.clone(),
            config,
        );
        info!(max_tickets = config.max_tickets(), "Cinema system started");

        Self {
            ticket_service,
            payment_client,
            reservation_client,
            handles: vec![payment_handle, booking_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping every client closes the gateway channels; each actor then drains and
    /// exits its loop. Returns the first task failure, if any actor panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        let Self {
            ticket_service,
            payment_client,
            reservation_client,
            handles,
        } = self;
        drop(ticket_service);
        drop(payment_client);
        drop(reservation_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Gateway task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
