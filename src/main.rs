//! Demo: runs a handful of purchases through the ticket service and the in-process gateways.

use cinema_tickets::lifecycle::{setup_tracing, CinemaSystem};
use cinema_tickets::model::{AccountId, RawTicketRequest, TicketType, TicketTypeRequest};
use cinema_tickets::ticket_service::PurchaseConfig;
use tracing::{error, info, Instrument};

const DEMO_ACCOUNT: i64 = 1;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = PurchaseConfig::from_env();
    info!(max_tickets = config.max_tickets(), "Starting cinema ticket demo");

    let system = CinemaSystem::new(config);
    let account_id = AccountId::try_from(DEMO_ACCOUNT)?;

    // A family: two adults, a child and an infant
    let family = [
        TicketTypeRequest::new(TicketType::Adult, 2)?,
        TicketTypeRequest::new(TicketType::Child, 1)?,
        TicketTypeRequest::new(TicketType::Infant, 1)?,
    ];
    let receipt = system
        .ticket_service
        .purchase_tickets(DEMO_ACCOUNT, &family)
        .instrument(tracing::info_span!("family_booking"))
        .await?;
    info!(%receipt, "Family booking confirmed");

    // Too many infants for the adults present
    let outnumbered = [
        TicketTypeRequest::new(TicketType::Infant, 3)?,
        TicketTypeRequest::new(TicketType::Adult, 1)?,
    ];
    match system
        .ticket_service
        .purchase_tickets(DEMO_ACCOUNT, &outnumbered)
        .instrument(tracing::info_span!("outnumbered_booking"))
        .await
    {
        Ok(receipt) => info!(%receipt, "Unexpectedly accepted"),
        Err(e) => error!(error = %e, "Booking refused"),
    }

    // Untyped entries, as an outer adapter would pass them on
    let raw = [
        RawTicketRequest::new("ADULT", 1),
        RawTicketRequest::new("SENIOR", 1),
    ];
    match system
        .ticket_service
        .purchase_raw_tickets(DEMO_ACCOUNT, &raw)
        .instrument(tracing::info_span!("raw_booking"))
        .await
    {
        Ok(receipt) => info!(%receipt, "Unexpectedly accepted"),
        Err(e) => error!(error = %e, "Booking refused"),
    }

    let charged = system.payment_client.total_charged(account_id).await?;
    let seats = system.reservation_client.seats_reserved(account_id).await?;
    info!(%account_id, charged, seats, "Gateway ledgers");

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
