use super::validation::validate_order;
use super::{AggregatedOrder, PurchaseConfig, PurchaseError};
use crate::clients::{SeatReservationService, TicketPaymentService};
use crate::model::{AccountId, RawTicketRequest, TicketReservationResponse, TicketTypeRequest};
use tracing::{debug, error, info, instrument, warn};

/// Validates, prices and books ticket purchases.
///
/// Holds no state between calls besides its collaborators and limits, so two identical
/// purchases always produce identical receipts.
///
/// # Purchase Flow
///
/// 1. **Validate**: account id, ticket entries, ticket count, adult accompaniment
/// 2. **Price**: totals from the aggregated order
/// 3. **Pay**: `make_payment(account, total_cost)`
/// 4. **Reserve**: `reserve_seat(account, seats_reserved)`
/// 5. **Respond**: the receipt
///
/// A validation failure stops at step 1, before either collaborator is called. Nothing
/// is retried or rolled back.
#[derive(Clone)]
pub struct TicketService<P, R> {
    payment: P,
    reservation: R,
    config: PurchaseConfig,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    pub fn new(payment: P, reservation: R) -> Self {
        Self::with_config(payment, reservation, PurchaseConfig::default())
    }

    pub fn with_config(payment: P, reservation: R, config: PurchaseConfig) -> Self {
        Self {
            payment,
            reservation,
            config,
        }
    }

    pub fn config(&self) -> &PurchaseConfig {
        &self.config
    }

    /// Purchases the requested tickets for `account_id`.
    ///
    /// # Errors
    /// - [`PurchaseError::AccountId`] if `account_id` is not positive
    /// - [`PurchaseError::InvalidNumberOfTickets`] for an empty or oversized order
    /// - [`PurchaseError::InsufficientAdults`] if the adults cannot accompany the order
    /// - [`PurchaseError::Gateway`] if a collaborator fails
    #[instrument(skip(self, requests), fields(entries = requests.len()))]
    pub async fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<TicketReservationResponse, PurchaseError> {
        debug!(?requests, "purchase_tickets called");
        let account_id = AccountId::try_from(account_id).inspect_err(log_failure)?;
        self.process(account_id, requests).await
    }

    /// Purchases tickets from untyped `{type, count}` entries.
    ///
    /// The account is checked first, then every entry is parsed; the first malformed
    /// entry fails the purchase with [`PurchaseError::InvalidTicketRequest`]. The rest
    /// of the flow is the same as [`TicketService::purchase_tickets`].
    #[instrument(skip(self, requests), fields(entries = requests.len()))]
    pub async fn purchase_raw_tickets(
        &self,
        account_id: i64,
        requests: &[RawTicketRequest],
    ) -> Result<TicketReservationResponse, PurchaseError> {
        debug!(?requests, "purchase_raw_tickets called");
        let account_id = AccountId::try_from(account_id).inspect_err(log_failure)?;
        let parsed = requests
            .iter()
            .cloned()
            .map(TicketTypeRequest::try_from)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(log_failure)?;
        self.process(account_id, &parsed).await
    }

    async fn process(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<TicketReservationResponse, PurchaseError> {
        let order = AggregatedOrder::from_requests(requests);
        validate_order(&order, &self.config).inspect_err(log_failure)?;

        let receipt = order.receipt();
        debug!(?order, ?receipt, "Order priced");

        self.payment
            .make_payment(account_id, receipt.total_cost())
            .await
            .map_err(PurchaseError::from)
            .inspect_err(log_failure)?;
        self.reservation
            .reserve_seat(account_id, receipt.seats_reserved())
            .await
            .map_err(PurchaseError::from)
            .inspect_err(log_failure)?;

        info!(
            %account_id,
            tickets = receipt.tickets_ordered(),
            seats = receipt.seats_reserved(),
            cost = receipt.total_cost(),
            "Purchase complete"
        );
        Ok(receipt)
    }
}

fn log_failure(failure: &PurchaseError) {
    if failure.is_rejection() {
        warn!(error = %failure, "Purchase rejected");
    } else {
        error!(error = %failure, "Collaborator failed");
    }
}
