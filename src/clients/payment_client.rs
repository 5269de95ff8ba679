//! # Payment Client
//!
//! Wraps a `ResourceClient<PaymentLedger>` and exposes it as a [`TicketPaymentService`].

use crate::clients::actor_client::ActorClient;
use crate::clients::TicketPaymentService;
use crate::framework::{FrameworkError, ResourceClient};
use crate::gateways::{GatewayError, PaymentAction, PaymentActionResult, PaymentLedger};
use crate::model::AccountId;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the payment gateway actor.
#[derive(Clone)]
pub struct PaymentClient {
    inner: ResourceClient<PaymentLedger>,
}

impl PaymentClient {
    pub fn new(inner: ResourceClient<PaymentLedger>) -> Self {
        Self { inner }
    }

    /// Total charged to an account so far; 0 for an account never charged.
    #[instrument(skip(self))]
    pub async fn total_charged(&self, account_id: AccountId) -> Result<u64, GatewayError> {
        let ledger = self.get(account_id).await?;
        Ok(ledger.map_or(0, |ledger| ledger.total_charged))
    }
}

#[async_trait]
impl ActorClient<PaymentLedger> for PaymentClient {
    type Error = GatewayError;

    fn inner(&self) -> &ResourceClient<PaymentLedger> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        GatewayError::Payment(e.to_string())
    }
}

#[async_trait]
impl TicketPaymentService for PaymentClient {
    #[instrument(skip(self))]
    async fn make_payment(&self, account_id: AccountId, amount: u32) -> Result<(), GatewayError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(account_id, PaymentAction::MakePayment(amount))
            .await
        {
            Ok(PaymentActionResult::Charged { total_charged }) => {
                info!(%account_id, amount, total_charged, "Payment taken");
                Ok(())
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
