//! Payment gateway ledger.

use crate::clients::PaymentClient;
use crate::framework::{ActorEntity, ResourceActor};
use crate::model::AccountId;
use async_trait::async_trait;

/// Every payment taken from one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentLedger {
    pub account_id: AccountId,
    pub payments: Vec<u32>,
    pub total_charged: u64,
}

/// Actions for the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentAction {
    /// Charges the account the given amount.
    MakePayment(u32),
}

/// Results from [`PaymentAction`]s - variants match 1:1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentActionResult {
    /// The payment was taken; carries the account's running total.
    Charged { total_charged: u64 },
}

#[async_trait]
impl ActorEntity for PaymentLedger {
    type Id = AccountId;
    type Action = PaymentAction;
    type ActionResult = PaymentActionResult;

    fn open(account_id: AccountId) -> Self {
        Self {
            account_id,
            payments: Vec::new(),
            total_charged: 0,
        }
    }

    async fn handle_action(&mut self, action: PaymentAction) -> Result<PaymentActionResult, String> {
        match action {
            PaymentAction::MakePayment(amount) => {
                let total_charged = self
                    .total_charged
                    .checked_add(u64::from(amount))
                    .ok_or_else(|| format!("ledger total overflow for {}", self.account_id))?;
                self.payments.push(amount);
                self.total_charged = total_charged;
                Ok(PaymentActionResult::Charged { total_charged })
            }
        }
    }
}

/// Creates the payment gateway actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<PaymentLedger>, PaymentClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PaymentClient::new(generic_client))
}
