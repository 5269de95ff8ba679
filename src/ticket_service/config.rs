//! Purchase limits.

use crate::model::TicketType;
use tracing::warn;

/// Largest number of tickets, infants included, allowed in one purchase.
pub const MAX_TICKETS: u32 = 25;

/// Highest maximum a [`PurchaseConfig`] accepts.
///
/// An order this size priced entirely at the dearest ticket type still fits in a `u32`,
/// so the totals of any order that passes validation are exact.
pub const MAX_TICKETS_LIMIT: u32 = u32::MAX / highest_price();

/// Environment variable that overrides [`MAX_TICKETS`].
pub const MAX_TICKETS_ENV: &str = "CINEMA_MAX_TICKETS";

const fn highest_price() -> u32 {
    let mut highest = 1;
    let mut i = 0;
    while i < TicketType::ALL.len() {
        let price = TicketType::ALL[i].price();
        if price > highest {
            highest = price;
        }
        i += 1;
    }
    highest
}

/// Tunable limits applied by [`TicketService`](crate::ticket_service::TicketService).
///
/// Only built through [`PurchaseConfig::new`], [`PurchaseConfig::from_env`] or `Default`,
/// so the maximum is always within `1..=MAX_TICKETS_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseConfig {
    max_tickets: u32,
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            max_tickets: MAX_TICKETS,
        }
    }
}

impl PurchaseConfig {
    /// A config allowing up to `max_tickets` per purchase.
    ///
    /// Returns `None` for 0 or anything above [`MAX_TICKETS_LIMIT`].
    pub fn new(max_tickets: u32) -> Option<Self> {
        (1..=MAX_TICKETS_LIMIT)
            .contains(&max_tickets)
            .then_some(Self { max_tickets })
    }

    pub fn max_tickets(&self) -> u32 {
        self.max_tickets
    }

    /// Reads overrides from the environment, keeping the default for anything unset or invalid.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let Some(raw) = lookup(MAX_TICKETS_ENV) else {
            return Self::default();
        };
        match raw.trim().parse::<u32>().ok().and_then(Self::new) {
            Some(config) => config,
            None => {
                warn!(
                    value = %raw,
                    default = MAX_TICKETS,
                    limit = MAX_TICKETS_LIMIT,
                    "Ignoring invalid {}", MAX_TICKETS_ENV
                );
                Self::default()
            }
        }
    }
}
