use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Receipt for a successful purchase.
///
/// Reports totals only. `seats_reserved` never exceeds `tickets_ordered`, since infant
/// tickets are counted as ordered but get no seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketReservationResponse {
    tickets_ordered: u32,
    total_cost: u32,
    seats_reserved: u32,
}

impl TicketReservationResponse {
    pub fn new(tickets_ordered: u32, total_cost: u32, seats_reserved: u32) -> Self {
        Self {
            tickets_ordered,
            total_cost,
            seats_reserved,
        }
    }

    pub fn tickets_ordered(&self) -> u32 {
        self.tickets_ordered
    }

    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    pub fn seats_reserved(&self) -> u32 {
        self.seats_reserved
    }
}

impl Display for TicketReservationResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seats = if self.seats_reserved == 1 { "seat" } else { "seats" };
        write!(
            f,
            "{} ticket(s) ordered, {} {} reserved for £{}",
            self.tickets_ordered, self.seats_reserved, seats, self.total_cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let receipt = TicketReservationResponse::new(1, 2, 3);
        assert_eq!(receipt.tickets_ordered(), 1);
        assert_eq!(receipt.total_cost(), 2);
        assert_eq!(receipt.seats_reserved(), 3);
    }

    #[test]
    fn test_display_pluralises_seats() {
        assert_eq!(
            TicketReservationResponse::new(2, 25, 1).to_string(),
            "2 ticket(s) ordered, 1 seat reserved for £25"
        );
        assert_eq!(
            TicketReservationResponse::new(2, 40, 2).to_string(),
            "2 ticket(s) ordered, 2 seats reserved for £40"
        );
    }
}
