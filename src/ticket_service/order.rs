//! Per-type aggregation of a ticket list and the totals derived from it.

use crate::model::{TicketReservationResponse, TicketType, TicketTypeRequest};

/// Summed ticket counts for one purchase, keyed by ticket type.
///
/// Built fresh for every purchase. Types that were never requested count as 0, and
/// the result does not depend on the order of the requests.
///
/// Sums saturate at `u32::MAX`. A saturated order is always over the configured
/// maximum, which is capped at [`MAX_TICKETS_LIMIT`](super::MAX_TICKETS_LIMIT), so it
/// never passes validation. Totals of a validated order are exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregatedOrder {
    adult: u32,
    child: u32,
    infant: u32,
}

impl AggregatedOrder {
    pub fn from_requests<'a>(requests: impl IntoIterator<Item = &'a TicketTypeRequest>) -> Self {
        requests
            .into_iter()
            .fold(Self::default(), |mut order, request| {
                order.add(request);
                order
            })
    }

    pub fn add(&mut self, request: &TicketTypeRequest) {
        let slot = self.slot_mut(request.ticket_type());
        *slot = slot.saturating_add(request.no_of_tickets());
    }

    pub fn count(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    fn slot_mut(&mut self, ticket_type: TicketType) -> &mut u32 {
        match ticket_type {
            TicketType::Adult => &mut self.adult,
            TicketType::Child => &mut self.child,
            TicketType::Infant => &mut self.infant,
        }
    }

    /// Every ticket in the order, infants included.
    pub fn total_tickets(&self) -> u32 {
        TicketType::ALL
            .into_iter()
            .fold(0u32, |total, t| total.saturating_add(self.count(t)))
    }

    pub fn total_cost(&self) -> u32 {
        TicketType::ALL.into_iter().fold(0u32, |total, t| {
            total.saturating_add(self.count(t).saturating_mul(t.price()))
        })
    }

    /// Seats to reserve: one per ticket whose type occupies a seat.
    pub fn seats_required(&self) -> u32 {
        TicketType::ALL
            .into_iter()
            .filter(|t| t.occupies_seat())
            .fold(0u32, |total, t| total.saturating_add(self.count(t)))
    }

    /// Builds the receipt for this order. Only meaningful once the order has been validated.
    pub fn receipt(&self) -> TicketReservationResponse {
        TicketReservationResponse::new(
            self.total_tickets(),
            self.total_cost(),
            self.seats_required(),
        )
    }
}

impl<'a> FromIterator<&'a TicketTypeRequest> for AggregatedOrder {
    fn from_iter<I: IntoIterator<Item = &'a TicketTypeRequest>>(iter: I) -> Self {
        Self::from_requests(iter)
    }
}
