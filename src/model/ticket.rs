//! Ticket types, their price table and the validated per-type request.

use crate::ticket_service::PurchaseError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The kinds of ticket that can be sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    /// Sits on an accompanying adult's lap, so never gets a seat of its own.
    Infant,
}

impl TicketType {
    /// Every ticket type, in price-table order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Price of a single ticket of this type. See [`TicketTypeMapping`].
    pub const fn price(self) -> u32 {
        TicketTypeMapping::price_of(self)
    }

    /// Whether a ticket of this type needs an allocated seat.
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = PurchaseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|ticket_type| ticket_type.as_str() == tag)
            .ok_or_else(|| {
                PurchaseError::InvalidTicketRequest(format!(
                    "type must be ADULT, CHILD, or INFANT, got {tag:?}"
                ))
            })
    }
}

/// Static price table, in whole currency units.
pub struct TicketTypeMapping;

impl TicketTypeMapping {
    pub const ADULT: u32 = 25;
    pub const CHILD: u32 = 15;
    pub const INFANT: u32 = 0;

    pub const fn price_of(ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => Self::ADULT,
            TicketType::Child => Self::CHILD,
            TicketType::Infant => Self::INFANT,
        }
    }
}

/// A request for `count` tickets of a single type.
///
/// Immutable once built. The count is always at least 1: an order that wants none of a
/// type simply leaves that type out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTicketRequest")]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    /// Creates a request, rejecting a zero count.
    pub fn new(ticket_type: TicketType, count: u32) -> Result<Self, PurchaseError> {
        if count == 0 {
            return Err(PurchaseError::InvalidTicketRequest(format!(
                "{ticket_type} count must be at least 1"
            )));
        }
        Ok(Self { ticket_type, count })
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.count
    }
}

/// The untyped `{ "type": ..., "count": ... }` entry an outer adapter receives.
///
/// Either field may be missing; nothing is checked until it is converted into a
/// [`TicketTypeRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTicketRequest {
    #[serde(rename = "type", default)]
    pub ticket_type: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
}

impl RawTicketRequest {
    pub fn new(ticket_type: impl Into<String>, count: i64) -> Self {
        Self {
            ticket_type: Some(ticket_type.into()),
            count: Some(count),
        }
    }
}

impl TryFrom<RawTicketRequest> for TicketTypeRequest {
    type Error = PurchaseError;

    fn try_from(raw: RawTicketRequest) -> Result<Self, Self::Error> {
        let ticket_type: TicketType = raw
            .ticket_type
            .as_deref()
            .ok_or_else(|| PurchaseError::InvalidTicketRequest("missing ticket type".to_string()))?
            .parse()?;

        let count = raw.count.ok_or_else(|| {
            PurchaseError::InvalidTicketRequest(format!("missing count for {ticket_type} tickets"))
        })?;
        let count = u32::try_from(count).map_err(|_| {
            PurchaseError::InvalidTicketRequest(format!(
                "{ticket_type} count must be at least 1, got {count}"
            ))
        })?;

        TicketTypeRequest::new(ticket_type, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_table() {
        assert_eq!(TicketType::Adult.price(), 25);
        assert_eq!(TicketType::Child.price(), 15);
        assert_eq!(TicketType::Infant.price(), 0);
    }

    #[test]
    fn test_only_infants_go_without_a_seat() {
        assert!(TicketType::Adult.occupies_seat());
        assert!(TicketType::Child.occupies_seat());
        assert!(!TicketType::Infant.occupies_seat());
    }

    #[test]
    fn test_parse_known_and_unknown_tags() {
        assert_eq!("CHILD".parse::<TicketType>().unwrap(), TicketType::Child);

        let err = "SENIOR".parse::<TicketType>().unwrap_err();
        assert!(err.to_string().contains("type must be ADULT, CHILD, or INFANT"));
        assert!("adult".parse::<TicketType>().is_err());
        assert!("".parse::<TicketType>().is_err());
    }

    #[test]
    fn test_new_rejects_zero_count() {
        let request = TicketTypeRequest::new(TicketType::Adult, 2).unwrap();
        assert_eq!(request.ticket_type(), TicketType::Adult);
        assert_eq!(request.no_of_tickets(), 2);

        assert!(matches!(
            TicketTypeRequest::new(TicketType::Child, 0),
            Err(PurchaseError::InvalidTicketRequest(_))
        ));
    }

    #[test]
    fn test_raw_request_conversion() {
        let parsed = TicketTypeRequest::try_from(RawTicketRequest::new("INFANT", 3)).unwrap();
        assert_eq!(parsed.ticket_type(), TicketType::Infant);
        assert_eq!(parsed.no_of_tickets(), 3);

        let rejected = [
            RawTicketRequest::new("ADULT", -1),
            RawTicketRequest::new("ADULT", 0),
            RawTicketRequest::new("", 1),
            RawTicketRequest::new("SENIOR", 1),
            RawTicketRequest::new("ADULT", i64::from(u32::MAX) + 1),
            RawTicketRequest {
                ticket_type: Some("ADULT".to_string()),
                count: None,
            },
            RawTicketRequest {
                ticket_type: None,
                count: Some(-1),
            },
        ];
        for raw in rejected {
            let result = TicketTypeRequest::try_from(raw.clone());
            assert!(
                matches!(result, Err(PurchaseError::InvalidTicketRequest(_))),
                "{raw:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let request: TicketTypeRequest =
            serde_json::from_str(r#"{ "type": "CHILD", "count": 2 }"#).unwrap();
        assert_eq!(request, TicketTypeRequest::new(TicketType::Child, 2).unwrap());

        assert!(serde_json::from_str::<TicketTypeRequest>(r#"{ "type": "CHILD", "count": 0 }"#).is_err());
        assert!(serde_json::from_str::<TicketTypeRequest>(r#"{ "count": 1 }"#).is_err());
    }
}
