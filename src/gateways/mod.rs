//! In-process stand-ins for the payment gateway and the seat-booking gateway.
//!
//! Each gateway is a [`ResourceActor`](crate::framework::ResourceActor) whose entities are
//! per-account ledgers. The ledgers accept every well-formed request; they exist so the
//! ticket service can be run and observed end-to-end.

pub mod error;
pub mod payment;
pub mod seat_booking;

pub use error::*;
pub use payment::{PaymentAction, PaymentActionResult, PaymentLedger};
pub use seat_booking::{SeatAction, SeatActionResult, SeatBooking};
