//! The ticket purchase core: aggregation, business rules, pricing and orchestration.
//!
//! - [`AggregatedOrder`] folds a request list into per-type counts and derives the totals.
//! - [`validation`] holds the order-level rules.
//! - [`TicketService`] runs a purchase end to end against its two collaborators.

pub mod config;
pub mod error;
pub mod order;
pub mod service;
pub mod validation;

pub use config::*;
pub use error::*;
pub use order::AggregatedOrder;
pub use service::TicketService;
