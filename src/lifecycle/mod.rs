//! Runtime wiring and observability setup.
//!
//! - [`CinemaSystem`] - starts the gateway actors, builds the [`TicketService`](crate::ticket_service::TicketService) on top of them and shuts everything down
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod cinema_system;
pub mod tracing;

pub use cinema_system::*;
pub use self::tracing::*;
