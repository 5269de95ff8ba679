//! # Cinema Tickets
//!
//! > **Validate, price and book a cinema ticket purchase.**
//!
//! A purchase is a list of per-type ticket requests (ADULT, CHILD, INFANT) for one
//! account. This crate folds the list into per-type counts, enforces the business rules,
//! prices the order, asks a payment gateway for the money and a seat-booking gateway for
//! the seats, and hands back a receipt.
//!
//! ## 🏗️ Design
//!
//! ### Pure core, injected collaborators
//! Everything up to the receipt is plain computation over a few integers. The only side
//! effects are the two collaborator calls, and they sit behind traits
//! ([`TicketPaymentService`](clients::TicketPaymentService),
//! [`SeatReservationService`](clients::SeatReservationService)), so the service can run
//! against the bundled gateways, a test double or a real integration.
//!
//! ### Business rules
//! - Between 1 and 25 tickets per purchase (configurable, infants count).
//! - At least one adult, and one adult per infant (infants sit on a lap).
//! - ADULT costs 25, CHILD 15, INFANT 0. Infants get no seat.
//!
//! The first broken rule is the error reported, and a rejected purchase never reaches
//! either gateway.
//!
//! ### Concurrency Model
//! The bundled gateways are actors: each runs in its own Tokio task and owns its ledgers,
//! processing messages sequentially, so no locks are needed.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`ticket_service`])
//! - **Role**: aggregation, validation, pricing and the purchase flow.
//! - **Key items**: [`TicketService`](ticket_service::TicketService),
//!   [`PurchaseError`](ticket_service::PurchaseError).
//!
//! ### 2. The Data ([`model`])
//! - **Role**: ticket types and their price table, validated requests, account ids, receipts.
//!
//! ### 3. The Engine ([`framework`])
//! - **Role**: generic `ResourceActor<T>` the gateways are built on, plus mocks for tests.
//!
//! ### 4. The Collaborators ([`gateways`], [`clients`])
//! - **Role**: per-account payment and seat ledgers, and typed clients implementing the
//!   collaborator traits.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Role**: spins up the gateways, wires the service, shuts down; tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Lower the ticket limit
//! CINEMA_MAX_TICKETS=20 RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod gateways;
pub mod lifecycle;
pub mod model;
pub mod ticket_service;
