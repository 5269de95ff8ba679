//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log lines use the compact format and hide the crate/module prefix (`with_target(false)`).
//! Verbosity comes from the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Gateway actors**: startup, every action, shutdown with the number of ledgers held
//! - **Purchases**: one span per call carrying the account id and number of entries
//! - **Rejections**: a `warn` with the reason for every refused purchase
//! - **Collaborator calls**: payment taken and seats reserved, with running totals
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Full payloads: the requests and the priced order
//! RUST_LOG=debug cargo run
//!
//! # Filter to the purchase core only
//! RUST_LOG=cinema_tickets::ticket_service=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="PaymentLedger"
//! INFO Actor started entity_type="SeatBooking"
//! INFO purchase_tickets:make_payment: Payment taken account_id=account_1 amount=40 total_charged=40
//! INFO purchase_tickets:reserve_seat: Seats reserved account_id=account_1 seats=2 seats_reserved=2
//! INFO purchase_tickets: Purchase complete account_id=account_1 tickets=2 seats=2 cost=40
//! WARN purchase_tickets: Purchase rejected error=At least 3 adult ticket(s) are required for this transaction
//! ```
//!
//! A rejected purchase shows no `make_payment` or `reserve_seat` span at all.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
