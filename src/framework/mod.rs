//! Generic actor framework for ledger-style gateways.
//!
//! This module provides the building blocks the in-process payment and seat-booking
//! gateways are made of.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that ledger types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns entities and processes their actions
//! - [`ResourceClient`] - Typed handle for sending requests to a `ResourceActor`
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
