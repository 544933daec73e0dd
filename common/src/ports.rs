//! # Outbound Ports (Driven Actors)
//!
//! Contracts for interactions *initiated by the application* towards
//! collaborators outside of it (payment providers, carriers, mail servers,
//! log sinks).
//!
//! ## Rules
//! 1. All items here must be `traits`.
//! 2. No concrete implementations allowed.
//! 3. Using domain models in method signatures is allowed and encouraged.
//! 4. These traits are implemented by the adapters in `solid-core`.
//!
//! Each port carries a single responsibility, so a service only depends on
//! the capabilities it actually calls.

pub mod email;
pub mod logging;
pub mod payment;
pub mod shipping;
