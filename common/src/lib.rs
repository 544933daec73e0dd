//! # Solid Common
//!
//! The pure centre of the workspace: domain models, the shared error type,
//! runtime configuration and the outbound ports the application services
//! depend on.
//!
//! Nothing in this crate performs IO. Concrete collaborators live in
//! `solid-core` (adapters) and are injected by the binary.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
