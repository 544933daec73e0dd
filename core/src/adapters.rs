//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the [`solid_common::ports`] traits.
//!
//! * **[`stub`]**: stand-ins for payment, shipping and email. [`stub::Unimplemented`]
//!   fails every call, [`stub::DryRun`] logs the call and succeeds.
//! * **[`tracing_logger`]**: a [`LoggingService`](solid_common::ports::logging::LoggingService)
//!   backed by `tracing`.
//!
//! ## Rules
//! * Adapters **MUST** depend on ports and models only.
//! * Adapters **MUST NOT** call application services.

pub mod stub;
pub mod tracing_logger;
