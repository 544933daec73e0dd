//! # Solid Core
//!
//! Application services and the adapters that plug into their ports.
//!
//! * **[`geometry`]**: totals the area of a set of shapes.
//! * **[`orders`]**: pays for and ships an order.
//! * **[`notifications`]**: emails a recipient and records that it happened.
//! * **[`choir`]**: lets any mix of animals speak.
//! * **[`adapters`]**: concrete implementations of the `solid_common::ports` traits.
//!
//! Services only see ports. The binary decides which adapters to inject.

pub mod adapters;
pub mod choir;
pub mod geometry;
pub mod notifications;
pub mod orders;
