//! # Domain Models
//!
//! Core data types shared by every layer.
//!
//! ## Entities
//! * [`order::Order`]: a customer with the items they want to buy.
//!
//! ## Value Objects
//! * [`shape::Shape`]: a closed set of plane figures with an area.
//! * [`animal::Animal`]: a closed set of animals that make a sound.
//! * [`order::Item`]: a named, priced line of an order.
//!
//! All closed sets are enums, so there is no base variant without behaviour.
//! Unknown variants only exist as text and are rejected while parsing.

pub mod animal;
pub mod order;
pub mod shape;
