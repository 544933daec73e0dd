//! # Order Model
//!
//! An order only knows what was bought and by whom. Charging the customer
//! and delivering the goods belong to [`crate::ports::payment`] and
//! [`crate::ports::shipping`].

use std::fmt;
use std::str::FromStr;

use crate::error::SolidError;

/// A single priced line of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:.2}", self.name, self.price)
    }
}

impl FromStr for Item {
    type Err = SolidError;

    /// Parses `<name>=<price>`, e.g. `book=12.50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, price)) = s.rsplit_once('=') else {
            return Err(SolidError::InvalidInput(format!(
                "item needs '<name>=<price>', got '{s}'"
            )));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(SolidError::InvalidInput(format!("item name is empty in '{s}'")));
        }

        let price = price
            .trim()
            .parse::<f64>()
            .map_err(|e| SolidError::InvalidInput(format!("invalid price in '{s}': {e}")))?;

        if !price.is_finite() || price < 0.0 {
            return Err(SolidError::InvalidInput(format!(
                "price must be a non-negative number, got '{s}'"
            )));
        }

        Ok(Item::new(name, price))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub customer: String,
    pub items: Vec<Item>,
}

impl Order {
    pub fn new(customer: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            customer: customer.into(),
            items,
        }
    }

    /// Sum of all item prices, `0.0` for an empty order.
    pub fn total_price(&self) -> f64 {
        self.items.iter().fold(0.0, |sum, item| sum + item.price)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
