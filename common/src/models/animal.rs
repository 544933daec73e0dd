use std::fmt;
use std::str::FromStr;

use crate::error::SolidError;

/// Animals that can speak.
///
/// Any variant can stand in wherever an `Animal` is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animal {
    Dog,
    Cat,
}

impl Animal {
    pub fn sound(&self) -> &'static str {
        match self {
            Animal::Dog => "Woof!",
            Animal::Cat => "Meow!",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Animal::Dog => f.write_str("dog"),
            Animal::Cat => f.write_str("cat"),
        }
    }
}

impl FromStr for Animal {
    type Err = SolidError;

    /// Parses "dog" or "cat" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dog" => Ok(Animal::Dog),
            "cat" => Ok(Animal::Cat),
            other => Err(SolidError::UnsupportedVariant(other.to_string())),
        }
    }
}
