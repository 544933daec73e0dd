//! # Shape Model
//!
//! Plane figures with a computable area.
//!
//! Shapes can be written on the command line as:
//! * **Rectangle**: `rect:<width>x<height>` or `rectangle:<width>x<height>` (e.g. `rect:2x3`).
//! * **Circle**: `circle:<radius>` (e.g. `circle:5`).

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::SolidError;

/// A closed set of shapes.
///
/// Dimensions are fixed at construction and never change. Constructors do not
/// validate them; only the textual form rejects non-positive values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
}

impl Shape {
    pub fn rectangle(width: f64, height: f64) -> Self {
        Shape::Rectangle { width, height }
    }

    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn area(&self) -> f64 {
        match *self {
            Shape::Rectangle { width, height } => width * height,
            Shape::Circle { radius } => PI * radius.powi(2),
        }
    }

    /// Lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rectangle { .. } => "rectangle",
            Shape::Circle { .. } => "circle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Rectangle { width, height } => write!(f, "rect:{width}x{height}"),
            Shape::Circle { radius } => write!(f, "circle:{radius}"),
        }
    }
}

impl FromStr for Shape {
    type Err = SolidError;

    /// Parses a string into a `Shape`.
    ///
    /// The kind is matched case-insensitively before the dimensions are read,
    /// so `triangle:3x4` is an unsupported variant rather than a malformed one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, dims) = s.split_once(':').unwrap_or((s, ""));

        match kind.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => parse_rectangle(dims),
            "circle" => parse_circle(dims),
            other => Err(SolidError::UnsupportedVariant(other.to_string())),
        }
    }
}

/// Parses `<width>x<height>`.
fn parse_rectangle(dims: &str) -> Result<Shape, SolidError> {
    let Some((width, height)) = dims.split_once(['x', 'X']) else {
        return Err(SolidError::InvalidInput(format!(
            "rectangle needs '<width>x<height>', got '{dims}'"
        )));
    };

    Ok(Shape::rectangle(
        parse_dimension(width)?,
        parse_dimension(height)?,
    ))
}

fn parse_circle(dims: &str) -> Result<Shape, SolidError> {
    Ok(Shape::circle(parse_dimension(dims)?))
}

/// Reads a single strictly positive, finite length.
fn parse_dimension(s: &str) -> Result<f64, SolidError> {
    let s = s.trim();
    let value = s
        .parse::<f64>()
        .map_err(|e| SolidError::InvalidInput(format!("invalid dimension '{s}': {e}")))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(SolidError::InvalidInput(format!(
            "dimension must be a positive number, got '{s}'"
        )));
    }

    Ok(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
