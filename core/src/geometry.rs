//! # Area Calculation Service
//!
//! Totals the area of an ordered collection of shapes.
//!
//! Adding a new kind of shape only touches [`Shape`]; the calculator folds
//! over whatever areas the shapes report.

use rayon::prelude::*;
use solid_common::error::SolidError;
use solid_common::models::shape::Shape;
use tracing::debug;

/// Holds the shapes to measure, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaCalculator {
    shapes: Vec<Shape>,
}

impl AreaCalculator {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Builds a calculator from textual shapes such as `rect:2x3` or `circle:5`.
    ///
    /// Stops at the first input that fails to parse. An unknown kind yields
    /// [`SolidError::UnsupportedVariant`] and no calculator at all.
    pub fn parse<I, S>(inputs: I) -> Result<Self, SolidError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let shapes = inputs
            .into_iter()
            .map(|input| input.as_ref().parse::<Shape>())
            .collect::<Result<Vec<Shape>, SolidError>>()?;

        debug!("Parsed {} shapes", shapes.len());
        Ok(Self::new(shapes))
    }

    /// Parses textual shapes and totals them in one step.
    ///
    /// The first unsupported or malformed input aborts the whole operation;
    /// there is no partial total.
    pub fn total_area_of(inputs: &[&str]) -> Result<f64, SolidError> {
        Ok(Self::parse(inputs)?.total_area())
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn compute_area(shape: &Shape) -> f64 {
        shape.area()
    }

    /// Left fold of every area starting from `0.0`, in encounter order.
    pub fn total_area(&self) -> f64 {
        self.shapes
            .iter()
            .fold(0.0, |sum, shape| sum + Self::compute_area(shape))
    }

    /// Same result as [`Self::total_area`], bit for bit.
    ///
    /// Only the per-shape areas are computed in parallel; they are collected in
    /// input order and summed sequentially.
    pub fn total_area_parallel(&self) -> f64 {
        let areas: Vec<f64> = self.shapes.par_iter().map(Self::compute_area).collect();
        areas.into_iter().fold(0.0, |sum, area| sum + area)
    }
}

impl FromIterator<Shape> for AreaCalculator {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
