use std::f64::consts::PI;

use solid_common::error::SolidError;
use solid_common::models::shape::Shape;
use solid_core::geometry::AreaCalculator;

#[test]
fn textual_shapes_total_the_same_as_typed_ones() {
    let parsed = AreaCalculator::parse(["rect:2x3", "circle:5"]).unwrap();
    let typed = AreaCalculator::new(vec![Shape::rectangle(2.0, 3.0), Shape::circle(5.0)]);

    assert_eq!(parsed.total_area().to_bits(), typed.total_area().to_bits());
    assert!((parsed.total_area() - (6.0 + 25.0 * PI)).abs() < 1e-9);
}

#[test]
fn single_circle_of_radius_three() {
    let calculator = AreaCalculator::parse(["circle:3"]).unwrap();
    assert!((calculator.total_area() - 28.274333882308138).abs() < 1e-9);
}

#[test]
fn unsupported_variant_yields_no_total() {
    for input in [["triangle:3x4", "circle:1"], ["circle:1", "square:2"]] {
        let result = AreaCalculator::parse(input).map(|c| c.total_area());
        assert!(
            matches!(result, Err(SolidError::UnsupportedVariant(_))),
            "{input:?} produced {result:?}"
        );
    }
}
