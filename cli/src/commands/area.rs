use colored::*;
use solid_common::config::Config;
use solid_common::models::shape::Shape;
use solid_core::geometry::AreaCalculator;

use crate::terminal::print;

pub fn area(inputs: &[String], parallel: bool, cfg: &Config) -> anyhow::Result<()> {
    let calculator = AreaCalculator::parse(inputs)?;
    let shapes: &[Shape] = calculator.shapes();

    if cfg.quiet < 2 {
        for (idx, shape) in shapes.iter().enumerate() {
            print::tree(idx, shape.kind(), &shape_details(shape));
            if idx + 1 != shapes.len() {
                print::blank();
            }
        }
    }

    let total: f64 = if parallel {
        calculator.total_area_parallel()
    } else {
        calculator.total_area()
    };

    print::result(&summary(shapes.len(), total), cfg.quiet);
    Ok(())
}

fn shape_details(shape: &Shape) -> Vec<(&'static str, ColoredString)> {
    let mut details: Vec<(&'static str, ColoredString)> = match *shape {
        Shape::Rectangle { width, height } => vec![
            ("Width", print::number(width)),
            ("Height", print::number(height)),
        ],
        Shape::Circle { radius } => vec![("Radius", print::number(radius))],
    };
    details.push(("Area", print::number(AreaCalculator::compute_area(shape)).bold()));
    details
}

fn summary(count: usize, total: f64) -> String {
    let unit: &str = if count == 1 { "shape" } else { "shapes" };
    format!("Total area of {count} {unit}: {}", print::number(total).bold())
}
