//! Maps a (shape, calculation) pair to the inputs it needs and the formula
//! that consumes them, and formats the resulting measurement.

use std::fmt;

use tracing::{debug, trace};

use crate::formulas::{self, GeometryError};
use crate::shape::{CalculationKind, Shape};

/// Decimal places used for circle and rhombus results unless configured.
pub const DEFAULT_FIXED_DECIMALS: usize = 4;

/// Largest accepted decimal count; more digits than an `f64` carries.
pub const MAX_FIXED_DECIMALS: usize = 32;

/// One numeric input requested from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// Short name used in error messages.
    pub name: &'static str,
    /// Prompt text, without the trailing `": "`.
    pub prompt: &'static str,
}

const SIDE: Parameter = Parameter {
    name: "side length",
    prompt: "Enter the side length",
};
const RADIUS: Parameter = Parameter {
    name: "radius",
    prompt: "Enter the radius",
};
const BASE: Parameter = Parameter {
    name: "base",
    prompt: "Enter the base",
};
const HEIGHT: Parameter = Parameter {
    name: "height",
    prompt: "Enter the height",
};
const SIDE_1: Parameter = Parameter {
    name: "side 1",
    prompt: "Enter side 1",
};
const SIDE_2: Parameter = Parameter {
    name: "side 2",
    prompt: "Enter side 2",
};
const SIDE_3: Parameter = Parameter {
    name: "side 3",
    prompt: "Enter side 3",
};
const LENGTH: Parameter = Parameter {
    name: "length",
    prompt: "Enter the length",
};
const WIDTH: Parameter = Parameter {
    name: "width",
    prompt: "Enter the width",
};
const ANGLE: Parameter = Parameter {
    name: "angle",
    prompt: "Enter the internal acute angle (in degrees)",
};

/// Inputs required for `shape`/`kind`, in the order they are requested.
pub fn parameters(shape: Shape, kind: CalculationKind) -> &'static [Parameter] {
    use CalculationKind::*;
    match (shape, kind) {
        (Shape::Square, Area | Perimeter) => &[SIDE],
        (Shape::Circle, Area | Perimeter) => &[RADIUS],
        (Shape::Triangle, Area) => &[BASE, HEIGHT],
        (Shape::Triangle, Perimeter) => &[SIDE_1, SIDE_2, SIDE_3],
        (Shape::Rectangle, Area | Perimeter) => &[LENGTH, WIDTH],
        (Shape::Rhombus, Area) => &[SIDE, ANGLE],
        (Shape::Rhombus, Perimeter) => &[SIDE],
    }
}

/// Numeric inputs for exactly one (shape, calculation) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeParameters {
    SquareArea { side: f64 },
    SquarePerimeter { side: f64 },
    CircleArea { radius: f64 },
    CirclePerimeter { radius: f64 },
    TriangleArea { base: f64, height: f64 },
    TrianglePerimeter { side1: f64, side2: f64, side3: f64 },
    RectangleArea { length: f64, width: f64 },
    RectanglePerimeter { length: f64, width: f64 },
    RhombusArea { side: f64, angle_deg: f64 },
    RhombusPerimeter { side: f64 },
}

impl ShapeParameters {
    /// Builds the record for `shape`/`kind`, pulling each value from `next`
    /// in [`parameters`] order. The first error from `next` aborts collection.
    pub fn collect<E>(
        shape: Shape,
        kind: CalculationKind,
        mut next: impl FnMut(&Parameter) -> Result<f64, E>,
    ) -> Result<Self, E> {
        use CalculationKind::*;
        let params = match (shape, kind) {
            (Shape::Square, Area) => ShapeParameters::SquareArea { side: next(&SIDE)? },
            (Shape::Square, Perimeter) => ShapeParameters::SquarePerimeter { side: next(&SIDE)? },
            (Shape::Circle, Area) => ShapeParameters::CircleArea {
                radius: next(&RADIUS)?,
            },
            (Shape::Circle, Perimeter) => ShapeParameters::CirclePerimeter {
                radius: next(&RADIUS)?,
            },
            (Shape::Triangle, Area) => ShapeParameters::TriangleArea {
                base: next(&BASE)?,
                height: next(&HEIGHT)?,
            },
            (Shape::Triangle, Perimeter) => ShapeParameters::TrianglePerimeter {
                side1: next(&SIDE_1)?,
                side2: next(&SIDE_2)?,
                side3: next(&SIDE_3)?,
            },
            (Shape::Rectangle, Area) => ShapeParameters::RectangleArea {
                length: next(&LENGTH)?,
                width: next(&WIDTH)?,
            },
            (Shape::Rectangle, Perimeter) => ShapeParameters::RectanglePerimeter {
                length: next(&LENGTH)?,
                width: next(&WIDTH)?,
            },
            (Shape::Rhombus, Area) => ShapeParameters::RhombusArea {
                side: next(&SIDE)?,
                angle_deg: next(&ANGLE)?,
            },
            (Shape::Rhombus, Perimeter) => ShapeParameters::RhombusPerimeter { side: next(&SIDE)? },
        };
        Ok(params)
    }

    /// Builds the record from an already-ordered slice of values.
    ///
    /// Returns `None` when `values` has the wrong length for the pair.
    pub fn from_values(shape: Shape, kind: CalculationKind, values: &[f64]) -> Option<Self> {
        if values.len() != parameters(shape, kind).len() {
            return None;
        }
        let mut iter = values.iter().copied();
        Self::collect(shape, kind, |_| iter.next().ok_or(())).ok()
    }

    /// Shape these inputs describe.
    pub fn shape(&self) -> Shape {
        match self {
            ShapeParameters::SquareArea { .. } | ShapeParameters::SquarePerimeter { .. } => {
                Shape::Square
            }
            ShapeParameters::CircleArea { .. } | ShapeParameters::CirclePerimeter { .. } => {
                Shape::Circle
            }
            ShapeParameters::TriangleArea { .. } | ShapeParameters::TrianglePerimeter { .. } => {
                Shape::Triangle
            }
            ShapeParameters::RectangleArea { .. } | ShapeParameters::RectanglePerimeter { .. } => {
                Shape::Rectangle
            }
            ShapeParameters::RhombusArea { .. } | ShapeParameters::RhombusPerimeter { .. } => {
                Shape::Rhombus
            }
        }
    }

    /// Calculation these inputs are for.
    pub fn kind(&self) -> CalculationKind {
        match self {
            ShapeParameters::SquareArea { .. }
            | ShapeParameters::CircleArea { .. }
            | ShapeParameters::TriangleArea { .. }
            | ShapeParameters::RectangleArea { .. }
            | ShapeParameters::RhombusArea { .. } => CalculationKind::Area,
            ShapeParameters::SquarePerimeter { .. }
            | ShapeParameters::CirclePerimeter { .. }
            | ShapeParameters::TrianglePerimeter { .. }
            | ShapeParameters::RectanglePerimeter { .. }
            | ShapeParameters::RhombusPerimeter { .. } => CalculationKind::Perimeter,
        }
    }

    /// Runs the matching formula.
    pub fn evaluate(&self) -> Result<Measurement, GeometryError> {
        trace!(params = ?self, "evaluating formula");
        let value = match *self {
            ShapeParameters::SquareArea { side } => formulas::square_area(side),
            ShapeParameters::SquarePerimeter { side } => formulas::square_perimeter(side),
            ShapeParameters::CircleArea { radius } => formulas::circle_area(radius),
            ShapeParameters::CirclePerimeter { radius } => formulas::circle_perimeter(radius),
            ShapeParameters::TriangleArea { base, height } => {
                formulas::triangle_area(base, height)
            }
            ShapeParameters::TrianglePerimeter {
                side1,
                side2,
                side3,
            } => formulas::triangle_perimeter(side1, side2, side3),
            ShapeParameters::RectangleArea { length, width } => {
                formulas::rectangle_area(length, width)
            }
            ShapeParameters::RectanglePerimeter { length, width } => {
                formulas::rectangle_perimeter(length, width)
            }
            ShapeParameters::RhombusArea { side, angle_deg } => {
                formulas::rhombus_area(side, angle_deg)
            }
            ShapeParameters::RhombusPerimeter { side } => formulas::rhombus_perimeter(side),
        }?;
        let measurement = Measurement {
            shape: self.shape(),
            kind: self.kind(),
            value,
        };
        debug!(shape = %measurement.shape, kind = %measurement.kind, value, "computed");
        Ok(measurement)
    }
}

/// Computed area or perimeter together with what produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub shape: Shape,
    pub kind: CalculationKind,
    pub value: f64,
}

impl Measurement {
    /// `Area`, `Perimeter`, or `Perimeter (circumference)` for circles.
    pub fn label(&self) -> &'static str {
        match (self.shape, self.kind) {
            (_, CalculationKind::Area) => "Area",
            (Shape::Circle, CalculationKind::Perimeter) => "Perimeter (circumference)",
            (_, CalculationKind::Perimeter) => "Perimeter",
        }
    }

    /// Circle and rhombus results are printed with a fixed number of decimals.
    pub fn uses_fixed_decimals(&self) -> bool {
        matches!(self.shape, Shape::Circle | Shape::Rhombus)
    }

    /// Formats the value alone, honoring `fixed_decimals` for circle and rhombus.
    ///
    /// `fixed_decimals` is capped at [`MAX_FIXED_DECIMALS`].
    pub fn format_value(&self, fixed_decimals: usize) -> String {
        let fixed_decimals = fixed_decimals.min(MAX_FIXED_DECIMALS);
        // -0.0 would otherwise print as "-0"
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        if self.uses_fixed_decimals() {
            format!("{value:.fixed_decimals$}")
        } else {
            format!("{value}")
        }
    }

    /// Full output line, e.g. `Area of square: 16`.
    pub fn render(&self, fixed_decimals: usize) -> String {
        format!(
            "{} of {}: {}",
            self.label(),
            self.shape,
            self.format_value(fixed_decimals)
        )
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_FIXED_DECIMALS))
    }
}
