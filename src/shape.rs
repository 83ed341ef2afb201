use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;

/// Supported plane figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Shape {
    /// Four equal sides at right angles
    Square,
    /// Round figure given by its radius
    Circle,
    /// Three-sided polygon
    Triangle,
    /// Four right angles, two side lengths
    Rectangle,
    /// Four equal sides with an acute internal angle
    Rhombus,
}

impl Shape {
    /// Every shape, in prompt order.
    pub const ALL: [Shape; 5] = [
        Shape::Square,
        Shape::Circle,
        Shape::Triangle,
        Shape::Rectangle,
        Shape::Rhombus,
    ];

    /// Lowercase name used in prompts and output.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Rectangle => "rectangle",
            Shape::Rhombus => "rhombus",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UsageError::UnknownShape(wanted.to_string()))
    }
}

/// Which metric to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CalculationKind {
    /// Enclosed surface
    Area,
    /// Boundary length (circumference for circles)
    Perimeter,
}

impl CalculationKind {
    /// Every calculation, in prompt order.
    pub const ALL: [CalculationKind; 2] = [CalculationKind::Area, CalculationKind::Perimeter];

    /// Lowercase name used in prompts.
    pub fn name(self) -> &'static str {
        match self {
            CalculationKind::Area => "area",
            CalculationKind::Perimeter => "perimeter",
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculationKind {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CalculationKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UsageError::UnknownCalculation(wanted.to_string()))
    }
}

/// Comma-separated list of accepted names, e.g. `"area, perimeter"`.
pub fn choices<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Malformed or out-of-enumeration input from flags or prompts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UsageError {
    /// Shape name outside the supported set
    #[error("invalid shape '{0}' (expected one of: {expected})", expected = choices(&Shape::ALL))]
    UnknownShape(String),

    /// Calculation name other than area or perimeter
    #[error(
        "invalid calculation type '{0}' (expected one of: {expected})",
        expected = choices(&CalculationKind::ALL)
    )]
    UnknownCalculation(String),

    /// Answer that is not a finite number
    #[error("'{input}' is not a valid number for {parameter}")]
    NotANumber { parameter: String, input: String },

    /// Input ended before the answer was given
    #[error("no input given for {what}")]
    MissingInput { what: String },
}
