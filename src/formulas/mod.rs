//! Closed-form area and perimeter formulas, one module per shape.
//!
//! Every function checks its inputs before touching the math and returns
//! [`GeometryError::InvalidGeometry`] on the first violated constraint.

pub mod circle;
pub mod rectangle;
pub mod rhombus;
pub mod square;
pub mod triangle;

pub use circle::*;
pub use rectangle::*;
pub use rhombus::*;
pub use square::*;
pub use triangle::*;

use thiserror::Error;

/// A parsed value that lies outside a shape's domain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid {parameter} {value}: {reason}")]
    InvalidGeometry {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl GeometryError {
    pub fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        GeometryError::InvalidGeometry {
            parameter,
            value,
            reason,
        }
    }
}

/// Rejects negative and non-finite lengths.
pub(crate) fn ensure_length(parameter: &'static str, value: f64) -> Result<(), GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::invalid(
            parameter,
            value,
            "must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(GeometryError::invalid(parameter, value, "cannot be negative"));
    }
    Ok(())
}
