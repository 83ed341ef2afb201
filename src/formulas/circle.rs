use std::f64::consts::PI;

use super::{ensure_length, GeometryError};

/// Area of a circle: π·r².
pub fn circle_area(radius: f64) -> Result<f64, GeometryError> {
    ensure_length("radius", radius)?;
    Ok(PI * radius * radius)
}

/// Circumference: 2·π·r.
pub fn circle_perimeter(radius: f64) -> Result<f64, GeometryError> {
    ensure_length("radius", radius)?;
    Ok(2.0 * PI * radius)
}
