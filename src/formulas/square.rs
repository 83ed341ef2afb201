use super::{ensure_length, GeometryError};

/// Area of a square: side².
pub fn square_area(side: f64) -> Result<f64, GeometryError> {
    ensure_length("side length", side)?;
    Ok(side * side)
}

/// Perimeter of a square: 4·side.
pub fn square_perimeter(side: f64) -> Result<f64, GeometryError> {
    ensure_length("side length", side)?;
    Ok(4.0 * side)
}
