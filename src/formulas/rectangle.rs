use super::{ensure_length, GeometryError};

/// Area of a rectangle: length·width.
pub fn rectangle_area(length: f64, width: f64) -> Result<f64, GeometryError> {
    ensure_length("length", length)?;
    ensure_length("width", width)?;
    Ok(length * width)
}

/// Perimeter of a rectangle: 2·(length + width).
pub fn rectangle_perimeter(length: f64, width: f64) -> Result<f64, GeometryError> {
    ensure_length("length", length)?;
    ensure_length("width", width)?;
    Ok(2.0 * (length + width))
}
