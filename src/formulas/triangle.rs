use super::{ensure_length, GeometryError};

/// Area from base and perpendicular height: ½·b·h.
pub fn triangle_area(base: f64, height: f64) -> Result<f64, GeometryError> {
    ensure_length("base", base)?;
    ensure_length("height", height)?;
    Ok(0.5 * base * height)
}

/// Sum of the three sides.
///
/// The triangle inequality is not checked; only the sign of each side is.
pub fn triangle_perimeter(side1: f64, side2: f64, side3: f64) -> Result<f64, GeometryError> {
    ensure_length("side 1", side1)?;
    ensure_length("side 2", side2)?;
    ensure_length("side 3", side3)?;
    Ok(side1 + side2 + side3)
}
