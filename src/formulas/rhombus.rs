use super::{ensure_length, GeometryError};

/// Largest accepted internal acute angle, in degrees.
pub const MAX_ACUTE_ANGLE_DEG: f64 = 90.0;

/// Area of a rhombus from its side and internal acute angle.
///
/// `angle_deg` must lie in (0, 90]. At 90° the rhombus is a square; as the
/// angle approaches 0 it collapses to a line, so 0 itself is rejected.
pub fn rhombus_area(side: f64, angle_deg: f64) -> Result<f64, GeometryError> {
    ensure_length("side length", side)?;
    if !angle_deg.is_finite() {
        return Err(GeometryError::invalid(
            "angle",
            angle_deg,
            "must be a finite number",
        ));
    }
    if angle_deg <= 0.0 || angle_deg > MAX_ACUTE_ANGLE_DEG {
        return Err(GeometryError::invalid(
            "angle",
            angle_deg,
            "must be greater than 0 and at most 90 degrees",
        ));
    }
    Ok(side * side * angle_deg.to_radians().sin())
}

/// Perimeter of a rhombus: 4·side.
pub fn rhombus_perimeter(side: f64) -> Result<f64, GeometryError> {
    ensure_length("side length", side)?;
    Ok(4.0 * side)
}
