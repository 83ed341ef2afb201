//! Formula correctness and input validation for every shape.
use std::f64::consts::PI;

use geometry_toolbox::formulas::{
    circle_area, circle_perimeter, rectangle_area, rectangle_perimeter, rhombus_area,
    rhombus_perimeter, square_area, square_perimeter, triangle_area, triangle_perimeter,
    GeometryError,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.10} got {actual:.10} (diff {diff:e})"
    );
}

fn assert_invalid(result: Result<f64, GeometryError>, parameter: &str) {
    match result {
        Err(GeometryError::InvalidGeometry { parameter: p, .. }) => assert_eq!(p, parameter),
        Ok(v) => panic!("expected InvalidGeometry for {parameter}, got {v}"),
    }
}

#[test]
fn square_formulas() {
    assert_eq!(square_area(4.0).unwrap(), 16.0);
    assert_eq!(square_perimeter(4.0).unwrap(), 16.0);
    assert_eq!(square_area(2.5).unwrap(), 6.25);
    assert_eq!(square_area(0.0).unwrap(), 0.0);
    assert_invalid(square_area(-1.0), "side length");
    assert_invalid(square_perimeter(-0.5), "side length");
}

#[test]
fn circle_formulas() {
    assert_eq!(circle_area(1.0).unwrap(), PI);
    assert_close("area r=2", circle_area(2.0).unwrap(), 4.0 * PI, 1e-12);
    assert_close("circumference r=2", circle_perimeter(2.0).unwrap(), 4.0 * PI, 1e-12);
    assert_eq!(circle_area(0.0).unwrap(), 0.0);
    assert_invalid(circle_area(-1.0), "radius");
    assert_invalid(circle_perimeter(-1.0), "radius");
}

#[test]
fn triangle_formulas() {
    assert_eq!(triangle_area(4.0, 3.0).unwrap(), 6.0);
    assert_eq!(triangle_area(3.5, 2.0).unwrap(), 3.5);
    assert_eq!(triangle_area(0.0, 5.0).unwrap(), 0.0);
    assert_eq!(triangle_perimeter(3.0, 4.0, 5.0).unwrap(), 12.0);
    assert_invalid(triangle_area(-1.0, 5.0), "base");
    assert_invalid(triangle_area(5.0, -1.0), "height");
    assert_invalid(triangle_perimeter(3.0, -4.0, 5.0), "side 2");
    assert_invalid(triangle_perimeter(3.0, 4.0, -5.0), "side 3");
}

#[test]
fn rectangle_formulas() {
    assert_eq!(rectangle_area(4.0, 5.0).unwrap(), 20.0);
    assert_eq!(rectangle_area(2.5, 4.0).unwrap(), 10.0);
    assert_eq!(rectangle_perimeter(4.0, 5.0).unwrap(), 18.0);
    assert_eq!(rectangle_area(5.0, 0.0).unwrap(), 0.0);
    assert_invalid(rectangle_area(-1.0, 5.0), "length");
    assert_invalid(rectangle_perimeter(5.0, -1.0), "width");
}

#[test]
fn rhombus_formulas() {
    assert_close("right angle", rhombus_area(4.0, 90.0).unwrap(), 16.0, 1e-12);
    assert_close("30 degrees", rhombus_area(2.0, 30.0).unwrap(), 2.0, 1e-12);
    assert!(rhombus_area(4.0, 0.0001).unwrap() > 0.0);
    assert_eq!(rhombus_perimeter(4.0).unwrap(), 16.0);
    assert_invalid(rhombus_area(-4.0, 45.0), "side length");
    assert_invalid(rhombus_perimeter(-4.0), "side length");
}

#[test]
fn rhombus_angle_bounds() {
    assert_invalid(rhombus_area(4.0, 0.0), "angle");
    assert_invalid(rhombus_area(4.0, -30.0), "angle");
    assert_invalid(rhombus_area(4.0, 90.0001), "angle");
    assert_invalid(rhombus_area(4.0, 120.0), "angle");
    assert!(rhombus_area(4.0, 90.0).is_ok());
}

#[test]
fn non_finite_inputs_are_invalid() {
    assert_invalid(square_area(f64::NAN), "side length");
    assert_invalid(circle_perimeter(f64::INFINITY), "radius");
    assert_invalid(rectangle_area(1.0, f64::NEG_INFINITY), "width");
    assert_invalid(rhombus_area(1.0, f64::NAN), "angle");
}

#[test]
fn results_are_non_negative_for_valid_inputs() {
    let lengths = [0.0, 0.001, 1.0, 7.25, 1e6];
    for &a in &lengths {
        for &b in &lengths {
            assert!(square_area(a).unwrap() >= 0.0);
            assert!(square_perimeter(a).unwrap() >= 0.0);
            assert!(circle_area(a).unwrap() >= 0.0);
            assert!(circle_perimeter(a).unwrap() >= 0.0);
            assert!(triangle_area(a, b).unwrap() >= 0.0);
            assert!(triangle_perimeter(a, b, a).unwrap() >= 0.0);
            assert!(rectangle_area(a, b).unwrap() >= 0.0);
            assert!(rectangle_perimeter(a, b).unwrap() >= 0.0);
            assert!(rhombus_area(a, 45.0).unwrap() >= 0.0);
            assert!(rhombus_perimeter(b).unwrap() >= 0.0);
        }
    }
}

#[test]
fn error_message_names_the_parameter() {
    let err = square_area(-1.0).unwrap_err();
    assert_eq!(err.to_string(), "invalid side length -1: cannot be negative");
    let err = rhombus_area(1.0, 95.0).unwrap_err();
    assert!(err.to_string().contains("at most 90 degrees"), "{err}");
}
