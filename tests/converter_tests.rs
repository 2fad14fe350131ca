use approx::assert_relative_eq;
use graph_rs::ChartError;
use graph_rs::core::{Axis, Limits, Range, convert};

fn limits() -> Limits {
    Limits::new(50.0, 740.0, 550.0, 60.0)
}

#[test]
fn range_endpoints_land_exactly_on_limits() {
    let range = Range::new(-3.7, 12.9, 0.1, 0.3);
    let limits = limits();

    assert_eq!(convert(-3.7, range, limits, Axis::X).expect("min x"), 50.0);
    assert_eq!(convert(12.9, range, limits, Axis::X).expect("max x"), 740.0);
    assert_eq!(convert(0.1, range, limits, Axis::Y).expect("min y"), 550.0);
    assert_eq!(convert(0.3, range, limits, Axis::Y).expect("max y"), 60.0);
}

#[test]
fn y_axis_maps_upward_on_a_downward_canvas() {
    let range = Range::new(0.0, 10.0, 0.0, 100.0);
    let y = convert(25.0, range, limits(), Axis::Y).expect("y");
    assert_relative_eq!(y, 550.0 - 0.25 * 490.0, epsilon = 1e-9);
}

#[test]
fn values_outside_range_extrapolate() {
    let range = Range::new(0.0, 10.0, 0.0, 1.0);
    let limits = Limits::new(0.0, 100.0, 100.0, 0.0);
    assert_relative_eq!(
        convert(15.0, range, limits, Axis::X).expect("beyond max"),
        150.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        convert(-5.0, range, limits, Axis::X).expect("below min"),
        -50.0,
        epsilon = 1e-9
    );
}

#[test]
fn degenerate_range_is_a_division_by_zero() {
    let range = Range::new(4.0, 4.0, 0.0, 1.0);
    let err = convert(4.0, range, limits(), Axis::X).expect_err("zero span must fail");
    assert!(matches!(err, ChartError::DivisionByZero { axis: Axis::X }));

    assert!(convert(0.5, range, limits(), Axis::Y).is_ok());
}

#[test]
fn non_finite_values_are_rejected() {
    let range = Range::new(0.0, 1.0, 0.0, 1.0);
    let err = convert(f64::NAN, range, limits(), Axis::Y).expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}
