use graph_rs::ChartError;
use graph_rs::core::{AxisMode, DataPoint, Range, Series, compute_range};

#[test]
fn range_always_includes_zero() {
    let series = vec![Series::line(vec![
        DataPoint::new(1.0, 5.0),
        DataPoint::new(2.0, 9.0),
    ])];
    let range = compute_range(&series, AxisMode::Continuous, AxisMode::Continuous).expect("range");
    assert_eq!(range, Range::new(0.0, 2.0, 0.0, 9.0));
}

#[test]
fn negative_only_data_extends_down_to_its_minimum_and_up_to_zero() {
    let series = vec![Series::bar(vec![
        DataPoint::new(-8.0, -3.0),
        DataPoint::new(-2.0, -1.5),
    ])];
    let range = compute_range(&series, AxisMode::Continuous, AxisMode::Continuous).expect("range");
    assert_eq!(range, Range::new(-8.0, 0.0, -3.0, 0.0));
}

#[test]
fn categorical_axes_use_point_counts() {
    let series = vec![
        Series::bar(vec![DataPoint::new("a", 3.0), DataPoint::new("b", 1.0)]),
        Series::bar(vec![
            DataPoint::new("a", 2.0),
            DataPoint::new("b", 4.0),
            DataPoint::new("c", 6.0),
        ]),
    ];
    let range =
        compute_range(&series, AxisMode::Categorical, AxisMode::Continuous).expect("range");
    assert_eq!(range, Range::new(0.0, 3.0, 0.0, 6.0));
}

#[test]
fn empty_collection_is_invalid_input() {
    let err = compute_range(&[], AxisMode::Continuous, AxisMode::Continuous)
        .expect_err("empty collection must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn text_values_on_a_continuous_axis_are_rejected() {
    let series = vec![Series::line(vec![DataPoint::new("a", 1.0)])];
    assert!(compute_range(&series, AxisMode::Continuous, AxisMode::Continuous).is_err());
}
