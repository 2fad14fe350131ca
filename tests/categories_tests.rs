use graph_rs::core::{DataPoint, DataValue, Series, unify_categories};
use proptest::prelude::*;

fn keys(series: &Series) -> Vec<DataValue> {
    series.data.iter().map(|point| point.x.clone()).collect()
}

#[test]
fn categories_keep_first_seen_order_across_series() {
    let unified = unify_categories(vec![
        Series::bar(vec![DataPoint::new("A", 1.0), DataPoint::new("B", 2.0)]),
        Series::bar(vec![DataPoint::new("B", 3.0), DataPoint::new("C", 4.0)]),
    ]);

    let expected = vec![
        DataValue::text("A"),
        DataValue::text("B"),
        DataValue::text("C"),
    ];
    assert_eq!(unified.categories.to_vec(), expected);
    for series in &unified.series {
        assert_eq!(keys(series), expected);
    }
}

#[test]
fn padding_points_have_zero_y_and_keep_existing_values() {
    let unified = unify_categories(vec![
        Series::bar(vec![DataPoint::new("A", 1.0)]),
        Series::bar(vec![DataPoint::new("B", 3.0)]),
    ]);

    let first = &unified.series[0].data;
    assert_eq!(first[0].y, DataValue::number(1.0));
    assert_eq!(first[1].y, DataValue::number(0.0));

    let second = &unified.series[1].data;
    assert_eq!(second[0].y, DataValue::number(0.0));
    assert_eq!(second[1].y, DataValue::number(3.0));
}

#[test]
fn numeric_and_text_keys_are_distinct_categories() {
    let unified = unify_categories(vec![Series::bar(vec![
        DataPoint::new(1.0, 1.0),
        DataPoint::new("1", 2.0),
    ])]);
    assert_eq!(unified.categories.len(), 2);
}

proptest! {
    #[test]
    fn unified_series_share_length_and_order(
        raw in prop::collection::vec(prop::collection::vec(0u8..12, 0..8), 1..5)
    ) {
        let series: Vec<Series> = raw
            .iter()
            .map(|keys| {
                let mut seen = Vec::new();
                let data = keys
                    .iter()
                    .filter(|key| {
                        let fresh = !seen.contains(*key);
                        seen.push(**key);
                        fresh
                    })
                    .map(|key| DataPoint::new(format!("k{key}"), f64::from(*key)))
                    .collect();
                Series::bar(data)
            })
            .collect();

        let unified = unify_categories(series);
        let expected = unified.categories.to_vec();
        for series in &unified.series {
            prop_assert_eq!(keys(series), expected.clone());
        }
    }
}
