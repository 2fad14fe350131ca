use tracing::debug;

use crate::core::{Axis, AxisMode, Categories, Series, SeriesKind, unify_categories};
use crate::error::{ChartError, ChartResult};

/// Series collection after ordering and category alignment, ready for layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    /// Draw order: non-line series first, line series last.
    pub series: Vec<Series>,
    pub x_categories: Categories,
    pub y_categories: Categories,
}

/// Consumes the caller's series and returns an aligned copy.
///
/// Continuous x axes sort each series by x. Categorical x axes unify the
/// categories across series. Categorical y axes only collect their keys.
pub fn prepare_series(
    series: Vec<Series>,
    x_mode: AxisMode,
    y_mode: AxisMode,
) -> ChartResult<PreparedSeries> {
    if series.is_empty() {
        return Err(ChartError::InvalidInput(
            "chart needs at least one series".to_owned(),
        ));
    }

    let (series, x_categories) = match x_mode {
        AxisMode::Continuous => (sort_by_x(series)?, Categories::default()),
        AxisMode::Categorical => {
            let unified = unify_categories(series);
            (unified.series, unified.categories)
        }
    };

    let y_categories = match y_mode {
        AxisMode::Continuous => Categories::default(),
        AxisMode::Categorical => Categories::collect(&series, Axis::Y),
    };

    let (mut ordered, lines): (Vec<Series>, Vec<Series>) = series
        .into_iter()
        .partition(|item| item.kind != SeriesKind::Line);
    ordered.extend(lines);

    debug!(
        series = ordered.len(),
        x_categories = x_categories.len(),
        y_categories = y_categories.len(),
        "prepared series"
    );

    Ok(PreparedSeries {
        series: ordered,
        x_categories,
        y_categories,
    })
}

/// Stable ascending sort of every series by numeric x.
pub fn sort_by_x(series: Vec<Series>) -> ChartResult<Vec<Series>> {
    series
        .into_iter()
        .map(|mut item| {
            let mut keyed = Vec::with_capacity(item.data.len());
            for point in item.data {
                let x = point.x.continuous_value("x")?;
                keyed.push((x, point));
            }
            keyed.sort_by(|left, right| left.0.total_cmp(&right.0));
            item.data = keyed.into_iter().map(|(_, point)| point).collect();
            Ok(item)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::prepare_series;
    use crate::core::{AxisMode, DataPoint, DataValue, Series, SeriesKind};

    #[test]
    fn line_series_are_moved_last() {
        let prepared = prepare_series(
            vec![
                Series::line(vec![DataPoint::new(1.0, 1.0)]),
                Series::bar(vec![DataPoint::new(1.0, 2.0)]),
                Series::scatter(vec![DataPoint::new(1.0, 3.0)]),
            ],
            AxisMode::Continuous,
            AxisMode::Continuous,
        )
        .expect("prepare");

        let kinds: Vec<SeriesKind> = prepared.series.iter().map(|item| item.kind).collect();
        assert_eq!(
            kinds,
            vec![SeriesKind::Bar, SeriesKind::Scatter, SeriesKind::Line]
        );
    }

    #[test]
    fn continuous_x_sorts_each_series() {
        let prepared = prepare_series(
            vec![Series::line(vec![
                DataPoint::new(3.0, 1.0),
                DataPoint::new(-1.0, 2.0),
                DataPoint::new(2.0, 3.0),
            ])],
            AxisMode::Continuous,
            AxisMode::Continuous,
        )
        .expect("prepare");

        let xs: Vec<DataValue> = prepared.series[0]
            .data
            .iter()
            .map(|point| point.x.clone())
            .collect();
        assert_eq!(
            xs,
            vec![
                DataValue::number(-1.0),
                DataValue::number(2.0),
                DataValue::number(3.0)
            ]
        );
    }

    #[test]
    fn text_x_on_continuous_axis_is_rejected() {
        let result = prepare_series(
            vec![Series::line(vec![DataPoint::new("a", 1.0)])],
            AxisMode::Continuous,
            AxisMode::Continuous,
        );
        assert!(result.is_err());
    }

    #[test]
    fn categorical_y_collects_keys_in_first_seen_order() {
        let prepared = prepare_series(
            vec![Series::scatter(vec![
                DataPoint::new(1.0, "low"),
                DataPoint::new(2.0, "high"),
                DataPoint::new(3.0, "low"),
            ])],
            AxisMode::Continuous,
            AxisMode::Categorical,
        )
        .expect("prepare");
        assert_eq!(
            prepared.y_categories.to_vec(),
            vec![DataValue::text("low"), DataValue::text("high")]
        );
    }
}
