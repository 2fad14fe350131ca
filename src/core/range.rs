use crate::core::{Axis, AxisMode, DataPoint, Range, Series};
use crate::error::{ChartError, ChartResult};

/// Computes the data-space range shared by every series.
///
/// Continuous axes contribute the min/max of their values, categorical axes
/// contribute `[0, point_count]`. The result is the min of minima and max of
/// maxima across series, always widened to include `0`.
pub fn compute_range(series: &[Series], x_mode: AxisMode, y_mode: AxisMode) -> ChartResult<Range> {
    if series.is_empty() {
        return Err(ChartError::InvalidInput(
            "series collection is empty; no range can be inferred".to_owned(),
        ));
    }

    let mut range = Range::new(0.0, 0.0, 0.0, 0.0);
    for item in series {
        if let Some((min, max)) = axis_bounds(&item.data, Axis::X, x_mode)? {
            range.minx = range.minx.min(min);
            range.maxx = range.maxx.max(max);
        }
        if let Some((min, max)) = axis_bounds(&item.data, Axis::Y, y_mode)? {
            range.miny = range.miny.min(min);
            range.maxy = range.maxy.max(max);
        }
    }

    Ok(range)
}

/// Bounds one series contributes on one axis; `None` for an empty continuous series.
fn axis_bounds(data: &[DataPoint], axis: Axis, mode: AxisMode) -> ChartResult<Option<(f64, f64)>> {
    if mode == AxisMode::Categorical {
        return Ok(Some((0.0, data.len() as f64)));
    }

    let axis_name = axis.to_string();
    let mut bounds: Option<(f64, f64)> = None;
    for point in data {
        let raw = match axis {
            Axis::X => &point.x,
            Axis::Y => &point.y,
        };
        let value = raw.continuous_value(&axis_name)?;
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
    Ok(bounds)
}
