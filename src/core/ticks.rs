use serde::{Deserialize, Serialize};

use crate::core::{
    Axis, AxisMode, AxisSpec, Categories, DataValue, Limits, Range, convert,
};
use crate::error::{ChartError, ChartResult};

/// Upper bound on ticks produced for one axis.
pub const MAX_TICK_COUNT: usize = 10_000;

/// One axis tick in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position_px: f64,
    pub label: String,
    pub value: DataValue,
}

/// Produces tick geometry for one axis.
///
/// Continuous axes walk outward from zero by the tick step, first ascending
/// while `<= range max`, then descending while `>= range min`. Categorical axes
/// get one tick per category at its index.
pub fn generate_ticks(
    spec: &AxisSpec,
    axis: Axis,
    range: Range,
    limits: Limits,
    categories: &Categories,
) -> ChartResult<Vec<Tick>> {
    match spec.mode()? {
        AxisMode::Continuous => {
            let step = spec.ticks.unwrap_or_default().step();
            continuous_ticks(step, axis, range, limits)
        }
        AxisMode::Categorical => categorical_ticks(categories, axis, range, limits),
    }
}

/// Rejects tick steps that would never terminate or overflow the tick budget.
pub fn validate_tick_step(step: f64, range: Range, axis: Axis) -> ChartResult<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ChartError::InvalidConfiguration(format!(
            "{axis} tick step must be finite and > 0, got {step}"
        )));
    }

    let (min, max) = range.bounds(axis);
    let walked_span = max.max(0.0) - min.min(0.0);
    if walked_span / step > MAX_TICK_COUNT as f64 {
        return Err(ChartError::InvalidConfiguration(format!(
            "{axis} tick step {step} yields more than {MAX_TICK_COUNT} ticks"
        )));
    }
    Ok(())
}

fn continuous_ticks(step: f64, axis: Axis, range: Range, limits: Limits) -> ChartResult<Vec<Tick>> {
    validate_tick_step(step, range, axis)?;
    let (min, max) = range.bounds(axis);
    let precision = precision_from_step(step);

    let mut ticks = Vec::new();
    let mut index = 0_u32;
    loop {
        let value = f64::from(index) * step;
        if value > max {
            break;
        }
        if value >= min {
            ticks.push(continuous_tick(value, precision, axis, range, limits)?);
        }
        index += 1;
    }

    let mut index = 1_u32;
    loop {
        let value = -f64::from(index) * step;
        if value < min {
            break;
        }
        if value <= max {
            ticks.push(continuous_tick(value, precision, axis, range, limits)?);
        }
        index += 1;
    }

    Ok(ticks)
}

fn continuous_tick(
    value: f64,
    precision: usize,
    axis: Axis,
    range: Range,
    limits: Limits,
) -> ChartResult<Tick> {
    Ok(Tick {
        position_px: convert(value, range, limits, axis)?,
        label: format_tick_value(value, precision),
        value: DataValue::number(value),
    })
}

/// Number of decimals needed to print multiples of `step` exactly.
fn precision_from_step(step: f64) -> usize {
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len()
}

fn format_tick_value(value: f64, precision: usize) -> String {
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

fn categorical_ticks(
    categories: &Categories,
    axis: Axis,
    range: Range,
    limits: Limits,
) -> ChartResult<Vec<Tick>> {
    categories
        .iter()
        .enumerate()
        .map(|(index, key)| {
            Ok(Tick {
                position_px: convert(index as f64, range, limits, axis)?,
                label: key.to_string(),
                value: key.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{format_tick_value, generate_ticks, precision_from_step, validate_tick_step};
    use crate::core::{Axis, AxisSpec, Categories, Limits, Range, TickSpec};

    #[test]
    fn ascending_walk_comes_before_descending_walk() {
        let spec = AxisSpec::continuous().with_ticks(TickSpec::with_step(1.0));
        let ticks = generate_ticks(
            &spec,
            Axis::X,
            Range::new(-2.0, 2.0, 0.0, 1.0),
            Limits::new(0.0, 400.0, 100.0, 0.0),
            &Categories::default(),
        )
        .expect("ticks");
        let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "1", "2", "-1", "-2"]);
    }

    #[test]
    fn step_precision_drops_float_noise() {
        assert_eq!(precision_from_step(1.0), 0);
        assert_eq!(precision_from_step(0.25), 2);
        assert_eq!(format_tick_value(3.0 * 0.1, 1), "0.3");
        assert_eq!(format_tick_value(7.5, 2), "7.5");
        assert_eq!(format_tick_value(-0.0001, 2), "0");
    }

    #[test]
    fn huge_tick_counts_are_rejected_up_front() {
        let range = Range::new(0.0, 1.0e9, 0.0, 1.0);
        assert!(validate_tick_step(1.0, range, Axis::X).is_err());
        assert!(validate_tick_step(1.0e6, range, Axis::X).is_ok());
    }
}
