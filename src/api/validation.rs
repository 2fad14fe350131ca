use crate::core::{AxisSpec, BarParams, GlobalBarOptions, MarkerRadius, RenderParams, TitleSpec};
use crate::error::{ChartError, ChartResult};

use super::{ChartEngineConfig, ChartSpec};

pub(super) fn validate_engine_config(config: &ChartEngineConfig) -> ChartResult<()> {
    let viewport = config.viewport;
    let insets = config.insets;
    for (name, value) in [
        ("zero_baseline_px", insets.zero_baseline_px),
        ("inset_px", insets.inset_px),
        ("right_px", insets.right_px),
        ("top_px", insets.top_px),
        ("axis_px", insets.axis_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfiguration(format!(
                "plot inset `{name}` must be finite and >= 0"
            )));
        }
    }

    if !viewport.is_valid()
        || f64::from(viewport.width) <= insets.max_horizontal()
        || f64::from(viewport.height) <= insets.max_vertical()
    {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let style = config.style;
    for (name, value) in [
        ("axis_line_width_px", style.axis_line_width_px),
        ("title_font_size_px", style.title_font_size_px),
        ("axis_title_font_size_px", style.axis_title_font_size_px),
        ("tick_label_font_size_px", style.tick_label_font_size_px),
    ] {
        ensure_positive(value, name)?;
    }
    style.text_color.validate()?;
    style.axis_color.validate()
}

/// Checks every caller-supplied option before any layout or drawing happens.
pub(super) fn validate_chart_spec(spec: &ChartSpec) -> ChartResult<()> {
    if spec.series.is_empty() {
        return Err(ChartError::InvalidInput(
            "chart needs at least one series".to_owned(),
        ));
    }

    for title in [&spec.title, &spec.subtitle].into_iter().flatten() {
        validate_title(title)?;
    }
    for axis in [&spec.axis_x, &spec.axis_y].into_iter().flatten() {
        validate_axis_spec(axis)?;
    }
    if let Some(bars) = &spec.options.bars {
        validate_global_bar_options(bars)?;
    }
    for series in &spec.series {
        validate_render_params(&series.params)?;
    }

    Ok(())
}

fn validate_title(title: &TitleSpec) -> ChartResult<()> {
    if let Some(size) = title.font_size_px {
        ensure_positive(size, "title font size")?;
    }
    if let Some(color) = title.color {
        color.validate()?;
    }
    Ok(())
}

fn validate_axis_spec(axis: &AxisSpec) -> ChartResult<()> {
    axis.mode()?;
    if let Some(title) = &axis.title {
        validate_title(title)?;
    }
    if let Some(ticks) = &axis.ticks {
        if let Some(step) = ticks.step {
            if !step.is_finite() || step <= 0.0 {
                return Err(ChartError::InvalidConfiguration(format!(
                    "tick step must be finite and > 0, got {step}"
                )));
            }
        }
        if let Some(size) = ticks.size {
            ensure_non_negative(size, "tick size")?;
        }
    }
    Ok(())
}

fn validate_global_bar_options(bars: &GlobalBarOptions) -> ChartResult<()> {
    if let Some(width) = bars.width {
        ensure_non_negative(width, "bar width")?;
    }
    if let Some(gap) = bars.gap {
        ensure_non_negative(gap, "bar gap")?;
    }
    if let Some(alpha) = bars.alpha {
        ensure_alpha(alpha)?;
    }
    Ok(())
}

fn validate_bar_params(bars: &BarParams) -> ChartResult<()> {
    if let Some(width) = bars.width {
        ensure_non_negative(width, "bar width")?;
    }
    if let Some(gap) = bars.gap {
        ensure_non_negative(gap, "bar gap")?;
    }
    if let Some(alpha) = bars.alpha {
        ensure_alpha(alpha)?;
    }
    if let Some(width) = bars.outline.width {
        ensure_non_negative(width, "bar outline width")?;
    }
    for color in [bars.fill_color, bars.outline.color].into_iter().flatten() {
        color.validate()?;
    }
    Ok(())
}

fn validate_render_params(params: &RenderParams) -> ChartResult<()> {
    if let Some(width) = params.width {
        ensure_positive(width, "line width")?;
    }
    if let Some(color) = params.color {
        color.validate()?;
    }
    if let Some(points) = &params.points {
        if let MarkerRadius::Fixed(radius) = points.radius {
            ensure_non_negative(radius, "marker radius")?;
        }
        if let Some(color) = points.color {
            color.validate()?;
        }
    }
    if let Some(labels) = &params.labels {
        if let Some(size) = labels.font_size_px {
            ensure_positive(size, "label font size")?;
        }
        let offset = labels.offset;
        for value in [offset.left, offset.right, offset.top, offset.bottom] {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfiguration(
                    "label offset must be finite".to_owned(),
                ));
            }
        }
        if let Some(color) = labels.color {
            color.validate()?;
        }
    }
    validate_bar_params(&params.bars)
}

fn ensure_positive(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfiguration(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn ensure_non_negative(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfiguration(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn ensure_alpha(alpha: f64) -> ChartResult<()> {
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return Err(ChartError::InvalidConfiguration(
            "bar alpha must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(())
}
