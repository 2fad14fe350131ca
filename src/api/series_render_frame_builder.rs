use crate::core::{Axis, BarLayout, PointStyle, Series, SeriesKind, convert};
use crate::error::{ChartError, ChartResult};
use crate::render::DrawCommand;

use super::RenderContext;
use super::bar_series_render_frame_builder::{BarSeriesRenderContext, bar_series_commands};
use super::line_series_render_frame_builder::line_series_commands;
use super::point_annotation_builder::{label_commands, marker_commands};

/// Draw commands for one series: its body, then markers, then labels.
///
/// Bar series must come with the layout resolved for their bar index.
pub(super) fn series_commands(
    series: &Series,
    ctx: &RenderContext,
    bar_layout: Option<BarLayout>,
) -> ChartResult<Vec<DrawCommand>> {
    let limits = bar_layout.map_or(ctx.limits, |layout| layout.limits);
    let mut points = ctx.convert_series(series, limits)?;
    let params = &series.params;

    let mut commands = match series.kind {
        SeriesKind::Line => line_series_commands(&points, params),
        SeriesKind::Bar => {
            let layout = bar_layout.ok_or_else(|| {
                ChartError::InvalidConfiguration("bar series needs a resolved layout".to_owned())
            })?;
            let bar_ctx = BarSeriesRenderContext {
                layout,
                baseline_y: convert(0.0, ctx.range, layout.limits, Axis::Y)?,
                alpha: ctx.bar_options.alpha_for(&params.bars),
            };
            let commands = bar_series_commands(&points, params, bar_ctx);
            for point in &mut points {
                point.x = bar_center_x(point.x, layout);
            }
            commands
        }
        SeriesKind::Scatter => Vec::new(),
    };

    let markers = match (series.kind, params.points) {
        (_, Some(style)) => Some(style),
        (SeriesKind::Scatter, None) => Some(PointStyle::default()),
        _ => None,
    };
    if let Some(style) = markers {
        commands.extend(marker_commands(&points, &style, limits)?);
    }
    if let Some(style) = &params.labels {
        commands.extend(label_commands(&points, style));
    }

    Ok(commands)
}

/// Annotations of a bar sit over the bar's center, not its slot's left edge.
pub(super) fn bar_center_x(slot_left: f64, layout: BarLayout) -> f64 {
    slot_left + layout.offset_px + layout.width_px / 2.0
}
