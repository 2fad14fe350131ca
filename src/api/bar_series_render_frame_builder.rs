use crate::core::{BarLayout, BarStyle, ConvertedPoint, RenderParams};
use crate::render::{DrawCommand, LinePrimitive, RectPrimitive};

use super::series_render_frame_builder::bar_center_x;

#[derive(Debug, Clone, Copy)]
pub(super) struct BarSeriesRenderContext {
    pub layout: BarLayout,
    pub baseline_y: f64,
    pub alpha: f64,
}

/// One rectangle (or stick) per point from the zero baseline to the value.
pub(super) fn bar_series_commands(
    points: &[ConvertedPoint],
    params: &RenderParams,
    ctx: BarSeriesRenderContext,
) -> Vec<DrawCommand> {
    let bars = &params.bars;
    let layout = ctx.layout;

    points
        .iter()
        .map(|point| {
            let left = point.x + layout.offset_px;
            match bars.style {
                BarStyle::Rect => DrawCommand::Rect(
                    RectPrimitive::new(
                        left,
                        ctx.baseline_y,
                        layout.width_px,
                        point.y - ctx.baseline_y,
                        bars.fill_for(point.color).faded(ctx.alpha),
                    )
                    .with_border(bars.outline_width(), bars.outline_color().faded(ctx.alpha)),
                ),
                BarStyle::Lines => {
                    let center = bar_center_x(point.x, layout);
                    DrawCommand::Line(LinePrimitive::new(
                        center,
                        ctx.baseline_y,
                        center,
                        point.y,
                        params.line_width(),
                        params.line_color(),
                    ))
                }
            }
        })
        .collect()
}
