use std::f64::consts::FRAC_PI_2;

use crate::core::{Axis, AxisSpec, BarLayout, BarPosition, TitleSpec, generate_ticks};
use crate::error::ChartResult;
use crate::render::{DrawCommand, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{ChartEngine, ChartStyle, PreparedChart, RenderContext};

impl<R: Renderer> ChartEngine<R> {
    /// Appends axis lines, tick marks, tick labels and axis titles.
    ///
    /// Only declared axes are drawn; ticks need an explicit `ticks` entry.
    pub(super) fn append_axis_commands(
        &self,
        frame: &mut RenderFrame,
        chart: &PreparedChart,
        bar_layouts: &[BarLayout],
    ) -> ChartResult<()> {
        let ctx = &chart.context;
        let style = self.config.style;
        let (zero_x, zero_y) = ctx.zero_pixel()?;

        if let Some(spec) = &chart.axis_x {
            for (start, end) in x_axis_segments(ctx, bar_layouts) {
                frame.push(axis_line((start, zero_y), (end, zero_y), style));
            }
            if let Some(tick_spec) = spec.ticks {
                let ticks =
                    generate_ticks(spec, Axis::X, ctx.range, ctx.axis_limits, &ctx.x_categories)?;
                for tick in ticks {
                    let mark_end = zero_y + tick_spec.size();
                    frame.push(axis_line(
                        (tick.position_px, zero_y),
                        (tick.position_px, mark_end),
                        style,
                    ));
                    if tick_spec.show_labels() && !tick.label.is_empty() {
                        frame.push(DrawCommand::Text(TextPrimitive::new(
                            tick.label,
                            tick.position_px,
                            mark_end + style.tick_label_padding_px,
                            style.tick_label_font_size_px,
                            style.text_color,
                            TextHAlign::Center,
                        )));
                    }
                }
            }
            if let Some(title) = axis_title(spec) {
                let x = f64::from(ctx.viewport.width) / 2.0;
                let text = title_text(title, x, zero_y + style.axis_title_offset_px, style);
                frame.push(DrawCommand::Text(text));
            }
        }

        if let Some(spec) = &chart.axis_y {
            let limits = ctx.axis_limits;
            frame.push(axis_line((zero_x, limits.miny), (zero_x, limits.maxy), style));
            if let Some(tick_spec) = spec.ticks {
                let ticks =
                    generate_ticks(spec, Axis::Y, ctx.range, ctx.axis_limits, &ctx.y_categories)?;
                for tick in ticks {
                    let mark_start = zero_x - tick_spec.size();
                    frame.push(axis_line(
                        (mark_start, tick.position_px),
                        (zero_x, tick.position_px),
                        style,
                    ));
                    if tick_spec.show_labels() && !tick.label.is_empty() {
                        frame.push(DrawCommand::Text(TextPrimitive::new(
                            tick.label,
                            mark_start - style.tick_label_padding_px,
                            tick.position_px,
                            style.tick_label_font_size_px,
                            style.text_color,
                            TextHAlign::Right,
                        )));
                    }
                }
            }
            if let Some(title) = axis_title(spec) {
                let y = f64::from(ctx.viewport.height) / 2.0;
                let text = title_text(title, zero_x - style.axis_title_offset_px, y, style);
                frame.push(DrawCommand::Text(text.rotated(-FRAC_PI_2)));
            }
        }

        Ok(())
    }
}

/// Separated bars get one x axis segment per bar group.
fn x_axis_segments(ctx: &RenderContext, bar_layouts: &[BarLayout]) -> Vec<(f64, f64)> {
    let separated = ctx.bar_options.position == Some(BarPosition::Separated);
    if separated && !bar_layouts.is_empty() {
        return bar_layouts
            .iter()
            .map(|layout| (layout.limits.minx, layout.limits.maxx))
            .collect();
    }
    vec![(ctx.axis_limits.minx, ctx.axis_limits.maxx)]
}

fn axis_title(spec: &AxisSpec) -> Option<&TitleSpec> {
    spec.title.as_ref().filter(|title| !title.text.is_empty())
}

fn axis_line(from: (f64, f64), to: (f64, f64), style: ChartStyle) -> DrawCommand {
    DrawCommand::Line(LinePrimitive::new(
        from.0,
        from.1,
        to.0,
        to.1,
        style.axis_line_width_px,
        style.axis_color,
    ))
}

fn title_text(title: &TitleSpec, x: f64, y: f64, style: ChartStyle) -> TextPrimitive {
    TextPrimitive::new(
        title.text.clone(),
        x,
        y,
        title.font_size_px.unwrap_or(style.axis_title_font_size_px),
        title.color.unwrap_or(style.text_color),
        TextHAlign::Center,
    )
}
