use crate::render::{DrawCommand, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{ChartEngine, PreparedChart};

impl<R: Renderer> ChartEngine<R> {
    /// Appends the centered chart title and subtitle.
    pub(super) fn append_title_commands(&self, frame: &mut RenderFrame, chart: &PreparedChart) {
        let style = self.config.style;
        let center_x = f64::from(chart.context.viewport.width) / 2.0;

        let titles = [
            (chart.title.as_ref(), style.title_top_px),
            (chart.subtitle.as_ref(), style.subtitle_top_px),
        ];
        for (title, top) in titles {
            let Some(title) = title.filter(|title| !title.text.is_empty()) else {
                continue;
            };
            frame.push(DrawCommand::Text(TextPrimitive::new(
                title.text.clone(),
                center_x,
                top,
                title.font_size_px.unwrap_or(style.title_font_size_px),
                title.color.unwrap_or(style.text_color),
                TextHAlign::Center,
            )));
        }
    }
}
