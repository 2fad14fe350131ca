use crate::error::ChartResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so invalid geometry is caught without a
/// real drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_path_count: usize,
    pub last_rect_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut counts = [0_usize; 5];
        for command in &frame.commands {
            let slot = match command {
                DrawCommand::Line(_) => 0,
                DrawCommand::Path(_) => 1,
                DrawCommand::Rect(_) => 2,
                DrawCommand::Circle(_) => 3,
                DrawCommand::Text(_) => 4,
            };
            counts[slot] += 1;
        }

        let [lines, paths, rects, circles, texts] = counts;
        self.last_line_count = lines;
        self.last_path_count = paths;
        self.last_rect_count = rects;
        self.last_circle_count = circles;
        self.last_text_count = texts;
        self.frames_rendered += 1;
        Ok(())
    }
}
