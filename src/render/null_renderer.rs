use crate::error::BarChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It resolves every selector, still validates frame content so tests can
/// catch invalid geometry before a real backend is introduced, and keeps
/// the frames it received.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: Vec<RenderFrame>,
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn resolve_container(&mut self, _selector: &str) -> BarChartResult<()> {
        Ok(())
    }

    fn render(&mut self, _selector: &str, frame: &RenderFrame) -> BarChartResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rects.len();
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.frames.push(frame.clone());
        Ok(())
    }
}
