mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use svg_backend::SvgRenderer;

use crate::error::BarChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends own the document-side container model: they resolve a selector
/// to a container and draw fully materialized `RenderFrame`s into it.
/// Whether repeated renders append or merge elements is the backend's
/// contract; the chart only hands over frames.
pub trait Renderer {
    /// Resolves `selector` to a container, failing with
    /// `BarChartError::InvalidContainer` when it names nothing.
    fn resolve_container(&mut self, selector: &str) -> BarChartResult<()>;

    /// Draws `frame` into the container named by `selector`.
    fn render(&mut self, selector: &str, frame: &RenderFrame) -> BarChartResult<()>;
}
