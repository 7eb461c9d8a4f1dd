use tracing::{debug, trace};

use crate::core::{DataPoint, bare_values, named_records, project_boxes, project_columns, project_rows};
use crate::error::BarChartResult;
use crate::render::{RenderFrame, Renderer};

use super::BarChartConfig;
use super::frame_builder::{box_chart_frame, column_chart_frame, row_chart_frame};

/// Bar-chart builder bound to one container selector.
///
/// The selector is stored at construction and resolved against the
/// renderer's containers on every render call, so an unknown selector
/// fails at render time with `InvalidContainer`. The builder keeps no
/// state between calls: each operation projects its input from scratch
/// and hands one frame to the renderer, which appends it to the
/// container. All operations return `&mut Self` for chaining.
#[derive(Debug)]
pub struct BarChart<R: Renderer> {
    renderer: R,
    selector: String,
    config: BarChartConfig,
}

impl<R: Renderer> BarChart<R> {
    pub fn new(renderer: R, selector: impl Into<String>) -> Self {
        Self {
            renderer,
            selector: selector.into(),
            config: BarChartConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: BarChartConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Renders name/value records as a vertical bar chart with a category
    /// axis below the plot and a value axis to its left.
    ///
    /// Exactly one column and one category tick per record, in input
    /// order, with a fill color that varies by index. Empty input draws
    /// an empty fixed-size plot with no ticks.
    pub fn render_column_chart(&mut self, data: &[DataPoint]) -> BarChartResult<&mut Self> {
        self.config.validate()?;
        let records = named_records(data)?;
        debug!(
            count = records.len(),
            selector = %self.selector,
            "render column chart"
        );

        let column = self.config.column;
        let layout = project_columns(
            &records,
            column.plot_viewport()?,
            column.inner_padding,
            column.value_tick_target,
        )?;
        self.emit(column_chart_frame(&layout, &column))
    }

    /// Renders name/value records as horizontal bars stacked top to
    /// bottom, each labeled with its literal value. No axes; the frame
    /// height is `rows * row_height`.
    pub fn render_bar_rows(&mut self, data: &[DataPoint]) -> BarChartResult<&mut Self> {
        self.config.validate()?;
        let records = named_records(data)?;
        debug!(
            count = records.len(),
            selector = %self.selector,
            "render bar rows"
        );

        if records.is_empty() {
            self.renderer.resolve_container(&self.selector)?;
            return Ok(self);
        }
        let layout = project_rows(&records, self.config.rows.extent, self.config.rows.row_height)?;
        self.emit(row_chart_frame(&layout))
    }

    /// Renders bare numbers as proportional boxes, each showing its
    /// literal number. No axes, no color variation.
    pub fn render_value_boxes(&mut self, data: &[DataPoint]) -> BarChartResult<&mut Self> {
        self.config.validate()?;
        let values = bare_values(data)?;
        debug!(
            count = values.len(),
            selector = %self.selector,
            "render value boxes"
        );

        if values.is_empty() {
            self.renderer.resolve_container(&self.selector)?;
            return Ok(self);
        }
        let layout = project_boxes(&values, self.config.boxes.extent, self.config.boxes.row_height)?;
        self.emit(box_chart_frame(&layout))
    }

    fn emit(&mut self, frame: RenderFrame) -> BarChartResult<&mut Self> {
        self.renderer.resolve_container(&self.selector)?;
        self.renderer.render(&self.selector, &frame)?;
        trace!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "frame emitted"
        );
        Ok(self)
    }
}
