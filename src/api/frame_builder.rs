use crate::core::{BoxChartLayout, ColumnChartLayout, RowChartLayout, Viewport, format_value};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::ColumnChartConfig;

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
const AXIS_TICK_LEN_PX: f64 = 6.0;
const AXIS_FONT_SIZE_PX: f64 = 11.0;
const AXIS_LABEL_GAP_PX: f64 = 3.0;
// Baseline nudge so value labels sit visually centered on their tick.
const AXIS_BASELINE_NUDGE_PX: f64 = 4.0;

const BAR_FILL: Color = Color::rgb(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0);
const BAR_LABEL_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
const BAR_LABEL_FONT_SIZE_PX: f64 = 11.0;

// Column fill ramp endpoints; bars interpolate between them by index.
const COLUMN_RAMP_START: Color = Color::rgb(200.0 / 255.0, 0.0, 50.0 / 255.0);
const COLUMN_RAMP_END: Color = Color::rgb(200.0 / 255.0, 170.0 / 255.0, 50.0 / 255.0);

pub(super) fn column_fill(index: usize, count: usize) -> Color {
    if count == 0 {
        return COLUMN_RAMP_START;
    }
    COLUMN_RAMP_START.lerp(COLUMN_RAMP_END, index as f64 / count as f64)
}

/// Assembles the outer frame for a vertical bar chart: columns offset by
/// the margins, axis lines, and one tick mark plus label per axis entry.
/// An empty layout yields a fixed-size frame with no primitives.
pub(super) fn column_chart_frame(
    layout: &ColumnChartLayout,
    config: &ColumnChartConfig,
) -> RenderFrame {
    let mut frame = RenderFrame::new(Viewport::new(config.width, config.height));
    let left = config.margins.left;
    let top = config.margins.top;
    let plot_width = f64::from(layout.plot.width);
    let plot_height = f64::from(layout.plot.height);
    let baseline_y = top + plot_height;

    let count = layout.columns.len();
    for (index, column) in layout.columns.iter().enumerate() {
        frame.rects.push(RectPrimitive::new(
            left + column.x,
            top + column.y_top,
            column.width,
            column.height,
            column_fill(index, count),
        ));
    }

    if layout.columns.is_empty() {
        return frame;
    }

    frame.lines.push(LinePrimitive::new(
        left,
        baseline_y,
        left + plot_width,
        baseline_y,
        AXIS_STROKE_WIDTH_PX,
        AXIS_COLOR,
    ));
    frame.lines.push(LinePrimitive::new(
        left,
        top,
        left,
        baseline_y,
        AXIS_STROKE_WIDTH_PX,
        AXIS_COLOR,
    ));

    for tick in &layout.category_ticks {
        let x = left + tick.x_center;
        frame.lines.push(LinePrimitive::new(
            x,
            baseline_y,
            x,
            baseline_y + AXIS_TICK_LEN_PX,
            AXIS_STROKE_WIDTH_PX,
            AXIS_COLOR,
        ));
        if !tick.label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                tick.label.clone(),
                x,
                baseline_y + AXIS_TICK_LEN_PX + AXIS_LABEL_GAP_PX + AXIS_FONT_SIZE_PX,
                AXIS_FONT_SIZE_PX,
                AXIS_COLOR,
                TextHAlign::Center,
            ));
        }
    }

    for tick in &layout.value_ticks {
        let y = top + tick.y;
        frame.lines.push(LinePrimitive::new(
            left - AXIS_TICK_LEN_PX,
            y,
            left,
            y,
            AXIS_STROKE_WIDTH_PX,
            AXIS_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            format_value(tick.value),
            left - AXIS_TICK_LEN_PX - AXIS_LABEL_GAP_PX,
            y + AXIS_BASELINE_NUDGE_PX,
            AXIS_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }

    frame
}

/// Assembles the frame for the horizontal bar chart: one bar and one value
/// label per row.
pub(super) fn row_chart_frame(layout: &RowChartLayout) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport);
    for row in &layout.rows {
        frame.rects.push(RectPrimitive::new(
            0.0,
            row.y,
            row.length,
            row.bar_height,
            BAR_FILL,
        ));
        frame.texts.push(TextPrimitive::new(
            row.label.clone(),
            row.label_x,
            row.label_y + AXIS_BASELINE_NUDGE_PX,
            BAR_LABEL_FONT_SIZE_PX,
            BAR_LABEL_COLOR,
            TextHAlign::Right,
        ));
    }
    frame
}

/// Assembles the frame for the proportional-box chart.
pub(super) fn box_chart_frame(layout: &BoxChartLayout) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport);
    for item in &layout.boxes {
        frame.rects.push(RectPrimitive::new(
            0.0,
            item.y,
            item.length,
            item.box_height,
            BAR_FILL,
        ));
        frame.texts.push(TextPrimitive::new(
            item.label.clone(),
            item.label_x,
            item.label_y + AXIS_BASELINE_NUDGE_PX,
            BAR_LABEL_FONT_SIZE_PX,
            BAR_LABEL_COLOR,
            TextHAlign::Right,
        ));
    }
    frame
}
