use serde::{Deserialize, Serialize};

use crate::core::row_series::validate_row_extents;
use crate::core::{Margins, Viewport};
use crate::error::{BarChartError, BarChartResult};

/// Geometry settings for the vertical bar chart with axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnChartConfig {
    /// Outer width, axis margins included.
    pub width: u32,
    /// Outer height, axis margins included.
    pub height: u32,
    pub margins: Margins,
    /// Fraction of each band step left empty around a column.
    pub inner_padding: f64,
    /// Upper bound on value-axis tick labels.
    pub value_tick_target: usize,
}

impl Default for ColumnChartConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 500,
            margins: Margins::new(20.0, 30.0, 30.0, 40.0),
            inner_padding: 0.1,
            value_tick_target: 10,
        }
    }
}

impl ColumnChartConfig {
    /// Plot area after subtracting the axis margins.
    pub fn plot_viewport(&self) -> BarChartResult<Viewport> {
        let plot_width = f64::from(self.width) - self.margins.left - self.margins.right;
        let plot_height = f64::from(self.height) - self.margins.top - self.margins.bottom;
        if plot_width < 1.0 || plot_height < 1.0 {
            return Err(BarChartError::InvalidData(
                "margins leave no plot area".to_owned(),
            ));
        }
        Ok(Viewport::new(plot_width as u32, plot_height as u32))
    }

    pub fn validate(&self) -> BarChartResult<()> {
        if !self.margins.is_valid() {
            return Err(BarChartError::InvalidData(
                "margins must be finite and non-negative".to_owned(),
            ));
        }
        if !self.inner_padding.is_finite() || !(0.0..1.0).contains(&self.inner_padding) {
            return Err(BarChartError::InvalidData(
                "inner padding must be in [0, 1)".to_owned(),
            ));
        }
        self.plot_viewport().map(|_| ())
    }
}

/// Geometry settings for the horizontal bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowChartConfig {
    /// Pixel range the largest value maps to.
    pub extent: f64,
    pub row_height: f64,
}

impl Default for RowChartConfig {
    fn default() -> Self {
        Self {
            extent: 420.0,
            row_height: 20.0,
        }
    }
}

/// Geometry settings for the proportional-box chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxChartConfig {
    pub extent: f64,
    pub row_height: f64,
}

impl Default for BoxChartConfig {
    fn default() -> Self {
        Self {
            extent: 420.0,
            row_height: 20.0,
        }
    }
}

/// Chart geometry configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format. Defaults reproduce the conventional
/// 960x500 axis chart and 420-pixel row charts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default)]
    pub column: ColumnChartConfig,
    #[serde(default)]
    pub rows: RowChartConfig,
    #[serde(default)]
    pub boxes: BoxChartConfig,
}

impl BarChartConfig {
    pub fn validate(&self) -> BarChartResult<()> {
        self.column.validate()?;
        validate_row_extents(self.rows.extent, self.rows.row_height)?;
        validate_row_extents(self.boxes.extent, self.boxes.row_height)
    }
}
