use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, NamedRecord, Viewport, format_value, max_value};
use crate::error::{BarChartError, BarChartResult};

/// One horizontal bar and its value label, in chart coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowGeometry {
    pub y: f64,
    pub length: f64,
    pub bar_height: f64,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}

/// Layout of a horizontal bar chart without axes.
///
/// The viewport height is `rows * row_height`, which is the height the
/// surface gives the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowChartLayout {
    pub viewport: Viewport,
    pub rows: Vec<RowGeometry>,
}

/// Projects name/value records into top-to-bottom bars of fixed row height.
///
/// Bar length is the value scaled into `[0, extent]`; bars keep a 1-pixel
/// gap (`bar_height = row_height - 1`) and carry the literal value as a
/// label just inside their right edge.
pub fn project_rows(
    records: &[NamedRecord],
    extent: f64,
    row_height: f64,
) -> BarChartResult<RowChartLayout> {
    validate_row_extents(extent, row_height)?;

    let domain_max = max_value(records.iter().map(|record| record.value));
    let scale = LinearScale::new(domain_max, 0.0, extent)?;

    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let y = index as f64 * row_height;
        let length = scale.position(record.value)?;
        rows.push(RowGeometry {
            y,
            length,
            bar_height: row_height - 1.0,
            label: format_value(record.value),
            label_x: length - 3.0,
            label_y: y + row_height * 0.5,
        });
    }

    Ok(RowChartLayout {
        viewport: Viewport::new(
            extent.ceil() as u32,
            (records.len() as f64 * row_height).ceil() as u32,
        ),
        rows,
    })
}

pub(crate) fn validate_row_extents(extent: f64, row_height: f64) -> BarChartResult<()> {
    if !extent.is_finite() || extent <= 0.0 {
        return Err(BarChartError::InvalidData(
            "chart extent must be finite and > 0".to_owned(),
        ));
    }
    if !row_height.is_finite() || row_height <= 1.0 {
        return Err(BarChartError::InvalidData(
            "row height must be finite and > 1".to_owned(),
        ));
    }
    Ok(())
}
