use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Viewport, format_value, max_value};
use crate::core::row_series::validate_row_extents;
use crate::error::BarChartResult;

/// One proportional box and its literal-number label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub y: f64,
    pub length: f64,
    pub box_height: f64,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}

/// Layout of a plain proportional-box chart built from bare numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxChartLayout {
    pub viewport: Viewport,
    pub boxes: Vec<BoxGeometry>,
}

/// Projects bare numbers into stacked boxes whose lengths are the values
/// scaled into `[0, extent]`. No axes, no color variation; each box shows
/// its literal number.
pub fn project_boxes(
    values: &[f64],
    extent: f64,
    row_height: f64,
) -> BarChartResult<BoxChartLayout> {
    validate_row_extents(extent, row_height)?;

    let domain_max = max_value(values.iter().copied());
    let scale = LinearScale::new(domain_max, 0.0, extent)?;

    let mut boxes = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let y = index as f64 * row_height;
        let length = scale.position(*value)?;
        boxes.push(BoxGeometry {
            y,
            length,
            box_height: row_height - 1.0,
            label: format_value(*value),
            label_x: length - 3.0,
            label_y: y + row_height * 0.5,
        });
    }

    Ok(BoxChartLayout {
        viewport: Viewport::new(
            extent.ceil() as u32,
            (values.len() as f64 * row_height).ceil() as u32,
        ),
        boxes,
    })
}
