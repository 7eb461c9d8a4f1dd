use serde::{Deserialize, Serialize};

use crate::core::{BandScale, LinearScale, NamedRecord, Viewport, linear_ticks, max_value};
use crate::error::BarChartResult;

/// Deterministic geometry for one vertical bar, in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    pub x: f64,
    pub y_top: f64,
    pub width: f64,
    pub height: f64,
}

/// One category label below the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTick {
    pub label: String,
    pub x_center: f64,
}

/// One value label left of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
}

/// Plot-space layout of a vertical bar chart with axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnChartLayout {
    pub plot: Viewport,
    pub columns: Vec<ColumnGeometry>,
    pub category_ticks: Vec<CategoryTick>,
    pub value_ticks: Vec<ValueTick>,
}

/// Projects name/value records into vertical bars plus axis ticks.
///
/// The value scale maps `[0, max(value)]` onto `[plot_height, 0]`, so
/// larger values reach higher. Each record gets exactly one column and one
/// category tick, in input order; value ticks are at most `value_tick_target`
/// round-stepped labels. Empty input yields an empty layout with no ticks.
pub fn project_columns(
    records: &[NamedRecord],
    plot: Viewport,
    inner_padding: f64,
    value_tick_target: usize,
) -> BarChartResult<ColumnChartLayout> {
    let plot_height = f64::from(plot.height);
    let domain_max = max_value(records.iter().map(|record| record.value));
    let value_scale = LinearScale::new(domain_max, plot_height, 0.0)?;
    let band_scale = BandScale::new(
        records.iter().map(|record| record.name.as_str()),
        f64::from(plot.width),
        inner_padding,
    )?;

    let mut columns = Vec::with_capacity(records.len());
    let mut category_ticks = Vec::with_capacity(records.len());
    for record in records {
        let x = band_scale.position(&record.name)?;
        let y_top = value_scale.position(record.value)?;
        columns.push(ColumnGeometry {
            x,
            y_top,
            width: band_scale.band_width(),
            height: plot_height - y_top,
        });
        category_ticks.push(CategoryTick {
            label: record.name.clone(),
            x_center: band_scale.center(&record.name)?,
        });
    }

    let mut value_ticks = Vec::new();
    if !records.is_empty() {
        for value in linear_ticks(domain_max, value_tick_target) {
            value_ticks.push(ValueTick {
                value,
                y: value_scale.position(value)?,
            });
        }
    }

    Ok(ColumnChartLayout {
        plot,
        columns,
        category_ticks,
        value_ticks,
    })
}
