mod chart;
mod config;
mod frame_builder;

pub use chart::BarChart;
pub use config::{BarChartConfig, BoxChartConfig, ColumnChartConfig, RowChartConfig};
