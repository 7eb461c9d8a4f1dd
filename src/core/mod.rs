pub mod box_series;
pub mod column_series;
pub mod data;
pub mod row_series;
pub mod scale;
pub mod types;

pub use box_series::{BoxChartLayout, BoxGeometry, project_boxes};
pub use column_series::{
    CategoryTick, ColumnChartLayout, ColumnGeometry, ValueTick, project_columns,
};
pub use data::{DataPoint, NamedRecord, bare_values, format_value, max_value, named_records};
pub use row_series::{RowChartLayout, RowGeometry, project_rows};
pub use scale::{BandScale, LinearScale, linear_ticks};
pub use types::{Margins, Viewport};
