use thiserror::Error;

pub type BarChartResult<T> = Result<T, BarChartError>;

#[derive(Debug, Error)]
pub enum BarChartError {
    #[error("container selector `{0}` did not match a container")]
    InvalidContainer(String),

    #[error("data item at index {index} does not match the shape required by this chart")]
    ShapeMismatch { index: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },
}
