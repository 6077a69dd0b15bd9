use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid step size: {0} (must be finite and > 0)")]
    InvalidStepSize(f64),

    #[error("invalid value format: {0}")]
    InvalidFormat(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
