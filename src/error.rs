use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: i64, height: i64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration value `{field}` is undefined, null or unusable")]
    InvalidConfigValue { field: String },

    #[error("{0} is not a valid percentage, expected a value from 0 to 100")]
    InvalidPercent(f64),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("drawing backend failure: {0}")]
    Backend(String),
}
