use thiserror::Error;

#[derive(Error, Debug)]
pub enum AeroError {
    #[error("Airspeed must be strictly positive, got {0} m/s")]
    NonPositiveAirspeed(f64),

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Altitude {0} m is outside the standard atmosphere range [0, 86000] m")]
    AltitudeOutOfRange(f64),

    #[error("Invalid sampling: {0}")]
    InvalidSampling(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Plot rendering error: {0}")]
    Plot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AeroResult<T> = Result<T, AeroError>;
