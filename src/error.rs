use thiserror::Error;

/// Errors from validating site parameters.
///
/// The solar formulas never return these; undefined results there are `NaN`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolarError {
    #[error("latitude {0}° is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, SolarError>;
