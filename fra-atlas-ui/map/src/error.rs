use thiserror::Error;

/// Errors raised by coordinate and tile conversions.
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("latitude {0} is outside the web mercator range")]
    InvalidLatitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
    #[error("zoom level {0} is not supported")]
    InvalidZoom(u8),
}
