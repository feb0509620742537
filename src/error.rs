//! Validation errors for geographic input.

use thiserror::Error;

/// Reasons a point or polygon is rejected before it reaches the engine
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("polygon needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("latitude {lat} is outside [-90, 90]")]
    LatitudeOutOfRange { lat: f64 },

    #[error("longitude {lng} is outside [-180, 180]")]
    LongitudeOutOfRange { lng: f64 },

    #[error("coordinate is not a finite number")]
    NonFinite,

    #[error("invalid polygon JSON: {0}")]
    Json(#[from] serde_json::Error),
}
