use crate::trend::TrendError;
use crate::weather::error::{ExtractError, FetchError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteotrendError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Trend(#[from] TrendError),
}

/// User-correctable input failures, raised at the crate boundary before any
/// network traffic happens.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Unknown location '{0}'")]
    UnknownLocation(String),

    #[error("Unknown quantity '{0}'")]
    UnknownQuantity(String),

    #[error("Unknown marker style '{0}'")]
    UnknownMarkerStyle(String),

    #[error("Unknown line color '{0}'")]
    UnknownLineColor(String),

    #[error("Latitude '{0}' is not a number")]
    UnparseableLatitude(String),

    #[error("Longitude '{0}' is not a number")]
    UnparseableLongitude(String),

    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfBounds(f64),

    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfBounds(f64),

    #[error("End year {end_year} precedes start year {start_year}")]
    InvalidYearRange { start_year: i32, end_year: i32 },

    #[error("Year {0} is outside the available archive window")]
    YearOutOfRange(i32),
}
