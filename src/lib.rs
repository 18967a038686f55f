mod chart;
mod client;
mod error;
mod locations;
mod trend;
mod types;
mod weather;

pub use client::Meteotrend;
pub use error::{InputError, MeteotrendError};

pub use locations::{
    coordinate_for, country_names, parse_lat_lon, LatLon, COUNTRY_COORDINATES,
};

pub use types::quantity::Quantity;
pub use types::time_range::{anchor_date, TimeRange, EARLIEST_YEAR, LATEST_YEAR};

pub use weather::error::{ExtractError, FetchError};
pub use weather::fetcher::{Credentials, WeatherFetcher};
pub use weather::query::WeatherQuery;
pub use weather::response::{ApiResponse, CoordinateData, ParameterData, Sample};
pub use weather::series::{Observation, ObservationSeries, SeriesSet};

pub use trend::{date_ordinal, TrendError, TrendModel};

pub use chart::animation::{
    playback_controls, AnimationFrame, Playback, PlaybackAction, PlaybackControl, PlaybackState,
    FRAME_DURATION_MS,
};
pub use chart::style::{ChartStyle, LineColor, MarkerStyle};
pub use chart::{ChartLayout, LinePattern, MarkerSpec, Trace, TraceMode, TrendChart};
