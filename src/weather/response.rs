//! Typed model of the Meteomatics JSON payload. Decoding through these
//! structs is the only place upstream schema trust is asserted; anything that
//! does not match becomes an [`ExtractError`] instead of a structural panic
//! further down the pipeline.

use crate::weather::error::ExtractError;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level payload: one entry in `data` per requested parameter, in
/// request order.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub data: Vec<ParameterData>,
}

/// The samples for one requested parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterData {
    /// Echo of the requested parameter identifier, e.g. `t_2m:F`.
    pub parameter: String,
    /// One entry per queried coordinate; this crate always queries exactly
    /// one point.
    pub coordinates: Vec<CoordinateData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoordinateData {
    pub lat: f64,
    pub lon: f64,
    pub dates: Vec<Sample>,
}

/// One (timestamp, value) sample.
#[derive(Debug, Clone, Deserialize)]
pub struct Sample {
    pub date: DateTime<Utc>,
    pub value: f64,
}

impl ApiResponse {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::JsonDecode`] when the body is not valid JSON
    /// or does not have the expected nesting.
    pub fn from_json(body: &str) -> Result<Self, ExtractError> {
        serde_json::from_str(body).map_err(ExtractError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "version": "3.0",
        "user": "demo",
        "data": [
            {
                "parameter": "t_2m:F",
                "coordinates": [
                    {
                        "lat": 37.7749,
                        "lon": -122.4194,
                        "dates": [
                            {"date": "2000-07-22T15:00:00Z", "value": 63.1},
                            {"date": "2001-07-22T15:00:00Z", "value": 64.8}
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn decodes_well_formed_payload() {
        let response = ApiResponse::from_json(WELL_FORMED).unwrap();
        assert_eq!(response.data.len(), 1);
        let block = &response.data[0];
        assert_eq!(block.parameter, "t_2m:F");
        assert_eq!(block.coordinates[0].dates.len(), 2);
        assert_eq!(block.coordinates[0].dates[1].value, 64.8);
    }

    #[test]
    fn unknown_top_level_fields_are_ignored() {
        // "version" and "user" above are not modeled; decoding must not trip
        // over them.
        assert!(ApiResponse::from_json(WELL_FORMED).is_ok());
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = ApiResponse::from_json("not json").unwrap_err();
        assert!(matches!(err, ExtractError::JsonDecode(_)));
    }

    #[test]
    fn missing_value_field_is_a_decode_error() {
        let body = r#"{"data": [{"parameter": "t_2m:F", "coordinates": [
            {"lat": 0.0, "lon": 0.0, "dates": [{"date": "2000-07-22T15:00:00Z"}]}
        ]}]}"#;
        let err = ApiResponse::from_json(body).unwrap_err();
        assert!(matches!(err, ExtractError::JsonDecode(_)));
    }
}
