//! Builds the single request descriptor sent to the Meteomatics API: one
//! yearly-stepped time iteration over the anchor dates, all four quantity
//! identifiers comma-joined, the coordinate, and the fixed model selector.

use crate::locations::LatLon;
use crate::types::quantity::Quantity;
use crate::types::time_range::TimeRange;

/// Upstream model selector. `mix` lets Meteomatics pick the best source per
/// parameter and period.
const MODEL: &str = "mix";

/// A fully-described upstream query: which coordinate, which years, which
/// quantities.
///
/// All four quantities are always requested together in one call. This keeps
/// the request count at one per interaction and guarantees the four returned
/// series share an identical date axis.
///
/// Both inputs are validated at construction of their own types, so building
/// a query cannot fail: an inverted [`TimeRange`] or an out-of-bounds
/// [`LatLon`] is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherQuery {
    location: LatLon,
    range: TimeRange,
}

impl WeatherQuery {
    pub fn new(location: LatLon, range: TimeRange) -> Self {
        Self { location, range }
    }

    pub fn location(&self) -> LatLon {
        self.location
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// The quantities the query requests, in wire order.
    pub fn quantities(&self) -> &'static [Quantity] {
        &Quantity::ALL
    }

    /// The URL path (plus query string) encoding this request:
    /// `/{start}--{end}:P1Y/{parameters}/{lat},{lon}/json?model=mix`.
    pub fn path(&self) -> String {
        format!(
            "/{}--{}:P1Y/{}/{},{}/json?model={}",
            self.range.start_anchor_string(),
            self.range.end_anchor_string(),
            Quantity::identifiers_csv(),
            self.location.0,
            self.location.1,
            MODEL,
        )
    }
}
