//! This module provides the main entry point for building climate trend
//! charts. One call resolves to one upstream fetch followed by extraction,
//! trend fitting, and chart construction for every requested quantity.

use crate::chart::style::ChartStyle;
use crate::chart::TrendChart;
use crate::error::MeteotrendError;
use crate::locations::LatLon;
use crate::trend::{TrendError, TrendModel};
use crate::types::quantity::Quantity;
use crate::types::time_range::TimeRange;
use crate::weather::fetcher::{Credentials, WeatherFetcher};
use crate::weather::query::WeatherQuery;
use crate::weather::series::SeriesSet;
use bon::bon;
use log::warn;

/// The main client for turning a location and year range into animated
/// trend charts.
///
/// The client holds only an HTTP fetcher and is freely reusable: every call
/// rebuilds all intermediate entities from scratch, and nothing is cached
/// between interactions.
///
/// # Examples
///
/// ```no_run
/// # use meteotrend::{Credentials, LatLon, Meteotrend, MeteotrendError, TimeRange};
/// # async fn run() -> Result<(), MeteotrendError> {
/// let client = Meteotrend::new(Credentials::new("user", "pass"));
/// let charts = client
///     .trend_charts()
///     .location(LatLon(37.7749, -122.4194))
///     .range(TimeRange::new(2000, 2023)?)
///     .call()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct Meteotrend {
    fetcher: WeatherFetcher,
}

#[bon]
impl Meteotrend {
    /// Creates a client against the production Meteomatics endpoint.
    ///
    /// Credentials are always passed in explicitly; the client never reads
    /// them from ambient process state.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            fetcher: WeatherFetcher::new(credentials),
        }
    }

    /// Creates a client against an alternative endpoint (tests, proxies).
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            fetcher: WeatherFetcher::with_base_url(credentials, base_url),
        }
    }

    /// Fetches observations and builds one chart per requested quantity.
    ///
    /// All four quantities are fetched in a single upstream call regardless
    /// of the selection, so the series are date-aligned by construction;
    /// the selection only controls which charts are built.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinate to query.
    /// * `.range(TimeRange)`: **Required.** The years to sample, one
    ///   observation per year at the July 22, 15:00 UTC anchor.
    /// * `.quantities(Vec<Quantity>)`: Optional. Which charts to build.
    ///   Defaults to `[Quantity::Temperature]`.
    /// * `.style(ChartStyle)`: Optional. Marker shape and line color of the
    ///   observed trace. Defaults to circles in chart blue.
    ///
    /// # Returns
    ///
    /// One [`TrendChart`] per requested quantity, in request order.
    ///
    /// # Errors
    ///
    /// Returns [`MeteotrendError::Fetch`] when the upstream call fails (the
    /// status code is preserved for non-2xx responses) and
    /// [`MeteotrendError::Extract`] when a 2xx payload does not match the
    /// expected shape. Either way, no charts are produced: there is no
    /// partial rendering across quantities for a failed fetch.
    ///
    /// A series too short for trend fitting is not an error here: that
    /// chart degrades to points without a trendline, and other quantities
    /// are unaffected.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use meteotrend::{ChartStyle, Credentials, LatLon, MarkerStyle, LineColor};
    /// # use meteotrend::{Meteotrend, MeteotrendError, Quantity, TimeRange};
    /// # async fn run() -> Result<(), MeteotrendError> {
    /// let client = Meteotrend::new(Credentials::new("user", "pass"));
    /// let charts = client
    ///     .trend_charts()
    ///     .location(LatLon(52.1326, 5.2913))
    ///     .range(TimeRange::new(1941, 2023)?)
    ///     .quantities(vec![Quantity::Temperature, Quantity::Evaporation])
    ///     .style(ChartStyle::new(MarkerStyle::Square, LineColor::Orange))
    ///     .call()
    ///     .await?;
    /// assert_eq!(charts.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn trend_charts(
        &self,
        location: LatLon,
        range: TimeRange,
        quantities: Option<Vec<Quantity>>,
        style: Option<ChartStyle>,
    ) -> Result<Vec<TrendChart>, MeteotrendError> {
        let quantities = quantities.unwrap_or_else(|| vec![Quantity::Temperature]);
        let style = style.unwrap_or_default();

        let query = WeatherQuery::new(location, range);
        let body = self.fetcher.fetch(&query).await?;
        let set = SeriesSet::from_json(&body)?;

        let mut charts = Vec::with_capacity(quantities.len());
        for quantity in quantities {
            let series = set.series(quantity);
            let model = match TrendModel::fit(series) {
                Ok(model) => Some(model),
                Err(TrendError::InsufficientData { points }) => {
                    warn!(
                        "Skipping trendline for {}: {} data point(s) in range",
                        quantity, points
                    );
                    None
                }
            };
            charts.push(TrendChart::build(series, model.as_ref(), &style));
        }
        Ok(charts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::error::{ExtractError, FetchError};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// A well-formed payload with one sample per year of `years`, values
    /// increasing by one per year, offset per quantity block.
    fn payload(years: std::ops::RangeInclusive<i32>) -> String {
        let blocks: Vec<String> = Quantity::ALL
            .iter()
            .enumerate()
            .map(|(block, quantity)| {
                let dates: Vec<String> = years
                    .clone()
                    .enumerate()
                    .map(|(i, year)| {
                        format!(
                            r#"{{"date": "{year}-07-22T15:00:00Z", "value": {}}}"#,
                            50.0 + 10.0 * block as f64 + i as f64
                        )
                    })
                    .collect();
                format!(
                    r#"{{"parameter": "{}", "coordinates": [{{"lat": 37.7749, "lon": -122.4194, "dates": [{}]}}]}}"#,
                    quantity.identifier(),
                    dates.join(",")
                )
            })
            .collect();
        format!(r#"{{"data": [{}]}}"#, blocks.join(","))
    }

    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(base_url: String) -> Meteotrend {
        Meteotrend::with_base_url(Credentials::new("user", "pass"), base_url)
    }

    #[tokio::test]
    async fn builds_one_chart_per_requested_quantity() -> Result<(), MeteotrendError> {
        let base_url = serve_once("200 OK", payload(2000..=2003)).await;
        let charts = client(base_url)
            .trend_charts()
            .location(LatLon(37.7749, -122.4194))
            .range(TimeRange::new(2000, 2003)?)
            .quantities(vec![Quantity::Temperature, Quantity::CloudCover])
            .call()
            .await?;

        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].quantity, Quantity::Temperature);
        assert_eq!(charts[1].quantity, Quantity::CloudCover);
        for chart in &charts {
            assert_eq!(chart.frames.len(), 4);
            assert!(chart.trend.is_some());
            assert_eq!(chart.frames[0].label, "2000");
        }
        // Values land in the right chart: cloud cover is the third block.
        assert_eq!(charts[1].observed.y[0], 70.0);
        Ok(())
    }

    #[tokio::test]
    async fn defaults_to_a_temperature_chart() -> Result<(), MeteotrendError> {
        let base_url = serve_once("200 OK", payload(2000..=2001)).await;
        let charts = client(base_url)
            .trend_charts()
            .location(LatLon(37.7749, -122.4194))
            .range(TimeRange::new(2000, 2001)?)
            .call()
            .await?;
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].quantity, Quantity::Temperature);
        Ok(())
    }

    #[tokio::test]
    async fn single_year_degrades_to_points_without_failing() -> Result<(), MeteotrendError> {
        let base_url = serve_once("200 OK", payload(2010..=2010)).await;
        let charts = client(base_url)
            .trend_charts()
            .location(LatLon(37.7749, -122.4194))
            .range(TimeRange::new(2010, 2010)?)
            .quantities(Quantity::ALL.to_vec())
            .call()
            .await?;

        assert_eq!(charts.len(), 4);
        for chart in &charts {
            assert_eq!(chart.observed.y.len(), 1);
            assert!(chart.trend.is_none());
            assert!(chart.frames[0].trend.is_none());
        }
        Ok(())
    }

    #[tokio::test]
    async fn upstream_failure_yields_no_charts() {
        let base_url = serve_once("403 Forbidden", String::new()).await;
        let err = client(base_url)
            .trend_charts()
            .location(LatLon(37.7749, -122.4194))
            .range(TimeRange::new(2000, 2003).unwrap())
            .call()
            .await
            .unwrap_err();

        match err {
            MeteotrendError::Fetch(FetchError::HttpStatus { status, .. }) => {
                assert_eq!(status.as_u16(), 403);
            }
            other => panic!("expected an HTTP status failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn truncated_payload_is_a_malformed_response() {
        // Three quantity blocks instead of four.
        let body = payload(2000..=2002);
        let truncated = {
            let cut = body.rfind(r#",{"parameter": "evaporation_24h:mm""#).unwrap();
            format!("{}]}}", &body[..cut])
        };
        let base_url = serve_once("200 OK", truncated).await;
        let err = client(base_url)
            .trend_charts()
            .location(LatLon(37.7749, -122.4194))
            .range(TimeRange::new(2000, 2002).unwrap())
            .call()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            MeteotrendError::Extract(ExtractError::QuantityCountMismatch {
                expected: 4,
                found: 3,
            })
        ));
    }
}
