//! demos/temperature_trend.rs
//!
//! Fetches the yearly temperature series for one country and prints a
//! summary of the resulting animated chart.
//!
//! Requires METEOMATICS_USERNAME and METEOMATICS_PASSWORD in the
//! environment. To run:
//! cargo run --example temperature_trend

use meteotrend::{coordinate_for, Credentials, Meteotrend, Quantity, TimeRange};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let credentials = Credentials::from_env()?;
    let client = Meteotrend::new(credentials);

    let location = coordinate_for("Netherlands")?;
    let charts = client
        .trend_charts()
        .location(location)
        .range(TimeRange::new(1990, 2023)?)
        .quantities(vec![Quantity::Temperature, Quantity::Evaporation])
        .call()
        .await?;

    for chart in &charts {
        println!(
            "{}: {} observations, {} frames",
            chart.layout.title,
            chart.observed.y.len(),
            chart.frames.len()
        );
        if let Some(trend) = &chart.trend {
            let (Some(first), Some(last)) = (trend.y.first(), trend.y.last()) else {
                continue;
            };
            println!(
                "  trend over the range: {:+.2} {}",
                last - first,
                chart.quantity.unit()
            );
        } else {
            println!("  not enough data for a trendline");
        }
    }

    Ok(())
}
