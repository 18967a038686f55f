//! First-degree least-squares fitting over an observation series, with dates
//! encoded as whole days since the Unix epoch.

use crate::weather::series::ObservationSeries;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrendError {
    /// A line is undefined over fewer than two distinct sample dates. The
    /// caller is expected to degrade to a points-only chart, not to fail the
    /// whole interaction.
    #[error("Cannot fit a trend over {points} distinct data point(s); at least 2 are required")]
    InsufficientData { points: usize },
}

/// The integer ordinal a date is encoded as for fitting: whole days since
/// the Unix epoch. Consecutive yearly anchors are 365 or 366 apart, so the
/// slope reads naturally as change-per-day.
pub fn date_ordinal(date: DateTime<Utc>) -> i64 {
    date.timestamp().div_euclid(86_400)
}

/// A fitted line `value = intercept + slope * date_ordinal`.
///
/// Fitted once over the full series and reused unchanged by every animation
/// frame; fitting is closed-form and deterministic, so the same series
/// always produces bit-identical coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendModel {
    /// Fits a degree-1 polynomial minimising the sum of squared residuals
    /// over (date ordinal, value) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::InsufficientData`] for series with fewer than
    /// two points, or whose dates all collapse onto one day ordinal.
    ///
    /// # Examples
    ///
    /// ```
    /// use meteotrend::{Observation, ObservationSeries, Quantity, TrendModel};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let series = ObservationSeries {
    ///     quantity: Quantity::Temperature,
    ///     points: (0..3)
    ///         .map(|i| Observation {
    ///             date: Utc.with_ymd_and_hms(2000 + i, 7, 22, 15, 0, 0).unwrap(),
    ///             value: 10.0 + 2.0 * i as f64,
    ///         })
    ///         .collect(),
    /// };
    /// let model = TrendModel::fit(&series).unwrap();
    /// assert!(model.slope > 0.0);
    /// ```
    pub fn fit(series: &ObservationSeries) -> Result<TrendModel, TrendError> {
        if series.len() < 2 {
            return Err(TrendError::InsufficientData {
                points: series.len(),
            });
        }

        let xs: Vec<f64> = series.dates().map(|d| date_ordinal(d) as f64).collect();
        let ys: Vec<f64> = series.values().collect();
        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        // Mean-centred sums keep the arithmetic stable for large ordinals.
        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in xs.iter().zip(&ys) {
            let dx = x - mean_x;
            sxx += dx * dx;
            sxy += dx * (y - mean_y);
        }

        if sxx == 0.0 {
            // All samples share one day ordinal: a slope is undefined.
            return Err(TrendError::InsufficientData { points: 1 });
        }

        let slope = sxy / sxx;
        Ok(TrendModel {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Evaluates the fitted line at a date.
    pub fn value_at(&self, date: DateTime<Utc>) -> f64 {
        self.intercept + self.slope * date_ordinal(date) as f64
    }
}
