//! Reshapes a decoded payload into four index-aligned observation series,
//! one per quantity, sharing a single date axis.

use crate::types::quantity::Quantity;
use crate::weather::error::ExtractError;
use crate::weather::response::{ApiResponse, Sample};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One dated observation of a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    pub date: DateTime<Utc>,
    pub value: f64,
}

/// The yearly observations of one quantity, ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationSeries {
    pub quantity: Quantity,
    pub points: Vec<Observation>,
}

impl ObservationSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The shared date axis of the series.
    pub fn dates(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.points.iter().map(|p| p.date)
    }

    /// The observed values in date order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

/// All four series extracted from one response, aligned on one date axis.
///
/// Alignment is established here once, by index, and downstream code depends
/// on it: a `SeriesSet` never exposes series of differing lengths or
/// differing dates.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    series: [ObservationSeries; 4],
}

impl SeriesSet {
    /// Decodes a response body and extracts the aligned series in one step.
    ///
    /// # Errors
    ///
    /// Any [`ExtractError`]; see [`SeriesSet::from_response`].
    pub fn from_json(body: &str) -> Result<Self, ExtractError> {
        Self::from_response(&ApiResponse::from_json(body)?)
    }

    /// Extracts the four aligned series from a decoded response.
    ///
    /// The payload must carry exactly one block per quantity of
    /// [`Quantity::ALL`], in request order, each echoing its parameter
    /// identifier and holding a non-empty sample list of the same length and
    /// the same dates as every other block. Nothing is extracted unless the
    /// whole payload passes: there are no partial series.
    ///
    /// # Errors
    ///
    /// One [`ExtractError`] variant per shape deviation: block count,
    /// parameter echo, missing coordinate entry, empty or length-mismatched
    /// sample lists, misaligned or non-ascending dates.
    pub fn from_response(response: &ApiResponse) -> Result<Self, ExtractError> {
        if response.data.len() != Quantity::ALL.len() {
            return Err(ExtractError::QuantityCountMismatch {
                expected: Quantity::ALL.len(),
                found: response.data.len(),
            });
        }

        let mut extracted: Vec<ObservationSeries> = Vec::with_capacity(Quantity::ALL.len());

        for (index, quantity) in Quantity::ALL.into_iter().enumerate() {
            let block = &response.data[index];
            if block.parameter != quantity.identifier() {
                return Err(ExtractError::ParameterMismatch {
                    index,
                    expected: quantity.identifier(),
                    found: block.parameter.clone(),
                });
            }

            let samples = &block
                .coordinates
                .first()
                .ok_or(ExtractError::MissingCoordinates(quantity))?
                .dates;
            if samples.is_empty() {
                return Err(ExtractError::EmptySeries(quantity));
            }

            if let Some(first) = extracted.first() {
                check_alignment(first, quantity, samples)?;
            } else {
                check_ascending(quantity, samples)?;
            }

            extracted.push(ObservationSeries {
                quantity,
                points: samples
                    .iter()
                    .map(|s| Observation {
                        date: s.date,
                        value: s.value,
                    })
                    .collect(),
            });
        }

        let series: [ObservationSeries; 4] = extracted
            .try_into()
            .expect("one series was extracted per quantity");
        Ok(Self { series })
    }

    /// The extracted series for one quantity.
    pub fn series(&self, quantity: Quantity) -> &ObservationSeries {
        &self.series[quantity.index()]
    }

    /// Number of yearly samples shared by all four series.
    pub fn len(&self) -> usize {
        self.series[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.series[0].is_empty()
    }
}

/// The first series fixes the date axis; every later one must match it
/// sample for sample.
fn check_alignment(
    reference: &ObservationSeries,
    quantity: Quantity,
    samples: &[Sample],
) -> Result<(), ExtractError> {
    if samples.len() != reference.len() {
        return Err(ExtractError::LengthMismatch {
            quantity,
            expected: reference.len(),
            found: samples.len(),
        });
    }
    for (index, (reference_date, sample)) in reference.dates().zip(samples).enumerate() {
        if sample.date != reference_date {
            return Err(ExtractError::DateMisalignment { quantity, index });
        }
    }
    Ok(())
}

fn check_ascending(quantity: Quantity, samples: &[Sample]) -> Result<(), ExtractError> {
    for (index, pair) in samples.windows(2).enumerate() {
        if pair[1].date <= pair[0].date {
            return Err(ExtractError::NonAscendingDates {
                quantity,
                index: index + 1,
            });
        }
    }
    Ok(())
}
