//! Chart construction: turns one observation series and its fitted trend
//! into a renderer-agnostic description — static traces, fixed axis ranges,
//! progressive-reveal frames, and playback controls. Everything here is
//! `Serialize`, so a frontend can take a chart as plain JSON.

pub mod animation;
pub mod style;

use crate::chart::animation::{playback_controls, AnimationFrame, PlaybackControl};
use crate::chart::style::ChartStyle;
use crate::trend::TrendModel;
use crate::types::quantity::Quantity;
use crate::weather::series::ObservationSeries;
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// Observed-point marker size, in pixels.
const MARKER_SIZE: u32 = 8;

/// Trend lines are always drawn in red, dashed.
const TREND_COLOR: &str = "red";

/// Fraction of the observed value range added as padding above and below
/// the value axis.
const VALUE_AXIS_PADDING: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceMode {
    #[serde(rename = "markers+lines")]
    MarkersAndLines,
    #[serde(rename = "lines")]
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePattern {
    Solid,
    Dash,
}

/// Marker styling carried by point traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerSpec {
    pub symbol: &'static str,
    pub size: u32,
    pub color: &'static str,
}

/// One drawable series: aligned x/y vectors plus styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub mode: TraceMode,
    pub x: Vec<DateTime<Utc>>,
    pub y: Vec<f64>,
    pub color: &'static str,
    pub pattern: LinePattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerSpec>,
}

/// Axis titles, formats, and the fixed ranges that keep the viewport stable
/// while frames play.
///
/// The ranges are `None` only for an empty series, which the extraction
/// layer never produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_range: Option<[DateTime<Utc>; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_range: Option<[f64; 2]>,
    pub x_tick_format: String,
}

/// A complete chart description for one quantity.
///
/// Carries both presentations at once: the static full-series traces shown
/// before playback, and the ordered frame strip the Play control advances
/// through. When no trend could be fitted the chart degrades to points only
/// (`trend` is `None` and no frame has a trend segment).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub quantity: Quantity,
    pub layout: ChartLayout,
    pub observed: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trace>,
    pub frames: Vec<AnimationFrame>,
    pub controls: [PlaybackControl; 2],
}

impl TrendChart {
    /// Assembles the chart for one series.
    ///
    /// The trend model, when present, must be the one fitted over this full
    /// series: each frame re-evaluates those same coefficients over its
    /// prefix of dates rather than refitting, so frame generation stays
    /// linear in the series length.
    pub fn build(
        series: &ObservationSeries,
        model: Option<&TrendModel>,
        style: &ChartStyle,
    ) -> TrendChart {
        let quantity = series.quantity;
        let dates: Vec<DateTime<Utc>> = series.dates().collect();
        let values: Vec<f64> = series.values().collect();
        let trend_values: Option<Vec<f64>> =
            model.map(|m| dates.iter().map(|d| m.value_at(*d)).collect());

        let frames = (1..=dates.len())
            .map(|k| AnimationFrame {
                label: dates[k - 1].year().to_string(),
                observed: observed_trace(quantity, &dates[..k], &values[..k], style),
                trend: trend_values
                    .as_ref()
                    .map(|t| trend_trace(&dates[..k], &t[..k])),
            })
            .collect();

        TrendChart {
            quantity,
            layout: layout(quantity, &dates, &values),
            observed: observed_trace(quantity, &dates, &values, style),
            trend: trend_values.as_ref().map(|t| trend_trace(&dates, t)),
            frames,
            controls: playback_controls(),
        }
    }
}

fn observed_trace(
    quantity: Quantity,
    dates: &[DateTime<Utc>],
    values: &[f64],
    style: &ChartStyle,
) -> Trace {
    Trace {
        name: quantity.display_name().to_string(),
        mode: TraceMode::MarkersAndLines,
        x: dates.to_vec(),
        y: values.to_vec(),
        color: style.color.hex(),
        pattern: LinePattern::Solid,
        marker: Some(MarkerSpec {
            symbol: style.marker.symbol(),
            size: MARKER_SIZE,
            color: style.color.hex(),
        }),
    }
}

fn trend_trace(dates: &[DateTime<Utc>], values: &[f64]) -> Trace {
    Trace {
        name: "Trendline".to_string(),
        mode: TraceMode::Lines,
        x: dates.to_vec(),
        y: values.to_vec(),
        color: TREND_COLOR,
        pattern: LinePattern::Dash,
        marker: None,
    }
}

/// Axis ranges are fixed once from the full series so the viewport does not
/// move while frames play. The value axis gets 10%-of-range padding on both
/// sides.
fn layout(quantity: Quantity, dates: &[DateTime<Utc>], values: &[f64]) -> ChartLayout {
    let x_range = match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => Some([*first, *last]),
        _ => None,
    };
    let y_range = values
        .iter()
        .fold(None::<(f64, f64)>, |acc, v| match acc {
            None => Some((*v, *v)),
            Some((min, max)) => Some((min.min(*v), max.max(*v))),
        })
        .map(|(min, max)| {
            let padding = VALUE_AXIS_PADDING * (max - min);
            [min - padding, max + padding]
        });

    ChartLayout {
        title: format!("{} Over Time", quantity.display_name()),
        x_title: "Year".to_string(),
        y_title: format!("{} ({})", quantity.display_name(), quantity.unit()),
        x_range,
        y_range,
        x_tick_format: "%Y".to_string(),
    }
}
