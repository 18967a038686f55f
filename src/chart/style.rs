//! Fixed display-configuration sets for the observed trace. The trend trace
//! styling is not configurable: always red, always dashed.

use crate::error::InputError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Marker shape for observed points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    #[default]
    Circle,
    Square,
    Diamond,
}

impl MarkerStyle {
    const ALL: [MarkerStyle; 3] = [MarkerStyle::Circle, MarkerStyle::Square, MarkerStyle::Diamond];

    /// The marker symbol name the rendering layer understands.
    pub fn symbol(&self) -> &'static str {
        match self {
            MarkerStyle::Circle => "circle",
            MarkerStyle::Square => "square",
            MarkerStyle::Diamond => "diamond",
        }
    }

    /// UI display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            MarkerStyle::Circle => "Circle",
            MarkerStyle::Square => "Square",
            MarkerStyle::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MarkerStyle {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarkerStyle::ALL
            .iter()
            .copied()
            .find(|m| m.display_name() == s)
            .ok_or_else(|| InputError::UnknownMarkerStyle(s.to_string()))
    }
}

/// Line and marker color for the observed trace, from a fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineColor {
    /// The classic `#1f77b4` chart blue; the default.
    #[default]
    Blue,
    Orange,
    Green,
    Purple,
    Teal,
}

impl LineColor {
    const ALL: [LineColor; 5] = [
        LineColor::Blue,
        LineColor::Orange,
        LineColor::Green,
        LineColor::Purple,
        LineColor::Teal,
    ];

    /// The hex value handed to the rendering layer.
    pub fn hex(&self) -> &'static str {
        match self {
            LineColor::Blue => "#1f77b4",
            LineColor::Orange => "#ff7f0e",
            LineColor::Green => "#2ca02c",
            LineColor::Purple => "#9467bd",
            LineColor::Teal => "#17becf",
        }
    }

    /// UI display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            LineColor::Blue => "Blue",
            LineColor::Orange => "Orange",
            LineColor::Green => "Green",
            LineColor::Purple => "Purple",
            LineColor::Teal => "Teal",
        }
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for LineColor {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineColor::ALL
            .iter()
            .copied()
            .find(|c| c.display_name() == s)
            .ok_or_else(|| InputError::UnknownLineColor(s.to_string()))
    }
}

/// Complete display configuration for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChartStyle {
    pub marker: MarkerStyle,
    pub color: LineColor,
}

impl ChartStyle {
    pub fn new(marker: MarkerStyle, color: LineColor) -> Self {
        Self { marker, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_classic_dashboard_look() {
        let style = ChartStyle::default();
        assert_eq!(style.marker, MarkerStyle::Circle);
        assert_eq!(style.color.hex(), "#1f77b4");
    }

    #[test]
    fn parses_ui_names() {
        assert_eq!("Diamond".parse::<MarkerStyle>().unwrap(), MarkerStyle::Diamond);
        assert_eq!("Orange".parse::<LineColor>().unwrap(), LineColor::Orange);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            "Star".parse::<MarkerStyle>().unwrap_err(),
            InputError::UnknownMarkerStyle(_)
        ));
        assert!(matches!(
            "#bada55".parse::<LineColor>().unwrap_err(),
            InputError::UnknownLineColor(_)
        ));
    }
}
