//! Defines the closed set of measured quantities the Meteomatics query
//! requests, together with their upstream identifiers and display units.

use crate::error::InputError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A measured weather quantity supported by the trend pipeline.
///
/// The set is closed: every query requests all four quantities in
/// [`Quantity::ALL`] order so that the returned series share one date axis.
/// Adding a quantity means adding a variant and one row to each table below;
/// nothing else changes.
///
/// # Examples
///
/// ```
/// use meteotrend::Quantity;
///
/// assert_eq!(Quantity::Temperature.identifier(), "t_2m:F");
/// assert_eq!(Quantity::CloudCover.unit(), "octas");
/// assert_eq!(format!("{}", Quantity::Humidity), "Humidity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quantity {
    /// Air temperature at 2 m, degrees Fahrenheit.
    Temperature,
    /// Relative humidity at 2 m, percent.
    Humidity,
    /// Effective cloud cover, octas.
    CloudCover,
    /// Evaporation over the preceding 24 h, millimetres.
    Evaporation,
}

impl Quantity {
    /// All quantities in upstream request order.
    ///
    /// This order is load-bearing: the response's `data` array mirrors it,
    /// and the series extractor aligns blocks to quantities by index.
    pub const ALL: [Quantity; 4] = [
        Quantity::Temperature,
        Quantity::Humidity,
        Quantity::CloudCover,
        Quantity::Evaporation,
    ];

    /// The Meteomatics parameter identifier for this quantity.
    pub fn identifier(&self) -> &'static str {
        match self {
            Quantity::Temperature => "t_2m:F",
            Quantity::Humidity => "relative_humidity_2m:p",
            Quantity::CloudCover => "effective_cloud_cover:octas",
            Quantity::Evaporation => "evaporation_24h:mm",
        }
    }

    /// Human-readable name, as shown in chart titles and UI selections.
    pub fn display_name(&self) -> &'static str {
        match self {
            Quantity::Temperature => "Temperature",
            Quantity::Humidity => "Humidity",
            Quantity::CloudCover => "Cloud Cover",
            Quantity::Evaporation => "Evaporation",
        }
    }

    /// Unit label used on the value axis.
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Temperature => "F",
            Quantity::Humidity => "p",
            Quantity::CloudCover => "octas",
            Quantity::Evaporation => "mm",
        }
    }

    /// Position of this quantity within [`Quantity::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            Quantity::Temperature => 0,
            Quantity::Humidity => 1,
            Quantity::CloudCover => 2,
            Quantity::Evaporation => 3,
        }
    }

    /// All four upstream identifiers joined with commas, in request order.
    pub(crate) fn identifiers_csv() -> String {
        Quantity::ALL
            .iter()
            .map(|q| q.identifier())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parses a UI-supplied quantity name ("Temperature", "Cloud Cover", ...).
///
/// # Errors
///
/// Returns [`InputError::UnknownQuantity`] for names outside the fixed set.
impl FromStr for Quantity {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::ALL
            .iter()
            .copied()
            .find(|q| q.display_name() == s)
            .ok_or_else(|| InputError::UnknownQuantity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_csv_matches_request_order() {
        assert_eq!(
            Quantity::identifiers_csv(),
            "t_2m:F,relative_humidity_2m:p,effective_cloud_cover:octas,evaporation_24h:mm"
        );
    }

    #[test]
    fn index_is_position_in_all() {
        for (i, quantity) in Quantity::ALL.iter().enumerate() {
            assert_eq!(quantity.index(), i);
        }
    }

    #[test]
    fn parses_display_names() {
        assert_eq!("Temperature".parse::<Quantity>().unwrap(), Quantity::Temperature);
        assert_eq!("Cloud Cover".parse::<Quantity>().unwrap(), Quantity::CloudCover);
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "Wind Speed".parse::<Quantity>().unwrap_err();
        assert!(matches!(err, InputError::UnknownQuantity(name) if name == "Wind Speed"));
    }
}
