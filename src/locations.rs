//! Location input handling: a fixed country gazetteer and free-text
//! coordinate parsing. No I/O happens here; both paths produce a validated
//! [`LatLon`] for the query builder.

use crate::error::InputError;
use serde::Serialize;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second
/// (index 1). Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use meteotrend::LatLon;
///
/// let san_francisco = LatLon(37.7749, -122.4194);
/// assert_eq!(san_francisco.0, 37.7749); // Latitude
/// assert_eq!(san_francisco.1, -122.4194); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Creates a coordinate, enforcing latitude ∈ [-90, 90] and
    /// longitude ∈ [-180, 180].
    ///
    /// # Errors
    ///
    /// Returns [`InputError::LatitudeOutOfBounds`] or
    /// [`InputError::LongitudeOutOfBounds`] for values outside those ranges
    /// (NaN included).
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, InputError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InputError::LatitudeOutOfBounds(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InputError::LongitudeOutOfBounds(longitude));
        }
        Ok(LatLon(latitude, longitude))
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.0
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.1
    }
}

/// Looks up the representative coordinate for a country name from the fixed
/// gazetteer.
///
/// # Errors
///
/// Returns [`InputError::UnknownLocation`] when the name is not in the table.
///
/// # Examples
///
/// ```
/// use meteotrend::coordinate_for;
///
/// let netherlands = coordinate_for("Netherlands").unwrap();
/// assert_eq!(netherlands.0, 52.1326);
/// assert!(coordinate_for("Atlantis").is_err());
/// ```
pub fn coordinate_for(name: &str) -> Result<LatLon, InputError> {
    COUNTRY_COORDINATES
        .iter()
        .find(|(country, _)| *country == name)
        .map(|(_, coordinate)| *coordinate)
        .ok_or_else(|| InputError::UnknownLocation(name.to_string()))
}

/// All country names in the gazetteer, in table order, for UI selection
/// lists.
pub fn country_names() -> impl Iterator<Item = &'static str> {
    COUNTRY_COORDINATES.iter().map(|(name, _)| *name)
}

/// Parses two free-text coordinate fields into a validated [`LatLon`].
///
/// Surrounding whitespace is tolerated; anything that does not parse as a
/// floating point number, or falls outside the valid latitude/longitude
/// bounds, is rejected.
///
/// # Errors
///
/// Returns the matching [`InputError`] variant for the first offending field.
pub fn parse_lat_lon(latitude: &str, longitude: &str) -> Result<LatLon, InputError> {
    let lat: f64 = latitude
        .trim()
        .parse()
        .map_err(|_| InputError::UnparseableLatitude(latitude.to_string()))?;
    let lon: f64 = longitude
        .trim()
        .parse()
        .map_err(|_| InputError::UnparseableLongitude(longitude.to_string()))?;
    LatLon::checked(lat, lon)
}

/// Fixed country → representative coordinate table. For large countries the
/// coordinate is a well-known city rather than the centroid.
pub static COUNTRY_COORDINATES: &[(&str, LatLon)] = &[
    ("Afghanistan", LatLon(33.93911, 67.70995)),
    ("Albania", LatLon(41.1533, 20.1683)),
    ("Algeria", LatLon(28.0339, 1.6596)),
    ("Andorra", LatLon(42.5063, 1.5211)),
    ("Angola", LatLon(-11.2027, 17.8739)),
    ("Antigua and Barbuda", LatLon(17.0608, -61.7964)),
    ("Argentina", LatLon(-38.4161, -63.6167)),
    ("Armenia", LatLon(40.0691, 45.0382)),
    ("Australia", LatLon(-25.2744, 133.7751)),
    ("Austria", LatLon(47.5162, 14.5501)),
    ("Azerbaijan", LatLon(40.1431, 47.5769)),
    ("Bahamas", LatLon(25.0343, -77.3963)),
    ("Bahrain", LatLon(25.9304, 50.6379)),
    ("Bangladesh", LatLon(23.685, 90.3563)),
    ("Barbados", LatLon(13.1939, -59.5432)),
    ("Belarus", LatLon(53.9045, 27.559)),
    ("Belgium", LatLon(50.8503, 4.3517)),
    ("Belize", LatLon(17.1899, -88.4976)),
    ("Benin", LatLon(9.3077, 2.3158)),
    ("Bhutan", LatLon(27.5149, 90.4336)),
    ("Bolivia", LatLon(-16.5000, -68.1193)),
    ("Bosnia and Herzegovina", LatLon(43.8486, 17.6791)),
    ("Botswana", LatLon(-22.3285, 24.6849)),
    ("Brazil", LatLon(-23.5505, -46.6333)), // São Paulo
    ("Brunei", LatLon(4.5353, 114.7277)),
    ("Bulgaria", LatLon(42.7339, 25.4858)),
    ("Burkina Faso", LatLon(12.2383, -1.5616)),
    ("Burundi", LatLon(-3.3731, 29.9189)),
    ("Cabo Verde", LatLon(16.0020, -24.0132)),
    ("Cambodia", LatLon(12.5657, 104.9910)),
    ("Cameroon", LatLon(7.3697, 12.3547)),
    ("Canada", LatLon(56.1304, -106.3468)),
    ("Central African Republic", LatLon(6.6111, 20.9394)),
    ("Chad", LatLon(15.4542, 18.7322)),
    ("Chile", LatLon(-35.6751, -71.5430)),
    ("China", LatLon(39.9042, 116.4074)), // Beijing
    ("Colombia", LatLon(4.5709, -74.2973)),
    ("Comoros", LatLon(-11.7020, 43.2540)),
    ("Congo, Democratic Republic of the", LatLon(-4.0383, 21.7587)),
    ("Congo, Republic of the", LatLon(-4.4961, 15.8277)),
    ("Costa Rica", LatLon(9.7489, -83.7534)),
    ("Croatia", LatLon(45.1, 15.2)),
    ("Cuba", LatLon(21.5216, -77.7812)),
    ("Cyprus", LatLon(35.1264, 33.4299)),
    ("Czech Republic", LatLon(49.8175, 15.4730)),
    ("Denmark", LatLon(56.2639, 9.5018)),
    ("Djibouti", LatLon(11.8251, 42.5903)),
    ("Dominica", LatLon(15.4150, -61.3710)),
    ("Dominican Republic", LatLon(18.7357, -70.1627)),
    ("Ecuador", LatLon(-1.8312, -78.1834)),
    ("Egypt", LatLon(26.8206, 30.8025)),
    ("El Salvador", LatLon(13.7942, -88.8965)),
    ("Equatorial Guinea", LatLon(1.6508, 10.2679)),
    ("Eritrea", LatLon(15.1792, 39.7823)),
    ("Estonia", LatLon(58.5953, 25.0136)),
    ("Eswatini", LatLon(-26.5225, 31.4659)),
    ("Ethiopia", LatLon(9.1450, 40.4897)),
    ("Fiji", LatLon(-17.7134, 178.0650)),
    ("Finland", LatLon(61.9241, 25.7482)),
    ("France", LatLon(46.6034, 1.8883)),
    ("Gabon", LatLon(-0.8031, 11.6094)),
    ("Gambia", LatLon(13.4662, -16.5780)),
    ("Georgia", LatLon(42.3154, -43.3569)),
    ("Germany", LatLon(51.1657, 10.4515)),
    ("Ghana", LatLon(7.6731, -0.1860)),
    ("Greece", LatLon(39.0742, 21.8243)),
    ("Grenada", LatLon(12.1165, -61.6749)),
    ("Guatemala", LatLon(15.7835, -90.2308)),
    ("Guinea", LatLon(9.9456, -9.6966)),
    ("Guinea-Bissau", LatLon(11.8037, -15.1804)),
    ("Guyana", LatLon(4.8604, -58.9302)),
    ("Haiti", LatLon(18.9712, -72.2852)),
    ("Honduras", LatLon(15.1999, -86.2419)),
    ("Hungary", LatLon(47.1625, 19.5033)),
    ("Iceland", LatLon(64.9631, -19.0208)),
    ("India", LatLon(28.6139, 77.2090)), // New Delhi
    ("Indonesia", LatLon(-6.2088, 106.8456)), // Jakarta
    ("Iran", LatLon(32.4279, 53.6880)),
    ("Iraq", LatLon(33.2232, 43.6793)),
    ("Ireland", LatLon(53.4129, -8.2439)),
    ("Israel", LatLon(31.0461, 34.8516)),
    ("Italy", LatLon(41.8719, 12.5674)),
    ("Jamaica", LatLon(18.1096, -77.2975)),
    ("Japan", LatLon(36.2048, 138.2529)),
    ("Jordan", LatLon(30.5852, 36.2384)),
    ("Kazakhstan", LatLon(48.0196, 66.9237)),
    ("Kenya", LatLon(-0.0236, 37.9062)),
    ("Kiribati", LatLon(-3.3704, -168.7340)),
    ("Korea, North", LatLon(40.3399, 127.5101)),
    ("Korea, South", LatLon(35.9078, 127.7669)),
    ("Kuwait", LatLon(29.3759, 47.9774)),
    ("Kyrgyzstan", LatLon(41.2044, 74.7661)),
    ("Laos", LatLon(19.8563, 102.4955)),
    ("Latvia", LatLon(56.8796, 24.6032)),
    ("Lebanon", LatLon(33.8547, 35.8623)),
    ("Lesotho", LatLon(-29.6090, 28.2336)),
    ("Liberia", LatLon(6.4281, -9.4295)),
    ("Libya", LatLon(26.3351, 17.2283)),
    ("Liechtenstein", LatLon(47.1662, 9.5554)),
    ("Lithuania", LatLon(55.1694, 23.8813)),
    ("Luxembourg", LatLon(49.6118, 6.1319)),
    ("Madagascar", LatLon(-18.7669, 46.8691)),
    ("Malawi", LatLon(-13.2543, 34.3015)),
    ("Malaysia", LatLon(4.2105, 101.9758)),
    ("Maldives", LatLon(3.2028, 73.2207)),
    ("Mali", LatLon(17.5707, -3.9962)),
    ("Malta", LatLon(35.9375, 14.3754)),
    ("Marshall Islands", LatLon(7.1095, 171.1851)),
    ("Mauritania", LatLon(20.2540, -10.1401)),
    ("Mauritius", LatLon(-20.348404, 57.552152)),
    ("Mexico", LatLon(23.6345, -102.5528)),
    ("Micronesia", LatLon(7.4256, 150.5508)),
    ("Moldova", LatLon(47.4116, 28.3699)),
    ("Monaco", LatLon(43.7384, 7.4246)),
    ("Mongolia", LatLon(46.8625, 103.8467)),
    ("Montenegro", LatLon(42.7087, 19.3744)),
    ("Morocco", LatLon(31.7917, -7.0926)),
    ("Mozambique", LatLon(-18.6657, 35.5296)),
    ("Myanmar", LatLon(21.9162, 95.9555)),
    ("Namibia", LatLon(-22.9576, 18.4904)),
    ("Nauru", LatLon(-0.5228, 166.9315)),
    ("Nepal", LatLon(28.3949, 84.1240)),
    ("Netherlands", LatLon(52.1326, 5.2913)),
    ("New Zealand", LatLon(-40.9006, 174.886)),
    ("Nicaragua", LatLon(12.8654, -85.2072)),
    ("Niger", LatLon(17.6078, 8.0817)),
    ("Nigeria", LatLon(9.0820, 8.6753)),
    ("North Macedonia", LatLon(41.6086, 21.7453)),
    ("Norway", LatLon(60.4720, 8.4689)),
    ("Oman", LatLon(21.5129, 55.9233)),
    ("Pakistan", LatLon(30.3753, 69.3451)),
    ("Palau", LatLon(7.5149, 134.5825)),
    ("Palestine", LatLon(31.9522, 35.2332)),
    ("Panama", LatLon(8.9824, -79.5199)),
    ("Papua New Guinea", LatLon(-6.31499, 143.9555)),
    ("Paraguay", LatLon(-23.4420, -58.4438)),
    ("Peru", LatLon(-9.1899, -75.0152)),
    ("Philippines", LatLon(12.8797, 121.7740)),
    ("Poland", LatLon(51.9194, 19.1451)),
    ("Portugal", LatLon(39.3999, -8.2245)),
    ("Qatar", LatLon(25.276987, 51.520008)),
    ("Romania", LatLon(45.9432, 24.9668)),
    ("Russia", LatLon(61.5240, 105.3188)),
    ("Rwanda", LatLon(-1.9403, 29.8739)),
    ("Saint Kitts and Nevis", LatLon(17.3578, -62.7832)),
    ("Saint Lucia", LatLon(13.9094, -60.9789)),
    ("Saint Vincent and the Grenadines", LatLon(12.9898, -61.2872)),
    ("Samoa", LatLon(-13.7590, -172.1046)),
    ("San Marino", LatLon(43.9333, 12.4467)),
    ("Sao Tome and Principe", LatLon(0.1864, 6.6131)),
    ("Saudi Arabia", LatLon(23.8859, 45.0792)),
    ("Senegal", LatLon(14.4974, -14.4524)),
    ("Serbia", LatLon(44.0165, 21.0059)),
    ("Seychelles", LatLon(-4.6796, 55.4919)),
    ("Sierra Leone", LatLon(8.4657, -11.7799)),
    ("Singapore", LatLon(1.3521, 103.8198)),
    ("Slovakia", LatLon(48.6690, 19.6990)),
    ("Slovenia", LatLon(46.1512, 14.9955)),
    ("Solomon Islands", LatLon(-9.6457, 160.0240)),
    ("Somalia", LatLon(5.1521, 46.1996)),
    ("South Africa", LatLon(-30.5595, 22.9375)),
    ("South Sudan", LatLon(6.8769, 31.3069)),
    ("Spain", LatLon(40.4637, -3.7492)),
    ("Sri Lanka", LatLon(7.8731, 80.7718)),
    ("Sudan", LatLon(12.8628, 30.2176)),
    ("Suriname", LatLon(3.9193, -56.0274)),
    ("Sweden", LatLon(60.1282, 18.6435)),
    ("Switzerland", LatLon(46.8182, 8.2275)),
    ("Syria", LatLon(34.8021, 38.9968)),
    ("Tajikistan", LatLon(38.8610, 71.2761)),
    ("Tanzania", LatLon(-6.3690, 34.8888)),
    ("Thailand", LatLon(15.8700, 100.9925)),
    ("Togo", LatLon(8.6195, 0.8248)),
    ("Tonga", LatLon(-21.1789, -175.1982)),
    ("Trinidad and Tobago", LatLon(10.6918, -61.2225)),
    ("Tunisia", LatLon(33.8869, 9.5375)),
    ("Turkey", LatLon(38.9637, 35.2433)),
    ("Turkmenistan", LatLon(40.0622, 59.5563)),
    ("Tuvalu", LatLon(-7.1095, 179.1945)),
    ("Uganda", LatLon(1.3733, 32.2903)),
    ("Ukraine", LatLon(48.3794, 31.1656)),
    ("United Arab Emirates", LatLon(23.4241, 53.8478)),
    ("United Kingdom", LatLon(55.3781, -3.4360)),
    ("United States", LatLon(37.7749, -122.4194)), // San Francisco, CA
    ("Uruguay", LatLon(-32.5228, -55.7659)),
    ("Uzbekistan", LatLon(41.3775, 64.5852)),
    ("Vanuatu", LatLon(-15.3764, 166.9591)),
    ("Vatican City", LatLon(41.9029, 12.4534)),
    ("Venezuela", LatLon(6.4238, -66.5897)),
    ("Vietnam", LatLon(14.0583, 108.2772)),
    ("Yemen", LatLon(15.5524, 48.5164)),
    ("Zambia", LatLon(-13.1339, 27.8493)),
    ("Zimbabwe", LatLon(-19.0154, 29.1549)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_country() {
        let coordinate = coordinate_for("United States").unwrap();
        assert_eq!(coordinate, LatLon(37.7749, -122.4194));
    }

    #[test]
    fn unknown_country_is_rejected() {
        let err = coordinate_for("Atlantis").unwrap_err();
        assert_eq!(err, InputError::UnknownLocation("Atlantis".to_string()));
    }

    #[test]
    fn gazetteer_names_are_unique_and_in_bounds() {
        let mut seen = std::collections::HashSet::new();
        for (name, coordinate) in COUNTRY_COORDINATES {
            assert!(seen.insert(*name), "duplicate gazetteer entry: {name}");
            assert!(LatLon::checked(coordinate.0, coordinate.1).is_ok());
        }
        assert_eq!(country_names().count(), COUNTRY_COORDINATES.len());
    }

    #[test]
    fn parses_free_text_coordinates() {
        let coordinate = parse_lat_lon(" 37.7749 ", "-122.4194").unwrap();
        assert_eq!(coordinate, LatLon(37.7749, -122.4194));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(
            parse_lat_lon("north", "-122.4194").unwrap_err(),
            InputError::UnparseableLatitude("north".to_string())
        );
        assert_eq!(
            parse_lat_lon("37.7749", "west").unwrap_err(),
            InputError::UnparseableLongitude("west".to_string())
        );
    }

    #[test]
    fn rejects_out_of_bounds_values() {
        assert_eq!(
            parse_lat_lon("91.0", "0.0").unwrap_err(),
            InputError::LatitudeOutOfBounds(91.0)
        );
        assert_eq!(
            parse_lat_lon("0.0", "-180.5").unwrap_err(),
            InputError::LongitudeOutOfBounds(-180.5)
        );
        assert!(LatLon::checked(f64::NAN, 0.0).is_err());
    }
}
