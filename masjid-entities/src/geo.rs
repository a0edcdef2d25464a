use std::fmt;

use thiserror::Error;

pub type Degrees = f64;

const LAT_DEG_MAX: Degrees = 90.0;
const LAT_DEG_MIN: Degrees = -90.0;
const LNG_DEG_MAX: Degrees = 180.0;
const LNG_DEG_MIN: Degrees = -180.0;

/// Mean earth radius as used by the haversine formula.
pub const EARTH_RADIUS: Distance = Distance::from_km(6371.0);

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("Latitude {0} is out of range")]
    Latitude(Degrees),
    #[error("Longitude {0} is out of range")]
    Longitude(Degrees),
}

/// A geographical position in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
    lat: Degrees,
    lng: Degrees,
}

impl Coordinate {
    /// Create a coordinate without checking its range.
    ///
    /// Positions reported by a location sensor are trusted as is.
    pub const fn new(lat: Degrees, lng: Degrees) -> Self {
        Self { lat, lng }
    }

    pub fn try_new(lat: Degrees, lng: Degrees) -> Result<Self, CoordinateError> {
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(CoordinateError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> Degrees {
        self.lat
    }

    pub const fn lng(self) -> Degrees {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        Self::try_new(self.lat, self.lng).is_ok()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    /// Calculate the great-circle distance on the surface
    /// of the earth using the haversine formula.
    ///
    /// Non-numeric input results in a `NaN` distance.
    pub fn distance(p1: Coordinate, p2: Coordinate) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_km(EARTH_RADIUS.to_km() * c)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_km(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_km(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Kilometers rounded to two decimal places, e.g. `"1.25"`.
    pub fn to_display_string(self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} km", self.to_display_string())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn coordinate_range() {
        assert!(Coordinate::try_new(90.0, 180.0).is_ok());
        assert!(Coordinate::try_new(-90.0, -180.0).is_ok());
        assert_eq!(
            Err(CoordinateError::Latitude(90.000001)),
            Coordinate::try_new(90.000001, 0.0)
        );
        assert_eq!(
            Err(CoordinateError::Longitude(-180.5)),
            Coordinate::try_new(0.0, -180.5)
        );
        assert!(Coordinate::try_new(f64::NAN, 0.0).is_err());
        assert!(!Coordinate::new(0.0, 200.0).is_valid());
    }

    #[test]
    fn no_distance() {
        let p1 = Coordinate::new(0.0, 0.0);
        assert_eq!(Coordinate::distance(p1, p1).to_km(), 0.0);

        let p2 = Coordinate::new(48.8566, 2.3522);
        assert_eq!(Coordinate::distance(p2, p2).to_display_string(), "0.00");

        let p1 = Coordinate::new(-15.0, -180.0);
        let p2 = Coordinate::new(-15.0, 180.0);
        assert!(Coordinate::distance(p1, p2).to_km() < 0.000001);
    }

    #[test]
    fn real_distance() {
        let stuttgart = Coordinate::new(48.7755, 9.1827);
        let mannheim = Coordinate::new(49.4836, 8.4630);
        let d = Coordinate::distance(stuttgart, mannheim);
        assert!(d > Distance::from_km(94.0));
        assert!(d < Distance::from_km(95.0));

        let new_york = Coordinate::new(40.714268, -74.005974);
        let sidney = Coordinate::new(-33.867138, 151.207108);
        let d = Coordinate::distance(new_york, sidney);
        assert!(d > Distance::from_km(15_980.0));
        assert!(d < Distance::from_km(15_995.0));
    }

    #[test]
    fn symmetric_distance() {
        let a = Coordinate::new(80.0, 0.0);
        let b = Coordinate::new(90.0, 20.0);
        let ab = Coordinate::distance(a, b);
        let ba = Coordinate::distance(b, a);
        assert!((ab.to_km() - ba.to_km()).abs() < 1e-9);
        assert_eq!(ab.to_display_string(), ba.to_display_string());
    }

    #[test]
    fn distance_with_nan() {
        let a = Coordinate::new(f64::NAN, 0.0);
        let b = Coordinate::new(20.0, 20.0);
        assert!(Coordinate::distance(a, b).to_km().is_nan());
        assert!(!Coordinate::distance(a, b).is_valid());
    }

    #[test]
    fn display_distance() {
        assert_eq!("0.13", Distance::from_km(0.125_1).to_display_string());
        assert_eq!("1.00 km", Distance::from_km(1.0).to_string());
    }
}
