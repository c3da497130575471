use std::{fmt, ops::Add, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordInvalidation {
    #[error("Invalid latitude")]
    Latitude,
    #[error("Invalid longitude")]
    Longitude,
    #[error("Failed to parse coordinates")]
    Parse,
}

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A geographical location given as latitude/longitude degrees.
///
/// Both coordinates are validated on construction, i.e. a `MapPoint`
/// obtained through `try_from_lat_lng_deg()` always denotes an actual
/// point on the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat_deg: f64,
    lng_deg: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Result<Self, CoordInvalidation> {
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat_deg) {
            return Err(CoordInvalidation::Latitude);
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng_deg) {
            return Err(CoordInvalidation::Longitude);
        }
        Ok(Self { lat_deg, lng_deg })
    }

    /// Panics in debug builds if the coordinates are out of range.
    pub fn from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Self {
        let res = Self::try_from_lat_lng_deg(lat_deg, lng_deg);
        debug_assert!(res.is_ok());
        res.unwrap_or(Self { lat_deg, lng_deg })
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat_deg
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng_deg
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat_deg.to_radians(), self.lng_deg.to_radians())
    }

    /// Calculate the great-circle distance between two points on the
    /// surface of the earth using a special case of the Vincenty formula
    /// for numerical accuracy.
    /// Reference: <https://en.wikipedia.org/wiki/Great-circle_distance>
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = (lat1_rad.sin(), lat1_rad.cos());
        let (lat2_sin, lat2_cos) = (lat2_rad.sin(), lat2_rad.cos());

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = (dlng.sin(), dlng.cos());

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Distance::from_kilometers(MEAN_EARTH_RADIUS_KM * nom.atan2(denom))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat_deg, self.lng_deg)
    }
}

impl FromStr for MapPoint {
    type Err = CoordInvalidation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let lat_deg = parts
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .ok_or(CoordInvalidation::Parse)?;
        let lng_deg = parts
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .ok_or(CoordInvalidation::Parse)?;
        Self::try_from_lat_lng_deg(lat_deg, lng_deg)
    }
}

const MEAN_EARTH_RADIUS_KM: f64 = 6_371.2;

/// A non-negative geodesic distance in kilometers.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_kilometers(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_kilometers(self) -> f64 {
        self.0
    }

    pub fn from_meters(meters: f64) -> Self {
        Self(meters / 1_000.0)
    }

    pub fn to_meters(self) -> f64 {
        self.0 * 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}
