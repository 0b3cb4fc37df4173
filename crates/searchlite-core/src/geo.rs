//! Geo value types used by the proximity search parameters.
//!
//! Both types are plain immutable values with structural equality. They
//! only exist as typed views into the comma-separated coordinate strings
//! the service understands; they carry no storage of their own.

use crate::codec::{decode_float_list, format_float};
use crate::error::ValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A geographic coordinate, degrees latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_float(self.lat), format_float(self.lng))
    }
}

impl FromStr for GeoPoint {
    type Err = ValueError;

    /// Parse the `"<lat>,<lng>"` wire form: exactly two finite fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match decode_float_list(s).as_deref() {
            Some([lat, lng]) => Ok(GeoPoint::new(*lat, *lng)),
            _ => Err(ValueError::invalid_geo_point(s)),
        }
    }
}

/// A geographic rectangle, two corner points.
///
/// Which corner is which is caller convention; nothing here requires `p1`
/// to be northwest of `p2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRect {
    pub p1: GeoPoint,
    pub p2: GeoPoint,
}

impl GeoRect {
    pub fn new(p1: GeoPoint, p2: GeoPoint) -> Self {
        Self { p1, p2 }
    }
}

impl fmt::Display for GeoRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.p1, self.p2)
    }
}

impl FromStr for GeoRect {
    type Err = ValueError;

    /// Parse the flat `"<lat1>,<lng1>,<lat2>,<lng2>"` wire form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match decode_float_list(s).as_deref() {
            Some([lat1, lng1, lat2, lng2]) => Ok(GeoRect::new(
                GeoPoint::new(*lat1, *lng1),
                GeoPoint::new(*lat2, *lng2),
            )),
            _ => Err(ValueError::invalid_geo_rect(s)),
        }
    }
}
