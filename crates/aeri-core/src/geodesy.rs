//! Great-circle navigation on a spherical Earth.
//!
//! Latitude and longitude are in degrees, bearings in degrees true
//! (0 = North, clockwise), distances in nautical miles.

use crate::constants::EARTH_RADIUS_NM;
use crate::types::LatLon;

/// Initial great-circle bearing from `from` to `to`, in [0, 360).
///
/// Identical points have no defined course; the formula degenerates to
/// `atan2(0, 0)` and this returns 0.
pub fn bearing(from: LatLon, to: LatLon) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    normalize_bearing(x.atan2(y).to_degrees())
}

/// Move `from` along a great circle by `distance_nm` on `bearing_deg`.
pub fn project(from: LatLon, bearing_deg: f64, distance_nm: f64) -> LatLon {
    if distance_nm == 0.0 {
        return from;
    }

    let lat1 = from.lat.to_radians();
    let lon1 = from.lon.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_nm / EARTH_RADIUS_NM;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 =
        lon1 + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    LatLon::new(lat2.to_degrees(), normalize_longitude(lon2.to_degrees()))
}

/// Great-circle distance in nautical miles (haversine).
pub fn distance_nm(from: LatLon, to: LatLon) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_NM * c
}

/// Fold any bearing into [0, 360).
pub fn normalize_bearing(deg: f64) -> f64 {
    let b = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if b >= 360.0 {
        0.0
    } else {
        b
    }
}

fn normalize_longitude(deg: f64) -> f64 {
    (deg + 540.0).rem_euclid(360.0) - 180.0
}
