//! Spherical geometry over a y-up globe.
//!
//! Conventions:
//! - Latitude/longitude in degrees at API boundaries, radians internally.
//! - Cartesian: `x = r·cos(lat)·cos(lng)`, `y = r·sin(lat)`,
//!   `z = r·cos(lat)·sin(lng)`.
//! - `Spherical::azimuth_rad` equals longitude in radians and
//!   `polar_rad` is the colatitude, so orbit math and geographic math agree.

use super::Vec3;

/// Camera point of view: where the orbit rig is looking and how far out.
///
/// `altitude` is a unitless distance-above-surface proxy (0 = surface).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewPoint {
    pub lat_deg: f64,
    pub lng_deg: f64,
    pub altitude: f64,
}

impl ViewPoint {
    pub fn new(lat_deg: f64, lng_deg: f64, altitude: f64) -> Self {
        Self {
            lat_deg,
            lng_deg,
            altitude,
        }
    }
}

/// Great-circle central angle between two points, in radians within `[0, π]`.
///
/// Haversine form: stable near the poles and across the antimeridian.
/// Inputs in degrees, assumed range-clamped by ingestion.
pub fn angular_distance(lat1_deg: f64, lng1_deg: f64, lat2_deg: f64, lng2_deg: f64) -> f64 {
    let phi1 = lat1_deg.to_radians();
    let phi2 = lat2_deg.to_radians();
    let d_phi = (lat2_deg - lat1_deg).to_radians();
    let d_lambda = (lng2_deg - lng1_deg).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt())
}

pub fn to_cartesian(lat_deg: f64, lng_deg: f64, radius: f64) -> Vec3 {
    let lat = lat_deg.to_radians();
    let lng = lng_deg.to_radians();
    Vec3::new(
        radius * lat.cos() * lng.cos(),
        radius * lat.sin(),
        radius * lat.cos() * lng.sin(),
    )
}

/// Inverse of [`to_cartesian`]: `(lat_deg, lng_deg, radius)`.
///
/// The origin maps to `(0, 0, 0)`.
pub fn from_cartesian(v: Vec3) -> (f64, f64, f64) {
    let radius = v.length();
    if radius < 1e-10 {
        return (0.0, 0.0, 0.0);
    }
    let lat = (v.y / radius).clamp(-1.0, 1.0).asin();
    let lng = v.z.atan2(v.x);
    (lat.to_degrees(), lng.to_degrees(), radius)
}

/// Orbit-style spherical coordinates of a Cartesian point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    /// Colatitude from the +y pole, in `[0, π]`.
    pub polar_rad: f64,
    /// Angle around the y axis; equals longitude in radians.
    pub azimuth_rad: f64,
}

impl Spherical {
    pub fn from_vec(v: Vec3) -> Self {
        let radius = v.length();
        if radius < 1e-10 {
            return Self {
                radius: 0.0,
                polar_rad: 0.0,
                azimuth_rad: 0.0,
            };
        }
        Self {
            radius,
            polar_rad: (v.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth_rad: v.z.atan2(v.x),
        }
    }

    pub fn to_vec(self) -> Vec3 {
        let sin_polar = self.polar_rad.sin();
        Vec3::new(
            self.radius * sin_polar * self.azimuth_rad.cos(),
            self.radius * self.polar_rad.cos(),
            self.radius * sin_polar * self.azimuth_rad.sin(),
        )
    }
}
