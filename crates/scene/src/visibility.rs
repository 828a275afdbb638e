use foundation::math::{ViewPoint, angular_distance};

use crate::marker::{MarkerId, MarkerStore};

/// Altitude above which the view cone stops tracking zoom and goes
/// near-global.
pub const ZOOM_THRESHOLD: f64 = 1.5;
/// How fast the cone widens as the camera pulls out.
pub const VIEW_ANGLE_FACTOR: f64 = 0.6;
/// Cone half-angle at the surface (radians).
pub const BASE_FOV_RAD: f64 = 0.3;

/// Half-angle of the visibility cone for a given camera altitude, in
/// radians.
///
/// Non-decreasing in altitude up to [`ZOOM_THRESHOLD`], constant above it.
pub fn max_view_angle(altitude: f64) -> f64 {
    if altitude > ZOOM_THRESHOLD {
        return std::f64::consts::PI / 1.5;
    }
    (altitude * VIEW_ANGLE_FACTOR + BASE_FOV_RAD).min(std::f64::consts::FRAC_PI_2)
}

/// Computes the subset of the store within the camera's view cone.
///
/// A marker is retained when its great-circle distance from the view center
/// is strictly below [`max_view_angle`].
///
/// Ordering contract: ids come back in store order (ascending).
///
/// Linear scan per recompute; the
/// scheduler caps recomputes at one per frame and marker counts are bounded
/// by a single result page. Larger catalogs would want a spatial index;
/// the contract stays correct either way.
pub fn compute_visible(store: &MarkerStore, view: ViewPoint) -> Vec<MarkerId> {
    let max_angle = max_view_angle(view.altitude);
    store
        .markers()
        .iter()
        .filter(|m| {
            angular_distance(view.lat_deg, view.lng_deg, m.lat_deg, m.lng_deg) < max_angle
        })
        .map(|m| m.id)
        .collect()
}
