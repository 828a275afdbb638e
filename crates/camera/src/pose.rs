use foundation::math::{Vec3, ViewPoint, from_cartesian, to_cartesian};

/// Globe radius in scene units. All orbit math is relative to this.
pub const GLOBE_RADIUS: f64 = 100.0;

/// Orbit radius the camera returns to after a scripted flight.
pub const HOME_ORBIT_RADIUS: f64 = 250.0;

/// Camera distance from the globe center for a given altitude proxy
/// (0 = surface).
pub fn radius_for_altitude(altitude: f64) -> f64 {
    GLOBE_RADIUS * (1.0 + altitude)
}

pub fn altitude_for_radius(radius: f64) -> f64 {
    (radius / GLOBE_RADIUS - 1.0).max(0.0)
}

/// Center-aimed pose realizing a viewpoint.
pub fn pose_for_view(view: ViewPoint) -> CameraPose {
    CameraPose::aimed_at_center(to_cartesian(
        view.lat_deg,
        view.lng_deg,
        radius_for_altitude(view.altitude),
    ))
}

/// Camera placement: position, aim point, and a roll-free yaw applied after
/// aiming.
///
/// `yaw_rad` is normally zero; the failure flight uses it to deliberately
/// break look-at-center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    pub yaw_rad: f64,
}

impl CameraPose {
    pub fn new(position: Vec3, look_at: Vec3, yaw_rad: f64) -> Self {
        Self {
            position,
            look_at,
            yaw_rad,
        }
    }

    pub fn aimed_at_center(position: Vec3) -> Self {
        Self::new(position, Vec3::zero(), 0.0)
    }

    /// Effective look direction, with the yaw folded in.
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position)
            .normalize()
            .rotate_about_y(self.yaw_rad)
    }

    /// The viewport this pose reads as: surface point under the camera plus
    /// the altitude proxy.
    pub fn view_point(&self) -> ViewPoint {
        let (lat_deg, lng_deg, radius) = from_cartesian(self.position);
        ViewPoint::new(lat_deg, lng_deg, altitude_for_radius(radius))
    }
}

#[cfg(test)]
mod tests {
    use super::{CameraPose, GLOBE_RADIUS, altitude_for_radius, radius_for_altitude};
    use foundation::math::{Vec3, to_cartesian};

    #[test]
    fn altitude_radius_round_trip() {
        assert_eq!(radius_for_altitude(0.0), GLOBE_RADIUS);
        assert_eq!(radius_for_altitude(1.5), 250.0);
        assert_eq!(altitude_for_radius(250.0), 1.5);
        // Inside the globe clamps to the surface.
        assert_eq!(altitude_for_radius(50.0), 0.0);
    }

    #[test]
    fn view_point_reads_back_position() {
        let pose = CameraPose::aimed_at_center(to_cartesian(40.0, -70.0, 250.0));
        let view = pose.view_point();
        assert!((view.lat_deg - 40.0).abs() < 1e-9);
        assert!((view.lng_deg - -70.0).abs() < 1e-9);
        assert!((view.altitude - 1.5).abs() < 1e-9);
    }

    #[test]
    fn forward_points_at_aim_when_unyawed() {
        let pose = CameraPose::aimed_at_center(Vec3::new(250.0, 0.0, 0.0));
        let f = pose.forward();
        assert!((f.x - -1.0).abs() < 1e-12);
        assert!(f.y.abs() < 1e-12);
        assert!(f.z.abs() < 1e-12);
    }

    #[test]
    fn yaw_swings_forward_off_center() {
        let pose = CameraPose::new(Vec3::new(250.0, 0.0, 0.0), Vec3::zero(), std::f64::consts::FRAC_PI_2);
        let f = pose.forward();
        // A quarter turn about +y takes (-1,0,0) to (0,0,1).
        assert!(f.x.abs() < 1e-12);
        assert!((f.z - 1.0).abs() < 1e-12);
    }
}
