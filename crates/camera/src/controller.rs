use foundation::math::{Vec3, ViewPoint};

use crate::pose::{CameraPose, pose_for_view};

/// The orbit/zoom rig contract the choreographer and visibility pipeline
/// depend on.
///
/// The rendering engine owns the real rig; this subsystem only ever talks to
/// the trait, so scripted motion and the filter can be exercised without a
/// renderer. The choreographer is the sole writer outside direct user input;
/// visibility code only reads [`ViewportController::view_point`].
pub trait ViewportController {
    fn pose(&self) -> CameraPose;
    fn set_pose(&mut self, pose: CameraPose);

    fn view_point(&self) -> ViewPoint;

    fn input_enabled(&self) -> bool;
    fn set_input_enabled(&mut self, enabled: bool);

    fn autorotate(&self) -> bool;
    fn set_autorotate(&mut self, on: bool);
    fn autorotate_speed(&self) -> f64;
    fn set_autorotate_speed(&mut self, speed: f64);

    /// Re-centers the orbit pivot on the globe.
    fn reset_orbit_target(&mut self);
}

/// Ambient rotation rate per unit of autorotate speed, in radians/second.
///
/// Matches the classic orbit-controls convention where speed 2.0 is one
/// revolution every 30 seconds.
pub const AUTOROTATE_RAD_PER_UNIT_SEC: f64 = std::f64::consts::PI / 30.0;

/// In-memory orbit rig.
///
/// Stands in for the engine's controller in the headless viewer and in
/// tests: same observable contract, no rendering.
#[derive(Debug, Clone)]
pub struct OrbitRig {
    pose: CameraPose,
    input_enabled: bool,
    autorotate: bool,
    autorotate_speed: f64,
    orbit_target: Vec3,
}

impl OrbitRig {
    /// Rig at the entrance viewpoint over the prime meridian.
    pub fn new() -> Self {
        Self::with_view(ViewPoint::new(0.0, 0.0, 1.7))
    }

    pub fn with_view(view: ViewPoint) -> Self {
        Self {
            pose: pose_for_view(view),
            input_enabled: true,
            autorotate: false,
            autorotate_speed: 0.0,
            orbit_target: Vec3::zero(),
        }
    }

    pub fn orbit_target(&self) -> Vec3 {
        self.orbit_target
    }

    /// Advances ambient autorotation by `dt_ms`.
    ///
    /// Returns whether the pose changed, so the host can emit a
    /// viewport-change notification.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if !self.autorotate || self.autorotate_speed == 0.0 {
            return false;
        }
        let angle = self.autorotate_speed * AUTOROTATE_RAD_PER_UNIT_SEC * dt_ms / 1000.0;
        self.pose.position = self.pose.position.rotate_about_y(angle);
        true
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController for OrbitRig {
    fn pose(&self) -> CameraPose {
        self.pose
    }

    fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
    }

    fn view_point(&self) -> ViewPoint {
        self.pose.view_point()
    }

    fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn autorotate(&self) -> bool {
        self.autorotate
    }

    fn set_autorotate(&mut self, on: bool) {
        self.autorotate = on;
    }

    fn autorotate_speed(&self) -> f64 {
        self.autorotate_speed
    }

    fn set_autorotate_speed(&mut self, speed: f64) {
        self.autorotate_speed = speed;
    }

    fn reset_orbit_target(&mut self) {
        self.orbit_target = Vec3::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::{OrbitRig, ViewportController};
    use foundation::math::ViewPoint;

    #[test]
    fn rig_starts_at_entrance_view() {
        let rig = OrbitRig::new();
        let view = rig.view_point();
        assert!((view.altitude - 1.7).abs() < 1e-9);
        assert!(rig.input_enabled());
        assert!(!rig.autorotate());
    }

    #[test]
    fn advance_is_inert_without_autorotate() {
        let mut rig = OrbitRig::new();
        let before = rig.pose();
        assert!(!rig.advance(16.0));
        assert_eq!(rig.pose(), before);
    }

    #[test]
    fn advance_orbits_at_constant_altitude() {
        let mut rig = OrbitRig::with_view(ViewPoint::new(0.0, 0.0, 1.5));
        rig.set_autorotate(true);
        rig.set_autorotate_speed(2.0);

        // Speed 2.0 is a revolution per 30 s; 7.5 s is a quarter turn.
        assert!(rig.advance(7_500.0));
        let view = rig.view_point();
        assert!((view.altitude - 1.5).abs() < 1e-9);
        assert!((view.lng_deg.abs() - 90.0).abs() < 1e-9);
    }
}
