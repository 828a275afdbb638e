use crate::pose::CameraPose;

/// A timed interpolation between two camera poses.
///
/// This is the one motion primitive every scripted flight shares: fixed
/// duration, an easing function, and linear interpolation of position, aim
/// point, and yaw under the eased weight. Sampling is a pure function of
/// elapsed time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PoseTransition {
    pub start: CameraPose,
    pub end: CameraPose,
    pub duration_ms: f64,
    pub easing: fn(f64) -> f64,
}

impl PoseTransition {
    pub fn new(start: CameraPose, end: CameraPose, duration_ms: f64, easing: fn(f64) -> f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
            easing,
        }
    }

    /// Raw progress in `[0, 1]`. A non-positive duration snaps to the end.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    pub fn sample(&self, elapsed_ms: f64) -> CameraPose {
        let t = (self.easing)(self.progress(elapsed_ms));
        CameraPose::new(
            self.start.position.lerp(self.end.position, t),
            self.start.look_at.lerp(self.end.look_at, t),
            self.start.yaw_rad + (self.end.yaw_rad - self.start.yaw_rad) * t,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PoseTransition;
    use crate::easing::{linear, quad_in_out};
    use crate::pose::CameraPose;
    use foundation::math::Vec3;

    fn transition(easing: fn(f64) -> f64) -> PoseTransition {
        PoseTransition::new(
            CameraPose::new(Vec3::new(100.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.0),
            CameraPose::new(Vec3::new(300.0, 40.0, 0.0), Vec3::zero(), 2.0),
            2000.0,
            easing,
        )
    }

    #[test]
    fn sample_hits_both_endpoints() {
        let t = transition(quad_in_out);
        assert_eq!(t.sample(0.0), t.start);
        assert_eq!(t.sample(2000.0), t.end);
        // Overshoot stays pinned at the end pose.
        assert_eq!(t.sample(10_000.0), t.end);
        assert!(t.is_complete(2000.0));
        assert!(!t.is_complete(1999.0));
    }

    #[test]
    fn linear_midpoint_is_halfway() {
        let t = transition(linear);
        let mid = t.sample(1000.0);
        assert_eq!(mid.position, Vec3::new(200.0, 20.0, 0.0));
        assert_eq!(mid.yaw_rad, 1.0);
    }

    #[test]
    fn zero_duration_snaps_to_end() {
        let mut t = transition(linear);
        t.duration_ms = 0.0;
        assert_eq!(t.sample(0.0), t.end);
    }
}
