use foundation::math::{Spherical, Vec3, ViewPoint};
use foundation::time::TimeMs;

use crate::controller::ViewportController;
use crate::easing::{quad_in_out, ramp_up_down};
use crate::geolocation::GeoFix;
use crate::pose::{CameraPose, HOME_ORBIT_RADIUS, pose_for_view};
use crate::transition::PoseTransition;

/// Autorotate speed during the entrance spin.
pub const FAST_SPIN_SPEED: f64 = 120.0;
/// Ambient autorotate speed whenever no scripted animation is active.
pub const CRUISE_SPIN_SPEED: f64 = 0.35;
/// How long the entrance spins fast before settling to cruise.
pub const ENTRANCE_FAST_MS: f64 = 1000.0;

pub const ERROR_FLIGHT_MS: f64 = 2500.0;
/// Extra camera radius gained over the full failure flight.
pub const ERROR_MAX_EXTRA_RADIUS: f64 = 800.0;
/// Total azimuthal drift of the failure flight (radians).
pub const ERROR_TOTAL_SPIN_RAD: f64 = 0.5;
/// Final yaw away from the globe; this is what breaks look-at-center.
pub const ERROR_TURN_AWAY_RAD: f64 = std::f64::consts::FRAC_PI_2;

pub const RETURN_FLIGHT_MS: f64 = 2000.0;

pub const FOCUS_FLIGHT_MS: f64 = 1500.0;
/// Comfortable viewing altitude for "center on me".
pub const FOCUS_ALTITUDE: f64 = 1.5;

/// Animation phase. At most one non-`Idle` phase exists at a time.
///
/// `Stranded` is the terminal sub-state of the failure sequence: nothing is
/// stepping, but input stays disabled and only [`Command::ReturnToEarth`]
/// leaves it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    EntranceSpin,
    ErrorFlight,
    Stranded,
    ReturnFlight,
    LocationFocus,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    CenterOnMe,
    ToggleSpin,
    FlyAway,
    ReturnToEarth,
}

/// Controller writes requested by one frame step.
///
/// [`step`](Choreographer::step) computes this without touching the
/// controller; [`apply`] performs the writes. The split keeps every phase's
/// per-frame math unit-testable without a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepOutput {
    pub pose: Option<CameraPose>,
    pub input_enabled: Option<bool>,
    pub autorotate: Option<bool>,
    pub autorotate_speed: Option<f64>,
    pub reset_orbit_target: bool,
    pub next_phase: Option<Phase>,
}

pub fn apply(out: &StepOutput, ctl: &mut dyn ViewportController) {
    if let Some(pose) = out.pose {
        ctl.set_pose(pose);
    }
    if let Some(enabled) = out.input_enabled {
        ctl.set_input_enabled(enabled);
    }
    if let Some(on) = out.autorotate {
        ctl.set_autorotate(on);
    }
    if let Some(speed) = out.autorotate_speed {
        ctl.set_autorotate_speed(speed);
    }
    if out.reset_orbit_target {
        ctl.reset_orbit_target();
    }
}

/// Per-phase script data captured at dispatch time.
#[derive(Debug, Clone, PartialEq)]
enum Script {
    Hold,
    ErrorFlight { start: Spherical },
    Glide(PoseTransition),
}

/// Finite-state machine owning all scripted camera motion.
///
/// The only component allowed to mutate camera/controller state outside
/// direct user input. Commands take effect at phase transitions only; a
/// flight in progress completes its current frame step atomically and is
/// never interrupted mid-step.
#[derive(Debug)]
pub struct Choreographer {
    phase: Phase,
    started_at: TimeMs,
    script: Script,
    stranded_notice: bool,
}

impl Choreographer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            started_at: TimeMs::zero(),
            script: Script::Hold,
            stranded_notice: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the "nothing found" indicator should be showing.
    pub fn stranded_notice(&self) -> bool {
        self.stranded_notice
    }

    /// Whether an animation is actively stepping.
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle | Phase::Stranded)
    }

    /// Kicks off the entrance spin. Call once, on mount.
    pub fn start_entrance(&mut self, now: TimeMs, ctl: &mut dyn ViewportController) {
        if self.phase != Phase::Idle {
            return;
        }
        ctl.set_autorotate(true);
        ctl.set_autorotate_speed(FAST_SPIN_SPEED);
        self.enter(Phase::EntranceSpin, Script::Hold, now);
    }

    /// Routes a command into the state machine.
    ///
    /// Returns whether the command was accepted. Rejected commands are
    /// dropped, never queued: mid-flight dispatches lose to the busy guard,
    /// `Stranded` admits only the return command, and toggling the ambient
    /// spin works only when truly idle.
    pub fn dispatch(
        &mut self,
        cmd: Command,
        now: TimeMs,
        fix: Option<GeoFix>,
        ctl: &mut dyn ViewportController,
    ) -> bool {
        match (self.phase, cmd) {
            (Phase::Idle, Command::FlyAway) => {
                self.begin_fly_away(now, ctl);
                true
            }
            (Phase::Idle, Command::ReturnToEarth) | (Phase::Stranded, Command::ReturnToEarth) => {
                self.begin_return(now, ctl);
                true
            }
            (Phase::Idle, Command::CenterOnMe) => match fix {
                Some(fix) => {
                    self.begin_focus(fix, now, ctl);
                    true
                }
                // No fix cached yet: a normal, silent no-op.
                None => false,
            },
            (Phase::Idle, Command::ToggleSpin) => {
                let on = !ctl.autorotate();
                ctl.set_autorotate(on);
                if on {
                    ctl.set_autorotate_speed(CRUISE_SPIN_SPEED);
                }
                true
            }
            _ => false,
        }
    }

    /// Advances the active animation by one frame.
    ///
    /// Output is computed purely from elapsed wall-clock time, applied to
    /// the controller, and returned so the host loop can emit change
    /// notifications.
    pub fn step_frame(&mut self, now: TimeMs, ctl: &mut dyn ViewportController) -> StepOutput {
        let out = self.step(now.elapsed_since(self.started_at));
        apply(&out, ctl);
        if let Some(next) = out.next_phase {
            self.phase = next;
            self.script = Script::Hold;
            if next == Phase::Stranded {
                self.stranded_notice = true;
            }
        }
        out
    }

    /// Pure per-frame step: `(state, elapsed) -> requested writes`.
    pub fn step(&self, elapsed_ms: f64) -> StepOutput {
        match (self.phase, &self.script) {
            (Phase::EntranceSpin, _) => {
                if elapsed_ms < ENTRANCE_FAST_MS {
                    return StepOutput::default();
                }
                StepOutput {
                    autorotate_speed: Some(CRUISE_SPIN_SPEED),
                    next_phase: Some(Phase::Idle),
                    ..StepOutput::default()
                }
            }
            (Phase::ErrorFlight, Script::ErrorFlight { start }) => {
                let p = (elapsed_ms / ERROR_FLIGHT_MS).min(1.0);
                let eased = ramp_up_down(p);

                let mut spherical = *start;
                spherical.radius += p * ERROR_MAX_EXTRA_RADIUS;
                spherical.azimuth_rad -= eased * ERROR_TOTAL_SPIN_RAD;

                let pose = CameraPose::new(
                    spherical.to_vec(),
                    Vec3::zero(),
                    eased * ERROR_TURN_AWAY_RAD,
                );

                let done = p >= 1.0;
                StepOutput {
                    pose: Some(pose),
                    // Input stays locked out through the stranded hold.
                    input_enabled: if done { Some(false) } else { None },
                    autorotate: if done { Some(false) } else { None },
                    next_phase: done.then_some(Phase::Stranded),
                    ..StepOutput::default()
                }
            }
            (Phase::ReturnFlight, Script::Glide(transition)) => {
                let pose = transition.sample(elapsed_ms);
                if transition.is_complete(elapsed_ms) {
                    StepOutput {
                        pose: Some(pose),
                        input_enabled: Some(true),
                        autorotate: Some(true),
                        autorotate_speed: Some(CRUISE_SPIN_SPEED),
                        reset_orbit_target: true,
                        next_phase: Some(Phase::Idle),
                    }
                } else {
                    StepOutput {
                        pose: Some(pose),
                        ..StepOutput::default()
                    }
                }
            }
            (Phase::LocationFocus, Script::Glide(transition)) => {
                let pose = transition.sample(elapsed_ms);
                if transition.is_complete(elapsed_ms) {
                    StepOutput {
                        pose: Some(pose),
                        autorotate: Some(true),
                        autorotate_speed: Some(CRUISE_SPIN_SPEED),
                        next_phase: Some(Phase::Idle),
                        ..StepOutput::default()
                    }
                } else {
                    StepOutput {
                        pose: Some(pose),
                        ..StepOutput::default()
                    }
                }
            }
            _ => StepOutput::default(),
        }
    }

    fn enter(&mut self, phase: Phase, script: Script, now: TimeMs) {
        self.phase = phase;
        self.script = script;
        self.started_at = now;
    }

    fn begin_fly_away(&mut self, now: TimeMs, ctl: &mut dyn ViewportController) {
        ctl.set_input_enabled(false);
        ctl.set_autorotate(false);
        let start = Spherical::from_vec(ctl.pose().position);
        self.enter(Phase::ErrorFlight, Script::ErrorFlight { start }, now);
    }

    fn begin_return(&mut self, now: TimeMs, ctl: &mut dyn ViewportController) {
        ctl.set_input_enabled(false);
        ctl.set_autorotate(false);
        self.stranded_notice = false;

        let pose = ctl.pose();
        // Extrapolate the current look point one unit ahead so the aim can
        // be steered back to center along a straight path.
        let start = CameraPose::new(pose.position, pose.position + pose.forward(), 0.0);

        let mut home = Spherical::from_vec(pose.position);
        home.radius = HOME_ORBIT_RADIUS;
        let end = CameraPose::aimed_at_center(home.to_vec());

        self.enter(
            Phase::ReturnFlight,
            Script::Glide(PoseTransition::new(start, end, RETURN_FLIGHT_MS, quad_in_out)),
            now,
        );
    }

    fn begin_focus(&mut self, fix: GeoFix, now: TimeMs, ctl: &mut dyn ViewportController) {
        ctl.set_autorotate(false);
        ctl.reset_orbit_target();

        let start = ctl.pose();
        let end = pose_for_view(ViewPoint::new(fix.lat_deg, fix.lng_deg, FOCUS_ALTITUDE));

        self.enter(
            Phase::LocationFocus,
            Script::Glide(PoseTransition::new(start, end, FOCUS_FLIGHT_MS, quad_in_out)),
            now,
        );
    }
}

impl Default for Choreographer {
    fn default() -> Self {
        Self::new()
    }
}
