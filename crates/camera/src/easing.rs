//! Easing curves for scripted camera motion.
//!
//! Every function maps progress `p ∈ [0, 1]` to eased progress in `[0, 1]`
//! with exact endpoints; inputs outside the interval are clamped.

pub fn linear(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// Quadratic ease-in-out used by the glide flights.
pub fn quad_in_out(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        2.0 * p * p
    } else {
        -1.0 + (4.0 - 2.0 * p) * p
    }
}

/// The failure-flight ramp: accelerating quadratic over the first 80% of
/// the interval, decelerating quadratic over the last 20%, continuous at
/// the knee and landing at exactly 1.0.
pub fn ramp_up_down(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    if p >= 1.0 {
        return 1.0;
    }
    const KNEE: f64 = 0.8;
    // Raw output reaches 12 at the knee and peaks at 15 when p = 1; both
    // segments share slope 30 at the knee.
    let raw = if p <= KNEE {
        18.75 * p * p
    } else {
        let dt = 2.5 * (p - KNEE);
        12.0 + 12.0 * dt - 12.0 * dt * dt
    };
    (raw / 15.0).min(1.0)
}
