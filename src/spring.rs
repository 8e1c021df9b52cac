//! Damped-spring easing for alert entrance and exit animation.

use std::f32::consts::TAU;

/// Evaluate a damped-spring easing curve at normalized time `t`.
///
/// Models an under-damped harmonic oscillator released one unit below its
/// target: the result starts at 0.0, overshoots depending on `damping`, and
/// settles at exactly 1.0 once `t` reaches 1.0. `initial_velocity` is the
/// normalized velocity the motion starts with, so large values kick the
/// curve past the target early.
pub fn spring(t: f32, damping: f32, initial_velocity: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let zeta = damping.clamp(0.01, 0.99);
    // One full oscillation across the normalized duration.
    let omega = TAU;
    let omega_d = omega * (1.0 - zeta * zeta).sqrt();

    // Displacement from the target: x(0) = -1, x'(0) = initial_velocity.
    let a = -1.0;
    let b = (initial_velocity + zeta * omega * a) / omega_d;

    let envelope = (-zeta * omega * t).exp();
    let displacement = envelope * (a * (omega_d * t).cos() + b * (omega_d * t).sin());

    1.0 + displacement
}

/// Linear interpolation between `from` and `to` by factor `p`.
///
/// `p` may leave [0, 1] when driven by a spring, which is what produces the
/// overshoot in the animated value.
pub fn lerp(from: f32, to: f32, p: f32) -> f32 {
    from + (to - from) * p
}
