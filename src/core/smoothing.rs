//! Step-limited head smoothing.
//!
//! A rate limiter, not a low-pass filter: per-event displacement is bounded
//! by a fixed step, producing capped-velocity easing instead of the long
//! exponential tail a decay filter would give.

/// Move `ghost` toward `target` by at most `max_step`, clamped to
/// `[0, total_length]`.
///
/// Within `max_step` of the target the position snaps exactly onto it, so a
/// settled tracer never oscillates around its goal.
pub fn step_toward(ghost: f64, target: f64, max_step: f64, total_length: f64) -> f64 {
    let next = if (target - ghost).abs() <= max_step {
        target
    } else if target > ghost {
        ghost + max_step
    } else {
        ghost - max_step
    };
    next.clamp(0.0, total_length)
}
