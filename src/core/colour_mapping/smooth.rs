use crate::core::fractals::escape_time::EscapeTime;
use std::f64::consts::LN_2;

/// Continuous escape count `n - log2(ln|z| / ln 2)`.
///
/// Falls back to the integer count when the correction term is not finite,
/// which happens when the final magnitude is at most 1 (only reachable with
/// a bail-out below 1).
#[inline]
#[must_use]
pub fn smooth_iteration_count(escape: EscapeTime) -> f64 {
    let n = escape.iterations as f64;
    let correction = (escape.z.ln_magnitude() / LN_2).log2();

    if correction.is_finite() {
        n - correction
    } else {
        n
    }
}
