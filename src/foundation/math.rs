//! Scale interpolation used to split one progress scalar into sequential phases.

/// Portion of `scale` left over once the first `i` of `n` phases are consumed, floored at zero.
pub fn clamped_scale(scale: f64, i: usize, n: usize) -> f64 {
    (scale - i as f64 / n as f64).max(0.0)
}

/// Progress of phase `i` out of `n`, normalized back to `[0, 1]`.
///
/// As `scale` sweeps `0 -> 1`, phase `i` runs `0 -> 1` while `scale` is in
/// `[i/n, (i+1)/n]`, and holds at `0` before and `1` after.
pub fn phase_scale(scale: f64, i: usize, n: usize) -> f64 {
    let n_f = n as f64;
    clamped_scale(scale, i, n).min(1.0 / n_f) * n_f
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
