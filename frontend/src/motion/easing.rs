/// Clamps `t` to the unit interval. NaN collapses to 0.
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Decelerating curve used by the showcase shrink: `1 - (1 - t)^3`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = clamp_unit(t);
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Symmetric curve used by the auto-scroll tween.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = clamp_unit(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - (u * u * u) / 2.0
    }
}
