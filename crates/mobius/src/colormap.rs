//! The `plasma` perceptual colormap.
//!
//! Piecewise-linear interpolation between nine evenly spaced anchor colors
//! of matplotlib's `plasma`, from deep blue at 0 to yellow at 1.

/// Anchor colors at `t = 0, 1/8, ..., 1`, as 8-bit RGB.
const PLASMA_STOPS: [[u8; 3]; 9] = [
    [13, 8, 135],
    [76, 2, 161],
    [126, 3, 168],
    [168, 34, 150],
    [204, 71, 120],
    [230, 108, 92],
    [248, 149, 64],
    [253, 197, 39],
    [240, 249, 33],
];

/// RGB color in `[0, 1]` for a key `t`, clamped to `[0, 1]`. NaN maps to 0.
pub fn plasma(t: f64) -> [f32; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = PLASMA_STOPS.len() - 1;
    let scaled = t * segments as f64;
    let lo = (scaled.floor() as usize).min(segments - 1);
    let frac = (scaled - lo as f64) as f32;

    let a = PLASMA_STOPS[lo];
    let b = PLASMA_STOPS[lo + 1];
    std::array::from_fn(|c| {
        let ca = a[c] as f32 / 255.0;
        let cb = b[c] as f32 / 255.0;
        ca + (cb - ca) * frac
    })
}
