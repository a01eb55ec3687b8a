//! Color space conversion.

/// Converts HSV to linear RGB components in `0.0..=1.0`.
///
/// `hue` is in degrees and wraps into `[0, 360)`; `saturation` and `value`
/// are clamped to `0.0..=1.0`. Zero saturation yields grey at `value`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let h = (hue / 60.0).rem_euclid(6.0);
    // rem_euclid can round tiny negative hues up to exactly 6.0.
    let h = if h >= 6.0 { 0.0 } else { h };
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);

    if s == 0.0 {
        return [v, v, v];
    }

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u8 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
