/// Divide, returning `fallback` instead of an infinite or NaN ratio when `den` is zero.
pub fn safe_ratio_n(num: f64, den: f64, fallback: f64) -> f64 {
    if den != 0.0 { num / den } else { fallback }
}

/// [`safe_ratio_n`] with a zero fallback.
pub fn safe_ratio0(num: f64, den: f64) -> f64 {
    safe_ratio_n(num, den, 0.0)
}

/// Linear interpolation, `t = 0` gives `a`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Inverse of [`lerp`]: where `value` sits between `min` and `max`. A degenerate range maps to 0.
pub fn unlerp(min: f64, max: f64, value: f64) -> f64 {
    safe_ratio0(value - min, max - min)
}

/// Map `value` from the source range onto the destination range.
pub fn remap_range(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    lerp(dst_min, dst_max, unlerp(src_min, src_max, value))
}

/// Wrap `value` into `[0, max)`.
pub fn mod_range(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(max);
    // rem_euclid can round up to `max` for tiny negative inputs
    if wrapped >= max { 0.0 } else { wrapped }
}

/// Fractional part, always in `[0, 1)`.
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Map a unit float to a byte with rounding and clamping.
pub(crate) fn unit_to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
