//! Shared arithmetic for the cylindrical conversions

#[inline]
pub(crate) fn threeway_max(a: f64, b: f64, c: f64) -> f64 {
    a.max(b.max(c))
}

#[inline]
pub(crate) fn threeway_min(a: f64, b: f64, c: f64) -> f64 {
    a.min(b.min(c))
}

/// Hue fraction in 0.0..1.0 for a chromatic color.
///
/// `max` must be one of `r`, `g`, `b` and `d = max - min` must be non-zero.
/// When several channels share the maximum, red wins over green and green
/// over blue.
#[inline]
pub(crate) fn hue_fraction(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    sector / 6.0
}

/// Piecewise-linear channel ramp between `p` and `q` used by HSL decoding.
///
/// `t` is wrapped into range by a single step, so it must already lie within
/// one period of 0.0..=1.0.
#[inline]
pub(crate) fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Truncate a channel value already scaled to 0.0..=255.0 into a byte.
///
/// Out-of-range values clamp to the nearest bound and NaN becomes 0.
/// The fractional part is dropped, never rounded.
#[inline]
pub(crate) fn to_channel(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    value.clamp(0.0, 255.0) as u8
}

/// Normalize an 8-bit channel into 0.0..=1.0.
#[inline]
pub(crate) fn unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}
