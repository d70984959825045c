//! Angle conventions and numeric display helpers
//!
//! Angles are shown to students either signed, in (-180, 180], or unsigned,
//! in [0, 360). Any value closer to zero than [`ZERO_THRESHOLD`] is treated as
//! exactly zero so floating point noise never reaches the display.

/// Magnitudes below this are treated as zero
pub const ZERO_THRESHOLD: f64 = 1e-10;

/// Convert a signed angle in degrees to the unsigned convention
///
/// `v >= 0` maps to `v`, `v < 0` maps to `v + 360`. Values within
/// [`ZERO_THRESHOLD`] of zero map to zero.
pub fn signed_to_unsigned_degrees(degrees: f64) -> f64 {
    let degrees = snap_to_zero(degrees);
    debug_assert!(
        (-180.0..=180.0).contains(&degrees),
        "signed angle out of range: {degrees}"
    );
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Convert an unsigned angle in degrees to the signed convention
///
/// `v <= 180` maps to `v`, `v > 180` maps to `v - 360`. Zero stays zero.
pub fn unsigned_to_signed_degrees(degrees: f64) -> f64 {
    debug_assert!(
        (0.0..=360.0).contains(&degrees),
        "unsigned angle out of range: {degrees}"
    );
    if degrees > 180.0 {
        degrees - 360.0
    } else {
        degrees
    }
}

/// Collapse values within [`ZERO_THRESHOLD`] of zero to exactly zero
///
/// Negative zero is also normalized to positive zero.
pub fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < ZERO_THRESHOLD {
        0.0
    } else {
        value
    }
}

/// Round `value` to the nearest multiple of `interval`
pub fn round_to_interval(value: f64, interval: f64) -> f64 {
    debug_assert!(interval > 0.0, "interval must be positive");
    snap_to_zero((value / interval).round() * interval)
}

/// Round to a fixed number of decimal places, for display
pub fn to_fixed(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    snap_to_zero((value * factor).round() / factor)
}

/// Signed angle of `(x, y)` in degrees, or `None` for a zero vector
pub fn signed_angle_degrees(x: f64, y: f64) -> Option<f64> {
    let x = snap_to_zero(x);
    let y = snap_to_zero(y);
    if x == 0.0 && y == 0.0 {
        return None;
    }
    Some(snap_to_zero(y.atan2(x).to_degrees()))
}
