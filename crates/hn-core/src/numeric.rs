use crate::HnError;

/// Floating point type used throughout system
pub type Real = f64;

/// Degrees in a full hue turn.
pub const FULL_TURN_DEG: Real = 360.0;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HnError::NonFinite { what, value: v })
    }
}

/// Wrap an angle in degrees into [0, 360).
///
/// Uses the Euclidean remainder, so negative angles wrap upward.
pub fn wrap_degrees(deg: Real) -> Real {
    let wrapped = deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
}
