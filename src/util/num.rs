/// Converts an `f64` to `i32` if the value is finite, integral and within
/// range.
///
/// ## Example
/// ```
/// use complexa::util::num::f64_to_i32_checked;
///
/// assert_eq!(f64_to_i32_checked(-12.0), Some(-12));
/// assert_eq!(f64_to_i32_checked(1.5), None);
/// assert_eq!(f64_to_i32_checked(1e10), None);
/// assert_eq!(f64_to_i32_checked(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i32_checked(value: f64) -> Option<i32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}

/// Converts an `f64` to `u32` if the value is finite, non-negative, integral
/// and within range.
///
/// ## Example
/// ```
/// use complexa::util::num::f64_to_u32_checked;
///
/// assert_eq!(f64_to_u32_checked(7.0), Some(7));
/// assert_eq!(f64_to_u32_checked(-1.0), None);
/// assert_eq!(f64_to_u32_checked(2.25), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_u32_checked(value: f64) -> Option<u32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}
