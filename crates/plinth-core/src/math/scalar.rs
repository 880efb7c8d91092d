// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Scalar Helpers
//!
//! Linear interpolation, clamping, inclusive range tests, and
//! floating-point classification probes expressed through ordinary
//! comparisons rather than platform intrinsics. NaN propagation from
//! non-finite `lerp` endpoints and `false` from an inverted `is_between`
//! range are values, not errors; only `clamp`'s bound ordering is a
//! contract.

use crate::plinth_assert;
use num_traits::Float;

/// Returns `true` if `value` is NaN, using the defining property that NaN
/// is the only value unequal to itself.
///
/// Agrees with standard IEEE-754 classification for every special value.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::math::scalar::is_nan;
/// assert!(is_nan(f64::NAN));
/// assert!(!is_nan(f64::INFINITY));
/// assert!(!is_nan(0.0_f64));
/// ```
#[inline]
#[allow(clippy::eq_op)]
pub fn is_nan<T>(value: T) -> bool
where
    T: Float,
{
    value != value
}

/// Returns `true` if `value` is neither NaN nor an infinity.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::math::scalar::is_finite;
/// assert!(is_finite(1.0_f32));
/// assert!(!is_finite(f32::NAN));
/// assert!(!is_finite(f32::NEG_INFINITY));
/// ```
#[inline]
pub fn is_finite<T>(value: T) -> bool
where
    T: Float,
{
    !is_nan(value) && value != T::infinity() && value != T::neg_infinity()
}

/// Linearly interpolates between `a` and `b`: `a + (b - a) * t`.
///
/// Interpolating from or to a non-finite endpoint is meaningless, so the
/// result is NaN whenever `a` or `b` is NaN or infinite, for every `t`
/// (including `0` and `1`). An infinite `t` over a finite range is
/// well-defined and yields the infinity matching `t`'s sign. `t` outside
/// `[0, 1]` extrapolates.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::math::scalar::lerp;
/// assert_eq!(lerp(500.0, 1000.0, 0.5), 750.0);
/// assert!(lerp(0.0, f64::INFINITY, 0.0).is_nan());
/// ```
#[inline]
pub fn lerp<T>(a: T, b: T, t: T) -> T
where
    T: Float,
{
    if is_finite(a) && is_finite(b) {
        a + (b - a) * t
    } else {
        T::nan()
    }
}

/// Restricts `value` to the inclusive range `[min, max]`.
///
/// # Panics / Aborts
///
/// `min > max` is a contract violation; the outcome follows the active
/// violation policy.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::math::scalar::clamp;
/// assert_eq!(clamp(-1, 0, 10), 0);
/// assert_eq!(clamp(5, 0, 10), 5);
/// assert_eq!(clamp(11, 0, 10), 10);
/// ```
#[inline]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd,
{
    plinth_assert!(min <= max);
    if value < max {
        if value > min {
            value
        } else {
            min
        }
    } else {
        max
    }
}

/// Returns `true` if `value` lies in the inclusive range `[min, max]`.
///
/// `min` may be greater than `max`, in which case no value is between
/// them and the result is `false`; inverted bounds are not an error.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::math::scalar::is_between;
/// assert!(is_between(0, 0, 1));
/// assert!(!is_between(2, 0, 1));
/// assert!(!is_between(1, 1, 0));
/// ```
#[inline]
pub fn is_between<T>(value: T, min: T, max: T) -> bool
where
    T: PartialOrd,
{
    min <= value && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_inside() {
        assert_eq!(lerp(500.0_f32, 1000.0, 0.25), 625.0);
        assert_eq!(lerp(500.0_f32, 1000.0, 0.75), 875.0);
        assert_eq!(lerp(500.0_f64, 1000.0, 0.5), 750.0);
    }

    #[test]
    fn test_lerp_edges() {
        let a = 500.0_f32;
        let b = 1000.0_f32;
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_lerp_outside_extrapolates() {
        assert_eq!(lerp(500.0_f32, 1000.0, -1.0), 0.0);
        assert_eq!(lerp(500.0_f32, 1000.0, 1.5), 1250.0);
    }

    #[test]
    fn test_lerp_nan_endpoints() {
        let nan = f32::NAN;
        assert!(lerp(nan, 1.0, 0.5).is_nan());
        assert!(lerp(1.0, nan, 0.5).is_nan());
        assert!(lerp(1.0, 1.0, nan).is_nan());
    }

    #[test]
    fn test_lerp_infinite_t_over_finite_range() {
        let inf = f32::INFINITY;
        assert_eq!(lerp(0.0, 1.0, inf), inf);
        assert_eq!(lerp(0.0, 1.0, -inf), -inf);
    }

    #[test]
    fn test_lerp_infinite_endpoints_are_nan() {
        let inf = f32::INFINITY;
        assert!(lerp(0.0, inf, 1.0).is_nan());
        assert!(lerp(0.0, inf, -1.0).is_nan());
        assert!(lerp(1.0, inf, 0.0).is_nan());
        assert!(lerp(-inf, 0.0, 0.0).is_nan());
        assert!(lerp(-inf, 0.0, 1.0).is_nan());
        assert!(lerp(inf, inf, inf).is_nan());
        assert!(lerp(-inf, inf, 0.0).is_nan());
        assert!(lerp(-inf, inf, 1.0).is_nan());
    }

    #[test]
    fn test_clamp_in_range_and_at_bounds() {
        assert_eq!(clamp(0.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0, 0, 1), 0);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(-1, 0, 1), 0);
        assert_eq!(clamp(2, 0, 1), 1);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_clamp_infinite_values_and_bounds() {
        assert_eq!(clamp(f32::NEG_INFINITY, 0.0, 1.0), 0.0);
        assert_eq!(clamp(f32::INFINITY, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-1000.0, f32::NEG_INFINITY, 0.0), -1000.0);
        assert_eq!(clamp(-1000.0, 0.0, f32::INFINITY), 0.0);
    }

    #[test]
    fn test_is_between() {
        assert!(is_between(0.0_f32, 0.0, 1.0));
        assert!(is_between(0, 0, 1));
        assert!(is_between(1, 0, 1));
        assert!(!is_between(1, 1, 0));
        assert!(!is_between(2, 0, 1));
    }

    #[test]
    fn test_is_nan_classification() {
        assert!(is_nan(f32::NAN));
        assert!(is_nan(f64::NAN));
        assert!(!is_nan(0.0_f32));
        assert!(!is_nan(0.0_f64));
        assert!(!is_nan(1.0_f32));
        assert!(!is_nan(-1.0_f64));
        assert!(!is_nan(f32::INFINITY));
        assert!(!is_nan(f32::NEG_INFINITY));
        assert!(!is_nan(f64::INFINITY));
        assert!(!is_nan(f64::NEG_INFINITY));
        assert!(!is_nan(f64::MIN_POSITIVE / 2.0)); // subnormal
    }

    #[test]
    fn test_is_finite_classification() {
        assert!(is_finite(0.0_f32));
        assert!(is_finite(0.0_f64));
        assert!(is_finite(1.0_f32));
        assert!(is_finite(-1.0_f64));
        assert!(is_finite(f64::MIN_POSITIVE / 2.0)); // subnormal
        assert!(!is_finite(f32::NAN));
        assert!(!is_finite(f64::NAN));
        assert!(!is_finite(f32::INFINITY));
        assert!(!is_finite(f32::NEG_INFINITY));
        assert!(!is_finite(f64::INFINITY));
        assert!(!is_finite(f64::NEG_INFINITY));
    }

    #[test]
    fn test_probes_agree_with_std_classification() {
        let samples = [
            0.0_f64,
            -0.0,
            1.0,
            -1.0,
            f64::MIN_POSITIVE,
            f64::MIN_POSITIVE / 4.0,
            f64::MAX,
            f64::MIN,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
        ];
        for v in samples {
            assert_eq!(is_nan(v), v.is_nan(), "is_nan disagrees for {v}");
            assert_eq!(is_finite(v), v.is_finite(), "is_finite disagrees for {v}");
        }
    }
}
