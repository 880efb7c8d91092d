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

//! # Rounding-Mode Division
//!
//! Integer division and remainder parameterized by an explicit rounding
//! convention. Native `/` and `%` truncate toward zero, which is rarely
//! what index arithmetic or tiling code wants for negative operands; the
//! functions here make the convention a visible part of the call site.
//!
//! For every mode and every `d != 0` the reconstruction identity
//! `n == d * div(n, d, mode) + rem(n, d, mode)` holds, and
//! [`div_rem`] always agrees with [`div`] and [`rem`] computed separately.
//!
//! Division by zero is a contract violation handled by the active
//! violation policy (see the `contract` module).

use crate::plinth_assert;
use num_traits::PrimInt;

/// The convention used to resolve the signs of an integer quotient and
/// remainder.
///
/// For unsigned operands all three modes coincide with [`Trunc`], since
/// the adjustments only trigger on negative remainders.
///
/// [`Trunc`]: DivRoundMode::Trunc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivRoundMode {
    /// Quotient rounds toward zero; the remainder takes the dividend's
    /// sign. This is the native behavior of `/` and `%`.
    Trunc,
    /// Quotient rounds toward negative infinity; the remainder takes the
    /// divisor's sign.
    Floor,
    /// Quotient is chosen so the remainder is always non-negative:
    /// `0 <= r < |d|`.
    Euclid,
}

/// Divides `n` by `d`, rounding the quotient according to `mode`.
///
/// # Panics / Aborts
///
/// `d == 0` is a contract violation; the outcome follows the active
/// violation policy.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div_rem::{div, DivRoundMode};
/// assert_eq!(div(-43, 10, DivRoundMode::Trunc), -4);
/// assert_eq!(div(-43, 10, DivRoundMode::Floor), -5);
/// assert_eq!(div(-43, 10, DivRoundMode::Euclid), -5);
/// ```
#[inline]
pub fn div<T>(n: T, d: T, mode: DivRoundMode) -> T
where
    T: PrimInt,
{
    plinth_assert!(d != T::zero());
    let quotient = n / d;
    match mode {
        DivRoundMode::Trunc => quotient,
        DivRoundMode::Floor => {
            let remainder = n % d;
            if remainder != T::zero() && (remainder < T::zero()) != (d < T::zero()) {
                quotient - T::one()
            } else {
                quotient
            }
        }
        DivRoundMode::Euclid => {
            let remainder = n % d;
            if remainder < T::zero() {
                if d > T::zero() {
                    quotient - T::one()
                } else {
                    quotient + T::one()
                }
            } else {
                quotient
            }
        }
    }
}

/// Computes the remainder of `n` divided by `d` under `mode`.
///
/// Named `rem` rather than `mod` because `mod` is a Rust keyword.
///
/// # Panics / Aborts
///
/// `d == 0` is a contract violation; the outcome follows the active
/// violation policy.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div_rem::{rem, DivRoundMode};
/// assert_eq!(rem(-43, 10, DivRoundMode::Trunc), -3);
/// assert_eq!(rem(-43, 10, DivRoundMode::Floor), 7);
/// assert_eq!(rem(-43, 10, DivRoundMode::Euclid), 7);
/// ```
#[inline]
pub fn rem<T>(n: T, d: T, mode: DivRoundMode) -> T
where
    T: PrimInt,
{
    plinth_assert!(d != T::zero());
    let remainder = n % d;
    match mode {
        DivRoundMode::Trunc => remainder,
        DivRoundMode::Floor => {
            if remainder != T::zero() && (remainder < T::zero()) != (d < T::zero()) {
                remainder + d
            } else {
                remainder
            }
        }
        DivRoundMode::Euclid => {
            if remainder < T::zero() {
                if d > T::zero() {
                    remainder + d
                } else {
                    remainder - d
                }
            } else {
                remainder
            }
        }
    }
}

/// Computes quotient and remainder together under `mode`.
///
/// The pair always agrees with [`div`] and [`rem`] evaluated separately on
/// the same inputs; this pairing is a required invariant, not an
/// optimization artifact.
///
/// # Panics / Aborts
///
/// `d == 0` is a contract violation; the outcome follows the active
/// violation policy.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div_rem::{div_rem, DivRoundMode};
/// assert_eq!(div_rem(-43, 10, DivRoundMode::Floor), (-5, 7));
/// assert_eq!(div_rem(43, -10, DivRoundMode::Euclid), (-4, 3));
/// ```
#[inline]
pub fn div_rem<T>(n: T, d: T, mode: DivRoundMode) -> (T, T)
where
    T: PrimInt,
{
    (div(n, d, mode), rem(n, d, mode))
}
