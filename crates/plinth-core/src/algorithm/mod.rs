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

//! # Generic Fill and Fold
//!
//! Counterparts to the `<algorithm>`/`<numeric>` staples this crate's
//! callers reach for most: overwrite a sequence with a value, and fold a
//! transformed sequence strictly left to right. The parameter order puts
//! the transform before the combine (transform happens first,
//! intuitively), and the initial accumulator is defaultable. Rust has no
//! default arguments, so the defaulted form is [`transform_reduce`] and
//! the explicit form is [`transform_reduce_with`].
//!
//! `min2`/`max2` are two-argument, reference-returning order helpers that
//! compose where `std::cmp::min`/`max` demand `Ord` and by-value inputs.

/// Overwrites every element of `dst` with a clone of `value`.
///
/// A no-op on an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::algorithm::fill;
/// let mut buf = [0; 3];
/// fill(&mut buf, 20);
/// assert_eq!(buf, [20, 20, 20]);
/// ```
#[inline]
pub fn fill<'a, T, I>(dst: I, value: T)
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    for slot in dst {
        *slot = value.clone();
    }
}

/// Folds `transform(item)` over `src` with `combine`, starting from the
/// accumulator type's default value.
///
/// Equivalent to [`transform_reduce_with`] with `A::default()` as the
/// initial accumulator.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::algorithm::transform_reduce;
/// let words = ["alpha", "beta", "gamma"];
/// let total: usize = transform_reduce(words, |w| w.len(), |acc, n| acc + n);
/// assert_eq!(total, 14);
/// ```
#[inline]
pub fn transform_reduce<I, F, G, A>(src: I, transform: F, combine: G) -> A
where
    I: IntoIterator,
    F: FnMut(I::Item) -> A,
    G: FnMut(A, A) -> A,
    A: Default,
{
    transform_reduce_with(src, transform, combine, A::default())
}

/// Folds `transform(item)` over `src` with `combine`, starting from
/// `init`.
///
/// Elements are visited in forward iteration order and folded strictly
/// left to right: `acc = combine(acc, transform(item))`. A
/// non-commutative `combine` therefore sees the accumulator on the left
/// every time.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::algorithm::transform_reduce_with;
/// let min_len = transform_reduce_with(
///     ["alpha", "be", "gamma"],
///     |w| w.len(),
///     |acc, n| if n < acc { n } else { acc },
///     usize::MAX,
/// );
/// assert_eq!(min_len, 2);
/// ```
#[inline]
pub fn transform_reduce_with<I, F, G, A, B>(src: I, mut transform: F, mut combine: G, init: A) -> A
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
    G: FnMut(A, B) -> A,
{
    let mut accumulator = init;
    for item in src {
        accumulator = combine(accumulator, transform(item));
    }
    accumulator
}

/// Returns a reference to the lesser of `a` and `b`.
///
/// Returns `a` iff `a < b`, so when neither compares less (including
/// equality) the result is `b`. Requires only `PartialOrd`, so it
/// composes where `std::cmp::min` cannot (e.g. floats).
///
/// # Examples
///
/// ```rust
/// # use plinth_core::algorithm::min2;
/// assert_eq!(*min2(&3, &7), 3);
/// assert_eq!(*min2(&0.5, &0.25), 0.25);
/// ```
#[inline]
pub fn min2<'a, T>(a: &'a T, b: &'a T) -> &'a T
where
    T: PartialOrd,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns a reference to the greater of `a` and `b`.
///
/// Returns `b` iff `a < b`, so when neither compares less (including
/// equality) the result is `a`.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::algorithm::max2;
/// assert_eq!(*max2(&3, &7), 7);
/// assert_eq!(*max2(&0.5, &0.25), 0.5);
/// ```
#[inline]
pub fn max2<'a, T>(a: &'a T, b: &'a T) -> &'a T
where
    T: PartialOrd,
{
    if a < b {
        b
    } else {
        a
    }
}
