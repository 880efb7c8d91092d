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

//! # Non-owning Reference Wrapper
//!
//! [`Unowned<'a, T>`] holds either nothing or a reference to data someone
//! else owns. It never allocates, copies, or frees the referent; copying
//! the wrapper copies a handle, and dropping it releases nothing. Its one
//! contract is that accessing an empty wrapper is a violation, enforced
//! through the assertion facility in the `contract` module, so the
//! failure mode (abort, ignored, or catchable panic) follows the policy
//! the binary was built with.
//!
//! Presence is tested with [`is_present`](Unowned::is_present) or escaped
//! entirely with [`get`](Unowned::get), the `Option`-returning accessor.
//! Equality compares referent identity, not value. The wrapper is
//! covariant in both `'a` and `T`, so a handle to longer-lived data
//! coerces wherever a shorter-lived one is expected.

use crate::plinth_assert;
use std::fmt;
use std::ops::Deref;

/// A copyable, non-owning handle to externally-owned data.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::utils::unowned::Unowned;
/// let value = 5;
/// let mut handle: Unowned<'_, i32> = Unowned::none();
/// assert!(!handle.is_present());
///
/// handle.set(&value);
/// assert!(handle.is_present());
/// assert_eq!(*handle, 5);
/// ```
pub struct Unowned<'a, T: ?Sized> {
    referent: Option<&'a T>,
}

impl<'a, T: ?Sized> Unowned<'a, T> {
    /// Creates an empty wrapper holding no referent.
    #[inline]
    pub const fn none() -> Self {
        Self { referent: None }
    }

    /// Creates a wrapper referring to `referent`.
    #[inline]
    pub const fn new(referent: &'a T) -> Self {
        Self {
            referent: Some(referent),
        }
    }

    /// Points the wrapper at a new referent. The previous referent, if
    /// any, is unaffected.
    #[inline]
    pub fn set(&mut self, referent: &'a T) {
        self.referent = Some(referent);
    }

    /// Empties the wrapper. The previous referent, if any, is unaffected.
    #[inline]
    pub fn clear(&mut self) {
        self.referent = None;
    }

    /// Returns `true` if a referent is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.referent.is_some()
    }

    /// Returns the referent, or `None` if empty.
    ///
    /// This is the escape hatch that never triggers the violation policy.
    #[inline]
    pub const fn get(&self) -> Option<&'a T> {
        self.referent
    }

    /// Returns `true` if the wrapper refers to exactly `referent` (same
    /// address, not merely an equal value).
    #[inline]
    pub fn points_to(&self, referent: &T) -> bool {
        match self.referent {
            Some(held) => std::ptr::eq(held, referent),
            None => false,
        }
    }

    /// Returns the referent; absence is a contract violation.
    #[inline]
    fn require(&self) -> &'a T {
        plinth_assert!(self.referent.is_some());
        // A safe API cannot hand out a reference it does not hold, even
        // when the active policy elided the check above.
        self.referent.expect("unowned reference accessed while empty")
    }
}

impl<'a, T: ?Sized> Deref for Unowned<'a, T> {
    type Target = T;

    /// Dereferences to the referent.
    ///
    /// # Panics / Aborts
    ///
    /// An empty wrapper is a contract violation; the outcome follows the
    /// active violation policy.
    #[inline]
    fn deref(&self) -> &T {
        self.require()
    }
}

impl<'a, T: ?Sized> From<&'a T> for Unowned<'a, T> {
    #[inline]
    fn from(referent: &'a T) -> Self {
        Self::new(referent)
    }
}

impl<T: ?Sized> Default for Unowned<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

// Manual impls: deriving would add a `T: Clone`/`T: Copy` bound, but the
// handle is a copy of a reference no matter what `T` is.
impl<T: ?Sized> Clone for Unowned<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Unowned<'_, T> {}

impl<T: ?Sized> PartialEq for Unowned<'_, T> {
    /// Compares referent identity: two wrappers are equal when they refer
    /// to the same object (or are both empty), regardless of the
    /// referent's value.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.referent, other.referent) {
            (Some(lhs), Some(rhs)) => std::ptr::eq(lhs, rhs),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ?Sized> Eq for Unowned<'_, T> {}

impl<T: ?Sized> fmt::Debug for Unowned<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.referent {
            Some(referent) => write!(f, "Unowned({:p})", referent),
            None => write!(f, "Unowned(empty)"),
        }
    }
}
