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

//! # Plinth Core
//!
//! Small, self-contained utility primitives: contract-checked scalar math,
//! a build-time-configurable assertion facility, generic fill/fold
//! algorithms, and a non-owning reference wrapper. Each piece is an
//! independent function or small type; the only shared machinery is the
//! assertion macro family in [`contract`].
//!
//! ## Modules
//!
//! - `contract`: The violation policy (abort / ignore / throw) and the
//!   `plinth_assert!` macro family that enforces preconditions throughout
//!   the crate.
//! - `num`: Integer division and remainder parameterized by a rounding
//!   mode (`Trunc`, `Floor`, `Euclid`), with a paired `div_rem`.
//! - `math`: Scalar helpers (`lerp`, `clamp`, `is_between`, and
//!   intrinsic-free NaN/finiteness probes).
//! - `algorithm`: Constexpr-style counterparts to `<algorithm>` staples:
//!   `fill`, a strict left-to-right `transform_reduce`, and the
//!   reference-returning `min2`/`max2`.
//! - `utils`: `Unowned<'a, T>`, a copyable handle to externally-owned data
//!   whose empty-access failure mode follows the active violation policy.
//!
//! ## Violation policy
//!
//! A failed precondition is handled by exactly one policy, baked in at
//! build time via Cargo features:
//!
//! - `violate-abort`: print `Assertion failed (<expr>) at <file>:<line>`
//!   to stderr and abort without unwinding.
//! - `violate-ignore`: never evaluate the asserted expression.
//! - `violate-throw`: panic with the same message; the panic unwinds to
//!   the nearest handler.
//!
//! With no feature selected, debug builds abort and release builds ignore.

#[cfg(any(
    all(feature = "violate-abort", feature = "violate-ignore"),
    all(feature = "violate-abort", feature = "violate-throw"),
    all(feature = "violate-ignore", feature = "violate-throw"),
))]
compile_error!(
    "the features `violate-abort`, `violate-ignore`, and `violate-throw` are mutually exclusive"
);

pub mod algorithm;
pub mod contract;
pub mod math;
pub mod num;
pub mod utils;
