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

//! Behavior of `plinth_assert!` when the crate is built with the Ignore
//! violation policy (`--features violate-ignore`): asserted expressions
//! are never evaluated, so side effects inside them must not run.

#![cfg(feature = "violate-ignore")]

use plinth_core::math::scalar::clamp;
use plinth_core::num::div_rem::{div_rem, DivRoundMode};
use plinth_core::plinth_assert;

#[test]
fn test_dispatched_assert_does_not_evaluate_condition() {
    let mut saved = 0;
    plinth_assert!({
        saved = 1;
        false
    });
    assert_eq!(saved, 0);
    plinth_assert!({
        saved = 2;
        true
    });
    assert_eq!(saved, 0);
}

#[test]
fn test_checked_operations_still_work_on_valid_inputs() {
    assert_eq!(div_rem(-43, 10, DivRoundMode::Floor), (-5, 7));
    assert_eq!(clamp(5, 0, 10), 5);
    assert_eq!(clamp(-5, 0, 10), 0);
    assert_eq!(clamp(15, 0, 10), 10);
}
