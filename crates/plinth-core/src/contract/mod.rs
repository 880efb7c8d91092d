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

//! # Violation Policy & Assertion Primitive
//!
//! Precondition checks throughout this crate go through [`plinth_assert!`],
//! which resolves to one of three behaviors fixed at build time:
//!
//! | Policy   | Feature          | On a false condition                        |
//! |----------|------------------|---------------------------------------------|
//! | Abort    | `violate-abort`  | Diagnostic to stderr, then `process::abort` |
//! | Ignore   | `violate-ignore` | Condition is never evaluated                |
//! | Throw    | `violate-throw`  | Panic carrying the diagnostic message       |
//!
//! Selecting more than one feature is rejected with a `compile_error!` in
//! the crate root. With none selected, debug builds abort and release
//! builds ignore, so production binaries pay nothing for checks that were
//! exercised during development.
//!
//! The diagnostic message has the exact shape
//! `Assertion failed (<condition-source-text>) at <file>:<line>` and is
//! part of the observable contract; tooling and tests pattern-match it.
//!
//! The three policy-specific macros ([`plinth_assert_abort!`],
//! [`plinth_assert_ignore!`], [`plinth_assert_throw!`]) remain available
//! under every configuration so each behavior can be exercised directly.

use std::io::Write;

/// Formats the assertion diagnostic.
///
/// Single source of the contractual message shape: both the Abort and
/// Throw failure paths emit exactly this string.
#[inline]
pub fn violation_message(expression: &str, file: &str, line: u32) -> String {
    format!("Assertion failed ({expression}) at {file}:{line}")
}

/// Writes the assertion diagnostic to stderr, flushes it, and aborts the
/// process without unwinding.
///
/// This is the failure path of [`plinth_assert_abort!`]; it is kept out of
/// line so the happy path stays branch-plus-fallthrough.
#[cold]
#[inline(never)]
pub fn abort_violation(expression: &str, file: &str, line: u32) -> ! {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}", violation_message(expression, file, line));
    let _ = stderr.flush();
    std::process::abort()
}

/// Panics with the assertion diagnostic, unwinding to the nearest handler.
///
/// This is the failure path of [`plinth_assert_throw!`]. The panic payload
/// is the formatted message from [`violation_message`], so callers that
/// `catch_unwind` can downcast the payload to `String` and inspect it.
#[cold]
#[inline(never)]
pub fn throw_violation(expression: &str, file: &str, line: u32) -> ! {
    panic!("{}", violation_message(expression, file, line))
}

/// Asserts `$cond` with the Abort policy: on falsity, print
/// `Assertion failed (<expr>) at <file>:<line>` to stderr, flush, and
/// abort the process with no unwinding.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::plinth_assert_abort;
/// plinth_assert_abort!(2 + 2 == 4);
/// ```
#[macro_export]
macro_rules! plinth_assert_abort {
    ($cond:expr) => {{
        if !($cond) {
            $crate::contract::abort_violation(stringify!($cond), file!(), line!());
        }
    }};
}

/// Asserts `$cond` with the Ignore policy: the condition is type-checked
/// but never evaluated, so a false condition has no observable effect and
/// side effects inside the condition never run.
///
/// Callers must not rely on any particular outcome when the condition
/// would have been false.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::plinth_assert_ignore;
/// let mut touched = false;
/// plinth_assert_ignore!({ touched = true; false });
/// assert!(!touched);
/// ```
#[macro_export]
macro_rules! plinth_assert_ignore {
    ($cond:expr) => {{
        // Type-check the expression inside a closure that is never invoked.
        let _ = || -> bool { $cond };
    }};
}

/// Asserts `$cond` with the Throw policy: on falsity, panic with
/// `Assertion failed (<expr>) at <file>:<line>`. The panic propagates like
/// any other and terminates the process only if unhandled.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::plinth_assert_throw;
/// let caught = std::panic::catch_unwind(|| plinth_assert_throw!(2 + 2 == 5));
/// assert!(caught.is_err());
/// ```
#[macro_export]
macro_rules! plinth_assert_throw {
    ($cond:expr) => {{
        if !($cond) {
            $crate::contract::throw_violation(stringify!($cond), file!(), line!());
        }
    }};
}

// The policy is resolved when this crate is compiled, not when the macro
// is expanded downstream, so the dispatch lives on the definition: exactly
// one of the following `plinth_assert!` definitions exists per build.

/// Asserts `$cond` under the violation policy selected at build time.
///
/// Resolves to [`plinth_assert_abort!`], [`plinth_assert_ignore!`], or
/// [`plinth_assert_throw!`] depending on the active `violate-*` feature.
/// With no feature selected, debug builds abort and release builds ignore.
#[cfg(feature = "violate-abort")]
#[macro_export]
macro_rules! plinth_assert {
    ($cond:expr) => {
        $crate::plinth_assert_abort!($cond)
    };
}

/// Asserts `$cond` under the violation policy selected at build time.
///
/// Resolves to [`plinth_assert_abort!`], [`plinth_assert_ignore!`], or
/// [`plinth_assert_throw!`] depending on the active `violate-*` feature.
/// With no feature selected, debug builds abort and release builds ignore.
#[cfg(feature = "violate-ignore")]
#[macro_export]
macro_rules! plinth_assert {
    ($cond:expr) => {
        $crate::plinth_assert_ignore!($cond)
    };
}

/// Asserts `$cond` under the violation policy selected at build time.
///
/// Resolves to [`plinth_assert_abort!`], [`plinth_assert_ignore!`], or
/// [`plinth_assert_throw!`] depending on the active `violate-*` feature.
/// With no feature selected, debug builds abort and release builds ignore.
#[cfg(feature = "violate-throw")]
#[macro_export]
macro_rules! plinth_assert {
    ($cond:expr) => {
        $crate::plinth_assert_throw!($cond)
    };
}

/// Asserts `$cond` under the violation policy selected at build time.
///
/// Resolves to [`plinth_assert_abort!`], [`plinth_assert_ignore!`], or
/// [`plinth_assert_throw!`] depending on the active `violate-*` feature.
/// With no feature selected, debug builds abort and release builds ignore.
#[cfg(all(
    not(feature = "violate-abort"),
    not(feature = "violate-ignore"),
    not(feature = "violate-throw"),
    debug_assertions
))]
#[macro_export]
macro_rules! plinth_assert {
    ($cond:expr) => {
        $crate::plinth_assert_abort!($cond)
    };
}

/// Asserts `$cond` under the violation policy selected at build time.
///
/// Resolves to [`plinth_assert_abort!`], [`plinth_assert_ignore!`], or
/// [`plinth_assert_throw!`] depending on the active `violate-*` feature.
/// With no feature selected, debug builds abort and release builds ignore.
#[cfg(all(
    not(feature = "violate-abort"),
    not(feature = "violate-ignore"),
    not(feature = "violate-throw"),
    not(debug_assertions)
))]
#[macro_export]
macro_rules! plinth_assert {
    ($cond:expr) => {
        $crate::plinth_assert_ignore!($cond)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_message_exact_shape() {
        assert_eq!(
            violation_message("2 + 2 == 5", "src/contract/mod.rs", 42),
            "Assertion failed (2 + 2 == 5) at src/contract/mod.rs:42"
        );
    }

    #[test]
    fn test_manual_abort_passes_on_true() {
        plinth_assert_abort!(2 + 2 == 4);
    }

    // Death test: re-invoke this test binary so the abort happens in a
    // child process, then check its exit status and stderr line.
    #[test]
    fn test_manual_abort_diagnostic_and_exit() {
        if std::env::var_os("PLINTH_ABORT_DEATH_TEST_CHILD").is_some() {
            plinth_assert_abort!(2 + 2 == 5);
            return;
        }

        let exe = std::env::current_exe().expect("the test binary path should be known");
        let output = std::process::Command::new(exe)
            .args(["tests::test_manual_abort_diagnostic_and_exit", "--nocapture"])
            .env("PLINTH_ABORT_DEATH_TEST_CHILD", "1")
            .output()
            .expect("the death-test child should spawn");

        assert!(
            !output.status.success(),
            "the child must die on the failed assertion"
        );
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Assertion failed (2 + 2 == 5) at "),
            "missing abort diagnostic in child stderr: {stderr}"
        );
        assert!(
            stderr.contains("contract"),
            "abort diagnostic should name the failing file: {stderr}"
        );
    }

    #[test]
    fn test_manual_ignore_does_not_evaluate() {
        let mut saved = 0;
        plinth_assert_ignore!({
            saved = 1;
            false
        });
        assert_eq!(saved, 0);
        plinth_assert_ignore!(true);
        assert_eq!(saved, 0);
    }

    #[test]
    fn test_manual_throw_passes_on_true() {
        plinth_assert_throw!(2 + 2 == 4);
    }

    #[test]
    fn test_manual_throw_message_shape() {
        let caught = std::panic::catch_unwind(|| {
            plinth_assert_throw!(2 + 2 == 5);
        });
        let payload = caught.expect_err("a false condition must panic under the throw policy");
        let message = payload
            .downcast_ref::<String>()
            .expect("the panic payload should be the formatted diagnostic");
        assert!(
            message.starts_with("Assertion failed (2 + 2 == 5) at "),
            "unexpected diagnostic: {message}"
        );
        assert!(message.contains("contract"));
    }

    #[test]
    fn test_manual_throw_reports_condition_source_text() {
        let value = 3;
        let caught = std::panic::catch_unwind(|| {
            plinth_assert_throw!(value % 2 == 0);
        });
        let payload = caught.expect_err("odd value must fail the parity assertion");
        let message = payload
            .downcast_ref::<String>()
            .expect("the panic payload should be the formatted diagnostic");
        assert!(
            message.starts_with("Assertion failed (value % 2 == 0) at "),
            "unexpected diagnostic: {message}"
        );
    }
}
