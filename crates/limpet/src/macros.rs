//! Call-site capture macros
//!
//! Assertions must name the exact file and line of the failing check, and
//! carry the literal source text of the checked expression. These macros
//! capture all three at the call site with `stringify!`, `file!`, and
//! `line!` and forward to the harness.

/// Record a boolean assertion against the harness.
///
/// The expression's source text and call site are captured for the failure
/// diagnostic. A failing `check!` records the failure and returns; it never
/// panics, so the rest of the test body still runs.
///
/// # Example
///
/// ```
/// use limpet::{check, TestHarness};
///
/// let mut harness = TestHarness::new();
/// harness.execute(|h: &mut TestHarness| {
///     check!(h, 2 + 2 == 4);
/// });
/// assert!(harness.suite_passed());
/// ```
#[macro_export]
macro_rules! check {
    ($harness:expr, $condition:expr $(,)?) => {
        $harness.check(
            $condition,
            stringify!($condition),
            $crate::SourceLocation::new(file!(), line!()),
        )
    };
}

/// Emit a formatted diagnostic from inside a test body without affecting
/// any pass/fail counter.
///
/// # Example
///
/// ```
/// use limpet::{report_error, TestHarness};
///
/// let mut harness = TestHarness::new();
/// harness.execute(|h: &mut TestHarness| {
///     report_error!(h, "missing fixture: {}\n", "data.csv");
/// });
/// assert!(harness.suite_passed());
/// ```
#[macro_export]
macro_rules! report_error {
    ($harness:expr, $($arg:tt)*) => {
        $harness.report_error(
            $crate::SourceLocation::new(file!(), line!()),
            format_args!($($arg)*),
        )
    };
}
