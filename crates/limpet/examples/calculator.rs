//! A small calculator test suite driven by the harness.
//!
//! Shows the full caller contract: plain test functions handed to
//! `execute`/`skip` in order, a setup/teardown pair around a shared fixture,
//! the printed summary, and the verdict as the process exit code.
//!
//! Run with: `cargo run --example calculator`

use limpet::{check, report_error, TestHarness};
use std::process::ExitCode;

fn add(a: i64, b: i64) -> i64 {
    a + b
}

fn divide(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        None
    } else {
        Some(a / b)
    }
}

fn adds_small_numbers(h: &mut TestHarness) {
    check!(h, add(2, 2) == 4);
    check!(h, add(-1, 1) == 0);
}

fn divides_evenly(h: &mut TestHarness) {
    check!(h, divide(10, 2) == Some(5));
    match divide(7, 0) {
        Some(value) => {
            report_error!(h, "expected no result, got {}\n", value);
            check!(h, false);
        }
        None => check!(h, true),
    }
}

fn handles_negative_division(h: &mut TestHarness) {
    check!(h, divide(-9, 3) == Some(-3));
}

fn main() -> ExitCode {
    let mut harness = TestHarness::new();

    harness.set_setup(|| println!("-- test start"));
    harness.set_teardown(|| println!("-- test end"));

    harness.execute(adds_small_numbers);
    harness.execute(divides_evenly);
    // Skipped tests stay visible in the summary but never run.
    harness.skip(handles_negative_division);

    harness.clear_setup();
    harness.clear_teardown();

    harness.print_summary();
    harness.exit_code()
}
