//! Limpet - a minimal embeddable unit-test harness
//!
//! This library provides test support for small programs that do not want an
//! external test framework:
//! - Boolean assertions with call-site diagnostics (`check!`)
//! - Per-test classification from assertion outcomes
//! - One optional setup/teardown hook pair around each executed test
//! - Suite-level aggregation, a fixed two-line summary, and an exit-code
//!   verdict
//!
//! The caller owns the suite: it constructs a [`TestHarness`], feeds its own
//! list of tests to [`TestHarness::execute`] or [`TestHarness::skip`] in
//! order, then prints the summary and terminates with
//! [`TestHarness::exit_code`]. Execution is single-threaded and synchronous;
//! there is no discovery, no parallelism, and no isolation from panics in
//! test bodies.
//!
//! # Example
//!
//! ```
//! use limpet::{check, TestHarness};
//!
//! fn adds_numbers(h: &mut TestHarness) {
//!     check!(h, 2 + 2 == 4);
//! }
//!
//! let mut harness = TestHarness::new();
//! harness.execute(adds_numbers);
//! harness.print_summary();
//! assert!(harness.suite_passed());
//! ```

/// Limpet version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod harness;
pub mod hooks;
pub mod location;
pub mod recorder;
pub mod suite;

mod macros;
mod reporter;

// Re-export commonly used types
pub use harness::{TestCase, TestHarness};
pub use hooks::Hooks;
pub use location::SourceLocation;
pub use recorder::AssertionRecorder;
pub use suite::SuiteStats;
