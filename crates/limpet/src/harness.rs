//! Test harness - execute tests and record assertion outcomes
//!
//! `TestHarness` is the single aggregator object a driver owns for one suite:
//! it holds the assertion recorder, the suite counters, the hook slots, and
//! the diagnostics sink. The driver calls `execute`/`skip` for each test in
//! its own order, then `print_summary` and `exit_code`.

use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::hooks::Hooks;
use crate::location::SourceLocation;
use crate::recorder::AssertionRecorder;
use crate::suite::SuiteStats;

/// A test procedure the harness can execute.
///
/// Blanket-implemented for closures and function items taking
/// `&mut TestHarness`, so plain `fn my_test(h: &mut TestHarness)` functions,
/// capturing closures, and custom objects all work as tests.
pub trait TestCase {
    /// Run the test body against the harness
    fn run(&mut self, harness: &mut TestHarness<'_>);
}

impl<F> TestCase for F
where
    F: FnMut(&mut TestHarness<'_>),
{
    fn run(&mut self, harness: &mut TestHarness<'_>) {
        self(harness)
    }
}

/// Assertion bookkeeping, hooks, and suite aggregation for one test suite.
///
/// Assertion failures are recorded and reported, never raised: a failing
/// `check!` leaves the rest of the test body running so every assertion in
/// the test still counts. A test is classified failed iff at least one
/// assertion inside it failed, regardless of how many passed.
pub struct TestHarness<'a> {
    recorder: AssertionRecorder,
    stats: SuiteStats,
    hooks: Hooks<'a>,
    diagnostics: Box<dyn Write + 'a>,
}

impl Default for TestHarness<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TestHarness<'a> {
    /// Create a harness that writes diagnostics to stderr
    pub fn new() -> Self {
        Self::with_diagnostics(io::stderr())
    }

    /// Create a harness with a custom diagnostics sink
    pub fn with_diagnostics(sink: impl Write + 'a) -> Self {
        Self {
            recorder: AssertionRecorder::new(),
            stats: SuiteStats::new(),
            hooks: Hooks::new(),
            diagnostics: Box::new(sink),
        }
    }

    /// Record one boolean assertion outcome.
    ///
    /// On failure, emits `<file>:<line>: error: assertion "<expression>"
    /// failed.` to the diagnostics sink and keeps going; assertion failures
    /// are never fatal to the test body.
    pub fn check(&mut self, result: bool, expression: &str, location: SourceLocation) {
        if result {
            self.recorder.record_pass();
        } else {
            self.recorder.record_failure();
            let _ = writeln!(
                self.diagnostics,
                "{}: error: assertion \"{}\" failed.",
                location, expression
            );
        }
    }

    /// Emit a formatted diagnostic without touching any counter.
    ///
    /// No newline is appended; the caller's format string decides.
    pub fn report_error(&mut self, location: SourceLocation, message: fmt::Arguments<'_>) {
        let _ = write!(self.diagnostics, "{}: error: ", location);
        let _ = self.diagnostics.write_fmt(message);
    }

    /// Install a setup hook run before each executed test's body
    pub fn set_setup(&mut self, hook: impl FnMut() + 'a) {
        self.hooks.set_setup(hook);
    }

    /// Remove the setup hook
    pub fn clear_setup(&mut self) {
        self.hooks.clear_setup();
    }

    /// Install a teardown hook run after each executed test's body
    pub fn set_teardown(&mut self, hook: impl FnMut() + 'a) {
        self.hooks.set_teardown(hook);
    }

    /// Remove the teardown hook
    pub fn clear_teardown(&mut self) {
        self.hooks.clear_teardown();
    }

    /// Execute one test: setup, body, teardown, then classify.
    ///
    /// The test is counted as failed iff any assertion inside its body
    /// failed. Teardown runs even when the body failed assertions; it does
    /// not run if the body panics (no isolation between tests).
    pub fn execute(&mut self, mut test: impl TestCase) {
        self.recorder.reset_current_test();
        self.hooks.run_setup();
        test.run(self);
        self.hooks.run_teardown();

        if self.recorder.current_test_failed() {
            self.stats.record_failed();
        } else {
            self.stats.record_passed();
        }
    }

    /// Count one test as skipped without running its body or the hooks.
    ///
    /// The argument mirrors `execute` for interface symmetry; it is never
    /// invoked.
    pub fn skip(&mut self, _test: impl TestCase) {
        self.stats.record_skipped();
    }

    /// Suite verdict: true iff no assertion failed anywhere in the run.
    ///
    /// Assertion-based, not test-count-based; a suite with zero tests and
    /// zero assertions passes.
    pub fn suite_passed(&self) -> bool {
        self.recorder.failed_assertions() == 0
    }

    /// Map the verdict to a process exit status
    pub fn exit_code(&self) -> ExitCode {
        if self.suite_passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// Assertion counters for the whole suite
    pub fn recorder(&self) -> &AssertionRecorder {
        &self.recorder
    }

    /// Test counters for the whole suite
    pub fn stats(&self) -> &SuiteStats {
        &self.stats
    }
}

impl fmt::Debug for TestHarness<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestHarness")
            .field("recorder", &self.recorder)
            .field("stats", &self.stats)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}
