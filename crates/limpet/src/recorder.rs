//! Assertion bookkeeping
//!
//! Tracks how many assertions ran, passed, and failed across the whole suite,
//! plus how many failed inside the test currently executing. The recorder is
//! pure counters; diagnostic output is handled by the harness that owns it.

/// Pass/fail counters for every assertion recorded in a suite.
///
/// Invariant: `total_assertions == passed_assertions + failed_assertions`
/// after every recorded assertion. The current-test counter is reset at the
/// start of each executed test and read once at its end to classify the test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssertionRecorder {
    total: usize,
    passed: usize,
    failed: usize,
    current_failed: usize,
}

impl AssertionRecorder {
    /// Create a recorder with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a passing assertion
    pub(crate) fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Record a failing assertion against both the suite and the current test
    pub(crate) fn record_failure(&mut self) {
        self.total += 1;
        self.failed += 1;
        self.current_failed += 1;
    }

    /// Forget the current test's failures; called once before each test runs
    pub(crate) fn reset_current_test(&mut self) {
        self.current_failed = 0;
    }

    /// Whether any assertion failed since the last `reset_current_test`
    pub fn current_test_failed(&self) -> bool {
        self.current_failed > 0
    }

    /// Total assertions recorded across the suite
    pub fn total_assertions(&self) -> usize {
        self.total
    }

    /// Assertions that passed across the suite
    pub fn passed_assertions(&self) -> usize {
        self.passed
    }

    /// Assertions that failed across the suite
    pub fn failed_assertions(&self) -> usize {
        self.failed
    }

    /// Assertions that failed inside the test currently executing
    pub fn current_failed_assertions(&self) -> usize {
        self.current_failed
    }
}
