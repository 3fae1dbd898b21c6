//! Suite-level test outcome aggregation

/// Per-suite test counters, incremented only by the harness execution loop.
///
/// Invariant: `total_tests == passed_tests + failed_tests + skipped_tests`
/// after every executed or skipped test; each recorder method advances the
/// total together with exactly one outcome counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteStats {
    total: usize,
    passed: usize,
    failed: usize,
    skipped: usize,
}

impl SuiteStats {
    /// Create stats with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one executed test as passed
    pub(crate) fn record_passed(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Count one executed test as failed
    pub(crate) fn record_failed(&mut self) {
        self.total += 1;
        self.failed += 1;
    }

    /// Count one test as skipped without executing it
    pub(crate) fn record_skipped(&mut self) {
        self.total += 1;
        self.skipped += 1;
    }

    /// Tests seen by the suite, executed or skipped
    pub fn total_tests(&self) -> usize {
        self.total
    }

    /// Executed tests with no failing assertion
    pub fn passed_tests(&self) -> usize {
        self.passed
    }

    /// Executed tests with at least one failing assertion
    pub fn failed_tests(&self) -> usize {
        self.failed
    }

    /// Tests handed to `skip` and never run
    pub fn skipped_tests(&self) -> usize {
        self.skipped
    }
}
