//! Suite summary reporting
//!
//! Renders the fixed two-line results summary. The shape is stable so that
//! tooling which parses test output keeps working:
//!
//! ```text
//! <assertions> assertions run: <passed> passed, <failed> failed.
//! <tests> tests: <passed> passed, <failed> failed, <skipped> skipped.
//! ```

use std::io::{self, Write};

use crate::harness::TestHarness;

impl TestHarness<'_> {
    /// Write the two-line suite summary to `out`.
    ///
    /// A pure read of the suite counters; no counter changes. Call after all
    /// tests have run.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let recorder = self.recorder();
        writeln!(
            out,
            "{} assertions run: {} passed, {} failed.",
            recorder.total_assertions(),
            recorder.passed_assertions(),
            recorder.failed_assertions()
        )?;

        let stats = self.stats();
        writeln!(
            out,
            "{} tests: {} passed, {} failed, {} skipped.",
            stats.total_tests(),
            stats.passed_tests(),
            stats.failed_tests(),
            stats.skipped_tests()
        )?;

        Ok(())
    }

    /// Print the suite summary to stdout, best-effort
    pub fn print_summary(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = self.write_summary(&mut handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::SourceLocation;
    use pretty_assertions::assert_eq;

    fn summary_of(harness: &TestHarness<'_>) -> String {
        let mut buffer = Vec::new();
        harness.write_summary(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_empty_suite_summary() {
        let harness = TestHarness::with_diagnostics(io::sink());
        assert_eq!(
            summary_of(&harness),
            "0 assertions run: 0 passed, 0 failed.\n0 tests: 0 passed, 0 failed, 0 skipped.\n"
        );
    }

    #[test]
    fn test_summary_counts_all_outcomes() {
        let mut harness = TestHarness::with_diagnostics(io::sink());
        harness.execute(|h: &mut TestHarness| {
            h.check(true, "ok", SourceLocation::new("t.rs", 1));
            h.check(false, "bad", SourceLocation::new("t.rs", 2));
        });
        harness.execute(|h: &mut TestHarness| {
            h.check(true, "ok", SourceLocation::new("t.rs", 3));
        });
        harness.skip(|_h: &mut TestHarness| {});

        assert_eq!(
            summary_of(&harness),
            "3 assertions run: 2 passed, 1 failed.\n3 tests: 1 passed, 1 failed, 1 skipped.\n"
        );
    }

    #[test]
    fn test_summary_shape_is_stable() {
        let mut harness = TestHarness::with_diagnostics(io::sink());
        harness.execute(|h: &mut TestHarness| {
            h.check(true, "ok", SourceLocation::new("t.rs", 1));
            h.check(false, "bad", SourceLocation::new("t.rs", 2));
        });

        insta::assert_snapshot!(summary_of(&harness), @r"
        2 assertions run: 1 passed, 1 failed.
        1 tests: 0 passed, 1 failed, 0 skipped.
        ");
    }

    #[test]
    fn test_summary_does_not_mutate_counters() {
        let mut harness = TestHarness::with_diagnostics(io::sink());
        harness.execute(|h: &mut TestHarness| {
            h.check(true, "ok", SourceLocation::new("t.rs", 1));
        });

        let first = summary_of(&harness);
        let second = summary_of(&harness);
        assert_eq!(first, second);
    }
}
