//! Source locations for assertion diagnostics

use std::fmt;

/// A call site captured when an assertion or diagnostic is recorded.
///
/// The `check!` and `report_error!` macros fill this in with `file!()` and
/// `line!()`, so a failure always names the exact line of the failing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// File path as reported by the compiler
    pub file: &'static str,
    /// Line number (1-based)
    pub line: u32,
}

impl SourceLocation {
    /// Create a location from an explicit file and line
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_file_and_line() {
        let location = SourceLocation::new("src/math.rs", 42);
        assert_eq!(location.to_string(), "src/math.rs:42");
    }

    #[test]
    fn test_location_is_copy() {
        let location = SourceLocation::new("a.rs", 1);
        let copy = location;
        assert_eq!(location, copy);
    }
}
