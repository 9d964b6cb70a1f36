//! Source location tokens attached to every node.

use std::fmt;

/// Where a node came from in the source text.
///
/// Locations are informational only: they ride along through cloning and
/// rewriting but never participate in structural equality, so two nodes
/// parsed from different places still compare equal when their content
/// does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrcLocation {
    file: String,
    start_line: u32,
    start_column: u32,
    end_line: u32,
    end_column: u32,
}

impl SrcLocation {
    /// Creates a location spanning `(start_line, start_column)` to
    /// `(end_line, end_column)` in `file`.
    #[must_use]
    pub fn new(
        file: impl Into<String>,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            file: file.into(),
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Source file name; empty for synthesized nodes.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// One-based starting line.
    #[must_use]
    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    /// One-based starting column.
    #[must_use]
    pub fn start_column(&self) -> u32 {
        self.start_column
    }

    /// One-based ending line.
    #[must_use]
    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    /// One-based ending column.
    #[must_use]
    pub fn end_column(&self) -> u32 {
        self.end_column
    }
}

impl fmt::Display for SrcLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.start_line, self.start_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_points_at_start() {
        let loc = SrcLocation::new("program.dl", 3, 7, 3, 20);
        assert_eq!(loc.to_string(), "program.dl:3:7");
    }

    #[test]
    fn default_is_synthetic() {
        let loc = SrcLocation::default();
        assert_eq!(loc.file(), "");
        assert_eq!(loc.start_line(), 0);
    }
}
