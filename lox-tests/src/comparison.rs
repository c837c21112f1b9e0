//! Output normalization and comparison functionality

/// Characters stripped from the end of each output line
const TRAILING_WHITESPACE: &[char] = &[' ', '\t', '\r'];

/// Split captured output into trimmed, non-empty lines.
///
/// Trailing spaces, tabs and carriage returns are removed from every line and
/// lines that end up empty are dropped. Leading whitespace is significant.
pub fn normalize_output(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| line.trim_end_matches(TRAILING_WHITESPACE))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Represents the result of comparing expected vs actual output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputComparison {
    /// Same number of lines and every line equal
    Match,
    /// Different number of expected and actual lines
    LengthMismatch { expected: usize, actual: usize },
    /// First position at which the lines differ
    LineMismatch { index: usize, expected: String, actual: String },
}

impl OutputComparison {
    /// Check if this comparison has differences
    pub fn has_differences(&self) -> bool {
        !matches!(self, Self::Match)
    }

    /// Short description of the difference, if any
    pub fn describe(&self) -> Option<String> {
        match self {
            Self::Match => None,
            Self::LengthMismatch { expected, actual } => {
                Some(format!("expected {} lines of output, got {}", expected, actual))
            }
            Self::LineMismatch { index, expected, actual } => Some(format!(
                "line {}: expected {:?}, got {:?}",
                index + 1,
                expected,
                actual
            )),
        }
    }
}

/// Positional output comparison engine
#[derive(Debug, Clone, Default)]
pub struct OutputComparator;

impl OutputComparator {
    /// Create a new output comparator
    pub fn new() -> Self {
        Self
    }

    /// Compare expectations with normalized output, index by index.
    ///
    /// Lengths are checked first; otherwise the first differing line is
    /// reported and the rest are not examined.
    pub fn compare(&self, expected: &[String], actual: &[String]) -> OutputComparison {
        if expected.len() != actual.len() {
            return OutputComparison::LengthMismatch {
                expected: expected.len(),
                actual: actual.len(),
            };
        }

        for (index, (expected, actual)) in expected.iter().zip(actual).enumerate() {
            if expected != actual {
                return OutputComparison::LineMismatch {
                    index,
                    expected: expected.clone(),
                    actual: actual.clone(),
                };
            }
        }

        OutputComparison::Match
    }
}
