//! Extraction of `// expect:` comments from test scripts

use regex::Regex;
use std::fs;
use std::path::Path;

use crate::TestError;

/// Marker for one expected line of interpreter output
pub const EXPECT_PATTERN: &str = r"//\s*expect:\s*(.+)";

/// Characters stripped from the end of an expectation
const TRAILING_WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Parser collecting expected output from a script's source
pub struct ExpectationParser {
    expect_regex: Regex,
}

impl ExpectationParser {
    /// Create a new expectation parser
    pub fn new() -> Result<Self, TestError> {
        let expect_regex = Regex::new(EXPECT_PATTERN)
            .map_err(|e| TestError::Config(format!("Invalid expectation regex: {}", e)))?;

        Ok(Self { expect_regex })
    }

    /// Read a script and return its expectations in file order.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<String>, TestError> {
        let bytes = fs::read(path).map_err(|e| {
            TestError::Expectations(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(self.parse_source(&String::from_utf8_lossy(&bytes)))
    }

    /// Collect one expectation per marker line, trailing whitespace removed
    pub fn parse_source(&self, source: &str) -> Vec<String> {
        source
            .lines()
            .filter_map(|line| self.expect_regex.captures(line))
            .filter_map(|captures| captures.get(1))
            .map(|value| value.as_str().trim_end_matches(TRAILING_WHITESPACE).to_string())
            .collect()
    }
}
