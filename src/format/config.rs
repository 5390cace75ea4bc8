//! Layout settings for emitted source text.
//!
//! Rust output is laid out by `prettyplease`; these settings drive the [`super::SourceWriter`] used for the
//! Python target and the final normalisation pass applied to every unit.

use serde::{Deserialize, Serialize};

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Soft line limit; result constructors longer than this wrap one parameter per line
    pub line_length: usize,
    /// Number of blank lines between top-level declarations
    pub blank_lines_top_level: usize,
    /// Number of blank lines between methods in a class
    pub blank_lines_methods: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            line_length: 120,
            blank_lines_top_level: 2,
            blank_lines_methods: 1,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the maximum line length
    pub fn with_line_length(mut self, length: usize) -> Self {
        self.line_length = length;
        self
    }

    pub fn with_blank_lines_top_level(mut self, count: usize) -> Self {
        self.blank_lines_top_level = count;
        self
    }

    /// The longest run of blank lines a finished unit may contain.
    pub fn max_blank_lines(&self) -> usize {
        self.blank_lines_top_level.max(self.blank_lines_methods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.line_length, 120);
        assert_eq!(config.blank_lines_top_level, 2);
        assert_eq!(config.blank_lines_methods, 1);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(FormatConfig::new(), FormatConfig::default());
    }

    #[test]
    fn test_builders_leave_other_fields() {
        let config = FormatConfig::new().with_indent_width(2).with_line_length(80);
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.line_length, 80);
        assert_eq!(config.blank_lines_top_level, 2);
    }

    #[test]
    fn test_max_blank_lines() {
        assert_eq!(FormatConfig::new().max_blank_lines(), 2);
        assert_eq!(FormatConfig::new().with_blank_lines_top_level(0).max_blank_lines(), 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FormatConfig = serde_json::from_str(r#"{"indentWidth": 2}"#).unwrap();
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.line_length, 120);
    }
}
