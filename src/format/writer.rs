//! Output writer with indentation tracking
//!
//! Builds emitted source text line by line. Indentation is applied lazily at the first non-empty write of
//! each line, so blank lines never carry trailing whitespace.

use std::fmt;

use super::config::FormatConfig;

/// Writer that tracks indentation and builds formatted output
#[derive(Debug)]
pub struct SourceWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    config: FormatConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
    /// Current column, indentation included
    column: usize,
}

impl SourceWriter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
            column: 0,
        }
    }

    /// Get the formatted output
    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.config.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.column = width;
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent). Must not contain newlines; use [`SourceWriter::writeln`] per line.
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
        self.column += s.chars().count();
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
        self.column = 0;
    }

    /// Write multiple blank lines (for spacing between declarations)
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }

    /// Blank lines between top-level declarations.
    pub fn top_level_gap(&mut self) {
        self.blank_lines(self.config.blank_lines_top_level);
    }

    /// Blank lines between methods of one class.
    pub fn method_gap(&mut self) {
        self.blank_lines(self.config.blank_lines_methods);
    }

    /// Write an indented suite: `header` on its own line, then `body` one level deeper.
    ///
    /// The header is written verbatim, so the caller supplies the opener (`:` for Python).
    pub fn suite<F>(&mut self, header: &str, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.writeln(header);
        self.indent();
        let result = body(self);
        self.dedent();
        result
    }

    /// Write `open`, then `items` separated by `,` with each continuation aligned under the first item.
    pub fn write_aligned_list(&mut self, open: &str, items: &[String], close: &str) {
        self.write(open);
        let align = self.column;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(",");
                self.newline();
                self.output.extend(std::iter::repeat_n(' ', align));
                self.column = align;
                self.at_line_start = false;
            }
            self.write(item);
        }
        self.write(close);
    }

    /// Write each line of `text` prefixed with `prefix` (for `#` comments and similar).
    pub fn comment_block(&mut self, prefix: &str, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                self.writeln(prefix);
            } else {
                self.writeln(&format!("{prefix} {line}"));
            }
        }
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    pub fn current_column(&self) -> usize {
        self.column
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }
}

impl fmt::Write for SourceWriter {
    /// Multi-line text is split so every line gets indentation.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut lines = s.split('\n');
        if let Some(first) = lines.next() {
            self.write(first);
        }
        for line in lines {
            self.newline();
            self.write(line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;

    use super::*;

    fn default_writer() -> SourceWriter {
        SourceWriter::new(FormatConfig::default())
    }

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(default_writer().finish(), "");
    }

    #[test]
    fn test_write_empty_string() {
        let mut writer = default_writer();
        writer.write("");
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_writeln_multiple() {
        let mut writer = default_writer();
        writer.writeln("line1");
        writer.writeln("line2");
        assert_eq!(writer.finish(), "line1\nline2\n");
    }

    #[test]
    fn test_indent_applies_at_line_start_only() {
        let mut writer = default_writer();
        writer.indent();
        writer.write("a");
        writer.write("b");
        writer.newline();
        writer.newline();
        writer.dedent();
        writer.writeln("c");
        assert_eq!(writer.finish(), "    ab\n\nc\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut writer = default_writer();
        writer.dedent();
        assert_eq!(writer.current_indent(), 0);
    }

    #[test]
    fn test_suite_indents_body() {
        let mut writer = default_writer();
        writer
            .suite("class Foo:", |w| {
                w.writeln("pass");
                Ok(())
            })
            .unwrap();
        writer.writeln("x = 1");
        assert_eq!(writer.finish(), "class Foo:\n    pass\nx = 1\n");
    }

    #[test]
    fn test_aligned_list() {
        let mut writer = default_writer();
        let items = vec!["a: int".to_string(), "b: str".to_string()];
        writer.write_aligned_list("def f(", &items, "):");
        writer.newline();
        assert_eq!(writer.finish(), "def f(a: int,\n      b: str):\n");
    }

    #[test]
    fn test_aligned_list_respects_indent() {
        let mut writer = SourceWriter::new(FormatConfig::new().with_indent_width(2));
        writer.indent();
        let items = vec!["x".to_string(), "y".to_string()];
        writer.write_aligned_list("g(", &items, ")");
        assert_eq!(writer.finish(), "  g(x,\n    y)");
    }

    #[test]
    fn test_fmt_write_splits_lines() {
        let mut writer = default_writer();
        writer.indent();
        write!(writer, "a\nb").unwrap();
        assert_eq!(writer.finish(), "    a\n    b");
    }

    #[test]
    fn test_comment_block() {
        let mut writer = default_writer();
        writer.comment_block("#", "one\n\ntwo");
        assert_eq!(writer.finish(), "# one\n#\n# two\n");
    }

    #[test]
    fn test_column_tracking() {
        let mut writer = default_writer();
        writer.indent();
        writer.write("abc");
        assert_eq!(writer.current_column(), 7);
    }
}
