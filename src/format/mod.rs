//! Formatting for emitted units
//!
//! Every emitted unit, whatever its target, passes through [`finalize_source`] last:
//! - `\r\n` and lone `\r` line endings become `\n`
//! - trailing whitespace is stripped from every line
//! - leading blank lines are dropped and longer runs of blank lines collapse to the configured maximum
//! - the text ends with exactly one newline
//!
//! The pass is idempotent: finalizing finalized text returns it unchanged.

mod config;
mod writer;

pub use config::FormatConfig;
pub use writer::SourceWriter;

/// Normalise emitted source text.
pub fn finalize_source(source: &str, config: &FormatConfig) -> String {
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    let max_blank = config.max_blank_lines();

    let mut out = String::with_capacity(normalized.len() + 1);
    let mut pending_blank = 0usize;
    let mut seen_content = false;
    for line in normalized.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            pending_blank += 1;
            continue;
        }
        if seen_content {
            for _ in 0..pending_blank.min(max_blank) {
                out.push('\n');
            }
        }
        pending_blank = 0;
        seen_content = true;
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Check if text is already in finalized form
pub fn is_finalized(source: &str, config: &FormatConfig) -> bool {
    finalize_source(source, config) == source
}
