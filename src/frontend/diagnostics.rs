//! Diagnostics and error reporting for invokegen
//!
//! Binding errors carry `miette` codes and help text; this module renders them (and any other error chain)
//! as text suitable for a terminal or a log file.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};

/// Wide enough that schema names are never wrapped mid-identifier.
const RENDER_WIDTH: usize = 200;

/// Render a diagnostic with code, message and help, without colour.
pub fn render(diagnostic: &dyn Diagnostic) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(RENDER_WIDTH);
    let mut out = String::new();
    if handler.render_report(&mut out, diagnostic).is_err() {
        // writing into a String only fails on a broken Display impl
        return diagnostic.to_string();
    }
    out
}

/// Render an error and its `source()` chain as `error: a\n  caused by: b`.
pub fn render_chain(err: &dyn std::error::Error) -> String {
    let mut out = format!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::binder::BindError;

    #[test]
    fn test_render_includes_code_and_help() {
        let err = BindError::CasingCollision {
            package: "example".to_string(),
            function: "getUser".to_string(),
            namespace: "property".to_string(),
            first: "userId".to_string(),
            second: "user_id".to_string(),
            identifier: "user_id".to_string(),
        };
        let text = render(&err);
        assert!(text.contains("invokegen::bind::casing_collision"));
        assert!(text.contains("`userId` and `user_id` both become `user_id`"));
        assert!(text.contains("never suffixed"));
    }

    #[test]
    fn test_render_chain_walks_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = invokegen_schema::SchemaError::Io {
            path: "schema.json".into(),
            source: io,
        };
        let text = render_chain(&err);
        assert!(text.starts_with("error: failed to read schema schema.json"));
        assert!(text.contains("caused by: gone"));
    }
}
