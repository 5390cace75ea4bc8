//! Emit Python bindings from bound functions.
//!
//! One unit per function, laid out with [`SourceWriter`]:
//!
//! 1. header and imports
//! 2. `__all__`
//! 3. the `@pulumi.output_type` result class and its awaitable subclass
//! 4. the eager entry point, then the `_apply` entry point lifted over it
//!
//! ## Notes
//!
//! - Arguments are assigned into the request unconditionally; the SDK serializer drops `None` values, so an
//!   absent optional argument never reaches the wire.
//! - Required parameters have no default. When one follows an optional parameter the remaining parameters
//!   become keyword-only (`*`), which keeps declaration order without a syntax error.

mod types;

use std::fmt;

use crate::backend::EmitError;
use crate::config::GeneratorConfig;
use crate::format::{SourceWriter, finalize_source};
use crate::frontend::binder::{BoundFunction, BoundParam, NamedKind};

use types::{docstring_text, double_quoted, field_annotation, input_annotation, runtime_check, single_quoted};

/// Used when a function has no description of its own.
const DEFAULT_FUNCTION_DOC: &str = "Use this data source to access information about an existing resource.";

pub struct PythonEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> PythonEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Emit one bound function as a complete Python module.
    #[tracing::instrument(skip_all, fields(function = %f.token))]
    pub fn emit_function(&self, f: &BoundFunction) -> Result<String, EmitError> {
        let mut w = SourceWriter::new(self.config.format.clone());

        self.emit_header(&mut w);
        emit_imports(&mut w, f);
        w.newline();
        emit_all(&mut w, f);
        w.newline();
        emit_result_class(&mut w, f)?;
        w.top_level_gap();
        emit_awaitable_class(&mut w, f)?;
        w.top_level_gap();
        emit_eager_fn(&mut w, f);
        if self.config.emit_apply {
            w.top_level_gap();
            emit_apply_fn(&mut w, f);
        }

        Ok(finalize_source(&w.finish(), &self.config.format))
    }

    fn emit_header(&self, w: &mut SourceWriter) {
        w.writeln("# coding=utf-8");
        w.writeln(&format!("# *** WARNING: this file was generated by {}. ***", self.config.tool));
        w.writeln("# *** Do not edit by hand unless you're certain you know what you are doing! ***");
        w.newline();
    }
}

fn emit_imports(w: &mut SourceWriter, f: &BoundFunction) {
    w.writeln("import warnings");
    w.writeln("import pulumi");
    w.writeln("import pulumi.runtime");
    w.writeln("from typing import Any, Mapping, Optional, Sequence, Union, overload");
    w.writeln("from . import _utilities");

    let named = f.named_types();
    if named.iter().any(|q| q.local && q.kind == NamedKind::Enum) {
        w.writeln("from . import _enums");
    }
    if named.iter().any(|q| q.local && q.kind != NamedKind::Enum) {
        w.writeln("from . import outputs");
    }
    for dep in &f.dependencies {
        w.writeln(&format!("import {dep}"));
    }
}

fn emit_all(w: &mut SourceWriter, f: &BoundFunction) {
    w.writeln("__all__ = [");
    w.indent();
    for name in [&f.idents.result, &f.idents.awaitable, &f.idents.function] {
        w.writeln(&format!("{},", single_quoted(name)));
    }
    w.dedent();
    w.writeln("]");
}

fn emit_result_class(w: &mut SourceWriter, f: &BoundFunction) -> fmt::Result {
    w.writeln("@pulumi.output_type");
    w.suite(&format!("class {}:", f.idents.result), |w| {
        let params: Vec<String> = std::iter::once("__self__".to_string())
            .chain(f.properties.iter().map(|p| format!("{}=None", p.ident)))
            .collect();
        let one_line = format!("def __init__({}):", params.join(", "));
        if w.current_indent() * w.config().indent_width + one_line.len() <= w.config().line_length {
            w.writeln(&one_line);
        } else {
            w.write_aligned_list("def __init__(", &params, "):");
            w.newline();
        }

        w.indent();
        if f.properties.is_empty() {
            w.writeln("pass");
        }
        for p in &f.properties {
            if let Some(check) = runtime_check(&p.ty) {
                w.suite(&format!("if {0} and not isinstance({0}, {check}):", p.ident), |w| {
                    w.writeln(&format!(
                        "raise TypeError(\"Expected argument '{}' to be a {check}\")",
                        p.ident
                    ));
                    Ok(())
                })?;
            }
            w.writeln(&format!("pulumi.set(__self__, {}, {})", double_quoted(&p.ident), p.ident));
        }
        w.dedent();

        for p in &f.properties {
            w.method_gap();
            w.writeln("@property");
            if p.ident == p.wire_name {
                w.writeln("@pulumi.getter");
            } else {
                w.writeln(&format!("@pulumi.getter(name={})", double_quoted(&p.wire_name)));
            }
            let header = format!("def {}(self) -> {}:", p.ident, field_annotation(&p.ty, p.optional));
            w.suite(&header, |w| {
                if let Some(description) = &p.description {
                    emit_docstring(w, description);
                }
                w.writeln(&format!("return pulumi.get(self, {})", double_quoted(&p.ident)));
                Ok(())
            })?;
        }
        Ok(())
    })
}

fn emit_awaitable_class(w: &mut SourceWriter, f: &BoundFunction) -> fmt::Result {
    let header = format!("class {}({}):", f.idents.awaitable, f.idents.result);
    w.suite(&header, |w| {
        w.writeln("# pylint: disable=using-constant-test");
        w.suite("def __await__(self):", |w| {
            w.suite("if False:", |w| {
                w.writeln("yield self");
                Ok(())
            })?;
            let fields: Vec<String> = f
                .properties
                .iter()
                .map(|p| format!("{0}=self.{0}", p.ident))
                .collect();
            emit_constructor_return(w, &f.idents.result, &fields);
            Ok(())
        })
    })
}

fn emit_eager_fn(w: &mut SourceWriter, f: &BoundFunction) {
    let params = parameter_list(f, |p| field_annotation(&p.ty, p.optional));
    w.write_aligned_list(
        &format!("def {}(", f.idents.function),
        &params,
        &format!(") -> {}:", f.idents.awaitable),
    );
    w.newline();

    w.indent();
    emit_docstring(w, &function_doc(f));
    w.writeln("__args__ = dict()");
    for p in &f.params {
        w.writeln(&format!("__args__[{}] = {}", single_quoted(&p.wire_name), p.ident));
    }
    w.writeln("if opts is None:");
    w.indent();
    w.writeln("opts = pulumi.InvokeOptions()");
    w.dedent();
    w.writeln("if opts.version is None:");
    w.indent();
    w.writeln("opts.version = _utilities.get_version()");
    w.dedent();
    w.writeln(&format!(
        "__ret__ = pulumi.runtime.invoke({}, __args__, opts=opts, typ={}).value",
        single_quoted(&f.token),
        f.idents.result
    ));
    w.newline();

    let fields: Vec<String> = f
        .properties
        .iter()
        .map(|p| format!("{0}=__ret__.{0}", p.ident))
        .collect();
    emit_constructor_return(w, &f.idents.awaitable, &fields);
    w.dedent();
}

fn emit_apply_fn(w: &mut SourceWriter, f: &BoundFunction) {
    w.writeln(&format!("@_utilities.lift_output_func({})", f.idents.function));
    let params = parameter_list(f, |p| input_annotation(&p.ty, p.optional, p.plain));
    w.write_aligned_list(
        &format!("def {}(", f.idents.apply_function),
        &params,
        &format!(") -> pulumi.Output[{}]:", f.idents.result),
    );
    w.newline();
    w.indent();
    w.writeln("...");
    w.dedent();
}

/// Declared parameters followed by `opts`.
fn parameter_list(f: &BoundFunction, annotate: impl Fn(&BoundParam) -> String) -> Vec<String> {
    let mut items = Vec::with_capacity(f.params.len() + 2);
    let mut seen_optional = false;
    let mut keyword_only = false;
    for p in &f.params {
        if p.optional {
            seen_optional = true;
            items.push(format!("{}: {} = None", p.ident, annotate(p)));
        } else {
            if seen_optional && !keyword_only {
                items.push("*".to_string());
                keyword_only = true;
            }
            items.push(format!("{}: {}", p.ident, annotate(p)));
        }
    }
    items.push("opts: Optional[pulumi.InvokeOptions] = None".to_string());
    items
}

/// `return Name(` with one keyword argument per continuation line.
fn emit_constructor_return(w: &mut SourceWriter, name: &str, fields: &[String]) {
    if fields.is_empty() {
        w.writeln(&format!("return {name}()"));
        return;
    }
    w.writeln(&format!("return {name}("));
    w.indent();
    let last = fields.len() - 1;
    for (i, field) in fields.iter().enumerate() {
        if i == last {
            w.writeln(&format!("{field})"));
        } else {
            w.writeln(&format!("{field},"));
        }
    }
    w.dedent();
}

fn emit_docstring(w: &mut SourceWriter, text: &str) {
    w.writeln("\"\"\"");
    for line in docstring_text(text).lines() {
        w.writeln(line);
    }
    w.writeln("\"\"\"");
}

fn function_doc(f: &BoundFunction) -> String {
    let mut doc = f.description.clone().unwrap_or_else(|| DEFAULT_FUNCTION_DOC.to_string());
    let documented: Vec<_> = f
        .params
        .iter()
        .filter_map(|p| p.description.as_deref().map(|d| (p, d)))
        .collect();
    if !documented.is_empty() {
        doc.push_str("\n\n");
        for (p, d) in documented {
            doc.push_str(&format!(":param {}: {d}\n", p.ident));
        }
    }
    doc
}

#[cfg(test)]
mod tests;
