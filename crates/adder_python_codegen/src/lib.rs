//! Render a Python AST back into text.
//!
//! Two independent renderers share the node model of `adder_python_ast`:
//!
//! - [`Generator`] (and the [`render`] entry point) reconstructs source code
//!   whose re-parse is structurally equivalent to the input tree.
//! - [`dump`] / [`dump_suite`] produce a canonical structural dump of the
//!   tree, readable back as a literal tree-construction expression.
//!
//! Both are pure functions of a borrowed tree: no I/O, no shared state, and
//! the only configuration is the [`Indentation`] unit.

use std::ops::Deref;

use thiserror::Error;

use adder_python_ast::Suite;

pub use dumper::{dump, dump_suite, dump_suite_with_indentation, dump_with_indentation};
pub use generator::Generator;

mod dumper;
mod escape;
mod generator;

/// A rendering failure. Failures are deterministic properties of the input
/// tree; no partial output is ever returned alongside an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodegenError {
    /// A node appeared in a position the renderer has no rule for. The
    /// output would be syntactically invalid, so rendering aborts instead.
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(&'static str),
    /// A contract violation by the producer of the tree, e.g. an empty block
    /// body or a comparison chain with mismatched operator and comparator
    /// counts. Not repaired, not recoverable.
    #[error("malformed tree: {0}")]
    MalformedTree(&'static str),
}

/// The indentation unit used by both renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indentation(String);

impl Indentation {
    pub fn new(indentation: String) -> Self {
        Self(indentation)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self("  ".to_string())
    }
}

impl Deref for Indentation {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Reconstruct source code for a module-level suite, using the default
/// two-space indentation unit.
pub fn render(suite: &Suite) -> Result<String, CodegenError> {
    render_with_indentation(suite, &Indentation::default())
}

/// Reconstruct source code for a module-level suite.
pub fn render_with_indentation(
    suite: &Suite,
    indentation: &Indentation,
) -> Result<String, CodegenError> {
    let mut generator = Generator::new(indentation);
    generator.unparse_suite(suite)?;
    Ok(generator.generate())
}
