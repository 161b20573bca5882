//! # Conway Notation
//!
//! Validates Conway polyhedron notation and compiles it to a canonical,
//! typed program for the mesh engine.
//!
//! ## Architecture
//!
//! ```text
//! "tC" → validate → rewrite ("dkO") → Program { seed: O, ops: [d, k, d] } → conway-mesh
//! ```
//!
//! ## Alphabet
//!
//! - Seeds: `T C O I D` (Platonic), `P A Y` followed by a side count ≥ 3
//! - Primitive operators: `k` (optionally `k<n>`), `a g p d c r`
//! - Aliases rewritten away: `t<n> j s e b o m`
//!
//! ## Usage
//!
//! ```rust
//! use conway_notation::{compile, Seed};
//!
//! let compiled = compile("tC").unwrap();
//! assert_eq!(compiled.notation(), "dkO");
//! assert_eq!(compiled.program.seed, Seed::Octahedron);
//! assert_eq!(compiled.trace(), "tC executed as dkO");
//! ```

pub mod diagnostic;
pub mod error;
pub mod program;
pub mod rewrite;
pub mod span;
pub mod validate;

pub use diagnostic::{Diagnostic, Severity};
pub use error::NotationError;
pub use program::{parse_operations, Operation, Program, Seed, Token};
pub use rewrite::{rewrite, Rewrite};
pub use span::Span;
pub use validate::validate;

use serde::Serialize;

/// A validated, rewritten and tokenized notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compiled {
    pub rewrite: Rewrite,
    pub program: Program,
}

impl Compiled {
    /// The canonical notation.
    pub fn notation(&self) -> &str {
        &self.rewrite.output
    }

    /// `"<input> executed as <canonical>"`.
    pub fn trace(&self) -> String {
        self.rewrite.trace()
    }

    /// Warnings for the compiled program, rendered against the canonical
    /// notation their spans point into.
    ///
    /// ```rust
    /// use conway_notation::compile;
    ///
    /// let compiled = compile("t2C").unwrap();
    /// let rendered = compiled.rendered_diagnostics();
    /// assert_eq!(rendered[0].1, "dk2O\n ^^");
    /// ```
    pub fn rendered_diagnostics(&self) -> Vec<(Diagnostic, String)> {
        self.program
            .diagnostics()
            .into_iter()
            .map(|diagnostic| {
                let underline = diagnostic.underline(self.notation());
                (diagnostic, underline)
            })
            .collect()
    }
}

/// Validates, rewrites and tokenizes user notation.
///
/// This is the main entry point of the crate.
///
/// # Errors
///
/// Any [`NotationError`] from validation. Nothing is rewritten when the
/// input is rejected.
pub fn compile(input: &str) -> Result<Compiled, NotationError> {
    validate(input)?;
    let rewrite = rewrite(input);
    let program = Program::parse(&rewrite.output)?;
    Ok(Compiled { rewrite, program })
}
