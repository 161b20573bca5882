//! # Diagnostics
//!
//! Messages tied to a stretch of the notation, for display next to the
//! input. Warnings come from [`Token::diagnostic`](crate::Token::diagnostic);
//! errors are converted from [`NotationError`].

use crate::error::NotationError;
use crate::span::Span;
use config::constants::MIN_SEED_SIDES;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The notation was rejected.
    Error,
    /// Construction goes ahead, probably not as the user meant.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            span,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// The notation with carets under the span.
    ///
    /// An empty span (errors about the whole input) underlines everything.
    ///
    /// ```rust
    /// use conway_notation::{Diagnostic, Span};
    ///
    /// let d = Diagnostic::warning("odd selector", Span::new(0, 2));
    /// assert_eq!(d.underline("k2C"), "k2C\n^^");
    /// ```
    pub fn underline(&self, notation: &str) -> String {
        let (start, len) = if self.span.is_empty() {
            (0, notation.chars().count())
        } else {
            let start = notation
                .get(..self.span.start())
                .map_or(0, |head| head.chars().count());
            (start, self.span.slice(notation).chars().count().max(1))
        };
        format!("{notation}\n{}{}", " ".repeat(start), "^".repeat(len))
    }
}

impl From<&NotationError> for Diagnostic {
    fn from(err: &NotationError) -> Self {
        let hint = match err {
            NotationError::Empty | NotationError::IllFormed { .. } => {
                Some("expected operators followed by one seed, e.g. kaC or tP5".to_string())
            }
            NotationError::TooFewSides { .. } => Some(format!(
                "prisms, antiprisms and pyramids need at least {MIN_SEED_SIDES} sides"
            )),
            _ => None,
        };
        Self {
            severity: Severity::Error,
            message: err.to_string(),
            span: err.span().unwrap_or_default(),
            hint,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}
