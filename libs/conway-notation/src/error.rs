//! # Notation Errors
//!
//! User-input errors detected before any construction starts.

use crate::span::Span;
use thiserror::Error;

/// Errors that can occur while validating or tokenizing notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// Nothing to compile.
    #[error("Empty polyhedron expression")]
    Empty,

    /// A character outside the operator and seed alphabet.
    #[error("Undefined character: {found}")]
    UndefinedCharacter { found: char, span: Span },

    /// The string does not match `operators* seed`.
    #[error("Ill-formed polyhedron expression: {notation}")]
    IllFormed { notation: String },

    /// Parametric seed with fewer than three sides.
    #[error("At least 3 sides are required, not {sides}")]
    TooFewSides { sides: u32, span: Span },

    /// Parametric seed beyond the configured safety limit. The notation is
    /// well formed; the limit only bounds the size of the mesh.
    #[error("Too many sides: {sides} exceeds the mesh size limit of {max}")]
    TooManySides { sides: u32, max: u32, span: Span },

    /// A numeric argument that does not fit in 32 bits.
    #[error("Number too large: {digits}")]
    NumberTooLarge { digits: String, span: Span },

    /// A numeric argument attached to an operator that takes none.
    #[error("Operator '{op}' takes no numeric argument")]
    UnexpectedArgument { op: char, span: Span },
}

impl NotationError {
    /// Returns the offending span, when the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UndefinedCharacter { span, .. }
            | Self::TooFewSides { span, .. }
            | Self::TooManySides { span, .. }
            | Self::NumberTooLarge { span, .. }
            | Self::UnexpectedArgument { span, .. } => Some(*span),
            Self::Empty | Self::IllFormed { .. } => None,
        }
    }
}
