//! # Mesh Errors
//!
//! Error types for polyhedron construction.
//!
//! [`MeshError::Notation`] wraps user-input errors found before construction
//! starts. The face-walk and dual-matching variants are internal consistency
//! failures: an operator emitted flags that do not describe a closed
//! polyhedron, which is a defect in the operator, not in the input.
//!
//! Non-fatal problems are not errors: they are collected as warning strings
//! and logged at `warn` level.

use conway_notation::NotationError;
use thiserror::Error;

/// Errors that can occur during polyhedron construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Invalid notation from the notation layer
    #[error("Notation error: {0}")]
    Notation(#[from] NotationError),

    /// A face boundary walk did not return to its start
    #[error("Face {face} does not close after {steps} steps")]
    OpenFace { face: usize, steps: usize },

    /// A face boundary walk reached a vertex with no outgoing flag, or a face
    /// received no flags at all
    #[error("Face {face} is missing a flag")]
    MissingFlag { face: usize },

    /// A flag references a vertex label that was never declared
    #[error("Face {face} references an undeclared vertex")]
    UndeclaredVertex { face: usize },

    /// An edge has no oppositely oriented partner, so the mesh is not closed
    #[error("Edge {from} -> {to} has no opposite edge")]
    MissingOppositeEdge { from: usize, to: usize },

    /// A dual face could not be matched to an original vertex
    #[error("Dual face {face} shares no vertex across its first three faces")]
    NoCommonVertex { face: usize },

    /// A face with fewer than three distinct vertices
    #[error("Face {face} has only {sides} distinct vertices")]
    DegenerateFace { face: usize, sides: usize },

    /// The dual swap ran before any dual was computed for the current polyhedron
    #[error("No dual has been materialized for {name}")]
    DualNotMaterialized { name: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many faces
    #[error("Too many faces: {count} (max: {max})")]
    TooManyFaces { count: usize, max: usize },
}

impl MeshError {
    /// Returns true for operator-defect failures, false for errors caused by
    /// the input, the requested program, or the output size.
    pub fn is_internal(&self) -> bool {
        !matches!(
            self,
            Self::Notation(_)
                | Self::DualNotMaterialized { .. }
                | Self::TooManyVertices { .. }
                | Self::TooManyFaces { .. }
        )
    }
}

/// Records a non-fatal warning and forwards it to the logger.
pub(crate) fn warn(warnings: &mut Vec<String>, message: impl Into<String>) {
    let message = message.into();
    log::warn!("{message}");
    warnings.push(message);
}
