//! # Conway Mesh
//!
//! Builds polyhedra from Conway notation.
//!
//! ## Architecture
//!
//! ```text
//! conway-notation (Program) → seeds → ops (flags → Polyhedron → relax) → Polyhedron
//! ```
//!
//! Every operator describes its output as labeled flags; the
//! [`FlagAssembler`] turns them into indexed faces. Coordinates are then
//! relaxed against the dual so faces stay planar.
//!
//! ## Usage
//!
//! ```rust
//! use conway_mesh::generate;
//!
//! let result = generate("tI").unwrap();
//! assert_eq!(result.trace, "tI executed as dkD");
//! assert_eq!(result.summary(), "(32 faces, 90 edges, 60 vertices)");
//! ```

pub mod dual;
pub mod error;
pub mod flags;
pub mod math;
pub mod mesh;
pub mod ops;
pub mod seeds;
pub mod session;
pub mod solver;

pub use dual::make_dual;
pub use error::MeshError;
pub use flags::FlagAssembler;
pub use mesh::Polyhedron;
pub use session::{Generated, Session, SessionStats};
pub use solver::{canonicalize, planarize, Relaxed};

/// Compiles notation and builds its polyhedron in a fresh session.
///
/// This is the main entry point when no cache reuse is needed.
///
/// # Example
///
/// ```rust
/// use conway_mesh::generate;
///
/// let cube = generate("C").unwrap();
/// assert_eq!(cube.polyhedron.face_count(), 6);
/// assert_eq!(cube.polyhedron.vertex_count(), 8);
/// ```
pub fn generate(notation: &str) -> Result<Generated, MeshError> {
    Session::new().generate(notation)
}
