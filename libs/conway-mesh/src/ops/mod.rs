//! # Operators
//!
//! Topological operators over polyhedra.
//!
//! Each operator reads the input polyhedron, declares labeled vertices and
//! flags on a [`FlagAssembler`](crate::flags::FlagAssembler), and assembles
//! a new polyhedron named `<letter><input name>`. [`apply`] then relaxes the
//! result so faces stay planar.
//!
//! The dual marker `d` is not handled here: it swaps with an already
//! materialized dual and belongs to the session.

pub mod ambo;
pub mod gyro;
pub mod kis;
pub mod propellor;
pub mod reflect;


pub use ambo::ambo;
pub use gyro::gyro;
pub use kis::kis;
pub use propellor::propellor;
pub use reflect::reflect;

use crate::error::MeshError;
use crate::mesh::Polyhedron;
use crate::solver::{canonicalize, planarize, Relaxed};
use config::constants::GenerationConfig;
use conway_notation::Operation;

/// Vertex labels shared by the operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum VertexLabel {
    /// An input vertex carried over.
    Old(usize),
    /// A new vertex inside input face `i`.
    Center(usize),
    /// A new vertex on input edge `(a, b)`. Ordered or unordered depending on
    /// the operator.
    Edge(usize, usize),
}

/// Face labels shared by the operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FaceLabel {
    /// Derived from input face `i` as a whole.
    Face(usize),
    /// Surrounds input vertex `v`.
    Vertex(usize),
    /// One piece of input face `i` at input vertex `v`.
    Corner(usize, usize),
}

/// Applies one operator and relaxes the result.
///
/// `Operation::Dual` is rejected here with `DualNotMaterialized`, since a
/// dual swap needs session state.
///
/// # Example
///
/// ```rust
/// use conway_mesh::{ops, seeds};
/// use conway_notation::Operation;
/// use config::constants::GenerationConfig;
///
/// let mut warnings = Vec::new();
/// let relaxed = ops::apply(Operation::Ambo, seeds::cube(), &GenerationConfig::default(), &mut warnings).unwrap();
/// assert_eq!(relaxed.polyhedron.name, "aC");
/// assert_eq!(relaxed.polyhedron.vertex_count(), 12);
/// assert_eq!(relaxed.dual.name, "daC");
/// ```
pub fn apply(
    operation: Operation,
    poly: Polyhedron,
    config: &GenerationConfig,
    warnings: &mut Vec<String>,
) -> Result<Relaxed, MeshError> {
    match operation {
        Operation::Kis { sides } => {
            let result = kis(&poly, sides, warnings)?;
            planarize(result, config.kis_iterations, warnings)
        }
        Operation::Ambo => planarize(ambo(&poly)?, config.ambo_iterations, warnings),
        Operation::Gyro => planarize(gyro(&poly, warnings)?, config.gyro_iterations, warnings),
        Operation::Propellor => planarize(
            propellor(&poly, warnings)?,
            config.propellor_iterations,
            warnings,
        ),
        Operation::Reflect => planarize(reflect(poly), config.reflect_iterations, warnings),
        Operation::Canonicalize => {
            let mut poly = poly;
            poly.name = format!("c{}", poly.name);
            canonicalize(poly, config.canonicalize_iterations, warnings)
        }
        Operation::Dual => Err(MeshError::DualNotMaterialized { name: poly.name }),
    }
}
