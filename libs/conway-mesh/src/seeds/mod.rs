//! # Seeds
//!
//! Primitive polyhedra that start a construction chain.
//!
//! Platonic seeds come from fixed tables and are used as-is. Prisms and
//! antiprisms get a light planarization; pyramids need real
//! canonicalization because the apex starts far from its final position.

pub mod parametric;
pub mod platonic;

pub use parametric::{antiprism, prism, pyramid};
pub use platonic::{cube, dodecahedron, icosahedron, octahedron, tetrahedron};

use crate::error::MeshError;
use crate::mesh::Polyhedron;
use crate::solver::{canonicalize, planarize, Relaxed};
use config::constants::GenerationConfig;
use conway_notation::Seed;

/// Builds a seed polyhedron, plus its dual when the seed was relaxed.
///
/// # Example
///
/// ```rust
/// use conway_mesh::seeds;
/// use conway_notation::Seed;
/// use config::constants::GenerationConfig;
///
/// let mut warnings = Vec::new();
/// let (prism, dual) = seeds::build(Seed::Prism(6), &GenerationConfig::default(), &mut warnings).unwrap();
/// assert_eq!(prism.face_count(), 8);
/// assert_eq!(dual.unwrap().name, "dP6");
/// ```
pub fn build(
    seed: Seed,
    config: &GenerationConfig,
    warnings: &mut Vec<String>,
) -> Result<(Polyhedron, Option<Polyhedron>), MeshError> {
    log::debug!("Constructing seed {seed}");
    let relaxed = match seed {
        Seed::Tetrahedron => return Ok((tetrahedron(), None)),
        Seed::Octahedron => return Ok((octahedron(), None)),
        Seed::Cube => return Ok((cube(), None)),
        Seed::Icosahedron => return Ok((icosahedron(), None)),
        Seed::Dodecahedron => return Ok((dodecahedron(), None)),
        Seed::Prism(n) => planarize(prism(n as usize), config.prism_iterations, warnings)?,
        Seed::Antiprism(n) => {
            planarize(antiprism(n as usize), config.prism_iterations, warnings)?
        }
        Seed::Pyramid(n) => {
            canonicalize(pyramid(n as usize), config.pyramid_iterations, warnings)?
        }
    };
    let Relaxed { polyhedron, dual } = relaxed;
    Ok((polyhedron, Some(dual)))
}
