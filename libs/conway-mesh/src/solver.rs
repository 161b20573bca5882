//! # Relaxation Solver
//!
//! Moves vertices toward a planar (or canonical) embedding by alternating
//! between a polyhedron and its dual.
//!
//! ## Algorithm
//!
//! ```text
//! D = dual topology of P
//! repeat k times:
//!     D.vertices = reciprocal points of P's faces
//!     P.vertices = reciprocal points of D's faces
//! ```
//!
//! Two rules give the reciprocal point of a face:
//!
//! - **Centers** (planarization): inverted face centroid. Cheap, used after
//!   every operator.
//! - **Normals** (canonicalization): inverted foot of the perpendicular from
//!   the origin to the face plane, scaled by `(1 + mean edge distance) / 2`
//!   so edges converge onto a common tangent sphere.

use crate::dual::make_dual;
use crate::error::MeshError;
use crate::math::{corner_normal, edge_distance, reciprocal, unit_or_warn};
use crate::mesh::{face_corners, Polyhedron};
use glam::DVec3;

/// A relaxed polyhedron together with its dual.
///
/// Vertex `i` of `dual` corresponds to face `i` of `polyhedron`, and face
/// `j` of `dual` to vertex `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Relaxed {
    pub polyhedron: Polyhedron,
    pub dual: Polyhedron,
}

/// Reciprocal point rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Inverted face centroids.
    Centers,
    /// Inverted face planes with edge-tangency damping.
    Normals,
}

/// Inverts every face centroid in the unit sphere.
pub fn reciprocal_centers(poly: &Polyhedron) -> Vec<DVec3> {
    poly.face_centers().into_iter().map(reciprocal).collect()
}

/// Inverted, damped plane point of every face.
pub fn reciprocal_normals(poly: &Polyhedron, warnings: &mut Vec<String>) -> Vec<DVec3> {
    poly.faces
        .iter()
        .map(|face| {
            let mut centroid = DVec3::ZERO;
            let mut normal = DVec3::ZERO;
            let mut edge_sum = 0.0;
            for (a, b, c) in face_corners(face) {
                let (pa, pb, pc) = (poly.vertices[a], poly.vertices[b], poly.vertices[c]);
                centroid += pc;
                normal += corner_normal(pa, pb, pc);
                edge_sum += edge_distance(pa, pb);
            }
            let sides = face.len() as f64;
            centroid /= sides;
            let normal = unit_or_warn(normal, warnings);
            let mean_edge_distance = edge_sum / sides;
            reciprocal(normal * centroid.dot(normal)) * ((1.0 + mean_edge_distance) / 2.0)
        })
        .collect()
}

/// Builds the dual of `poly` and runs `iterations` alternating passes.
///
/// # Errors
///
/// Any dual-construction error; see [`make_dual`].
pub fn relax(
    mut poly: Polyhedron,
    iterations: usize,
    rule: Rule,
    warnings: &mut Vec<String>,
) -> Result<Relaxed, MeshError> {
    let mut dual = make_dual(&poly)?;
    match rule {
        Rule::Centers => log::debug!("Planarizing {}", poly.name),
        Rule::Normals => log::debug!("Canonicalizing {}", poly.name),
    }

    for _ in 0..iterations {
        match rule {
            Rule::Centers => {
                dual.vertices = reciprocal_centers(&poly);
                poly.vertices = reciprocal_centers(&dual);
            }
            Rule::Normals => {
                dual.vertices = reciprocal_normals(&poly, warnings);
                poly.vertices = reciprocal_normals(&dual, warnings);
            }
        }
    }

    Ok(Relaxed {
        polyhedron: poly,
        dual,
    })
}

/// Quick planarization with inverted centroids.
pub fn planarize(
    poly: Polyhedron,
    iterations: usize,
    warnings: &mut Vec<String>,
) -> Result<Relaxed, MeshError> {
    relax(poly, iterations, Rule::Centers, warnings)
}

/// Full canonicalization with inverted face planes.
pub fn canonicalize(
    poly: Polyhedron,
    iterations: usize,
    warnings: &mut Vec<String>,
) -> Result<Relaxed, MeshError> {
    relax(poly, iterations, Rule::Normals, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::platonic;
    use approx::assert_relative_eq;

    /// Largest distance of any vertex from its face's best-fit plane.
    fn planarity_error(poly: &Polyhedron) -> f64 {
        let mut worst: f64 = 0.0;
        for face in &poly.faces {
            let center: DVec3 =
                face.iter().map(|&v| poly.vertices[v]).sum::<DVec3>() / face.len() as f64;
            let normal: DVec3 = face_corners(face)
                .map(|(a, b, c)| corner_normal(poly.vertices[a], poly.vertices[b], poly.vertices[c]))
                .sum::<DVec3>()
                .normalize();
            for &v in face {
                worst = worst.max((poly.vertices[v] - center).dot(normal).abs());
            }
        }
        worst
    }

    #[test]
    fn test_reciprocal_centers_of_cube() {
        let cube = platonic::cube();
        let points = reciprocal_centers(&cube);
        assert_eq!(points.len(), 6);
        // the top face center sits at z = 0.707
        assert_relative_eq!(points[0].z, 1.0 / 0.707, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_iterations_keeps_positions() {
        let cube = platonic::cube();
        let mut warnings = Vec::new();
        let relaxed = planarize(cube.clone(), 0, &mut warnings).unwrap();
        assert_eq!(relaxed.polyhedron, cube);
        assert!(relaxed.dual.vertices.iter().all(|v| *v == DVec3::ZERO));
    }

    #[test]
    fn test_planarize_dual_tracks_faces() {
        let mut warnings = Vec::new();
        let relaxed = planarize(platonic::dodecahedron(), 2, &mut warnings).unwrap();
        assert_eq!(relaxed.dual.name, "dD");
        assert_eq!(relaxed.dual.vertex_count(), 12);
        assert_eq!(relaxed.dual.face_count(), 20);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_canonicalize_keeps_faces_planar() {
        let mut warnings = Vec::new();
        let relaxed = canonicalize(platonic::cube(), 10, &mut warnings).unwrap();
        assert!(warnings.is_empty());
        assert!(planarity_error(&relaxed.polyhedron) < 1e-6);
        // symmetric input stays symmetric: every vertex at the same radius
        let r0 = relaxed.polyhedron.vertices[0].length();
        for v in &relaxed.polyhedron.vertices {
            assert_relative_eq!(v.length(), r0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_canonical_cube_edges_tangent_to_unit_sphere() {
        let mut warnings = Vec::new();
        let relaxed = canonicalize(platonic::cube(), 40, &mut warnings).unwrap();
        let p = &relaxed.polyhedron;
        for (a, b) in p.edges() {
            assert_relative_eq!(
                edge_distance(p.vertices[a], p.vertices[b]),
                1.0,
                epsilon = 1e-3
            );
        }
    }
}
