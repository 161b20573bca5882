//! # Ambo
//!
//! Truncates every vertex down to the edge midpoints.

use super::{FaceLabel, VertexLabel};
use crate::error::MeshError;
use crate::flags::FlagAssembler;
use crate::mesh::{face_corners, Polyhedron};

/// Midpoint label, independent of edge direction.
fn midpoint(a: usize, b: usize) -> VertexLabel {
    VertexLabel::Edge(a.min(b), a.max(b))
}

/// One vertex per input edge; one face per input face (its midpoints) and
/// one per input vertex (the midpoints of its edges).
pub fn ambo(poly: &Polyhedron) -> Result<Polyhedron, MeshError> {
    log::debug!("Taking ambo of {}", poly.name);

    let mut flags = FlagAssembler::with_capacity(
        poly.edge_count(),
        poly.face_count() + poly.vertex_count(),
    );
    for (i, face) in poly.faces.iter().enumerate() {
        for (v1, v2, v3) in face_corners(face) {
            if v1 < v2 {
                let position = (poly.vertices[v1] + poly.vertices[v2]) / 2.0;
                flags.declare_vertex(midpoint(v1, v2), position);
            }
            flags.declare_flag(FaceLabel::Face(i), midpoint(v1, v2), midpoint(v2, v3));
            flags.declare_flag(FaceLabel::Vertex(v2), midpoint(v2, v3), midpoint(v1, v2));
        }
    }

    flags.assemble(format!("a{}", poly.name))
}
