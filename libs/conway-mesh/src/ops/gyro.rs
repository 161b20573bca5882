//! # Gyro
//!
//! Splits every face into twisted pentagons around a new center vertex.
//!
//! ```text
//! center -> e(v1,v2) -> e(v2,v1) -> v2 -> e(v2,v3) -> center
//! ```
//!
//! `e(a, b)` is the interior point near `a` on edge `a -> b`; both
//! directions of an edge get their own point, which is what twists the
//! result.

use super::{FaceLabel, VertexLabel};
use crate::error::MeshError;
use crate::flags::FlagAssembler;
use crate::math::{interior_point, unit_or_warn};
use crate::mesh::{face_corners, Polyhedron};

/// One pentagon per input corner.
pub fn gyro(poly: &Polyhedron, warnings: &mut Vec<String>) -> Result<Polyhedron, MeshError> {
    log::debug!("Taking gyro of {}", poly.name);

    let mut flags = FlagAssembler::new();
    for (i, &position) in poly.vertices.iter().enumerate() {
        flags.declare_vertex(VertexLabel::Old(i), unit_or_warn(position, warnings));
    }
    for (i, center) in poly.face_centers().into_iter().enumerate() {
        flags.declare_vertex(VertexLabel::Center(i), unit_or_warn(center, warnings));
    }

    for (i, face) in poly.faces.iter().enumerate() {
        let center = VertexLabel::Center(i);
        for (v1, v2, v3) in face_corners(face) {
            let e12 = VertexLabel::Edge(v1, v2);
            let e21 = VertexLabel::Edge(v2, v1);
            let e23 = VertexLabel::Edge(v2, v3);
            flags.declare_vertex(e12, interior_point(poly.vertices[v1], poly.vertices[v2]));

            let pentagon = FaceLabel::Corner(i, v1);
            flags.declare_flag(pentagon, center, e12);
            flags.declare_flag(pentagon, e12, e21);
            flags.declare_flag(pentagon, e21, VertexLabel::Old(v2));
            flags.declare_flag(pentagon, VertexLabel::Old(v2), e23);
            flags.declare_flag(pentagon, e23, center);
        }
    }

    flags.assemble(format!("g{}", poly.name))
}
