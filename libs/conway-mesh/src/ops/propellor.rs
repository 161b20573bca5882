//! # Propellor
//!
//! Twists every face into a smaller rotated copy surrounded by blades.
//!
//! Uses the same interior edge points as gyro but no face centers: the
//! rotated copy of each input face joins its interior points, and each
//! input corner gets a quadrilateral blade.

use super::{FaceLabel, VertexLabel};
use crate::error::MeshError;
use crate::flags::FlagAssembler;
use crate::math::{interior_point, unit_or_warn};
use crate::mesh::{face_corners, Polyhedron};

/// One rotated copy per input face and one blade per input corner.
pub fn propellor(poly: &Polyhedron, warnings: &mut Vec<String>) -> Result<Polyhedron, MeshError> {
    log::debug!("Taking propellor of {}", poly.name);

    let mut flags = FlagAssembler::new();
    for (i, &position) in poly.vertices.iter().enumerate() {
        flags.declare_vertex(VertexLabel::Old(i), unit_or_warn(position, warnings));
    }

    for (i, face) in poly.faces.iter().enumerate() {
        for (v1, v2, v3) in face_corners(face) {
            let e12 = VertexLabel::Edge(v1, v2);
            let e21 = VertexLabel::Edge(v2, v1);
            let e23 = VertexLabel::Edge(v2, v3);
            flags.declare_vertex(e12, interior_point(poly.vertices[v1], poly.vertices[v2]));

            flags.declare_flag(FaceLabel::Face(i), e12, e23);

            let blade = FaceLabel::Corner(i, v2);
            flags.declare_flag(blade, e12, e21);
            flags.declare_flag(blade, e21, VertexLabel::Old(v2));
            flags.declare_flag(blade, VertexLabel::Old(v2), e23);
            flags.declare_flag(blade, e23, e12);
        }
    }

    flags.assemble(format!("p{}", poly.name))
}
