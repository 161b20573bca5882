//! # Kis
//!
//! Raises a pyramid on selected faces.

use super::{FaceLabel, VertexLabel};
use crate::error::{warn, MeshError};
use crate::flags::FlagAssembler;
use crate::mesh::{face_edges, Polyhedron};

/// Replaces every face with `sides` sides by a fan of triangles around its
/// centroid. Other faces are kept. No selector, or a selector of `0`, takes
/// every face.
///
/// The selector is written into the name exactly as given, so `k0C` stays
/// `k0C`. Warns when no face matches.
pub fn kis(
    poly: &Polyhedron,
    sides: Option<u32>,
    warnings: &mut Vec<String>,
) -> Result<Polyhedron, MeshError> {
    let selector = sides.map(|n| n.to_string()).unwrap_or_default();
    let sides = match sides {
        Some(n) if n > 0 => {
            log::debug!("Taking kis of {n}-sided faces of {}", poly.name);
            n
        }
        _ => {
            log::debug!("Taking kis of {}", poly.name);
            0
        }
    };

    let mut flags = FlagAssembler::new();
    for (i, &position) in poly.vertices.iter().enumerate() {
        flags.declare_vertex(VertexLabel::Old(i), position);
    }

    let centers = poly.face_centers();
    let mut found_any = false;
    for (i, face) in poly.faces.iter().enumerate() {
        let selected = sides == 0 || face.len() == sides as usize;
        found_any |= selected;
        if selected {
            flags.declare_vertex(VertexLabel::Center(i), centers[i]);
        }
        for (v1, v2) in face_edges(face) {
            let (from, to) = (VertexLabel::Old(v1), VertexLabel::Old(v2));
            if selected {
                let fan = FaceLabel::Corner(i, v1);
                let center = VertexLabel::Center(i);
                flags.declare_flag(fan, from, to);
                flags.declare_flag(fan, to, center);
                flags.declare_flag(fan, center, from);
            } else {
                flags.declare_flag(FaceLabel::Face(i), from, to);
            }
        }
    }

    if !found_any {
        warn(warnings, format!("No {sides}-fold components were found"));
    }

    flags.assemble(format!("k{selector}{}", poly.name))
}
