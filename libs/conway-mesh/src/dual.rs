//! # Dual Builder
//!
//! Topological dual: every face becomes a vertex and every vertex a face.
//!
//! Dual vertex `i` stands for original face `i`, and dual face `j` for
//! original vertex `j`. Only the topology is built here; dual vertices start
//! at the origin and get their positions from the relaxation solver.

use crate::error::MeshError;
use crate::flags::FlagAssembler;
use crate::math::intersect;
use crate::mesh::{face_edges, Polyhedron};
use glam::DVec3;
use std::collections::HashMap;

/// Name of the dual: a leading `d` is removed, otherwise one is added.
pub fn dual_name(name: &str) -> String {
    match name.strip_prefix('d') {
        Some(rest) => rest.to_string(),
        None => format!("d{name}"),
    }
}

/// Builds the dual topology of `poly`, with dual faces indexed by the
/// original vertex they surround.
///
/// # Errors
///
/// `MissingOppositeEdge` when `poly` is not closed, and `NoCommonVertex` /
/// `DegenerateFace` when a dual face cannot be matched to its vertex.
pub fn make_dual(poly: &Polyhedron) -> Result<Polyhedron, MeshError> {
    log::debug!("Taking dual of {}", poly.name);

    // directed edge -> face it bounds
    let mut edge_face = HashMap::with_capacity(poly.edge_count() * 2);
    for (i, face) in poly.faces.iter().enumerate() {
        for edge in face_edges(face) {
            edge_face.insert(edge, i);
        }
    }

    let mut flags = FlagAssembler::with_capacity(poly.face_count(), poly.vertex_count());
    for i in 0..poly.face_count() {
        flags.declare_vertex(i, DVec3::ZERO);
    }
    for (i, face) in poly.faces.iter().enumerate() {
        for (v1, v2) in face_edges(face) {
            let across = *edge_face
                .get(&(v2, v1))
                .ok_or(MeshError::MissingOppositeEdge { from: v1, to: v2 })?;
            flags.declare_flag(v1, across, i);
        }
    }
    let assembled = flags.assemble(dual_name(&poly.name))?;

    let faces = order_by_vertex(poly, assembled.faces)?;
    Ok(Polyhedron::new(assembled.name, faces, assembled.vertices))
}

/// Moves each assembled dual face (first-seen order) to the slot of the one
/// original vertex its first three faces share.
fn order_by_vertex(
    poly: &Polyhedron,
    assembled: Vec<Vec<usize>>,
) -> Result<Vec<Vec<usize>>, MeshError> {
    let mut slots: Vec<Option<Vec<usize>>> = vec![None; poly.vertex_count()];
    for (i, face) in assembled.into_iter().enumerate() {
        if face.len() < 3 {
            return Err(MeshError::DegenerateFace {
                face: i,
                sides: face.len(),
            });
        }
        let vertex = intersect(
            &poly.faces[face[0]],
            &poly.faces[face[1]],
            &poly.faces[face[2]],
        )
        .ok_or(MeshError::NoCommonVertex { face: i })?;
        slots[vertex] = Some(face);
    }
    slots
        .into_iter()
        .enumerate()
        .map(|(v, face)| face.ok_or(MeshError::MissingFlag { face: v }))
        .collect()
}
