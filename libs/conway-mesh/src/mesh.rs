//! # Polyhedron Data Structure
//!
//! Closed polygonal mesh with named provenance.
//!
//! Faces are stored as vertex index cycles, clockwise as seen from outside.
//! The `name` is the canonical notation that produced the polyhedron and is
//! what the session cache matches against.

use crate::error::MeshError;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A polyhedron with indexed polygonal faces.
///
/// # Example
///
/// ```rust
/// use conway_mesh::Polyhedron;
/// use glam::DVec3;
///
/// let tetra = Polyhedron::new(
///     "T",
///     vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 1], vec![1, 3, 2]],
///     vec![DVec3::X, DVec3::Y, DVec3::Z, DVec3::ONE],
/// );
/// assert_eq!(tetra.edge_count(), 6);
/// assert_eq!(tetra.summary(), "(4 faces, 6 edges, 4 vertices)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyhedron {
    /// Canonical notation that produced this polyhedron
    pub name: String,
    /// Vertex index cycles, one per face
    pub faces: Vec<Vec<usize>>,
    /// Vertex positions (f64 for precision)
    pub vertices: Vec<DVec3>,
}

impl Polyhedron {
    /// Creates a polyhedron from its parts.
    pub fn new(name: impl Into<String>, faces: Vec<Vec<usize>>, vertices: Vec<DVec3>) -> Self {
        Self {
            name: name.into(),
            faces,
            vertices,
        }
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Edge count derived from Euler's formula for genus-0 surfaces.
    ///
    /// This is a display quantity; use [`Polyhedron::edges`] for the real
    /// topology.
    #[inline]
    pub fn edge_count(&self) -> usize {
        (self.face_count() + self.vertex_count()).saturating_sub(2)
    }

    /// `"(F faces, E edges, V vertices)"`.
    pub fn summary(&self) -> String {
        format!(
            "({} faces, {} edges, {} vertices)",
            self.face_count(),
            self.edge_count(),
            self.vertex_count()
        )
    }

    /// Unique undirected edges as `(low, high)` index pairs, sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = BTreeSet::new();
        for face in &self.faces {
            for (a, b) in face_edges(face) {
                edges.insert((a.min(b), a.max(b)));
            }
        }
        edges.into_iter().collect()
    }

    /// Vertex centroid of every face.
    pub fn face_centers(&self) -> Vec<DVec3> {
        self.faces
            .iter()
            .map(|face| {
                let sum: DVec3 = face.iter().map(|&v| self.vertices[v]).sum();
                sum / face.len() as f64
            })
            .collect()
    }

    /// Point reflection through the origin.
    ///
    /// Negates every coordinate and reverses every face so faces stay
    /// clockwise from outside. Applying it twice restores the original.
    pub fn reflect(&mut self) {
        for v in &mut self.vertices {
            *v = -*v;
        }
        for face in &mut self.faces {
            face.reverse();
        }
    }

    /// Checks index bounds and face shape.
    ///
    /// Every face must reference existing vertices and have at least three
    /// distinct ones, and every directed edge must have its reverse in some
    /// other face.
    pub fn validate(&self) -> Result<(), MeshError> {
        let mut directed = BTreeSet::new();
        for (i, face) in self.faces.iter().enumerate() {
            let distinct: BTreeSet<_> = face.iter().collect();
            if distinct.len() < 3 || distinct.len() != face.len() {
                return Err(MeshError::DegenerateFace {
                    face: i,
                    sides: distinct.len(),
                });
            }
            if face.iter().any(|&v| v >= self.vertex_count()) {
                return Err(MeshError::UndeclaredVertex { face: i });
            }
            directed.extend(face_edges(face));
        }
        for &(from, to) in &directed {
            if !directed.contains(&(to, from)) {
                return Err(MeshError::MissingOppositeEdge { from, to });
            }
        }
        Ok(())
    }
}

/// Directed edges of a face cycle, starting with the closing edge
/// `last -> first`.
pub(crate) fn face_edges(face: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let last = face.last().copied();
    last.into_iter()
        .chain(face.iter().copied())
        .zip(face.iter().copied())
}

/// Consecutive vertex triples `(previous-previous, previous, current)` of a
/// face cycle, one per vertex.
pub(crate) fn face_corners(face: &[usize]) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
    let n = face.len();
    (0..n).map(move |j| (face[(j + 2 * n - 2) % n], face[(j + 2 * n - 1) % n], face[j]))
}
