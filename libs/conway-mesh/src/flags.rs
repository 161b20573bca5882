//! # Flag Assembler
//!
//! Builds a [`Polyhedron`] from labeled vertices and oriented face edges.
//!
//! A flag is one directed boundary edge `from -> to` of one face. Operators
//! describe their output purely as flags over symbolic labels; the assembler
//! then numbers vertices and faces and walks each face's flags into a vertex
//! cycle.
//!
//! Labels are any hashable type, so each operator defines a small enum for
//! its own vertex and face identities instead of formatting strings. The
//! assembler is consumed by [`FlagAssembler::assemble`], which is how the
//! per-call label tables are discarded.
//!
//! ## Example
//!
//! ```rust
//! use conway_mesh::FlagAssembler;
//! use glam::DVec3;
//!
//! let mut flags = FlagAssembler::new();
//! for (label, position) in [('a', DVec3::X), ('b', DVec3::Y), ('c', DVec3::Z), ('d', DVec3::ONE)] {
//!     flags.declare_vertex(label, position);
//! }
//! for (face, cycle) in [(0, "abc"), (1, "acd"), (2, "adb"), (3, "bdc")] {
//!     let labels: Vec<char> = cycle.chars().collect();
//!     for i in 0..3 {
//!         flags.declare_flag(face, labels[i], labels[(i + 1) % 3]);
//!     }
//! }
//! let tetra = flags.assemble("T").unwrap();
//! assert_eq!(tetra.faces[0], vec![1, 2, 0]);
//! ```

use crate::error::MeshError;
use crate::mesh::Polyhedron;
use config::constants::{MAX_FACES, MAX_VERTICES};
use glam::DVec3;
use std::collections::HashMap;
use std::hash::Hash;

/// Per-face successor table: `from -> to` for every flag of one face.
#[derive(Debug)]
struct FaceFlags<V> {
    /// Label of the `to` end of the first flag declared for this face
    entry: V,
    next: HashMap<V, V>,
}

/// Transient label tables for one operator invocation.
#[derive(Debug)]
pub struct FlagAssembler<V, F> {
    /// Vertex labels in declaration order
    vertex_labels: Vec<V>,
    vertex_index: HashMap<V, usize>,
    positions: Vec<DVec3>,
    /// Face labels in first-seen order
    face_labels: Vec<F>,
    faces: HashMap<F, FaceFlags<V>>,
}

impl<V, F> Default for FlagAssembler<V, F>
where
    V: Hash + Eq + Clone,
    F: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, F> FlagAssembler<V, F>
where
    V: Hash + Eq + Clone,
    F: Hash + Eq + Clone,
{
    /// Creates an empty assembler.
    pub fn new() -> Self {
        Self {
            vertex_labels: Vec::new(),
            vertex_index: HashMap::new(),
            positions: Vec::new(),
            face_labels: Vec::new(),
            faces: HashMap::new(),
        }
    }

    /// Creates an assembler with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertex_labels: Vec::with_capacity(vertex_count),
            vertex_index: HashMap::with_capacity(vertex_count),
            positions: Vec::with_capacity(vertex_count),
            face_labels: Vec::with_capacity(face_count),
            faces: HashMap::with_capacity(face_count),
        }
    }

    /// Declares a vertex. Re-declaring an existing label keeps the first
    /// position.
    pub fn declare_vertex(&mut self, label: V, position: DVec3) {
        if self.vertex_index.contains_key(&label) {
            return;
        }
        self.vertex_index.insert(label.clone(), self.positions.len());
        self.vertex_labels.push(label);
        self.positions.push(position);
    }

    /// Declares the directed edge `from -> to` on `face`.
    ///
    /// Vertex labels may be declared before or after their flags. A second
    /// flag with the same `from` on the same face replaces the first.
    pub fn declare_flag(&mut self, face: F, from: V, to: V) {
        match self.faces.get_mut(&face) {
            Some(flags) => {
                flags.next.insert(from, to);
            }
            None => {
                self.face_labels.push(face.clone());
                let mut next = HashMap::new();
                next.insert(from, to.clone());
                self.faces.insert(face, FaceFlags { entry: to, next });
            }
        }
    }

    /// Number of vertices declared so far.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces with at least one flag.
    pub fn face_count(&self) -> usize {
        self.face_labels.len()
    }

    /// Numbers vertices and faces, walks every face cycle, and returns the
    /// polyhedron.
    ///
    /// # Errors
    ///
    /// Internal-consistency errors when a face walk references an undeclared
    /// vertex, dead-ends, or fails to close within as many steps as the face
    /// has flags. Limit errors when the output exceeds the configured size.
    pub fn assemble(mut self, name: impl Into<String>) -> Result<Polyhedron, MeshError> {
        if self.positions.len() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: self.positions.len(),
                max: MAX_VERTICES,
            });
        }
        if self.face_labels.len() > MAX_FACES {
            return Err(MeshError::TooManyFaces {
                count: self.face_labels.len(),
                max: MAX_FACES,
            });
        }

        let mut faces = Vec::with_capacity(self.face_labels.len());
        for (i, label) in self.face_labels.iter().enumerate() {
            let flags = self
                .faces
                .remove(label)
                .ok_or(MeshError::MissingFlag { face: i })?;
            faces.push(walk_face(i, &flags, &self.vertex_index)?);
        }

        Ok(Polyhedron::new(name, faces, self.positions))
    }
}

/// Follows `from -> to` links from the entry label until it recurs.
fn walk_face<V: Hash + Eq>(
    face: usize,
    flags: &FaceFlags<V>,
    vertex_index: &HashMap<V, usize>,
) -> Result<Vec<usize>, MeshError> {
    let steps = flags.next.len();
    let mut cycle = Vec::with_capacity(steps);
    let mut current = &flags.entry;

    loop {
        let index = *vertex_index
            .get(current)
            .ok_or(MeshError::UndeclaredVertex { face })?;
        cycle.push(index);
        current = flags.next.get(current).ok_or(MeshError::MissingFlag { face })?;
        if current == &flags.entry {
            return Ok(cycle);
        }
        if cycle.len() >= steps {
            return Err(MeshError::OpenFace { face, steps });
        }
    }
}
