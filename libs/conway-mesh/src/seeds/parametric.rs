//! # Parametric Seeds
//!
//! Prisms, antiprisms and pyramids over a regular n-gon.
//!
//! These functions return raw geometry. [`super::build`] applies the
//! relaxation each family needs.

use crate::mesh::Polyhedron;
use config::constants::{PYRAMID_APEX_Z, PYRAMID_BASE_Z};
use glam::DVec3;
use std::f64::consts::TAU;

/// `[n - 1, ..., 1, 0]`: the top cap, clockwise from above.
fn descending(n: usize) -> Vec<usize> {
    (0..n).rev().collect()
}

/// Ring of `n` points at angle offset `phase` (in steps), radius `r` and
/// height `z`.
fn ring(n: usize, phase: f64, r: f64, z: f64) -> impl Iterator<Item = DVec3> {
    let theta = TAU / n as f64;
    (0..n).map(move |i| {
        let angle = (i as f64 + phase) * theta;
        DVec3::new(r * angle.cos(), r * angle.sin(), z)
    })
}

/// Prism `Pn`: two n-gon caps at `z = ±sin(π/n)` joined by `n` squares.
pub fn prism(n: usize) -> Polyhedron {
    let theta = TAU / n as f64;
    let h = (theta / 2.0).sin();

    let vertices = ring(n, 0.0, 1.0, h).chain(ring(n, 0.0, 1.0, -h)).collect();

    let mut faces = Vec::with_capacity(n + 2);
    faces.push(descending(n));
    faces.push((n..2 * n).collect());
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, j + n, i + n]);
    }

    Polyhedron::new(format!("P{n}"), faces, vertices)
}

/// Antiprism `An`: two n-gon caps, the lower one rotated half a step,
/// joined by `2n` triangles.
///
/// Radius and height are scaled so edge midpoints, not vertices, lie on the
/// unit sphere.
pub fn antiprism(n: usize) -> Polyhedron {
    let theta = TAU / n as f64;
    let mut h = (1.0 - 4.0 / (4.0 + 2.0 * (theta / 2.0).cos() - 2.0 * theta.cos())).sqrt();
    let mut r = (1.0 - h * h).sqrt();
    let f = (h * h + (r * (theta / 2.0).cos()).powi(2)).sqrt();
    r /= f;
    h /= f;

    let vertices = ring(n, 0.0, r, h).chain(ring(n, 0.5, r, -h)).collect();

    let mut faces = Vec::with_capacity(2 * n + 2);
    faces.push(descending(n));
    faces.push((n..2 * n).collect());
    for i in 0..n {
        faces.push(vec![i, (i + 1) % n, i + n]);
        faces.push(vec![i, i + n, (n + i - 1) % n + n]);
    }

    Polyhedron::new(format!("A{n}"), faces, vertices)
}

/// Pyramid `Yn`: an n-gon base joined to one apex by `n` triangles.
///
/// The apex sits far below the base; the seed is only usable after
/// canonicalization.
pub fn pyramid(n: usize) -> Polyhedron {
    let vertices = ring(n, 0.0, 1.0, PYRAMID_BASE_Z)
        .chain(std::iter::once(DVec3::new(0.0, 0.0, PYRAMID_APEX_Z)))
        .collect();

    let mut faces = Vec::with_capacity(n + 1);
    faces.push(descending(n));
    for i in 0..n {
        faces.push(vec![i, (i + 1) % n, n]);
    }

    Polyhedron::new(format!("Y{n}"), faces, vertices)
}
