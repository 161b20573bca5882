//! # Vector Helpers
//!
//! Small geometric helpers shared by operators and the relaxation solver.

use crate::error::warn;
use config::constants::{approx_zero, INTERIOR_POINT_WEIGHT};
use glam::DVec3;

/// Normalizes `v`, or returns it unchanged with a warning when its length
/// is zero to within `EPSILON`. Short but nonzero vectors are normalized.
pub fn unit_or_warn(v: DVec3, warnings: &mut Vec<String>) -> DVec3 {
    let length = v.length();
    if approx_zero(length) {
        warn(warnings, "Normalizing a zero-length vector, probable bug");
        return v;
    }
    v / length
}

/// Asymmetric point on edge `a -> b`, nearer `a`.
///
/// `interior_point(a, b) != interior_point(b, a)`; gyro and propellor rely on
/// that to twist.
#[inline]
pub fn interior_point(a: DVec3, b: DVec3) -> DVec3 {
    a * INTERIOR_POINT_WEIGHT + b * (1.0 - INTERIOR_POINT_WEIGHT)
}

/// Inversion in the unit sphere.
#[inline]
pub fn reciprocal(v: DVec3) -> DVec3 {
    v / v.length_squared()
}

/// Foot of the perpendicular from the origin to the line through `a` and `b`.
#[inline]
pub fn tangent_point(a: DVec3, b: DVec3) -> DVec3 {
    let d = b - a;
    a - d * (d.dot(a) / d.length_squared())
}

/// Distance from the origin to the line through `a` and `b`.
#[inline]
pub fn edge_distance(a: DVec3, b: DVec3) -> f64 {
    tangent_point(a, b).length()
}

/// Unnormalized normal of the corner `a -> b -> c`.
#[inline]
pub fn corner_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (b - c).cross(a - b)
}

/// First element shared by all three slices.
pub fn intersect(first: &[usize], second: &[usize], third: &[usize]) -> Option<usize> {
    first
        .iter()
        .copied()
        .find(|v| second.contains(v) && third.contains(v))
}
