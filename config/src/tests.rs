//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// NOTATION TESTS
// =============================================================================

#[test]
fn test_min_seed_sides_is_triangle() {
    assert_eq!(MIN_SEED_SIDES, 3);
    assert_eq!(MIN_KIS_SIDES, MIN_SEED_SIDES);
}

#[test]
fn test_seed_side_bounds_are_ordered() {
    assert!(MAX_SEED_SIDES > MIN_SEED_SIDES);
}

// =============================================================================
// CONSTRUCTION TESTS
// =============================================================================

#[test]
fn test_interior_weight_is_asymmetric() {
    // A weight of exactly 0.5 would make (v1, v2) and (v2, v1) coincide
    assert!((INTERIOR_POINT_WEIGHT - 0.5).abs() > 0.1);
    assert!(INTERIOR_POINT_WEIGHT < 1.0);
}

#[test]
fn test_pyramid_apex_below_base() {
    assert!(PYRAMID_APEX_Z < PYRAMID_BASE_Z);
}

// =============================================================================
// RELAXATION TESTS
// =============================================================================

#[test]
fn test_canonicalize_runs_longest() {
    for light in [
        KIS_ITERATIONS,
        AMBO_ITERATIONS,
        GYRO_ITERATIONS,
        PROPELLOR_ITERATIONS,
        REFLECT_ITERATIONS,
        PRISM_ITERATIONS,
        PYRAMID_ITERATIONS,
    ] {
        assert!(light < CANONICALIZE_ITERATIONS);
    }
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(1e-9));
}
