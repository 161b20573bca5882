//! # Config Crate
//!
//! Centralized configuration constants for the Conway polyhedron pipeline.
//! All magic numbers and tunable parameters are defined here so the
//! notation compiler and the mesh engine agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GenerationConfig, MIN_SEED_SIDES, EPSILON};
//!
//! // Seeds need at least a triangle
//! assert_eq!(MIN_SEED_SIDES, 3);
//!
//! // Runtime snapshot of the relaxation iteration counts
//! let cfg = GenerationConfig::default();
//! assert_eq!(cfg.canonicalize_iterations, 10);
//!
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Faithful Defaults**: Iteration counts match the classic Conway-notation generator
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
