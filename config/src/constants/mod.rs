//! # Configuration Constants
//!
//! Centralized values shared by the notation compiler and the mesh engine.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Notation**: Seed argument bounds and rewrite limits
//! - **Construction**: Fixed geometric constants used by operators and seeds
//! - **Relaxation**: Default iteration counts for planarization and canonicalization
//! - **Limits**: Maximum mesh sizes

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((1.0_f64 - (1.0 + 1e-11)).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// NOTATION CONSTANTS
// =============================================================================

/// Smallest side count accepted for the parametric seeds (`P`, `A`, `Y`).
///
/// # Examples
/// ```
/// use config::constants::MIN_SEED_SIDES;
/// assert_eq!(MIN_SEED_SIDES, 3);
/// ```
pub const MIN_SEED_SIDES: u32 = 3;

/// Largest side count accepted for the parametric seeds.
///
/// Safety limit so a typo such as `P99999999` cannot allocate a huge ring.
///
/// # Examples
/// ```
/// use config::constants::{MAX_SEED_SIDES, MIN_SEED_SIDES};
/// assert!(MAX_SEED_SIDES > MIN_SEED_SIDES);
/// ```
pub const MAX_SEED_SIDES: u32 = 10_000;

/// Smallest kis selector that can match a real face.
///
/// Smaller explicit selectors are accepted but reported as warnings.
pub const MIN_KIS_SIDES: u32 = 3;

/// Upper bound on full passes over the rewrite table.
///
/// The rule set terminates on its own; this only bounds the loop.
///
/// # Examples
/// ```
/// use config::constants::MAX_REWRITE_PASSES;
/// assert!(MAX_REWRITE_PASSES >= 8);
/// ```
pub const MAX_REWRITE_PASSES: usize = 64;

// =============================================================================
// CONSTRUCTION CONSTANTS
// =============================================================================

/// Weight of the near endpoint when placing an interior edge point.
///
/// `gyro` and `propellor` place a point at `w * v1 + (1 - w) * v2` for every
/// oriented edge `(v1, v2)`. The asymmetry gives those operators their twist.
///
/// # Examples
/// ```
/// use config::constants::INTERIOR_POINT_WEIGHT;
/// assert!(INTERIOR_POINT_WEIGHT > 0.5 && INTERIOR_POINT_WEIGHT < 1.0);
/// ```
pub const INTERIOR_POINT_WEIGHT: f64 = 0.7;

/// Height of the pyramid base ring.
pub const PYRAMID_BASE_Z: f64 = 0.2;

/// Height of the pyramid apex.
///
/// Deliberately far from canonical; the pyramid seed is canonicalized.
pub const PYRAMID_APEX_Z: f64 = -2.0;

// =============================================================================
// RELAXATION CONSTANTS
// =============================================================================

/// Planarization passes after `kis`.
pub const KIS_ITERATIONS: usize = 3;

/// Planarization passes after `ambo`.
pub const AMBO_ITERATIONS: usize = 2;

/// Planarization passes after `gyro`.
pub const GYRO_ITERATIONS: usize = 3;

/// Planarization passes after `propellor`.
pub const PROPELLOR_ITERATIONS: usize = 3;

/// Planarization passes after `reflect`.
pub const REFLECT_ITERATIONS: usize = 1;

/// Planarization passes for prism and antiprism seeds.
pub const PRISM_ITERATIONS: usize = 1;

/// Canonicalization passes for the pyramid seed.
pub const PYRAMID_ITERATIONS: usize = 3;

/// Canonicalization passes for the explicit `c` operator.
///
/// # Examples
/// ```
/// use config::constants::CANONICALIZE_ITERATIONS;
/// assert_eq!(CANONICALIZE_ITERATIONS, 10);
/// ```
pub const CANONICALIZE_ITERATIONS: usize = 10;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single polyhedron.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert!(MAX_VERTICES > 1000);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of faces in a single polyhedron.
pub const MAX_FACES: usize = 10_000_000;

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Immutable snapshot of the relaxation settings used by one session.
///
/// # Examples
/// ```
/// use config::constants::GenerationConfig;
/// let config = GenerationConfig::default();
/// assert_eq!(config.kis_iterations, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Planarization passes after `kis`.
    pub kis_iterations: usize,
    /// Planarization passes after `ambo`.
    pub ambo_iterations: usize,
    /// Planarization passes after `gyro`.
    pub gyro_iterations: usize,
    /// Planarization passes after `propellor`.
    pub propellor_iterations: usize,
    /// Planarization passes after `reflect`.
    pub reflect_iterations: usize,
    /// Planarization passes for prism and antiprism seeds.
    pub prism_iterations: usize,
    /// Canonicalization passes for the pyramid seed.
    pub pyramid_iterations: usize,
    /// Canonicalization passes for the explicit `c` operator.
    pub canonicalize_iterations: usize,
}

impl GenerationConfig {
    /// Builds a configuration with a custom canonicalize count, keeping the
    /// default planarization passes.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GenerationConfig;
    /// let cfg = GenerationConfig::new(25).expect("valid config");
    /// assert_eq!(cfg.canonicalize_iterations, 25);
    /// assert!(GenerationConfig::new(0).is_err());
    /// ```
    pub fn new(canonicalize_iterations: usize) -> Result<Self, ConfigError> {
        if canonicalize_iterations == 0 {
            return Err(ConfigError::InvalidIterations("canonicalize", 0));
        }
        Ok(Self {
            canonicalize_iterations,
            ..Self::default()
        })
    }

    /// Checks that every pass count is usable.
    ///
    /// Planarization counts may be zero (topology only, coordinates untouched);
    /// the pyramid and canonicalize counts may not, because their seeds are
    /// unusable without real correction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pyramid_iterations == 0 {
            return Err(ConfigError::InvalidIterations("pyramid", 0));
        }
        if self.canonicalize_iterations == 0 {
            return Err(ConfigError::InvalidIterations("canonicalize", 0));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            kis_iterations: KIS_ITERATIONS,
            ambo_iterations: AMBO_ITERATIONS,
            gyro_iterations: GYRO_ITERATIONS,
            propellor_iterations: PROPELLOR_ITERATIONS,
            reflect_iterations: REFLECT_ITERATIONS,
            prism_iterations: PRISM_ITERATIONS,
            pyramid_iterations: PYRAMID_ITERATIONS,
            canonicalize_iterations: CANONICALIZE_ITERATIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when a pass count that must be positive is zero.
    InvalidIterations(&'static str, usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidIterations(stage, value) => {
                write!(f, "{stage} iterations must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
