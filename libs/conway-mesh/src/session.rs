//! # Session
//!
//! Drives construction from notation and keeps the last result for reuse.
//!
//! ## Cache
//!
//! A session holds one slot: the most recently finished polyhedron and its
//! dual. A new notation is checked against it before anything is built:
//!
//! - same name as the cached polyhedron: returned as-is
//! - same name as the cached dual: the two are swapped
//! - cached name (or dual name) is a suffix: construction resumes from it,
//!   preferring the longer of the two matches
//! - otherwise: built from the seed
//!
//! Sessions are independent; nothing is shared between them.
//!
//! ## Example
//!
//! ```rust
//! use conway_mesh::Session;
//!
//! let mut session = Session::new();
//! let ambo = session.generate("aC").unwrap();
//! assert_eq!(ambo.polyhedron.vertex_count(), 12);
//!
//! // reuses the cached "aC" instead of rebuilding from the cube
//! let kis = session.generate("kaC").unwrap();
//! assert_eq!(kis.polyhedron.name, "kaC");
//! assert_eq!(session.stats().seeds_built, 1);
//! assert_eq!(session.stats().resumed, 1);
//! ```

use crate::error::{warn, MeshError};
use crate::mesh::Polyhedron;
use crate::ops;
use crate::seeds;
use crate::solver::Relaxed;
use config::constants::{ConfigError, GenerationConfig};
use conway_notation::{compile, Operation, Program, Token};
use std::mem;

/// Construction counters, for tuning and for checking cache behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Seeds constructed from scratch
    pub seeds_built: u64,
    /// Topological operators applied (dual swaps excluded)
    pub operators_applied: u64,
    /// Requests answered from the cache without building
    pub cache_hits: u64,
    /// Dual swaps, from the cache or from a `d` in the chain
    pub dual_swaps: u64,
    /// Constructions resumed from a cached suffix
    pub resumed: u64,
}

/// Result of one [`Session::generate`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub polyhedron: Polyhedron,
    /// `"<input> executed as <canonical>"`
    pub trace: String,
    /// Non-fatal warnings, in the order they were raised
    pub warnings: Vec<String>,
}

impl Generated {
    /// `"(F faces, E edges, V vertices)"`.
    pub fn summary(&self) -> String {
        self.polyhedron.summary()
    }
}

/// Construction context with a single-slot result cache.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cache: Option<Relaxed>,
    config: GenerationConfig,
    stats: SessionStats,
}

impl Session {
    /// Creates a session with the default relaxation settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with custom relaxation settings.
    pub fn with_config(config: GenerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Returns the relaxation settings.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Returns construction counters.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// The cached polyhedron, if any.
    pub fn current(&self) -> Option<&Polyhedron> {
        self.cache.as_ref().map(|c| &c.polyhedron)
    }

    /// The cached dual, if any.
    pub fn current_dual(&self) -> Option<&Polyhedron> {
        self.cache.as_ref().map(|c| &c.dual)
    }

    /// Drops the cached polyhedron and dual.
    pub fn clear(&mut self) {
        self.cache = None;
    }

    /// Compiles `notation` and builds its polyhedron.
    ///
    /// # Errors
    ///
    /// `MeshError::Notation` for rejected input; internal errors when an
    /// operator produces an inconsistent mesh. The cache is left untouched
    /// on error.
    pub fn generate(&mut self, notation: &str) -> Result<Generated, MeshError> {
        let compiled = compile(notation)?;
        let trace = compiled.trace();
        log::debug!("{trace}");

        // spans refer to the canonical notation, so only the text is kept
        let mut warnings = Vec::new();
        for diagnostic in compiled.program.diagnostics() {
            warn(&mut warnings, diagnostic.to_string());
        }
        let polyhedron = self.build(&compiled.program, &mut warnings)?;

        Ok(Generated {
            polyhedron,
            trace,
            warnings,
        })
    }

    /// Builds a compiled program, reusing the cache where possible.
    ///
    /// # Errors
    ///
    /// `DualNotMaterialized` when a `d` is reached before anything in the
    /// chain produced a dual, and any operator error.
    pub fn build(
        &mut self,
        program: &Program,
        warnings: &mut Vec<String>,
    ) -> Result<Polyhedron, MeshError> {
        let name = program.notation.as_str();

        if let Some(cache) = &mut self.cache {
            if cache.polyhedron.name == name {
                self.stats.cache_hits += 1;
                return Ok(cache.polyhedron.clone());
            }
            if cache.dual.name == name {
                log::debug!("Swapping {} with its dual", cache.polyhedron.name);
                mem::swap(&mut cache.polyhedron, &mut cache.dual);
                self.stats.cache_hits += 1;
                self.stats.dual_swaps += 1;
                return Ok(cache.polyhedron.clone());
            }
        }

        let (mut current, mut dual, pending) = match self.resume_point(program) {
            Some((polyhedron, dual, pending)) => {
                log::debug!("Extending {}", polyhedron.name);
                self.stats.resumed += 1;
                (polyhedron, Some(dual), pending)
            }
            None => {
                let (polyhedron, dual) = seeds::build(program.seed, &self.config, warnings)?;
                self.stats.seeds_built += 1;
                (polyhedron, dual, program.operations.as_slice())
            }
        };

        for token in pending.iter().rev() {
            match token.operation {
                Operation::Dual => {
                    let swapped = dual.take().ok_or_else(|| MeshError::DualNotMaterialized {
                        name: current.name.clone(),
                    })?;
                    log::debug!("Swapping {} with its dual", current.name);
                    dual = Some(mem::replace(&mut current, swapped));
                    self.stats.dual_swaps += 1;
                }
                operation => {
                    let relaxed = ops::apply(operation, current, &self.config, warnings)?;
                    current = relaxed.polyhedron;
                    dual = Some(relaxed.dual);
                    self.stats.operators_applied += 1;
                }
            }
        }

        if let Some(dual) = dual {
            self.cache = Some(Relaxed {
                polyhedron: current.clone(),
                dual,
            });
        }
        Ok(current)
    }

    /// Longest cached name that ends `program` on a token boundary, as the
    /// starting polyhedron, its dual, and the tokens still to apply.
    fn resume_point<'p>(
        &self,
        program: &'p Program,
    ) -> Option<(Polyhedron, Polyhedron, &'p [Token])> {
        let cache = self.cache.as_ref()?;
        let notation = program.notation.as_str();

        let pending = |name: &str| -> Option<&'p [Token]> {
            if name.is_empty() || !notation.ends_with(name) {
                return None;
            }
            let boundary = notation.len() - name.len();
            let split = if boundary == program.seed_span.start() {
                program.operations.len()
            } else {
                program
                    .operations
                    .iter()
                    .position(|token| token.span.start() == boundary)?
            };
            Some(&program.operations[..split])
        };

        let from_current = pending(&cache.polyhedron.name);
        let from_dual = pending(&cache.dual.name);
        match (from_current, from_dual) {
            (Some(a), Some(b)) if b.len() < a.len() => {
                Some((cache.dual.clone(), cache.polyhedron.clone(), b))
            }
            (Some(a), _) => Some((cache.polyhedron.clone(), cache.dual.clone(), a)),
            (None, Some(b)) => Some((cache.dual.clone(), cache.polyhedron.clone(), b)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway_notation::Seed;

    #[test]
    fn test_same_notation_is_a_cache_hit() {
        let mut session = Session::new();
        let first = session.generate("kP5").unwrap();
        let second = session.generate("kP5").unwrap();
        assert_eq!(first.polyhedron, second.polyhedron);
        assert_eq!(session.stats().cache_hits, 1);
        assert_eq!(session.stats().seeds_built, 1);
    }

    #[test]
    fn test_zero_kis_selector_is_a_cache_hit() {
        for (notation, canonical) in [("k0C", "k0C"), ("t0C", "dk0O")] {
            let mut session = Session::new();
            let first = session.generate(notation).unwrap();
            assert_eq!(first.polyhedron.name, canonical);
            session.generate(notation).unwrap();
            assert_eq!(session.stats().seeds_built, 1, "{notation}");
            assert_eq!(session.stats().cache_hits, 1, "{notation}");
        }
    }

    #[test]
    fn test_alias_hits_the_same_cache_entry() {
        let mut session = Session::new();
        session.generate("dkdA4").unwrap();
        let truncated = session.generate("tA4").unwrap();
        assert_eq!(truncated.trace, "tA4 executed as dkdA4");
        assert_eq!(truncated.polyhedron.name, "dkdA4");
        assert_eq!(session.stats().cache_hits, 1);
    }

    #[test]
    fn test_dual_name_swaps() {
        let mut session = Session::new();
        let kis = session.generate("kC").unwrap();
        let dual = session.generate("dkC").unwrap();
        assert_eq!(dual.polyhedron.name, "dkC");
        assert_eq!(dual.polyhedron.face_count(), kis.polyhedron.vertex_count());
        assert_eq!(session.stats().dual_swaps, 1);
        assert_eq!(session.stats().seeds_built, 1);
        assert_eq!(session.current_dual().unwrap().name, "kC");
    }

    #[test]
    fn test_dual_of_cached_result_is_reused() {
        let mut session = Session::new();
        session.generate("aC").unwrap();
        let result = session.generate("daC").unwrap();
        assert_eq!(result.polyhedron.name, "daC");
        assert_eq!(result.polyhedron.face_count(), 12);
        assert_eq!(result.polyhedron.vertex_count(), 14);
        let stats = session.stats();
        assert_eq!(stats.seeds_built, 1);
        assert_eq!(stats.operators_applied, 1);
        assert_eq!(stats.cache_hits, 1);
    }

    #[test]
    fn test_suffix_resumes_from_cache() {
        let mut session = Session::new();
        session.generate("aC").unwrap();
        let result = session.generate("gaC").unwrap();
        assert_eq!(result.polyhedron.name, "gaC");
        let stats = session.stats();
        assert_eq!(stats.seeds_built, 1);
        assert_eq!(stats.resumed, 1);
        assert_eq!(stats.operators_applied, 2);
    }

    #[test]
    fn test_longer_suffix_wins() {
        let mut session = Session::new();
        session.generate("gkP5").unwrap();
        // both "gkP5" and its dual "dgkP5" end the new notation
        let result = session.generate("kdgkP5").unwrap();
        assert_eq!(result.polyhedron.name, "kdgkP5");
        assert_eq!(session.stats().resumed, 1);
        assert_eq!(session.stats().dual_swaps, 0);
        assert_eq!(session.stats().operators_applied, 3);
    }

    #[test]
    fn test_resume_from_bare_seed() {
        let mut session = Session::new();
        session.generate("P5").unwrap();
        assert_eq!(session.current().unwrap().name, "P5");
        session.generate("aP5").unwrap();
        assert_eq!(session.stats().resumed, 1);
        assert_eq!(session.stats().seeds_built, 1);

        // "aP15" ends in "5" but not in any cached name
        session.generate("aP15").unwrap();
        assert_eq!(session.stats().resumed, 1);
        assert_eq!(session.stats().seeds_built, 2);
    }

    #[test]
    fn test_dual_marker_after_relaxation() {
        let mut session = Session::new();
        let result = session.generate("dgC").unwrap();
        assert_eq!(result.polyhedron.name, "dgC");
        assert_eq!(result.polyhedron.face_count(), 38);
        assert_eq!(result.polyhedron.vertex_count(), 24);
        assert_eq!(session.stats().dual_swaps, 1);
    }

    #[test]
    fn test_dual_marker_without_materialized_dual() {
        let mut session = Session::new();
        let program = Program {
            notation: "dC".to_string(),
            seed: Seed::Cube,
            seed_span: conway_notation::Span::new(1, 2),
            operations: vec![Token {
                operation: Operation::Dual,
                span: conway_notation::Span::new(0, 1),
            }],
        };
        let mut warnings = Vec::new();
        let err = session.build(&program, &mut warnings).unwrap_err();
        assert_eq!(err, MeshError::DualNotMaterialized { name: "C".into() });
        assert!(!err.is_internal());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_platonic_seed_leaves_cache_untouched() {
        let mut session = Session::new();
        session.generate("aC").unwrap();
        session.generate("I").unwrap();
        assert_eq!(session.current().unwrap().name, "aC");
    }

    #[test]
    fn test_small_kis_selector_warns_twice() {
        let mut session = Session::new();
        let result = session.generate("k2C").unwrap();
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("of 2"));
        assert_eq!(result.warnings[1], "No 2-fold components were found");
    }

    #[test]
    fn test_notation_errors_pass_through() {
        let mut session = Session::new();
        let err = session.generate("kQ").unwrap_err();
        assert!(matches!(err, MeshError::Notation(_)));
        assert!(!err.is_internal());
    }

    #[test]
    fn test_with_config_rejects_zero_canonicalize() {
        let config = GenerationConfig {
            canonicalize_iterations: 0,
            ..GenerationConfig::default()
        };
        assert!(Session::with_config(config).is_err());
    }
}
