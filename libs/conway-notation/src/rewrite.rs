//! # Notation Rewriting
//!
//! Turns user notation into the canonical operator string the mesh engine
//! builds. The rule table is ordered and applied pass after pass over the
//! whole string until a full pass changes nothing.
//!
//! ## Rule groups (in table order)
//!
//! 1. Degenerate seeds: `P4 → C`, `A3 → O`, `Y3 → T`
//! 2. Aliases: `e → aa`, `b → ta`, `o → jj`, `m → kj`
//! 3. Dual sandwiches: `t(n) → dk(n)d`, `j → dad`, `s → dgd`
//! 4. Double dual: `dd → ∅`
//! 5. Dual-absorbing operators: `ad → a`, `gd → g`
//! 6. Symmetry coincidences and canonical spellings: `aY → A`, `dT → T`,
//!    `gT → D`, `aT → O`, `dC → O`, `dO → C`, `dI → D`, `dD → I`,
//!    `aO → aC`, `aI → aD`, `gO → gC`, `gI → gD`
//!
//! Later rules rely on earlier ones having fired within the same pass, so
//! the order of [`RULES`] is part of the contract.

use config::constants::MAX_REWRITE_PASSES;
use serde::Serialize;

/// What a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Every non-overlapping occurrence, scanning left to right.
    Literal(&'static str),
    /// Only an occurrence that ends the string.
    Suffix(&'static str),
    /// `t` followed by an optional run of digits; the digits are substituted
    /// for `{n}` in the replacement.
    Truncate,
}

/// One entry of the rewrite table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Short description used in traces.
    pub name: &'static str,
    pub pattern: Pattern,
    pub replacement: &'static str,
}

impl Rule {
    const fn literal(name: &'static str, from: &'static str, to: &'static str) -> Self {
        Self {
            name,
            pattern: Pattern::Literal(from),
            replacement: to,
        }
    }

    const fn suffix(name: &'static str, from: &'static str, to: &'static str) -> Self {
        Self {
            name,
            pattern: Pattern::Suffix(from),
            replacement: to,
        }
    }

    /// Applies the rule once over the whole string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conway_notation::rewrite::RULES;
    ///
    /// let truncate = RULES.iter().find(|r| r.name == "t(n) -> dk(n)d").unwrap();
    /// assert_eq!(truncate.apply("t5at3C"), "dk5dadk3dC");
    /// ```
    pub fn apply(&self, input: &str) -> String {
        match self.pattern {
            Pattern::Literal(from) => input.replace(from, self.replacement),
            Pattern::Suffix(from) => match input.strip_suffix(from) {
                Some(head) => format!("{head}{}", self.replacement),
                None => input.to_string(),
            },
            Pattern::Truncate => {
                let mut out = String::with_capacity(input.len() + 8);
                let mut chars = input.chars().peekable();
                while let Some(c) = chars.next() {
                    if c != 't' {
                        out.push(c);
                        continue;
                    }
                    let mut digits = String::new();
                    while let Some(d) = chars.next_if(|d| d.is_ascii_digit()) {
                        digits.push(d);
                    }
                    out.push_str(&self.replacement.replace("{n}", &digits));
                }
                out
            }
        }
    }
}

/// The ordered rewrite table.
pub const RULES: &[Rule] = &[
    // Degenerate parametric seeds
    Rule::suffix("P4 -> C", "P4", "C"),
    Rule::suffix("A3 -> O", "A3", "O"),
    Rule::suffix("Y3 -> T", "Y3", "T"),
    // Aliases
    Rule::literal("e -> aa", "e", "aa"),
    Rule::literal("b -> ta", "b", "ta"),
    Rule::literal("o -> jj", "o", "jj"),
    Rule::literal("m -> kj", "m", "kj"),
    // Dual sandwiches
    Rule {
        name: "t(n) -> dk(n)d",
        pattern: Pattern::Truncate,
        replacement: "dk{n}d",
    },
    Rule::literal("j -> dad", "j", "dad"),
    Rule::literal("s -> dgd", "s", "dgd"),
    // Dual is an involution
    Rule::literal("dd -> ", "dd", ""),
    // Ambo and gyro of a dual equal ambo and gyro of the original
    Rule::literal("ad -> a", "ad", "a"),
    Rule::literal("gd -> g", "gd", "g"),
    // Symmetry coincidences
    Rule::literal("aY -> A", "aY", "A"),
    Rule::literal("dT -> T", "dT", "T"),
    Rule::literal("gT -> D", "gT", "D"),
    Rule::literal("aT -> O", "aT", "O"),
    Rule::literal("dC -> O", "dC", "O"),
    Rule::literal("dO -> C", "dO", "C"),
    Rule::literal("dI -> D", "dI", "D"),
    Rule::literal("dD -> I", "dD", "I"),
    // Canonical spellings
    Rule::literal("aO -> aC", "aO", "aC"),
    Rule::literal("aI -> aD", "aI", "aD"),
    Rule::literal("gO -> gC", "gO", "gC"),
    Rule::literal("gI -> gD", "gI", "gD"),
];

/// Result of rewriting one notation string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rewrite {
    /// The notation as entered.
    pub input: String,
    /// The canonical notation.
    pub output: String,
    /// Names of the rules that changed the string, in firing order.
    pub applied: Vec<&'static str>,
}

impl Rewrite {
    /// Human-readable account of the rewrite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conway_notation::rewrite;
    ///
    /// assert_eq!(rewrite("tC").trace(), "tC executed as dkO");
    /// ```
    pub fn trace(&self) -> String {
        format!("{} executed as {}", self.input, self.output)
    }

    /// Returns true if no rule fired.
    pub fn is_unchanged(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Rewrites notation to its canonical operator string.
///
/// Does not validate; callers that need user-facing errors should run
/// [`validate`](crate::validate) first.
///
/// # Example
///
/// ```rust
/// use conway_notation::rewrite;
///
/// assert_eq!(rewrite("t3").output, rewrite("dk3d").output);
/// assert_eq!(rewrite("ddC").output, "C");
/// ```
pub fn rewrite(input: &str) -> Rewrite {
    let mut current = input.to_string();
    let mut applied = Vec::new();

    for _ in 0..MAX_REWRITE_PASSES {
        let before = current.clone();
        for rule in RULES {
            let next = rule.apply(&current);
            if next != current {
                applied.push(rule.name);
                current = next;
            }
        }
        if current == before {
            break;
        }
    }

    Rewrite {
        input: input.to_string(),
        output: current,
        applied,
    }
}
