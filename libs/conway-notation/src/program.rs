//! # Programs
//!
//! Typed form of a canonical notation string: one seed plus the operator
//! tokens in front of it.
//!
//! Operators apply right to left: the token nearest the seed runs first.
//!
//! ```rust
//! use conway_notation::{Operation, Program, Seed};
//!
//! let program = Program::parse("k3aC").unwrap();
//! assert_eq!(program.seed, Seed::Cube);
//! let applied: Vec<_> = program.application_order().map(|t| t.operation).collect();
//! assert_eq!(applied, vec![Operation::Ambo, Operation::Kis { sides: Some(3) }]);
//! ```

use crate::diagnostic::Diagnostic;
use crate::error::NotationError;
use crate::span::Span;
use crate::validate::{check_sides, is_fixed_seed, is_parametric_seed, parse_number, skip_digits};
use config::constants::MIN_KIS_SIDES;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// SEED
// =============================================================================

/// A primitive polyhedron that starts a construction chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seed {
    Tetrahedron,
    Octahedron,
    Cube,
    Icosahedron,
    Dodecahedron,
    /// Two n-gon caps joined by squares.
    Prism(u32),
    /// Two offset n-gon caps joined by triangles.
    Antiprism(u32),
    /// An n-gon base joined to one apex.
    Pyramid(u32),
}

impl Seed {
    /// Notation letter for this seed.
    pub fn symbol(&self) -> char {
        match self {
            Seed::Tetrahedron => 'T',
            Seed::Octahedron => 'O',
            Seed::Cube => 'C',
            Seed::Icosahedron => 'I',
            Seed::Dodecahedron => 'D',
            Seed::Prism(_) => 'P',
            Seed::Antiprism(_) => 'A',
            Seed::Pyramid(_) => 'Y',
        }
    }

    /// Side count of a parametric seed.
    pub fn sides(&self) -> Option<u32> {
        match self {
            Seed::Prism(n) | Seed::Antiprism(n) | Seed::Pyramid(n) => Some(*n),
            _ => None,
        }
    }

    fn parse(symbol: char, sides: Option<u32>) -> Option<Self> {
        let seed = match (symbol, sides) {
            ('T', None) => Seed::Tetrahedron,
            ('O', None) => Seed::Octahedron,
            ('C', None) => Seed::Cube,
            ('I', None) => Seed::Icosahedron,
            ('D', None) => Seed::Dodecahedron,
            ('P', Some(n)) => Seed::Prism(n),
            ('A', Some(n)) => Seed::Antiprism(n),
            ('Y', Some(n)) => Seed::Pyramid(n),
            _ => return None,
        };
        Some(seed)
    }
}

impl fmt::Display for Seed {
    /// Writes the seed's notation, e.g. `C` or `P5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sides() {
            Some(n) => write!(f, "{}{}", self.symbol(), n),
            None => write!(f, "{}", self.symbol()),
        }
    }
}

// =============================================================================
// OPERATION
// =============================================================================

/// A primitive operator of the canonical notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Raise a pyramid on faces with `sides` sides, or on every face when
    /// `sides` is `None` or `Some(0)`.
    Kis { sides: Option<u32> },
    Ambo,
    Gyro,
    Propellor,
    /// Swap the current polyhedron with its materialized dual.
    Dual,
    Canonicalize,
    Reflect,
}

impl Operation {
    /// Notation letter for this operation.
    pub fn symbol(&self) -> char {
        match self {
            Operation::Kis { .. } => 'k',
            Operation::Ambo => 'a',
            Operation::Gyro => 'g',
            Operation::Propellor => 'p',
            Operation::Dual => 'd',
            Operation::Canonicalize => 'c',
            Operation::Reflect => 'r',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        let op = match symbol {
            'k' => Operation::Kis { sides: None },
            'a' => Operation::Ambo,
            'g' => Operation::Gyro,
            'p' => Operation::Propellor,
            'd' => Operation::Dual,
            'c' => Operation::Canonicalize,
            'r' => Operation::Reflect,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Kis { sides: Some(n) } => write!(f, "k{n}"),
            other => write!(f, "{}", other.symbol()),
        }
    }
}

/// An operation together with its place in the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub operation: Operation,
    pub span: Span,
}

impl Token {
    /// Warning for an explicit kis selector that no real face can match.
    ///
    /// A selector of `0` means "all faces" and is still reported, since the
    /// intent is ambiguous.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self.operation {
            Operation::Kis { sides: Some(n) } if n < MIN_KIS_SIDES => Some(
                Diagnostic::warning(
                    format!("A kis selector of {n} makes no sense, but looking anyway"),
                    self.span,
                )
                .with_hint(format!("faces need at least {MIN_KIS_SIDES} sides")),
            ),
            _ => None,
        }
    }
}

/// Tokenizes a run of canonical operators (no seed).
///
/// `offset` is the byte position of `text` inside the full notation, so
/// spans stay meaningful when only a prefix is tokenized.
///
/// # Example
///
/// ```rust
/// use conway_notation::{parse_operations, Operation};
///
/// let tokens = parse_operations("dk5a", 0).unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].operation, Operation::Kis { sides: Some(5) });
/// ```
pub fn parse_operations(text: &str, offset: usize) -> Result<Vec<Token>, NotationError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::with_capacity(bytes.len());
    let mut pos = 0;

    while pos < bytes.len() {
        let symbol = bytes[pos] as char;
        let mut operation = Operation::from_symbol(symbol).ok_or_else(|| {
            NotationError::IllFormed {
                notation: text.to_string(),
            }
        })?;
        let start = pos;
        let digits_start = pos + 1;
        pos = skip_digits(bytes, digits_start);

        if pos > digits_start {
            let span = Span::new(offset + digits_start, offset + pos);
            match &mut operation {
                Operation::Kis { sides } => {
                    *sides = Some(parse_number(&text[digits_start..pos], span)?);
                }
                _ => return Err(NotationError::UnexpectedArgument { op: symbol, span }),
            }
        }

        tokens.push(Token {
            operation,
            span: Span::new(offset + start, offset + pos),
        });
    }

    Ok(tokens)
}

// =============================================================================
// PROGRAM
// =============================================================================

/// A tokenized canonical notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// The canonical notation this program was parsed from.
    pub notation: String,
    pub seed: Seed,
    pub seed_span: Span,
    /// Operators in textual (left to right) order.
    pub operations: Vec<Token>,
}

impl Program {
    /// Parses a canonical notation string.
    ///
    /// Only primitive operators (`k a g p d c r`) are accepted; aliases must
    /// be rewritten first.
    pub fn parse(notation: &str) -> Result<Self, NotationError> {
        if notation.is_empty() {
            return Err(NotationError::Empty);
        }
        let ill_formed = || NotationError::IllFormed {
            notation: notation.to_string(),
        };

        let head = notation.trim_end_matches(|c: char| c.is_ascii_digit());
        let symbol = head.chars().next_back().ok_or_else(ill_formed)?;
        if !is_fixed_seed(symbol) && !is_parametric_seed(symbol) {
            return Err(ill_formed());
        }
        let seed_start = head.len() - symbol.len_utf8();

        let sides = if head.len() < notation.len() {
            let span = Span::new(head.len(), notation.len());
            let sides = parse_number(&notation[head.len()..], span)?;
            Some(check_sides(sides, span)?)
        } else {
            None
        };
        let seed = Seed::parse(symbol, sides).ok_or_else(ill_formed)?;

        let operations = parse_operations(&head[..seed_start], 0)?;

        Ok(Self {
            notation: notation.to_string(),
            seed,
            seed_span: Span::new(seed_start, notation.len()),
            operations,
        })
    }

    /// Operators in the order they are applied (rightmost first).
    pub fn application_order(&self) -> impl Iterator<Item = &Token> {
        self.operations.iter().rev()
    }

    /// Warnings found while tokenizing.
    ///
    /// Spans index into [`Program::notation`], the canonical form, which
    /// differs from the user's input whenever a rewrite rule fired.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.operations.iter().filter_map(Token::diagnostic).collect()
    }
}
