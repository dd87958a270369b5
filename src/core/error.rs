//! Errors raised while building alphabets and permutations.

use thiserror::Error;

/// Errors that can occur when constructing an alphabet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("Alphabet must contain at least one symbol")]
    Empty,

    #[error("Symbol '{0}' appears more than once in the alphabet")]
    DuplicateSymbol(char),

    #[error("Symbol {0:?} is reserved and cannot be part of an alphabet")]
    ReservedSymbol(char),
}

/// What exactly is wrong with a cycle description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleFault {
    /// A cycle names a symbol outside the alphabet.
    UnknownSymbol(char),
    /// A symbol appears twice, within one cycle or across cycles.
    RepeatedSymbol(char),
    /// `()` with nothing inside.
    EmptyCycle,
    /// Parentheses do not pair up.
    Unbalanced,
    /// Non-whitespace text outside of any parentheses.
    StrayText(char),
}

/// Errors that can occur when constructing or extending a permutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PermutationError {
    #[error("Malformed cycle: {0}")]
    MalformedCycle(CycleFault),
}

impl std::fmt::Display for CycleFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleFault::UnknownSymbol(c) => write!(f, "symbol '{c}' is not in the alphabet"),
            CycleFault::RepeatedSymbol(c) => write!(f, "symbol '{c}' appears more than once"),
            CycleFault::EmptyCycle => write!(f, "empty cycle"),
            CycleFault::Unbalanced => write!(f, "unbalanced parentheses"),
            CycleFault::StrayText(c) => write!(f, "unexpected '{c}' outside a cycle"),
        }
    }
}
