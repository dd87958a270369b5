//! Permutations of alphabet indices written in cycle notation.
//!
//! A permutation is described by text such as `"(AELTPHQXRU) (BKNW) (S)"`.
//! Whitespace is insignificant, every cycle is parenthesized, and symbols
//! that appear in no cycle map to themselves. Parsing validates the text
//! once and stores dense forward and inverse tables, so `permute` and
//! `invert` are plain lookups.

use super::alphabet::Alphabet;
use super::error::{CycleFault, PermutationError};
use std::fmt;
use std::sync::Arc;

/// A bijection over `0..alphabet.size()` built from disjoint cycles.
///
/// # Example
///
/// ```rust
/// use enigma::core::{Alphabet, Permutation};
/// use std::sync::Arc;
///
/// let alphabet = Arc::new(Alphabet::default());
/// let perm = Permutation::parse("(ABC) (XY)", alphabet).unwrap();
///
/// assert_eq!(perm.permute_symbol('A'), Some('B'));
/// assert_eq!(perm.permute_symbol('C'), Some('A'));
/// assert_eq!(perm.invert_symbol('A'), Some('C'));
/// assert_eq!(perm.permute_symbol('Q'), Some('Q'));
/// assert!(!perm.is_derangement());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    alphabet: Arc<Alphabet>,
    cycles: Vec<Vec<usize>>,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// Parse `cycles` against `alphabet`.
    ///
    /// Fails with [`PermutationError::MalformedCycle`] when the text names a
    /// symbol outside the alphabet, repeats a symbol, contains an empty
    /// cycle, has unbalanced parentheses, or has text outside a cycle.
    pub fn parse(cycles: &str, alphabet: Arc<Alphabet>) -> Result<Self, PermutationError> {
        let parsed = parse_cycles(cycles, &alphabet)?;
        let mut perm = Self::identity(alphabet);
        perm.extend(parsed)?;
        Ok(perm)
    }

    /// The permutation that maps every index to itself.
    pub fn identity(alphabet: Arc<Alphabet>) -> Self {
        let size = alphabet.size();
        Self {
            alphabet,
            cycles: Vec::new(),
            forward: (0..size).collect(),
            inverse: (0..size).collect(),
        }
    }

    /// Append the cycle `c0 -> c1 -> ... -> cm -> c0`, written as the bare
    /// symbols `c0c1...cm` (whitespace ignored).
    ///
    /// The new cycle must be disjoint from every existing cycle. On error
    /// the permutation is left unchanged.
    pub fn add_cycle(&mut self, cycle: &str) -> Result<(), PermutationError> {
        let mut indices = Vec::new();
        for symbol in cycle.chars().filter(|c| !c.is_whitespace()) {
            let index = self
                .alphabet
                .to_index(symbol)
                .ok_or(PermutationError::MalformedCycle(CycleFault::UnknownSymbol(symbol)))?;
            indices.push(index);
        }
        if indices.is_empty() {
            return Err(PermutationError::MalformedCycle(CycleFault::EmptyCycle));
        }
        self.extend(vec![indices])
    }

    fn extend(&mut self, cycles: Vec<Vec<usize>>) -> Result<(), PermutationError> {
        let mut seen = vec![false; self.size()];
        for &index in self.cycles.iter().flatten() {
            seen[index] = true;
        }
        for &index in cycles.iter().flatten() {
            if seen[index] {
                let symbol = self.symbol_at(index);
                return Err(PermutationError::MalformedCycle(CycleFault::RepeatedSymbol(
                    symbol,
                )));
            }
            seen[index] = true;
        }

        for cycle in &cycles {
            for (pos, &from) in cycle.iter().enumerate() {
                let to = cycle[(pos + 1) % cycle.len()];
                self.forward[from] = to;
                self.inverse[to] = from;
            }
        }
        self.cycles.extend(cycles);
        Ok(())
    }

    /// Size of the alphabet this permutation acts on.
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// Reduce `p` into `0..size()` using non-negative modulo.
    pub fn wrap(&self, p: i64) -> usize {
        p.rem_euclid(self.size() as i64) as usize
    }

    /// Apply the permutation to `p` modulo the alphabet size.
    pub fn permute(&self, p: usize) -> usize {
        self.forward[p % self.size()]
    }

    /// Apply the inverse permutation to `c` modulo the alphabet size.
    pub fn invert(&self, c: usize) -> usize {
        self.inverse[c % self.size()]
    }

    /// Apply the permutation to a symbol. `None` if the symbol is not in
    /// the alphabet.
    pub fn permute_symbol(&self, symbol: char) -> Option<char> {
        let index = self.alphabet.to_index(symbol)?;
        self.alphabet.to_symbol(self.permute(index))
    }

    /// Apply the inverse permutation to a symbol. `None` if the symbol is
    /// not in the alphabet.
    pub fn invert_symbol(&self, symbol: char) -> Option<char> {
        let index = self.alphabet.to_index(symbol)?;
        self.alphabet.to_symbol(self.invert(index))
    }

    /// True iff no index maps to itself.
    pub fn is_derangement(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &to)| i != to)
    }

    /// The alphabet this permutation was built over.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// The cycles as given, in index form. Implicit fixed points are absent.
    pub fn cycles(&self) -> &[Vec<usize>] {
        &self.cycles
    }

    fn symbol_at(&self, index: usize) -> char {
        self.alphabet.symbols()[index]
    }
}

/// Renders cycle notation, e.g. `(AE) (BN)`. Parsing the output yields an
/// equal permutation.
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, cycle) in self.cycles.iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            write!(f, "(")?;
            for &index in cycle {
                write!(f, "{}", self.symbol_at(index))?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

fn malformed(fault: CycleFault) -> PermutationError {
    PermutationError::MalformedCycle(fault)
}

/// Split cycle text into index cycles, checking membership and syntax.
/// Disjointness across cycles is checked by the caller.
fn parse_cycles(text: &str, alphabet: &Alphabet) -> Result<Vec<Vec<usize>>, PermutationError> {
    let mut cycles = Vec::new();
    let mut current: Option<Vec<usize>> = None;

    for symbol in text.chars() {
        match (symbol, current.as_mut()) {
            (c, _) if c.is_whitespace() => {}
            ('(', None) => current = Some(Vec::new()),
            ('(', Some(_)) => return Err(malformed(CycleFault::Unbalanced)),
            (')', None) => return Err(malformed(CycleFault::Unbalanced)),
            (')', Some(cycle)) => {
                if cycle.is_empty() {
                    return Err(malformed(CycleFault::EmptyCycle));
                }
                cycles.extend(current.take());
            }
            (c, None) => return Err(malformed(CycleFault::StrayText(c))),
            (c, Some(cycle)) => {
                let index = alphabet
                    .to_index(c)
                    .ok_or(malformed(CycleFault::UnknownSymbol(c)))?;
                if cycle.contains(&index) {
                    return Err(malformed(CycleFault::RepeatedSymbol(c)));
                }
                cycle.push(index);
            }
        }
    }

    if current.is_some() {
        return Err(malformed(CycleFault::Unbalanced));
    }
    Ok(cycles)
}
