//! Ordered symbol sets mapped onto dense indices.

use super::error::AlphabetError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Symbols that carry meaning in cycle text and settings lines.
const RESERVED: [char; 3] = ['(', ')', '*'];

/// Immutable ordered set of distinct symbols.
///
/// Every symbol is assigned the index of its position, so `to_index` and
/// `to_symbol` are mutual inverses over `0..size()`.
///
/// # Example
///
/// ```rust
/// use enigma::core::Alphabet;
///
/// let alphabet = Alphabet::new("ABCD").unwrap();
/// assert_eq!(alphabet.size(), 4);
/// assert_eq!(alphabet.to_index('C'), Some(2));
/// assert_eq!(alphabet.to_symbol(2), Some('C'));
/// assert_eq!(alphabet.to_index('Z'), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
    indices: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from the symbols of `chars`, in order.
    pub fn new(chars: &str) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = chars.chars().collect();
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }

        let mut indices = HashMap::with_capacity(symbols.len());
        for (index, &symbol) in symbols.iter().enumerate() {
            if symbol.is_whitespace() || RESERVED.contains(&symbol) {
                return Err(AlphabetError::ReservedSymbol(symbol));
            }
            if indices.insert(symbol, index).is_some() {
                return Err(AlphabetError::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols, indices })
    }

    /// Number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Whether `symbol` belongs to this alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.indices.contains_key(&symbol)
    }

    /// Index of `symbol`, if it is a member.
    pub fn to_index(&self, symbol: char) -> Option<usize> {
        self.indices.get(&symbol).copied()
    }

    /// Symbol at `index`, if it is in range.
    pub fn to_symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// All symbols in index order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

/// The 26 upper-case Latin letters.
impl Default for Alphabet {
    fn default() -> Self {
        let symbols: Vec<char> = ('A'..='Z').collect();
        let indices = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { symbols, indices }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(chars: String) -> Result<Self, Self::Error> {
        Alphabet::new(&chars)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}
