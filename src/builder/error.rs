//! Build errors for rotor and machine builders.

use crate::core::{AlphabetError, PermutationError};
use thiserror::Error;

/// Errors that can occur when building rotors and machines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Alphabet not specified. Call .alphabet(..) before adding rotors or building")]
    MissingAlphabet,

    #[error("Rotor name not specified. Call .name(name)")]
    MissingName,

    #[error("Rotor kind not specified for '{0}'. Call .reflector(), .fixed() or .moving(notches)")]
    MissingKind(String),

    #[error("Rotor wiring not specified for '{0}'. Call .cycles(text)")]
    MissingWiring(String),

    #[error("Slot count not specified. Call .slots(n)")]
    MissingSlotCount,

    #[error("Pawl count not specified. Call .pawls(n)")]
    MissingPawlCount,

    #[error("A machine needs more than one rotor slot, got {0}")]
    InvalidSlotCount(usize),

    #[error("A machine with {num_rotors} slots can have at most {} pawls, got {pawls}", .num_rotors.saturating_sub(1))]
    InvalidPawlCount { pawls: usize, num_rotors: usize },

    #[error("Rotor '{0}' appears more than once in the catalog")]
    DuplicateCatalogRotor(String),

    #[error("Rotor '{0}' is wired over a different alphabet")]
    AlphabetMismatch(String),

    #[error("Moving rotor '{0}' needs at least one notch")]
    MissingNotch(String),

    #[error("Rotor '{0}' has a notch outside the alphabet")]
    InvalidNotch(String),

    #[error("Invalid wiring for rotor '{rotor}': {source}")]
    Wiring {
        rotor: String,
        #[source]
        source: PermutationError,
    },

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}
