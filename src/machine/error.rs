//! Errors raised while configuring a machine or converting messages.

use thiserror::Error;

/// Errors from configuration calls: seating rotors, setting positions and
/// rings, installing a plugboard or restoring a snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Expected {expected} rotors, got {found}")]
    WrongRotorCount { expected: usize, found: usize },

    #[error("Rotor '{0}' named more than once")]
    DuplicateRotor(String),

    #[error("Rotor '{0}' does not exist")]
    UnknownRotor(String),

    #[error("The leftmost rotor must be a reflector, but '{0}' is not")]
    InvalidReflectorPosition(String),

    #[error("No rotors have been inserted")]
    NoRotorsInserted,

    #[error("Setting too short: expected {expected} symbols, got {found}")]
    SettingTooShort { expected: usize, found: usize },

    #[error("Setting too long: expected {expected} symbols, got {found}")]
    SettingTooLong { expected: usize, found: usize },

    #[error("Setting symbol '{0}' is not in the alphabet")]
    InvalidSettingSymbol(char),

    #[error("Permutation alphabet does not match the machine alphabet")]
    AlphabetMismatch,

    #[error("Snapshot does not fit this machine: {0}")]
    SnapshotMismatch(String),
}

/// Errors from converting input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Message character '{0}' is not in the alphabet")]
    InvalidCharacter(char),

    #[error("No rotors have been inserted")]
    NoRotorsInserted,
}
