//! Configuration and settings-line errors.

use crate::builder::BuildError;
use crate::core::PermutationError;
use crate::machine::ConfigError;
use thiserror::Error;

/// Errors raised while reading a machine description or a settings line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The description ended before a required field
    #[error("Configuration file truncated: expected {0}")]
    Truncated(&'static str),

    #[error("Expected the number of {field}, found '{token}'")]
    InvalidCount { field: &'static str, token: String },

    #[error("Rotor '{rotor}' has unknown type '{token}'; expected M<notches>, N or R")]
    UnknownRotorType { rotor: String, token: String },

    #[error("Rotor '{0}' has no wiring cycles")]
    MissingCycles(String),

    /// JSON description could not be decoded
    #[error("Deserialization failed: {0}")]
    Json(String),

    #[error("Settings line must start with '*'")]
    NotASettingsLine,

    #[error("Settings line needs {expected} rotor names and a setting, found {found} fields")]
    IncompleteSettings { expected: usize, found: usize },

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid plugboard: {0}")]
    Plugboard(#[from] PermutationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_errors_convert() {
        let err: ParseError = ConfigError::NoRotorsInserted.into();
        assert_eq!(err, ParseError::Config(ConfigError::NoRotorsInserted));

        let err: ParseError = BuildError::MissingAlphabet.into();
        assert_eq!(err.to_string(), BuildError::MissingAlphabet.to_string());
    }

    #[test]
    fn messages_are_descriptive() {
        let err = ParseError::InvalidCount {
            field: "pawls",
            token: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Expected the number of pawls, found 'x'");
    }
}
