//! Violation errors and handling strategies.

use thiserror::Error;

/// Layout problems found when enforcing rules against seated rotors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViolationError {
    #[error("Reflector '{rotor}' maps {symbol} to itself")]
    ReflectorNotDerangement { rotor: String, symbol: char },

    #[error("Reflector '{rotor}' is seated in slot {slot}; only slot 0 may hold a reflector")]
    ReflectorOutsideFirstSlot { rotor: String, slot: usize },

    #[error("Moving rotor '{rotor}' in slot {slot} is not under a pawl")]
    MovingRotorOutsidePawls { rotor: String, slot: usize },

    #[error("Rotor '{rotor}' in pawl slot {slot} cannot rotate")]
    StaticRotorInPawlSlot { rotor: String, slot: usize },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Strategy for handling enforcement violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationStrategy {
    /// Reject the configuration
    #[default]
    Abort,

    /// Keep the configuration but log a warning
    IgnoreAndLog,
}
