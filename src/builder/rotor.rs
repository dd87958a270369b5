//! Builder for constructing rotors.

use crate::builder::error::BuildError;
use crate::core::{Alphabet, Permutation, Rotor, RotorKind};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
enum PendingKind {
    Reflector,
    Fixed,
    Moving(String),
}

/// Builder for constructing rotors with a fluent API.
///
/// Notches and wiring are given as symbols and resolved against the
/// machine alphabet when the rotor is built.
#[derive(Clone, Debug, Default)]
pub struct RotorBuilder {
    name: Option<String>,
    kind: Option<PendingKind>,
    cycles: Option<String>,
}

impl RotorBuilder {
    /// Create a new rotor builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rotor name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Make this rotor a reflector.
    pub fn reflector(mut self) -> Self {
        self.kind = Some(PendingKind::Reflector);
        self
    }

    /// Make this rotor a non-rotating wheel.
    pub fn fixed(mut self) -> Self {
        self.kind = Some(PendingKind::Fixed);
        self
    }

    /// Make this rotor rotate, with a notch at every symbol of `notches`.
    pub fn moving(mut self, notches: impl Into<String>) -> Self {
        self.kind = Some(PendingKind::Moving(notches.into()));
        self
    }

    /// Set the wiring in cycle notation (required).
    pub fn cycles(mut self, cycles: impl Into<String>) -> Self {
        self.cycles = Some(cycles.into());
        self
    }

    /// Name this builder was given, if any.
    pub fn rotor_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Build the rotor over `alphabet`.
    pub fn build(self, alphabet: &Arc<Alphabet>) -> Result<Rotor, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        let kind = self
            .kind
            .ok_or_else(|| BuildError::MissingKind(name.clone()))?;
        let cycles = self
            .cycles
            .ok_or_else(|| BuildError::MissingWiring(name.clone()))?;

        let wiring =
            Permutation::parse(&cycles, alphabet.clone()).map_err(|source| BuildError::Wiring {
                rotor: name.clone(),
                source,
            })?;

        let kind = match kind {
            PendingKind::Reflector => RotorKind::Reflector,
            PendingKind::Fixed => RotorKind::Fixed,
            PendingKind::Moving(symbols) => {
                if symbols.is_empty() {
                    return Err(BuildError::MissingNotch(name));
                }
                let notches = symbols
                    .chars()
                    .map(|c| alphabet.to_index(c))
                    .collect::<Option<Vec<usize>>>()
                    .ok_or_else(|| BuildError::InvalidNotch(name.clone()))?;
                RotorKind::Moving { notches }
            }
        };

        Ok(Rotor::new(name, wiring, kind))
    }
}
