//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::rotor::RotorBuilder;
use crate::core::{Alphabet, Rotor};
use crate::machine::Machine;
use std::sync::Arc;

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use enigma::builder::{MachineBuilder, RotorBuilder};
/// use enigma::core::Alphabet;
///
/// let machine = MachineBuilder::new()
///     .alphabet(Alphabet::default())
///     .slots(3)
///     .pawls(1)
///     .rotor(RotorBuilder::new().name("B").reflector().cycles(
///         "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
///     ))
///     .unwrap()
///     .rotor(RotorBuilder::new().name("Beta").fixed().cycles("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)"))
///     .unwrap()
///     .rotor(RotorBuilder::new().name("I").moving("Q").cycles(
///         "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)",
///     ))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.num_rotors(), 3);
/// assert_eq!(machine.catalog().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    alphabet: Option<Arc<Alphabet>>,
    slots: Option<usize>,
    pawls: Option<usize>,
    rotors: Vec<Rotor>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alphabet (required, and before any `.rotor(..)`).
    pub fn alphabet(mut self, alphabet: impl Into<Arc<Alphabet>>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    /// Set the number of rotor slots, reflector included (required).
    pub fn slots(mut self, n: usize) -> Self {
        self.slots = Some(n);
        self
    }

    /// Set the number of pawls (required).
    pub fn pawls(mut self, n: usize) -> Self {
        self.pawls = Some(n);
        self
    }

    /// Add a rotor using a builder.
    /// Returns an error if the builder fails validation.
    pub fn rotor(mut self, builder: RotorBuilder) -> Result<Self, BuildError> {
        let alphabet = self.alphabet.as_ref().ok_or(BuildError::MissingAlphabet)?;
        let rotor = builder.build(alphabet)?;
        self.rotors.push(rotor);
        Ok(self)
    }

    /// Add a pre-built rotor.
    pub fn add_rotor(mut self, rotor: Rotor) -> Self {
        self.rotors.push(rotor);
        self
    }

    /// Add multiple rotors at once.
    pub fn rotors(mut self, rotors: Vec<Rotor>) -> Self {
        self.rotors.extend(rotors);
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or the catalog is
    /// inconsistent.
    pub fn build(self) -> Result<Machine, BuildError> {
        let alphabet = self.alphabet.ok_or(BuildError::MissingAlphabet)?;
        let slots = self.slots.ok_or(BuildError::MissingSlotCount)?;
        let pawls = self.pawls.ok_or(BuildError::MissingPawlCount)?;
        Machine::new(alphabet, slots, pawls, self.rotors)
    }
}
