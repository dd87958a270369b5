//! Context provided to enforcement checks.

use crate::core::{Alphabet, Rotor};
use crate::machine::Machine;

/// View of a machine's seated rotors handed to every check.
#[derive(Clone, Copy, Debug)]
pub struct SlotContext<'a> {
    pub alphabet: &'a Alphabet,
    pub slots: &'a [Rotor],
    pub pawls: usize,
}

impl<'a> SlotContext<'a> {
    pub fn new(alphabet: &'a Alphabet, slots: &'a [Rotor], pawls: usize) -> Self {
        Self {
            alphabet,
            slots,
            pawls,
        }
    }

    /// Context over the rotors currently seated in `machine`.
    pub fn from_machine(machine: &'a Machine) -> Self {
        Self::new(machine.alphabet(), machine.rotor_slots(), machine.num_pawls())
    }

    /// Index of the leftmost slot driven by a pawl.
    pub fn first_pawl_slot(&self) -> usize {
        self.slots.len().saturating_sub(self.pawls)
    }

    /// Whether `slot` is driven by a pawl.
    pub fn under_pawl(&self, slot: usize) -> bool {
        slot >= self.first_pawl_slot() && slot < self.slots.len()
    }
}
