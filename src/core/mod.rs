//! Core cipher types.
//!
//! This module contains the pure building blocks of the machine:
//! - `Alphabet`: ordered symbols mapped to dense indices
//! - `Permutation`: bijections over those indices, written as cycles
//! - `Rotor`: a wiring mounted at a rotatable position with a ring offset
//!
//! Nothing here performs I/O or knows about slots, pawls or plugboards.

mod alphabet;
mod error;
mod permutation;
mod rotor;

pub use alphabet::Alphabet;
pub use error::{AlphabetError, CycleFault, PermutationError};
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};
