//! Enigma: a rotor cipher machine simulator
//!
//! The machine is a row of permutation wheels (rotors) ending in a
//! reflector, with an optional plugboard in front. Every keystroke first
//! advances the rotors and then sends the signal right to left through the
//! rotors, off the reflector, and back out, so the substitution changes
//! with every character and the whole cipher is its own inverse.
//!
//! # Core Concepts
//!
//! - **Alphabet**: the ordered symbols a machine works over
//! - **Permutation**: a bijection on symbol indices written as cycles
//! - **Rotor**: a wiring with a rotational setting, a ring offset and a
//!   kind (reflector, fixed or moving with notches)
//! - **Machine**: slots, pawls, plugboard, and the stepping rule with its
//!   double-step anomaly
//!
//! # Example
//!
//! ```rust
//! use enigma::builder::historical_machine;
//! use enigma::core::Permutation;
//!
//! let mut machine = historical_machine();
//! machine.insert_rotors(&["B", "Beta", "I", "II", "III"]).unwrap();
//! machine.set_rotors("AAAA").unwrap();
//! let plugboard = Permutation::parse("(AQ) (EP)", machine.alphabet().clone()).unwrap();
//! machine.set_plugboard(plugboard).unwrap();
//!
//! let start = machine.snapshot().unwrap();
//! let cipher = machine.convert("HELLO WORLD").unwrap();
//! assert_eq!(cipher, "IHBDQ QMTQZ");
//!
//! machine.restore(&start).unwrap();
//! assert_eq!(machine.convert(&cipher).unwrap(), "HELLO WORLD");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod enforcement;
pub mod machine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Alphabet, Permutation, Rotor, RotorKind};
pub use builder::{MachineBuilder, RotorBuilder};
pub use machine::{Machine, MachineSnapshot};
pub use session::Session;
