//! The cipher machine built on top of the core types.
//!
//! # Key Concepts
//!
//! - **Slots**: an ordered row of rotors, reflector leftmost
//! - **Stepping**: a two-phase plan computed before any rotor moves
//! - **Signal path**: plugboard, rotors right to left, reflector, rotors
//!   left to right, plugboard inverse
//! - **Snapshots**: a configuration that can be re-applied for decoding

mod engine;
mod error;
mod snapshot;
mod stepping;

pub use engine::Machine;
pub use error::{ConfigError, ConvertError};
pub use snapshot::MachineSnapshot;
pub use stepping::StepPlan;
