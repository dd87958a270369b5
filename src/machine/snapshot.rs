//! Capture and restore a machine configuration.
//!
//! A cipher is its own inverse only from the same starting state, so
//! decoding needs the exact configuration that encoding started from.
//! A [`MachineSnapshot`] records that configuration by rotor name and
//! position symbols and can be re-applied any number of times.

use crate::core::Permutation;
use crate::machine::engine::Machine;
use crate::machine::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Serializable record of seated rotors, their positions and rings, and
/// the plugboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// Seated rotor names, reflector first.
    pub rotors: Vec<String>,

    /// Positions of the non-reflector rotors as symbols, leftmost first.
    pub settings: String,

    /// Ring offsets of the non-reflector rotors as symbols.
    pub offsets: String,

    /// Plugboard in cycle notation, if one is installed.
    pub plugboard: Option<String>,
}

impl Machine {
    /// Record the current configuration.
    ///
    /// Fails with [`ConfigError::NoRotorsInserted`] when nothing is seated.
    pub fn snapshot(&self) -> Result<MachineSnapshot, ConfigError> {
        if self.rotor_slots().is_empty() {
            return Err(ConfigError::NoRotorsInserted);
        }
        Ok(MachineSnapshot {
            rotors: self.rotor_names().into_iter().map(String::from).collect(),
            settings: self.settings(),
            offsets: self.offsets(),
            plugboard: self.plugboard().map(Permutation::to_string),
        })
    }

    /// Re-apply `snapshot`. Either every part applies or the machine is
    /// left exactly as it was.
    pub fn restore(&mut self, snapshot: &MachineSnapshot) -> Result<(), ConfigError> {
        let mut staged = self.clone();
        staged.insert_rotors(&snapshot.rotors)?;
        staged.set_rotors(&snapshot.settings)?;
        staged.set_offset(&snapshot.offsets)?;
        match &snapshot.plugboard {
            Some(cycles) => {
                let plugboard = Permutation::parse(cycles, staged.alphabet().clone())
                    .map_err(|e| ConfigError::SnapshotMismatch(e.to_string()))?;
                staged.set_plugboard(plugboard)?;
            }
            None => staged.clear_plugboard(),
        }

        *self = staged;
        tracing::debug!(settings = %snapshot.settings, "restored snapshot");
        Ok(())
    }
}
