//! Serializable machine descriptions.

use crate::builder::{BuildError, MachineBuilder, RotorBuilder};
use crate::config::error::ParseError;
use crate::core::Alphabet;
use crate::machine::Machine;
use serde::{Deserialize, Serialize};

/// What kind of rotor a [`RotorSpec`] describes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RotorSpecKind {
    Reflector,
    Fixed,
    /// Notch positions as alphabet symbols.
    Moving { notches: String },
}

/// One catalog rotor: name, kind and wiring in cycle notation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: RotorSpecKind,
    pub cycles: String,
}

impl RotorSpec {
    /// The equivalent rotor builder.
    pub fn builder(&self) -> RotorBuilder {
        let builder = RotorBuilder::new()
            .name(self.name.clone())
            .cycles(self.cycles.clone());
        match &self.kind {
            RotorSpecKind::Reflector => builder.reflector(),
            RotorSpecKind::Fixed => builder.fixed(),
            RotorSpecKind::Moving { notches } => builder.moving(notches.clone()),
        }
    }
}

/// A complete machine description, as read from a config file.
///
/// # Example
///
/// ```rust
/// use enigma::config::MachineSpec;
///
/// let spec = MachineSpec::from_json(r#"{
///     "alphabet": "ABCD",
///     "slots": 2,
///     "pawls": 1,
///     "rotors": [
///         { "name": "R", "type": "reflector", "cycles": "(AB) (CD)" },
///         { "name": "M", "type": "moving", "notches": "A", "cycles": "(ABC)" }
///     ]
/// }"#).unwrap();
///
/// let machine = spec.build().unwrap();
/// assert_eq!(machine.catalog().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSpec {
    pub alphabet: String,
    pub slots: usize,
    pub pawls: usize,
    pub rotors: Vec<RotorSpec>,
}

impl MachineSpec {
    /// Decode a JSON description.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(|e| ParseError::Json(e.to_string()))
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ParseError> {
        serde_json::to_string_pretty(self).map_err(|e| ParseError::Json(e.to_string()))
    }

    /// Build the described machine, with no rotors seated.
    pub fn build(&self) -> Result<Machine, BuildError> {
        let alphabet = Alphabet::new(&self.alphabet)?;
        let mut builder = MachineBuilder::new()
            .alphabet(alphabet)
            .slots(self.slots)
            .pawls(self.pawls);
        for rotor in &self.rotors {
            builder = builder.rotor(rotor.builder())?;
        }
        let machine = builder.build()?;
        tracing::debug!(
            alphabet = %self.alphabet,
            slots = self.slots,
            pawls = self.pawls,
            rotors = self.rotors.len(),
            "built machine from description"
        );
        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AlphabetError;

    fn small_spec() -> MachineSpec {
        MachineSpec {
            alphabet: "ABCD".to_string(),
            slots: 2,
            pawls: 1,
            rotors: vec![
                RotorSpec {
                    name: "R".to_string(),
                    kind: RotorSpecKind::Reflector,
                    cycles: "(AB) (CD)".to_string(),
                },
                RotorSpec {
                    name: "M".to_string(),
                    kind: RotorSpecKind::Moving {
                        notches: "C".to_string(),
                    },
                    cycles: "(ABC)".to_string(),
                },
            ],
        }
    }

    #[test]
    fn builds_machine_with_catalog() {
        let machine = small_spec().build().unwrap();
        assert_eq!(machine.num_rotors(), 2);
        assert_eq!(machine.num_pawls(), 1);
        assert_eq!(machine.alphabet().size(), 4);
        assert!(machine.catalog()[1].rotates());
    }

    #[test]
    fn build_reports_bad_alphabet_and_rotors() {
        let mut spec = small_spec();
        spec.alphabet = "ABCA".to_string();
        assert_eq!(
            spec.build().unwrap_err(),
            BuildError::Alphabet(AlphabetError::DuplicateSymbol('A'))
        );

        let mut spec = small_spec();
        spec.rotors[1].kind = RotorSpecKind::Moving {
            notches: "Z".to_string(),
        };
        assert_eq!(
            spec.build().unwrap_err(),
            BuildError::InvalidNotch("M".to_string())
        );
    }

    #[test]
    fn json_uses_flat_rotor_fields() {
        let json = small_spec().to_json().unwrap();
        assert!(json.contains(r#""type": "moving""#));
        assert!(json.contains(r#""notches": "C""#));

        let decoded = MachineSpec::from_json(&json).unwrap();
        assert_eq!(decoded, small_spec());
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            MachineSpec::from_json(r#"{"alphabet": "AB"}"#),
            Err(ParseError::Json(_))
        ));
    }
}
