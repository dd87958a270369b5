//! Settings lines: `* B Beta III IV I AXLE [RING] [(HQ) (EX) ...]`.

use crate::config::error::ParseError;
use crate::core::Permutation;
use crate::machine::Machine;
use std::fmt;

/// A parsed settings line.
///
/// # Example
///
/// ```rust
/// use enigma::builder::historical_machine;
/// use enigma::config::SettingLine;
///
/// let line = SettingLine::parse("* B Beta III IV I AXLE (HQ) (EX)", 5).unwrap();
/// assert_eq!(line.setting, "AXLE");
/// assert_eq!(line.ring, None);
///
/// let mut machine = historical_machine();
/// line.apply(&mut machine).unwrap();
/// assert_eq!(machine.settings(), "AXLE");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingLine {
    /// Rotor names, reflector first.
    pub rotors: Vec<String>,
    pub setting: String,
    pub ring: Option<String>,
    /// Plugboard cycles, if any were given.
    pub plugboard: Option<String>,
}

impl SettingLine {
    /// Parse `line` for a machine with `num_rotors` slots.
    pub fn parse(line: &str, num_rotors: usize) -> Result<Self, ParseError> {
        let body = line
            .trim_start()
            .strip_prefix('*')
            .ok_or(ParseError::NotASettingsLine)?;
        let fields: Vec<&str> = body.split_whitespace().collect();
        if fields.len() < num_rotors + 1 {
            return Err(ParseError::IncompleteSettings {
                expected: num_rotors,
                found: fields.len(),
            });
        }

        let (rotors, rest) = fields.split_at(num_rotors);
        let setting = rest[0].to_string();
        let mut rest = &rest[1..];

        let ring = match rest.first() {
            Some(token) if !token.starts_with('(') => {
                rest = &rest[1..];
                Some(token.to_string())
            }
            _ => None,
        };
        let plugboard = (!rest.is_empty()).then(|| rest.join(" "));

        Ok(Self {
            rotors: rotors.iter().map(|name| name.to_string()).collect(),
            setting,
            ring,
            plugboard,
        })
    }

    /// Configure `machine`: seat the rotors, set positions and ring
    /// offsets, and install the plugboard.
    ///
    /// A missing ring resets every offset to zero and a missing plugboard
    /// removes any installed one. Either the whole line applies or the
    /// machine is left unchanged.
    pub fn apply(&self, machine: &mut Machine) -> Result<(), ParseError> {
        let mut staged = machine.clone();
        staged.insert_rotors(&self.rotors)?;
        staged.set_rotors(&self.setting)?;
        if let Some(ring) = &self.ring {
            staged.set_offset(ring)?;
        }
        match &self.plugboard {
            Some(cycles) => {
                let plugboard = Permutation::parse(cycles, staged.alphabet().clone())?;
                staged.set_plugboard(plugboard)?;
            }
            None => staged.clear_plugboard(),
        }

        *machine = staged;
        tracing::debug!(line = %self, "applied settings");
        Ok(())
    }
}

impl fmt::Display for SettingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* {} {}", self.rotors.join(" "), self.setting)?;
        if let Some(ring) = &self.ring {
            write!(f, " {ring}")?;
        }
        if let Some(plugboard) = &self.plugboard {
            write!(f, " {plugboard}")?;
        }
        Ok(())
    }
}
