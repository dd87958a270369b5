//! The machine: rotor slots, plugboard and the per-character signal path.

use crate::builder::BuildError;
use crate::core::{Alphabet, Permutation, Rotor, RotorKind};
use crate::machine::error::{ConfigError, ConvertError};
use crate::machine::stepping::StepPlan;
use std::collections::HashSet;
use std::sync::Arc;

/// A complete rotor cipher machine.
///
/// The machine owns a catalog of rotor templates. [`insert_rotors`]
/// seats fresh copies of the named templates into the slots (slot 0 is the
/// reflector), so configuring a message never mutates the catalog and two
/// machines built from one catalog never share position state.
///
/// [`insert_rotors`]: Machine::insert_rotors
///
/// # Example
///
/// ```rust
/// use enigma::core::{Alphabet, Permutation, Rotor};
/// use enigma::machine::Machine;
/// use std::sync::Arc;
///
/// let alphabet = Arc::new(Alphabet::default());
/// let wiring = |cycles: &str| Permutation::parse(cycles, alphabet.clone()).unwrap();
///
/// let catalog = vec![
///     Rotor::reflector("B", wiring("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)")),
///     Rotor::fixed("Beta", wiring("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)")),
///     Rotor::moving("I", wiring("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"), &[16]),
///     Rotor::moving("II", wiring("(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)"), &[4]),
///     Rotor::moving("III", wiring("(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"), &[21]),
/// ];
///
/// let mut machine = Machine::new(alphabet.clone(), 5, 3, catalog).unwrap();
/// machine.insert_rotors(&["B", "Beta", "I", "II", "III"]).unwrap();
/// machine.set_rotors("AAAA").unwrap();
/// assert_eq!(machine.convert("HELLO WORLD").unwrap(), "ILBDA AMTAZ");
///
/// machine.set_rotors("AAAA").unwrap();
/// assert_eq!(machine.convert("ILBDA AMTAZ").unwrap(), "HELLO WORLD");
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    alphabet: Arc<Alphabet>,
    num_rotors: usize,
    pawls: usize,
    catalog: Vec<Rotor>,
    slots: Vec<Rotor>,
    plugboard: Option<Permutation>,
}

impl Machine {
    /// A machine with `num_rotors` slots (`1 < num_rotors`) and `pawls`
    /// pawls (`pawls < num_rotors`) whose available rotors are `catalog`.
    ///
    /// Every catalog rotor must be wired over `alphabet`, carry notches
    /// inside it, and have a name unique within the catalog.
    pub fn new(
        alphabet: Arc<Alphabet>,
        num_rotors: usize,
        pawls: usize,
        catalog: Vec<Rotor>,
    ) -> Result<Self, BuildError> {
        if num_rotors < 2 {
            return Err(BuildError::InvalidSlotCount(num_rotors));
        }
        if pawls >= num_rotors {
            return Err(BuildError::InvalidPawlCount { pawls, num_rotors });
        }

        let mut names = HashSet::new();
        for rotor in &catalog {
            if !names.insert(rotor.name()) {
                return Err(BuildError::DuplicateCatalogRotor(rotor.name().to_string()));
            }
            if **rotor.alphabet() != *alphabet {
                return Err(BuildError::AlphabetMismatch(rotor.name().to_string()));
            }
            if let RotorKind::Moving { notches } = rotor.kind() {
                if notches.iter().any(|&notch| notch >= alphabet.size()) {
                    return Err(BuildError::InvalidNotch(rotor.name().to_string()));
                }
            }
        }

        Ok(Self {
            alphabet,
            num_rotors,
            pawls,
            catalog,
            slots: Vec::new(),
            plugboard: None,
        })
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Number of rotor slots, reflector included.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Number of pawls, and thus of rotating rotors.
    pub fn num_pawls(&self) -> usize {
        self.pawls
    }

    /// Every rotor this machine can seat, in catalog order.
    pub fn catalog(&self) -> &[Rotor] {
        &self.catalog
    }

    /// The rotors currently seated, reflector first. Empty until
    /// [`insert_rotors`](Machine::insert_rotors) succeeds.
    pub fn rotor_slots(&self) -> &[Rotor] {
        &self.slots
    }

    /// Names of the seated rotors, reflector first.
    pub fn rotor_names(&self) -> Vec<&str> {
        self.slots.iter().map(Rotor::name).collect()
    }

    pub fn plugboard(&self) -> Option<&Permutation> {
        self.plugboard.as_ref()
    }

    /// Seat the rotors named `names` (`names[0]` is the reflector).
    ///
    /// Seated rotors start at setting 0 with ring offset 0. On error the
    /// previously seated rotors are kept.
    pub fn insert_rotors<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), ConfigError> {
        if names.len() != self.num_rotors {
            return Err(ConfigError::WrongRotorCount {
                expected: self.num_rotors,
                found: names.len(),
            });
        }

        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name.as_ref()) {
                return Err(ConfigError::DuplicateRotor(name.as_ref().to_string()));
            }
        }

        let mut slots = Vec::with_capacity(names.len());
        for (slot, name) in names.iter().enumerate() {
            let name = name.as_ref();
            let template = self
                .catalog
                .iter()
                .find(|rotor| rotor.name() == name)
                .ok_or_else(|| ConfigError::UnknownRotor(name.to_string()))?;
            if slot == 0 && !template.reflecting() {
                return Err(ConfigError::InvalidReflectorPosition(name.to_string()));
            }
            slots.push(template.clone());
        }

        self.slots = slots;
        tracing::debug!(rotors = ?self.rotor_names(), "inserted rotors");
        Ok(())
    }

    /// Set the non-reflector rotors to the positions named by `setting`,
    /// leftmost first.
    pub fn set_rotors(&mut self, setting: &str) -> Result<(), ConfigError> {
        let positions = self.parse_positions(setting)?;
        for (rotor, position) in self.slots[1..].iter_mut().zip(positions) {
            rotor.set(position);
        }
        tracing::debug!(setting, "set rotor positions");
        Ok(())
    }

    /// Set the ring offsets of the non-reflector rotors from `ring`,
    /// leftmost first.
    pub fn set_offset(&mut self, ring: &str) -> Result<(), ConfigError> {
        let offsets = self.parse_positions(ring)?;
        for (rotor, offset) in self.slots[1..].iter_mut().zip(offsets) {
            rotor.set_offset(offset);
        }
        tracing::debug!(ring, "set ring offsets");
        Ok(())
    }

    /// Install `plugboard`, replacing any previous one.
    pub fn set_plugboard(&mut self, plugboard: Permutation) -> Result<(), ConfigError> {
        if **plugboard.alphabet() != *self.alphabet {
            return Err(ConfigError::AlphabetMismatch);
        }
        tracing::debug!(plugboard = %plugboard, "set plugboard");
        self.plugboard = Some(plugboard);
        Ok(())
    }

    /// Remove the plugboard; the signal then passes straight through.
    pub fn clear_plugboard(&mut self) {
        self.plugboard = None;
    }

    /// Current positions of the non-reflector rotors as symbols.
    pub fn settings(&self) -> String {
        self.render(Rotor::setting)
    }

    /// Current ring offsets of the non-reflector rotors as symbols.
    pub fn offsets(&self) -> String {
        self.render(Rotor::offset)
    }

    /// Advance the rotors for one keystroke and report which slots moved.
    pub fn step(&mut self) -> StepPlan {
        let plan = StepPlan::compute(&self.slots);
        plan.commit(&mut self.slots);
        tracing::trace!(plan = %plan, settings = %self.settings(), "stepped");
        plan
    }

    /// Convert the symbol at `index` (wrapped into the alphabet), after
    /// first advancing the machine.
    pub fn convert_index(&mut self, index: usize) -> Result<usize, ConvertError> {
        if self.slots.is_empty() {
            return Err(ConvertError::NoRotorsInserted);
        }
        self.step();
        Ok(self.route(index % self.alphabet.size()))
    }

    /// Convert one symbol, after first advancing the machine.
    pub fn convert_symbol(&mut self, symbol: char) -> Result<char, ConvertError> {
        let index = self
            .alphabet
            .to_index(symbol)
            .ok_or(ConvertError::InvalidCharacter(symbol))?;
        let converted = self.convert_index(index)?;
        Ok(self.alphabet.symbols()[converted])
    }

    /// Encode or decode `msg`, updating the rotors as it goes.
    ///
    /// Whitespace is copied through unchanged and does not step the rotors.
    /// Every other character must be in the alphabet; the whole message is
    /// checked before any rotor moves.
    pub fn convert(&mut self, msg: &str) -> Result<String, ConvertError> {
        if self.slots.is_empty() {
            return Err(ConvertError::NoRotorsInserted);
        }
        if let Some(bad) = msg
            .chars()
            .find(|&c| !c.is_whitespace() && !self.alphabet.contains(c))
        {
            return Err(ConvertError::InvalidCharacter(bad));
        }

        msg.chars()
            .map(|c| {
                if c.is_whitespace() {
                    Ok(c)
                } else {
                    self.convert_symbol(c)
                }
            })
            .collect()
    }

    /// Send `index` through plugboard, rotors, reflector and back.
    fn route(&self, index: usize) -> usize {
        let mut c = index;
        if let Some(plugboard) = &self.plugboard {
            c = plugboard.permute(c);
        }
        for rotor in self.slots.iter().rev() {
            c = rotor.convert_forward(c);
        }
        for rotor in &self.slots[1..] {
            c = rotor.convert_backward(c);
        }
        if let Some(plugboard) = &self.plugboard {
            c = plugboard.invert(c);
        }
        c
    }

    /// Validate a position string against the seated rotors, without
    /// mutating anything.
    fn parse_positions(&self, symbols: &str) -> Result<Vec<usize>, ConfigError> {
        if self.slots.is_empty() {
            return Err(ConfigError::NoRotorsInserted);
        }
        let expected = self.slots.len() - 1;
        let found = symbols.chars().count();
        if found < expected {
            return Err(ConfigError::SettingTooShort { expected, found });
        }
        if found > expected {
            return Err(ConfigError::SettingTooLong { expected, found });
        }
        symbols
            .chars()
            .map(|c| {
                self.alphabet
                    .to_index(c)
                    .ok_or(ConfigError::InvalidSettingSymbol(c))
            })
            .collect()
    }

    fn render(&self, position: fn(&Rotor) -> usize) -> String {
        self.slots
            .iter()
            .skip(1)
            .map(|rotor| self.alphabet.symbols()[position(rotor)])
            .collect()
    }
}
