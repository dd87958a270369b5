//! Rotors: permutation wheels mounted at a rotatable position.
//!
//! Every rotor has the same shape (a name, a wiring and a position) and
//! differs only in what it is capable of. The capabilities are a closed
//! set, so they are modelled as [`RotorKind`] and answered by matching
//! rather than by overriding.

use super::alphabet::Alphabet;
use super::permutation::Permutation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// What a rotor can do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RotorKind {
    /// Fixed wheel in the leftmost slot that sends the signal back.
    Reflector,
    /// Wheel that never rotates.
    Fixed,
    /// Wheel that rotates and carries one or more notches, stored as
    /// alphabet indices.
    Moving { notches: Vec<usize> },
}

impl RotorKind {
    /// Short label for logs and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            RotorKind::Reflector => "reflector",
            RotorKind::Fixed => "fixed",
            RotorKind::Moving { .. } => "moving",
        }
    }
}

/// A rotor with its wiring, rotational setting and ring offset.
///
/// The wiring is shared through an `Arc`, so cloning a rotor (as a machine
/// does when it seats a catalog rotor in a slot) copies only the position
/// state.
///
/// # Example
///
/// ```rust
/// use enigma::core::{Alphabet, Permutation, Rotor};
/// use std::sync::Arc;
///
/// let alphabet = Arc::new(Alphabet::default());
/// let wiring = Permutation::parse("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", alphabet)
///     .unwrap();
/// let mut rotor = Rotor::moving("I", wiring, &[16]);
///
/// assert!(rotor.rotates());
/// assert_eq!(rotor.convert_forward(0), 4); // A -> E
///
/// rotor.set(16);
/// assert!(rotor.at_notch());
/// rotor.advance();
/// assert_eq!(rotor.setting(), 17);
/// ```
#[derive(Clone, Debug)]
pub struct Rotor {
    name: String,
    wiring: Arc<Permutation>,
    kind: RotorKind,
    setting: usize,
    offset: usize,
}

impl Rotor {
    /// A rotor of the given kind at setting 0 with ring offset 0.
    pub fn new(name: impl Into<String>, wiring: Permutation, kind: RotorKind) -> Self {
        Self {
            name: name.into(),
            wiring: Arc::new(wiring),
            kind,
            setting: 0,
            offset: 0,
        }
    }

    /// A reflector.
    pub fn reflector(name: impl Into<String>, wiring: Permutation) -> Self {
        Self::new(name, wiring, RotorKind::Reflector)
    }

    /// A non-rotating wheel.
    pub fn fixed(name: impl Into<String>, wiring: Permutation) -> Self {
        Self::new(name, wiring, RotorKind::Fixed)
    }

    /// A rotating wheel with notches at the given indices.
    pub fn moving(name: impl Into<String>, wiring: Permutation, notches: &[usize]) -> Self {
        Self::new(
            name,
            wiring,
            RotorKind::Moving {
                notches: notches.to_vec(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    pub fn permutation(&self) -> &Permutation {
        &self.wiring
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        self.wiring.alphabet()
    }

    /// Size of the alphabet the wiring acts on.
    pub fn size(&self) -> usize {
        self.wiring.size()
    }

    /// True iff this rotor has a ratchet and can move.
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// True iff this rotor reflects.
    pub fn reflecting(&self) -> bool {
        matches!(self.kind, RotorKind::Reflector)
    }

    /// True iff this rotor carries at least one notch.
    pub fn has_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => !notches.is_empty(),
            RotorKind::Reflector | RotorKind::Fixed => false,
        }
    }

    /// True iff the rotor sits at one of its notches, allowing the rotor to
    /// its left to advance.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => {
                let position = self.setting % self.size();
                notches.iter().any(|&notch| notch == position)
            }
            RotorKind::Reflector | RotorKind::Fixed => false,
        }
    }

    /// Advance one position. Does nothing for rotors that cannot rotate.
    pub fn advance(&mut self) {
        if self.rotates() {
            self.setting = self.wrap(self.setting as i64 + 1);
        }
    }

    /// Current rotational position.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Set the rotational position, wrapping into range.
    pub fn set(&mut self, setting: usize) {
        self.setting = setting % self.size();
    }

    /// Current ring offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Set the ring offset, wrapping into range.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset % self.size();
    }

    /// Convert `p` on the way in (right to left) through the wiring.
    pub fn convert_forward(&self, p: usize) -> usize {
        let shift = self.shift();
        let entered = self.wrap(p as i64 + shift);
        let wired = self.wiring.permute(entered);
        self.wrap(wired as i64 - shift)
    }

    /// Convert `e` on the way back (left to right) through the inverse
    /// wiring.
    pub fn convert_backward(&self, e: usize) -> usize {
        let shift = self.shift();
        let entered = self.wrap(e as i64 + shift);
        let wired = self.wiring.invert(entered);
        self.wrap(wired as i64 - shift)
    }

    /// The ring moves the wiring against the markings, so it counts against
    /// the rotation.
    fn shift(&self) -> i64 {
        self.wrap(self.setting as i64 - self.offset as i64) as i64
    }

    fn wrap(&self, p: i64) -> usize {
        self.wiring.wrap(p)
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotor {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTOR_I: &str = "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)";
    const REFLECTOR_B: &str = "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)";

    fn wiring(cycles: &str) -> Permutation {
        Permutation::parse(cycles, Arc::new(Alphabet::default())).unwrap()
    }

    #[test]
    fn capabilities_follow_kind() {
        let reflector = Rotor::reflector("B", wiring(REFLECTOR_B));
        assert!(reflector.reflecting());
        assert!(!reflector.rotates());
        assert!(!reflector.has_notch());
        assert!(!reflector.at_notch());

        let fixed = Rotor::fixed("Beta", wiring("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)"));
        assert!(!fixed.reflecting());
        assert!(!fixed.rotates());
        assert!(!fixed.has_notch());

        let moving = Rotor::moving("I", wiring(ROTOR_I), &[16]);
        assert!(!moving.reflecting());
        assert!(moving.rotates());
        assert!(moving.has_notch());
        assert_eq!(moving.kind().label(), "moving");
    }

    #[test]
    fn advance_is_noop_for_static_rotors() {
        let mut fixed = Rotor::fixed("Beta", wiring(""));
        fixed.set(3);
        fixed.advance();
        assert_eq!(fixed.setting(), 3);

        let mut reflector = Rotor::reflector("B", wiring(REFLECTOR_B));
        reflector.advance();
        assert_eq!(reflector.setting(), 0);
    }

    #[test]
    fn advance_wraps_around() {
        let mut rotor = Rotor::moving("I", wiring(ROTOR_I), &[16]);
        rotor.set(25);
        rotor.advance();
        assert_eq!(rotor.setting(), 0);
    }

    #[test]
    fn notch_detection_supports_multiple_notches() {
        let mut rotor = Rotor::moving("VI", wiring(ROTOR_I), &[12, 25]);
        rotor.set(12);
        assert!(rotor.at_notch());
        rotor.advance();
        assert!(!rotor.at_notch());
        rotor.set(25);
        assert!(rotor.at_notch());
    }

    #[test]
    fn set_wraps_out_of_range_values() {
        let mut rotor = Rotor::moving("I", wiring(ROTOR_I), &[16]);
        rotor.set(27);
        assert_eq!(rotor.setting(), 1);
        rotor.set_offset(52);
        assert_eq!(rotor.offset(), 0);
    }

    #[test]
    fn forward_at_zero_position_is_the_wiring() {
        let rotor = Rotor::moving("I", wiring(ROTOR_I), &[16]);
        for p in 0..26 {
            assert_eq!(rotor.convert_forward(p), rotor.permutation().permute(p));
            assert_eq!(rotor.convert_backward(p), rotor.permutation().invert(p));
        }
    }

    #[test]
    fn forward_accounts_for_setting() {
        let mut rotor = Rotor::moving("I", wiring(ROTOR_I), &[16]);
        rotor.set(1);
        // Contact A enters at B, which is wired to K; K shifted back is J.
        assert_eq!(rotor.convert_forward(0), 9);
        assert_eq!(rotor.convert_backward(9), 0);
    }

    #[test]
    fn ring_offset_counts_against_setting() {
        let mut rotor = Rotor::moving("I", wiring(ROTOR_I), &[16]);
        rotor.set(3);
        rotor.set_offset(3);
        for p in 0..26 {
            assert_eq!(rotor.convert_forward(p), rotor.permutation().permute(p));
        }

        rotor.set(0);
        rotor.set_offset(1);
        // A enters at Z, which is wired to J; J shifted forward by one is K.
        assert_eq!(rotor.convert_forward(0), 10);
    }

    #[test]
    fn backward_inverts_forward_at_every_position() {
        let mut rotor = Rotor::moving("I", wiring(ROTOR_I), &[16]);
        for setting in 0..26 {
            rotor.set(setting);
            for p in 0..26 {
                assert_eq!(rotor.convert_backward(rotor.convert_forward(p)), p);
            }
        }
    }

    #[test]
    fn clones_share_wiring_but_not_position() {
        let template = Rotor::moving("I", wiring(ROTOR_I), &[16]);
        let mut seated = template.clone();
        seated.set(5);
        assert_eq!(template.setting(), 0);
        assert!(Arc::ptr_eq(&template.wiring, &seated.wiring));
    }

    #[test]
    fn display_names_the_rotor() {
        assert_eq!(Rotor::fixed("Beta", wiring("")).to_string(), "Rotor Beta");
    }

    #[test]
    fn kind_serializes_with_tag() {
        let kind = RotorKind::Moving { notches: vec![16] };
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, r#"{"type":"moving","notches":[16]}"#);
        let back: RotorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}
