//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and a catalog macro for assembling
//! rotors and machines from symbol text, with every input validated before
//! a machine exists.

pub mod error;
pub mod machine;
pub mod macros;
pub mod rotor;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use rotor::RotorBuilder;

use crate::core::{Alphabet, Rotor};
use crate::machine::Machine;
use std::sync::Arc;

/// The eight historical naval wheels, the two thin wheels Beta and Gamma,
/// and the thin reflectors B and C, over `A`-`Z`.
///
/// # Example
///
/// ```
/// use enigma::builder::historical_catalog;
///
/// let catalog = historical_catalog();
/// assert_eq!(catalog.len(), 12);
/// assert!(catalog.iter().any(|r| r.name() == "Beta"));
/// ```
pub fn historical_catalog() -> Vec<Rotor> {
    crate::rotor_catalog! {
        Alphabet::default();
        "I" => moving("Q") "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)",
        "II" => moving("E") "(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)",
        "III" => moving("V") "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)",
        "IV" => moving("J") "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)",
        "V" => moving("Z") "(AVOLDRWFIUQ)(BZKSMNHYC) (EGTJPX)",
        "VI" => moving("ZM") "(AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)",
        "VII" => moving("ZM") "(ANOUPFRIMBZTLWKSVEGCJYDHXQ)",
        "VIII" => moving("ZM") "(AFLSETWUNDHOZVICQ) (BKJ) (GXY) (MPR)",
        "Beta" => fixed "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)",
        "Gamma" => fixed "(AFNIRLBSQWVXGUZDKMTPCOYJHE)",
        "B" => reflector "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
        "C" => reflector "(AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW) (QZ) (SX) (UY)",
    }
    .expect("Historical catalog should always build")
}

/// A five-slot, three-pawl machine loaded with [`historical_catalog`].
///
/// No rotors are seated yet.
///
/// # Example
///
/// ```
/// use enigma::builder::historical_machine;
///
/// let mut machine = historical_machine();
/// machine.insert_rotors(&["B", "Beta", "III", "IV", "I"]).unwrap();
/// machine.set_rotors("AXLE").unwrap();
/// assert_eq!(machine.convert("FROM").unwrap(), "HYIH");
/// ```
pub fn historical_machine() -> Machine {
    let catalog = historical_catalog();
    let alphabet: Arc<Alphabet> = catalog[0].alphabet().clone();
    MachineBuilder::new()
        .alphabet(alphabet)
        .slots(5)
        .pawls(3)
        .rotors(catalog)
        .build()
        .expect("Historical machine should always build")
}
