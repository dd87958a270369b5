//! Reader for the whitespace-separated text configuration format.
//!
//! ```text
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ
//! 5 3
//! I   MQ  (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! Beta N  (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B   R   (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
//! ```
//!
//! The alphabet comes first, then the slot and pawl counts, then any number
//! of rotors. A rotor is its name, a type (`M` followed by its notches, `N`
//! for a fixed wheel, `R` for a reflector) and every following token that
//! starts with `(`. Line breaks carry no meaning.

use crate::config::error::ParseError;
use crate::config::spec::{MachineSpec, RotorSpec, RotorSpecKind};
use crate::machine::Machine;
use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Read a machine description from configuration text.
pub fn parse_config(text: &str) -> Result<MachineSpec, ParseError> {
    let mut tokens = text.split_whitespace().peekable();

    let alphabet = tokens
        .next()
        .ok_or(ParseError::Truncated("an alphabet"))?
        .to_string();
    let slots = count(&mut tokens, "rotor slots")?;
    let pawls = count(&mut tokens, "pawls")?;

    let mut rotors = Vec::new();
    while let Some(name) = tokens.next() {
        rotors.push(parse_rotor(name, &mut tokens)?);
    }

    Ok(MachineSpec {
        alphabet,
        slots,
        pawls,
        rotors,
    })
}

/// Read configuration text and build the machine it describes.
pub fn load_config(text: &str) -> Result<Machine, ParseError> {
    Ok(parse_config(text)?.build()?)
}

fn count(tokens: &mut Peekable<SplitWhitespace<'_>>, field: &'static str) -> Result<usize, ParseError> {
    let token = tokens.next().ok_or(ParseError::Truncated(field))?;
    token.parse().map_err(|_| ParseError::InvalidCount {
        field,
        token: token.to_string(),
    })
}

fn parse_rotor(
    name: &str,
    tokens: &mut Peekable<SplitWhitespace<'_>>,
) -> Result<RotorSpec, ParseError> {
    let token = tokens.next().ok_or(ParseError::Truncated("a rotor type"))?;
    let mut type_chars = token.chars();
    let kind = match type_chars.next() {
        Some('M') => RotorSpecKind::Moving {
            notches: type_chars.as_str().to_string(),
        },
        Some('N') if token.len() == 1 => RotorSpecKind::Fixed,
        Some('R') if token.len() == 1 => RotorSpecKind::Reflector,
        _ => {
            return Err(ParseError::UnknownRotorType {
                rotor: name.to_string(),
                token: token.to_string(),
            })
        }
    };

    let mut cycles = Vec::new();
    while let Some(cycle) = tokens.next_if(|t| t.starts_with('(')) {
        cycles.push(cycle);
    }
    if cycles.is_empty() {
        return Err(ParseError::MissingCycles(name.to_string()));
    }

    Ok(RotorSpec {
        name: name.to_string(),
        kind,
        cycles: cycles.join(" "),
    })
}
