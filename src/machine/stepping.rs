//! Rotor stepping as a two-phase commit.
//!
//! Whether a rotor moves on a keystroke depends on the notch state of its
//! neighbours *before* anything moves. [`StepPlan::compute`] reads a frozen
//! view of every slot and marks the rotors that must advance;
//! [`StepPlan::commit`] then advances exactly the marked rotors. Advancing
//! while scanning would let a rotor that just moved onto its notch drive
//! its neighbour on the same keystroke.

use crate::core::Rotor;
use std::fmt;

/// The set of slots that advance on one keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepPlan {
    advancing: Vec<bool>,
}

impl StepPlan {
    /// Decide which slots advance, without touching any rotor.
    ///
    /// Scanning from the rightmost slot down to slot 1, a rotor at its notch
    /// pushes the rotor to its left when that rotor can rotate, and the
    /// pawl carries the notched rotor along with it. For the middle rotor
    /// this is the double step: it moves once when the rightmost rotor
    /// passes its notch, and again on the next keystroke because it now sits
    /// at its own notch. The rightmost slot always advances exactly once.
    pub fn compute(slots: &[Rotor]) -> Self {
        let mut advancing = vec![false; slots.len()];
        let Some(rightmost) = slots.len().checked_sub(1) else {
            return Self { advancing };
        };

        for i in (1..slots.len()).rev() {
            if slots[i].at_notch() && !advancing[i - 1] && slots[i - 1].rotates() {
                advancing[i - 1] = true;
                if !advancing[i] && slots[i].rotates() {
                    advancing[i] = true;
                }
            }
        }
        advancing[rightmost] = true;

        Self { advancing }
    }

    /// Advance every marked slot by one position.
    pub fn commit(&self, slots: &mut [Rotor]) {
        for (rotor, &advance) in slots.iter_mut().zip(&self.advancing) {
            if advance {
                rotor.advance();
            }
        }
    }

    /// Whether the rotor in `slot` advances.
    pub fn advances(&self, slot: usize) -> bool {
        self.advancing.get(slot).copied().unwrap_or(false)
    }

    /// Indices of the advancing slots, left to right.
    pub fn advancing(&self) -> impl Iterator<Item = usize> + '_ {
        self.advancing
            .iter()
            .enumerate()
            .filter_map(|(slot, &advance)| advance.then_some(slot))
    }

    /// Number of rotors that advance.
    pub fn count(&self) -> usize {
        self.advancing.iter().filter(|&&advance| advance).count()
    }
}

/// Renders one character per slot: `^` for advancing, `.` otherwise.
impl fmt::Display for StepPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &advance in &self.advancing {
            write!(f, "{}", if advance { '^' } else { '.' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Permutation};
    use std::sync::Arc;

    fn slots(settings: &[usize]) -> Vec<Rotor> {
        let alphabet = Arc::new(Alphabet::default());
        let identity = Permutation::identity(alphabet);
        let mut slots = vec![
            Rotor::reflector("B", identity.clone()),
            Rotor::fixed("Beta", identity.clone()),
        ];
        // Notches at E (4) for every moving rotor.
        for (n, &setting) in settings.iter().enumerate() {
            let mut rotor = Rotor::moving(format!("M{n}"), identity.clone(), &[4]);
            rotor.set(setting);
            slots.push(rotor);
        }
        slots
    }

    #[test]
    fn only_rightmost_moves_away_from_notches() {
        let slots = slots(&[0, 0, 0]);
        let plan = StepPlan::compute(&slots);
        assert_eq!(plan.advancing().collect::<Vec<_>>(), vec![4]);
        assert_eq!(plan.to_string(), "....^");
    }

    #[test]
    fn rightmost_at_notch_carries_middle() {
        let plan = StepPlan::compute(&slots(&[0, 0, 4]));
        assert_eq!(plan.advancing().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn middle_at_notch_double_steps() {
        let plan = StepPlan::compute(&slots(&[0, 4, 0]));
        assert_eq!(plan.advancing().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(plan.count(), 3);
    }

    #[test]
    fn leftmost_notch_has_no_effect() {
        // Slot 1 is fixed, so the leftmost moving rotor's notch drives nothing.
        let plan = StepPlan::compute(&slots(&[4, 0, 0]));
        assert_eq!(plan.advancing().collect::<Vec<_>>(), vec![4]);
        assert!(!plan.advances(1));
        assert!(!plan.advances(2));
    }

    #[test]
    fn all_notched_moves_each_rotor_once() {
        let plan = StepPlan::compute(&slots(&[4, 4, 4]));
        assert_eq!(plan.advancing().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn commit_advances_only_marked_rotors() {
        let mut slots = slots(&[0, 4, 7]);
        let plan = StepPlan::compute(&slots);
        plan.commit(&mut slots);
        let settings: Vec<usize> = slots.iter().map(Rotor::setting).collect();
        assert_eq!(settings, vec![0, 0, 1, 5, 8]);
    }

    #[test]
    fn plan_reads_pre_step_state() {
        // The rightmost rotor is one short of its notch: after this step it
        // sits at the notch, but the middle rotor must not move until the
        // next keystroke.
        let mut slots = slots(&[0, 0, 3]);
        let plan = StepPlan::compute(&slots);
        assert_eq!(plan.advancing().collect::<Vec<_>>(), vec![4]);
        plan.commit(&mut slots);
        assert!(slots[4].at_notch());
        assert_eq!(slots[3].setting(), 0);
    }

    #[test]
    fn empty_slots_produce_empty_plan() {
        let plan = StepPlan::compute(&[]);
        assert_eq!(plan.count(), 0);
        assert!(!plan.advances(0));
    }
}
