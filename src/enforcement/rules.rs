//! Enforcement rules for rotor layouts using Validation.

use crate::enforcement::context::SlotContext;
use crate::enforcement::violations::{ViolationError, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type ValidationCheck =
    Box<dyn Fn(&SlotContext<'_>) -> Validation<(), NonEmptyVec<ViolationError>> + Send + Sync>;

/// Enforcement rules for seated rotors.
/// Uses Validation to accumulate ALL violations.
pub struct EnforcementRules {
    pub(crate) reflector_derangement: bool,
    pub(crate) single_reflector: bool,
    pub(crate) pawl_layout: bool,
    pub(crate) required_checks: Vec<ValidationCheck>,
    pub(crate) on_violation: ViolationStrategy,
}

impl EnforcementRules {
    /// Enforce all rules, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(&self, context: &SlotContext<'_>) -> Validation<(), NonEmptyVec<ViolationError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ViolationError>>> = Vec::new();

        if self.reflector_derangement {
            for rotor in context.slots.iter().filter(|r| r.reflecting()) {
                let wiring = rotor.permutation();
                let fixed_point = (0..wiring.size()).find(|&i| wiring.permute(i) == i);
                let check = match fixed_point.and_then(|i| context.alphabet.to_symbol(i)) {
                    Some(symbol) => Validation::fail(ViolationError::ReflectorNotDerangement {
                        rotor: rotor.name().to_string(),
                        symbol,
                    }),
                    None => Validation::success(()),
                };
                checks.push(check);
            }
        }

        if self.single_reflector {
            for (slot, rotor) in context.slots.iter().enumerate().skip(1) {
                let check = if rotor.reflecting() {
                    Validation::fail(ViolationError::ReflectorOutsideFirstSlot {
                        rotor: rotor.name().to_string(),
                        slot,
                    })
                } else {
                    Validation::success(())
                };
                checks.push(check);
            }
        }

        if self.pawl_layout {
            for (slot, rotor) in context.slots.iter().enumerate().skip(1) {
                let check = match (context.under_pawl(slot), rotor.rotates()) {
                    (true, false) => Validation::fail(ViolationError::StaticRotorInPawlSlot {
                        rotor: rotor.name().to_string(),
                        slot,
                    }),
                    (false, true) => Validation::fail(ViolationError::MovingRotorOutsidePawls {
                        rotor: rotor.name().to_string(),
                        slot,
                    }),
                    _ => Validation::success(()),
                };
                checks.push(check);
            }
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }
}

impl std::fmt::Debug for EnforcementRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnforcementRules")
            .field("reflector_derangement", &self.reflector_derangement)
            .field("single_reflector", &self.single_reflector)
            .field("pawl_layout", &self.pawl_layout)
            .field("required_checks", &self.required_checks.len())
            .field("on_violation", &self.on_violation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{historical_machine, MachineBuilder};
    use crate::core::{Alphabet, Permutation, Rotor};
    use crate::enforcement::builder::EnforcementBuilder;
    use crate::machine::Machine;
    use std::sync::Arc;

    fn seated(names: &[&str]) -> Machine {
        let mut machine = historical_machine();
        machine.insert_rotors(names).unwrap();
        machine
    }

    #[test]
    fn standard_layout_passes() {
        let rules = EnforcementBuilder::standard().build();
        let machine = seated(&["B", "Beta", "III", "IV", "I"]);
        assert!(rules.enforce(&SlotContext::from_machine(&machine)).is_success());
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let rules = EnforcementBuilder::standard()
            .require_pred(|_ctx| false, "Custom check always fails".to_string())
            .build();
        // Gamma sits under a pawl, I sits outside the pawls, C is a second reflector.
        let machine = seated(&["B", "I", "Gamma", "C", "II"]);

        let result = rules.enforce(&SlotContext::from_machine(&machine));

        match result {
            Validation::Failure(errors) => {
                let errors: Vec<&ViolationError> = errors.iter().collect();
                assert!(errors.contains(&&ViolationError::MovingRotorOutsidePawls {
                    rotor: "I".to_string(),
                    slot: 1,
                }));
                assert!(errors.contains(&&ViolationError::StaticRotorInPawlSlot {
                    rotor: "Gamma".to_string(),
                    slot: 2,
                }));
                assert!(errors.contains(&&ViolationError::StaticRotorInPawlSlot {
                    rotor: "C".to_string(),
                    slot: 3,
                }));
                assert!(errors.contains(&&ViolationError::ReflectorOutsideFirstSlot {
                    rotor: "C".to_string(),
                    slot: 3,
                }));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ViolationError::CustomCheckFailed { .. })));
                assert_eq!(errors.len(), 5);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn reflector_with_fixed_point_is_reported() {
        let alphabet = Arc::new(Alphabet::new("ABCD").unwrap());
        let wiring = |cycles: &str| Permutation::parse(cycles, alphabet.clone()).unwrap();
        let mut machine = MachineBuilder::new()
            .alphabet(alphabet.clone())
            .slots(2)
            .pawls(1)
            .add_rotor(Rotor::reflector("R", wiring("(AB)")))
            .add_rotor(Rotor::moving("M", wiring("(ACD)"), &[0]))
            .build()
            .unwrap();
        machine.insert_rotors(&["R", "M"]).unwrap();

        let rules = EnforcementBuilder::new().reflector_derangement().build();
        match rules.enforce(&SlotContext::from_machine(&machine)) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().any(|e| *e
                    == ViolationError::ReflectorNotDerangement {
                        rotor: "R".to_string(),
                        symbol: 'C',
                    }));
            }
            Validation::Success(_) => panic!("Expected a fixed point to be reported"),
        }
    }

    #[test]
    fn disabled_rules_do_not_run() {
        let rules = EnforcementBuilder::new().build();
        let machine = seated(&["B", "I", "Gamma", "C", "II"]);
        assert!(rules.enforce(&SlotContext::from_machine(&machine)).is_success());
    }

    #[test]
    fn custom_validation_check_works() {
        let rules = EnforcementBuilder::new()
            .require(|ctx: &SlotContext<'_>| {
                if ctx.slots.iter().any(|r| r.name() == "Beta") {
                    Validation::success(())
                } else {
                    Validation::fail(ViolationError::CustomCheckFailed {
                        message: "Beta must be seated".to_string(),
                    })
                }
            })
            .build();

        let with_beta = seated(&["B", "Beta", "I", "II", "III"]);
        assert!(rules.enforce(&SlotContext::from_machine(&with_beta)).is_success());

        let with_gamma = seated(&["B", "Gamma", "I", "II", "III"]);
        assert!(rules.enforce(&SlotContext::from_machine(&with_gamma)).is_failure());
    }

    #[test]
    fn violation_strategy_is_stored() {
        let rules = EnforcementBuilder::new()
            .on_violation(ViolationStrategy::IgnoreAndLog)
            .build();

        assert_eq!(rules.violation_strategy(), ViolationStrategy::IgnoreAndLog);
    }
}
