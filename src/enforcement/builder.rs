//! Builder API for creating enforcement rules.

use crate::enforcement::context::SlotContext;
use crate::enforcement::rules::{EnforcementRules, ValidationCheck};
use crate::enforcement::violations::{ViolationError, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating enforcement rules
pub struct EnforcementBuilder {
    reflector_derangement: bool,
    single_reflector: bool,
    pawl_layout: bool,
    required_checks: Vec<ValidationCheck>,
    on_violation: ViolationStrategy,
}

impl EnforcementBuilder {
    /// A builder with no rules enabled.
    pub fn new() -> Self {
        Self {
            reflector_derangement: false,
            single_reflector: false,
            pawl_layout: false,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Abort,
        }
    }

    /// A builder with every built-in layout rule enabled.
    pub fn standard() -> Self {
        Self::new()
            .reflector_derangement()
            .single_reflector()
            .pawl_layout()
    }

    /// Require every seated reflector to leave no symbol fixed
    pub fn reflector_derangement(mut self) -> Self {
        self.reflector_derangement = true;
        self
    }

    /// Require slot 0 to be the only reflector
    pub fn single_reflector(mut self) -> Self {
        self.single_reflector = true;
        self
    }

    /// Require moving rotors in exactly the rightmost pawl slots
    pub fn pawl_layout(mut self) -> Self {
        self.pawl_layout = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&SlotContext<'_>) -> Validation<(), NonEmptyVec<ViolationError>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&SlotContext<'_>) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &SlotContext<'_>| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(ViolationError::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    /// Build the enforcement rules
    pub fn build(self) -> EnforcementRules {
        EnforcementRules {
            reflector_derangement: self.reflector_derangement,
            single_reflector: self.single_reflector,
            pawl_layout: self.pawl_layout,
            required_checks: self.required_checks,
            on_violation: self.on_violation,
        }
    }
}

impl Default for EnforcementBuilder {
    fn default() -> Self {
        Self::new()
    }
}
