//! Validation-based layout checks for seated rotors.
//!
//! A machine accepts any catalog rotors in any order as long as slot 0
//! holds a reflector. Whether the resulting layout is one a real machine
//! could have (moving wheels under the pawls, a reflector with no fixed
//! points) is checked here, using Stillwater's `Validation` type so that
//! every violation is reported in one pass instead of only the first.
//!
//! # Example
//!
//! ```rust
//! use enigma::builder::historical_machine;
//! use enigma::enforcement::{EnforcementBuilder, SlotContext, ViolationStrategy};
//!
//! let rules = EnforcementBuilder::standard()
//!     .on_violation(ViolationStrategy::Abort)
//!     .build();
//!
//! let mut machine = historical_machine();
//! machine.insert_rotors(&["B", "I", "Beta", "II", "III"]).unwrap();
//!
//! let result = rules.enforce(&SlotContext::from_machine(&machine));
//! assert!(result.is_failure());
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::EnforcementBuilder;
pub use context::SlotContext;
pub use rules::EnforcementRules;
pub use violations::{ViolationError, ViolationStrategy};
