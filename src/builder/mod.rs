//! Builder API for step machine construction.
//!
//! Gates are declared as a table of `(state, requirements)` entries and
//! checked for consistency when the machine is built.
//!
//! # Example
//!
//! ```
//! use onboarding::builder::StepMachineBuilder;
//! use onboarding::wizard::{ApplicationForm, WizardStep};
//!
//! let machine = StepMachineBuilder::<WizardStep, ApplicationForm>::new()
//!     .gate_with(WizardStep::BusinessInfo, |rules| {
//!         rules.require_field("companyName", |f: &ApplicationForm| !f.company_name.trim().is_empty())
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert!(!machine.can_proceed(&ApplicationForm::default()));
//! ```

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::StepMachineBuilder;
