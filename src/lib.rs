//! Onboarding: a step-gated customer wizard with a live storage quote
//!
//! The crate follows a "pure core, imperative shell" layout. Navigation,
//! gating and pricing are pure functions over plain data; the only effect,
//! handing a finished application to an outside system, is described as a
//! Stillwater `Effect` and run by the caller.
//!
//! # Core Concepts
//!
//! - **Step machine**: a linear sequence of states where leaving a state
//!   forwards requires its gate to pass (`core`, `enforcement`, `builder`)
//! - **Quote engine**: monthly storage pricing from product type, volume,
//!   duration and package (`quote`)
//! - **Wizard**: the five onboarding screens tied to a form and a quote
//!   (`wizard`)
//! - **Checkpoints**: save and resume a session (`checkpoint`)
//!
//! # Example
//!
//! ```rust
//! use onboarding::quote::Package;
//! use onboarding::wizard::{FormField, OnboardingWizard, WizardStep};
//!
//! let mut wizard = OnboardingWizard::new();
//! wizard.set_field(FormField::CompanyName, "Gulu Grain Traders").unwrap();
//! wizard.set_field(FormField::ContactPerson, "Sam Opio").unwrap();
//! wizard.set_field(FormField::Email, "sam@gulugrain.ug").unwrap();
//! wizard.set_field(FormField::BusinessType, "trading").unwrap();
//! wizard.advance();
//!
//! wizard.set_field(FormField::ProductType, "food").unwrap();
//! wizard.set_field(FormField::StorageVolume, "10").unwrap();
//! wizard.select_package(Package::Essential);
//!
//! assert_eq!(wizard.step(), WizardStep::StorageRequirements);
//! assert_eq!(wizard.quote().unwrap().total_monthly, 427_500);
//! ```

#[macro_use]
mod macros;

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod effects;
pub mod enforcement;
pub mod quote;
pub mod wizard;

// Re-export commonly used types
pub use core::{Sequential, State, StateHistory, StepMachine, StepResult};
pub use quote::{compute_quote, Package, Quote, QuoteEngine};
pub use wizard::{ApplicationForm, FormField, OnboardingWizard, WizardStep};
