//! Requirement tables for leaving a state.
//!
//! Each gated state of a step machine owns a [`Requirements`] set. Checking
//! it uses Stillwater's `Validation` type, so a blocked step reports every
//! unmet requirement in one pass instead of only the first.
//!
//! # Example
//!
//! ```rust
//! use onboarding::enforcement::{Requirements, RequirementsBuilder};
//!
//! struct Signup {
//!     email: String,
//!     accepted_terms: bool,
//! }
//!
//! let rules: Requirements<Signup> = RequirementsBuilder::new()
//!     .require_field("email", |s: &Signup| !s.email.is_empty())
//!     .require_pred(|s: &Signup| s.accepted_terms, "terms must be accepted")
//!     .build();
//!
//! let pending = Signup { email: String::new(), accepted_terms: false };
//! assert_eq!(rules.violations(&pending).len(), 2);
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::RequirementsBuilder;
pub use rules::Requirements;
pub use violations::Violation;
