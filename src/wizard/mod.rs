//! The five-step onboarding wizard.
//!
//! An [`OnboardingWizard`] collects business details, storage needs and a
//! package choice, keeps a quote current as those change, and hands the
//! finished application to a [`SubmissionGateway`](crate::effects::SubmissionGateway).
//!
//! Steps are gated: step 1 needs company, contact, email and business type;
//! step 2 needs product type and volume. The other steps can always be
//! left. Moving back is always allowed and fields stay editable everywhere.

pub mod documents;
pub mod form;
pub mod gates;
pub mod session;
pub mod step;

pub use documents::{document_checklist, DocumentRequirement};
pub use form::{ApplicationForm, FieldError, FieldValue, FormField};
pub use gates::{step_machine, BUSINESS_INFO_FIELDS, STORAGE_FIELDS};
pub use session::OnboardingWizard;
pub use step::WizardStep;
