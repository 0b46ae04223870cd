//! Completeness gates for each wizard step.
//!
//! | step | leaving it requires |
//! |---|---|
//! | 1 Business Info | company name, contact person, email, business type |
//! | 2 Storage Requirements | product type, storage volume |
//! | 3 Package Selection | nothing: a package is always selected |
//! | 4 Documentation | nothing: documents are optional |
//! | 5 Review & Submit | nothing: it is the last step |

use crate::builder::{BuildError, StepMachineBuilder};
use crate::core::StepMachine;
use crate::enforcement::RequirementsBuilder;
use crate::wizard::form::{ApplicationForm, FormField};
use crate::wizard::step::WizardStep;

/// Fields that must be filled before leaving Business Info.
pub const BUSINESS_INFO_FIELDS: [FormField; 4] = [
    FormField::CompanyName,
    FormField::ContactPerson,
    FormField::Email,
    FormField::BusinessType,
];

/// Fields that must be filled before leaving Storage Requirements.
pub const STORAGE_FIELDS: [FormField; 2] = [FormField::ProductType, FormField::StorageVolume];

/// Build the wizard's step machine with its gate table installed.
pub fn step_machine() -> Result<StepMachine<WizardStep, ApplicationForm>, BuildError> {
    StepMachineBuilder::new()
        .gate_with(WizardStep::BusinessInfo, |rules| {
            require_filled(rules, &BUSINESS_INFO_FIELDS)
        })
        .gate_with(WizardStep::StorageRequirements, |rules| {
            require_filled(rules, &STORAGE_FIELDS)
        })
        .build()
}

fn require_filled(
    rules: RequirementsBuilder<ApplicationForm>,
    fields: &[FormField],
) -> RequirementsBuilder<ApplicationForm> {
    fields.iter().fold(rules, |rules, &field| {
        rules.require_field(field.key(), move |form: &ApplicationForm| {
            form.is_filled(field)
        })
    })
}
