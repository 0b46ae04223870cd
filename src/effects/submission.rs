//! Handing a finished application to the outside world.

use crate::enforcement::Violation;
use crate::quote::{Package, Quote};
use crate::wizard::{ApplicationForm, DocumentRequirement};
use chrono::{DateTime, Utc};
use serde::Serialize;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use thiserror::Error;
use uuid::Uuid;

/// Final payload of an onboarding session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub form: ApplicationForm,
    pub package: Package,
    pub quote: Quote,
    /// Documents the applicant is asked to provide for verification
    pub documents: Vec<DocumentRequirement>,
}

/// Acknowledgement returned by a gateway.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    /// Gateway-assigned reference quoted to the customer
    pub reference: String,
    pub accepted_at: DateTime<Utc>,
}

/// Errors that can occur when submitting
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("Submission is only available on the review step (currently on '{step}')")]
    NotAtReview { step: String },

    #[error("Application is incomplete: {} requirement(s) unmet", violations.len())]
    Incomplete { violations: Vec<Violation> },

    #[error("Submission rejected: {reason}")]
    Rejected { reason: String },
}

/// Whatever receives finished applications: a CRM, a queue, an email
/// service. Confirmation, document verification and contract generation
/// all happen behind this boundary.
pub trait SubmissionGateway {
    fn deliver(&self, submission: &Submission) -> Result<SubmissionReceipt, SubmitError>;
}

/// Effect that hands `submission` to the environment's gateway.
pub fn deliver<Env>(
    submission: Submission,
) -> impl Effect<Output = SubmissionReceipt, Error = SubmitError, Env = Env>
where
    Env: SubmissionGateway + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        tracing::info!(
            submission_id = %submission.id,
            company = %submission.form.company_name,
            package = %submission.package,
            total_monthly = submission.quote.total_monthly,
            "submitting onboarding application"
        );
        let receipt = env.deliver(&submission)?;
        tracing::info!(
            submission_id = %receipt.submission_id,
            reference = %receipt.reference,
            "onboarding application accepted"
        );
        Ok(receipt)
    })
}
