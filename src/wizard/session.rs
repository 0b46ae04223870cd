//! An onboarding session: step machine, form, package and live quote.

use crate::checkpoint::{CheckpointError, WizardCheckpoint};
use crate::core::{StateHistory, StepMachine, StepResult};
use crate::effects::{self, Submission, SubmissionGateway, SubmissionReceipt, SubmitError};
use crate::enforcement::Violation;
use crate::quote::{Package, Quote, QuoteEngine, QuoteInput};
use crate::wizard::documents::{document_checklist, DocumentRequirement};
use crate::wizard::form::{ApplicationForm, FieldError, FieldValue, FormField};
use crate::wizard::gates;
use crate::wizard::step::WizardStep;
use chrono::Utc;
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;
use uuid::Uuid;

/// One customer's pass through the onboarding wizard.
///
/// The session owns the form exclusively. Every edit to a pricing input
/// recomputes the quote on the spot, so [`quote`](Self::quote) always
/// reflects the current form and package.
///
/// # Example
///
/// ```rust
/// use onboarding::wizard::{FormField, OnboardingWizard, WizardStep};
///
/// let mut wizard = OnboardingWizard::new();
/// assert!(!wizard.can_proceed());
///
/// wizard.set_field(FormField::CompanyName, "Jinja Mills").unwrap();
/// wizard.set_field(FormField::ContactPerson, "Peter Okello").unwrap();
/// wizard.set_field(FormField::Email, "peter@jinjamills.ug").unwrap();
/// wizard.set_field(FormField::BusinessType, "manufacturing").unwrap();
///
/// assert!(wizard.advance().moved());
/// assert_eq!(wizard.step(), WizardStep::StorageRequirements);
/// ```
pub struct OnboardingWizard {
    machine: StepMachine<WizardStep, ApplicationForm>,
    form: ApplicationForm,
    package: Package,
    engine: QuoteEngine,
    quote: Option<Quote>,
}

impl OnboardingWizard {
    /// Start a session on step 1 with the published rate card.
    pub fn new() -> Self {
        Self::with_engine(QuoteEngine::standard().clone())
    }

    /// Start a session priced by `engine`.
    pub fn with_engine(engine: QuoteEngine) -> Self {
        let machine = gates::step_machine().expect("wizard gate table is consistent");
        Self {
            machine,
            form: ApplicationForm::default(),
            package: Package::default(),
            engine,
            quote: None,
        }
    }

    /// Restore a session from a checkpoint, pricing it with the published
    /// rate card.
    pub fn resume(checkpoint: WizardCheckpoint) -> Result<Self, CheckpointError> {
        Self::resume_with_engine(checkpoint, QuoteEngine::standard().clone())
    }

    pub fn resume_with_engine(
        checkpoint: WizardCheckpoint,
        engine: QuoteEngine,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;

        let mut wizard = Self::with_engine(engine);
        wizard.machine.restore(checkpoint.step, checkpoint.history);
        wizard.form = checkpoint.form;
        wizard.package = checkpoint.package;
        wizard.refresh_quote();

        tracing::debug!(
            checkpoint_id = %checkpoint.id,
            step = checkpoint.step.number(),
            "resumed onboarding session"
        );
        Ok(wizard)
    }

    pub fn step(&self) -> WizardStep {
        *self.machine.current_state()
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn package(&self) -> Package {
        self.package
    }

    /// Current quote, absent until product type and volume are both set.
    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    pub fn history(&self) -> &StateHistory<WizardStep> {
        self.machine.history()
    }

    /// Whether the current step's gate is satisfied.
    pub fn can_proceed(&self) -> bool {
        self.machine.can_proceed(&self.form)
    }

    /// Whether the gate on `step` is satisfied by the current form.
    pub fn can_proceed_from(&self, step: WizardStep) -> bool {
        self.machine.can_leave(&step, &self.form)
    }

    /// Every unmet requirement on the current step.
    pub fn missing(&self) -> Vec<Violation> {
        self.machine.violations(&self.step(), &self.form)
    }

    /// Price label for `package` under this session's rate card.
    pub fn price_label(&self, package: Package) -> String {
        self.engine.config().price_label(package)
    }

    /// Documents to request on the documentation step.
    pub fn document_checklist(&self) -> Vec<DocumentRequirement> {
        document_checklist(self.form.product_type)
    }

    /// Update one form field. Allowed on any step.
    ///
    /// Pricing fields refresh the quote. On error nothing changes.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<FieldValue>,
    ) -> Result<(), FieldError> {
        self.form.set(field, value.into())?;

        if field.affects_pricing() {
            self.refresh_quote();
        } else {
            tracing::trace!(%field, "form field updated");
        }
        Ok(())
    }

    /// Update a field addressed by its key, such as `"storageVolume"`.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FieldError> {
        let field: FormField = name.parse()?;
        self.set_field(field, value)
    }

    /// Choose a service package. Allowed on any step.
    pub fn select_package(&mut self, package: Package) {
        self.package = package;
        self.refresh_quote();
    }

    /// Move forward if the current step is complete.
    ///
    /// A blocked or out-of-range request leaves the session unchanged.
    pub fn advance(&mut self) -> StepResult<WizardStep> {
        self.machine.advance(&self.form)
    }

    /// Move back one step. Stays on step 1 when already there.
    pub fn retreat(&mut self) -> StepResult<WizardStep> {
        self.machine.retreat()
    }

    /// Assemble the submission payload without sending it.
    ///
    /// Only available on the review step, and only if every gate still
    /// holds; fields can be edited after their step was passed.
    pub fn submission(&self) -> Result<Submission, SubmitError> {
        if !self.machine.is_final() {
            return Err(SubmitError::NotAtReview {
                step: self.step().title().to_string(),
            });
        }

        let violations: Vec<Violation> = WizardStep::ALL
            .iter()
            .flat_map(|step| self.machine.violations(step, &self.form))
            .collect();
        if !violations.is_empty() {
            return Err(SubmitError::Incomplete { violations });
        }

        let quote = self
            .quote
            .clone()
            .ok_or_else(|| SubmitError::Incomplete {
                violations: Vec::new(),
            })?;

        Ok(Submission {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form: self.form.clone(),
            package: self.package,
            quote,
            documents: self.document_checklist(),
        })
    }

    /// Effect that submits the application through the environment's
    /// gateway.
    ///
    /// Submitting does not change the step; there is nothing after review.
    pub fn submit<Env>(&self) -> BoxedEffect<SubmissionReceipt, SubmitError, Env>
    where
        Env: SubmissionGateway + Clone + Send + Sync + 'static,
    {
        match self.submission() {
            Ok(submission) => effects::deliver(submission).boxed(),
            Err(err) => {
                tracing::debug!(error = %err, "submission refused");
                fail(err).boxed()
            }
        }
    }

    /// Snapshot the session for later [`resume`](Self::resume).
    pub fn checkpoint(&self) -> WizardCheckpoint {
        WizardCheckpoint::capture(
            self.step(),
            self.form.clone(),
            self.package,
            self.history().clone(),
        )
    }

    fn refresh_quote(&mut self) {
        let form = &self.form;
        self.quote = self.engine.quote(&QuoteInput {
            product_type: form.product_type,
            temperature_control: form.temperature_control,
            storage_volume: Some(form.storage_volume.as_str()),
            duration: form.duration,
            package: self.package,
        });

        match &self.quote {
            Some(quote) => tracing::debug!(
                total_monthly = quote.total_monthly,
                discount_percent = quote.discount_percent,
                package = %self.package,
                "quote recomputed"
            ),
            None => tracing::debug!("quote cleared; product type or volume unset"),
        }
    }
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::quote::{PricingConfig, ProductType};

    fn complete_business_info(wizard: &mut OnboardingWizard) {
        wizard
            .set_field(FormField::CompanyName, "Mbarara Dairy Co")
            .unwrap();
        wizard
            .set_field(FormField::ContactPerson, "Ruth Nambi")
            .unwrap();
        wizard
            .set_field(FormField::Email, "ruth@mbararadairy.ug")
            .unwrap();
        wizard
            .set_field(FormField::BusinessType, "fmcg")
            .unwrap();
    }

    fn complete_storage(wizard: &mut OnboardingWizard) {
        wizard.set_field(FormField::ProductType, "food").unwrap();
        wizard.set_field(FormField::StorageVolume, "10").unwrap();
    }

    fn wizard_at_review() -> OnboardingWizard {
        let mut wizard = OnboardingWizard::new();
        complete_business_info(&mut wizard);
        complete_storage(&mut wizard);
        for _ in 0..4 {
            assert!(wizard.advance().moved());
        }
        wizard
    }

    #[test]
    fn session_can_move_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OnboardingWizard>();
    }

    #[test]
    fn new_session_starts_on_step_one_without_quote() {
        let wizard = OnboardingWizard::new();

        assert_eq!(wizard.step(), WizardStep::BusinessInfo);
        assert_eq!(wizard.package(), Package::Professional);
        assert!(wizard.quote().is_none());
        assert!(!wizard.can_proceed());
    }

    #[test]
    fn blocked_advance_is_a_noop() {
        let mut wizard = OnboardingWizard::new();
        wizard
            .set_field(FormField::CompanyName, "Half Done Ltd")
            .unwrap();

        let result = wizard.advance();

        assert!(matches!(result, StepResult::Blocked { ref violations, .. } if violations.len() == 3));
        assert_eq!(wizard.step(), WizardStep::BusinessInfo);
        assert_eq!(wizard.missing().len(), 3);
    }

    #[test]
    fn quote_appears_once_pricing_inputs_are_set() {
        let mut wizard = OnboardingWizard::new();
        wizard.set_field(FormField::ProductType, "food").unwrap();
        assert!(wizard.quote().is_none());

        wizard.set_field(FormField::StorageVolume, "10").unwrap();
        let quote = wizard.quote().unwrap();

        assert_eq!(quote.base_rate, 427_500);
        assert_eq!(quote.package, Package::Professional);
    }

    #[test]
    fn quote_is_discarded_when_volume_is_cleared() {
        let mut wizard = OnboardingWizard::new();
        complete_storage(&mut wizard);
        assert!(wizard.quote().is_some());

        wizard.set_field(FormField::StorageVolume, "").unwrap();

        assert!(wizard.quote().is_none());
    }

    #[test]
    fn package_selection_reprices() {
        let mut wizard = OnboardingWizard::new();
        complete_storage(&mut wizard);

        wizard.select_package(Package::Essential);
        assert_eq!(wizard.quote().unwrap().total_monthly, 427_500);

        wizard.select_package(Package::Premium);
        assert_eq!(wizard.quote().unwrap().total_monthly, 555_750);
    }

    #[test]
    fn set_field_by_name_accepts_keys() {
        let mut wizard = OnboardingWizard::new();
        wizard.set_field_by_name("temperatureControl", true).unwrap();
        wizard.set_field_by_name("productType", "consumer").unwrap();
        wizard.set_field_by_name("storageVolume", "1").unwrap();

        assert_eq!(wizard.form().product_type, Some(ProductType::Consumer));
        assert_eq!(wizard.quote().unwrap().rate_per_pallet, 65_000);
        assert!(wizard.set_field_by_name("fax", "0414").is_err());
    }

    #[test]
    fn full_walk_reaches_review_and_stops() {
        let mut wizard = wizard_at_review();

        assert_eq!(wizard.step(), WizardStep::ReviewSubmit);
        assert_eq!(
            wizard.advance(),
            StepResult::AtBoundary(WizardStep::ReviewSubmit)
        );
        assert_eq!(wizard.step(), WizardStep::ReviewSubmit);
        assert_eq!(wizard.history().count(Direction::Forward), 4);
    }

    #[test]
    fn retreat_from_first_step_is_noop() {
        let mut wizard = OnboardingWizard::new();

        assert_eq!(
            wizard.retreat(),
            StepResult::AtBoundary(WizardStep::BusinessInfo)
        );
        assert_eq!(wizard.step(), WizardStep::BusinessInfo);
    }

    #[test]
    fn fields_can_be_edited_on_any_step() {
        let mut wizard = wizard_at_review();

        wizard.set_field(FormField::Duration, "12+").unwrap();

        assert_eq!(wizard.quote().unwrap().discount_percent, 15);
    }

    #[test]
    fn submission_requires_review_step() {
        let mut wizard = OnboardingWizard::new();
        complete_business_info(&mut wizard);

        assert!(matches!(
            wizard.submission(),
            Err(SubmitError::NotAtReview { .. })
        ));
    }

    #[test]
    fn submission_rechecks_every_gate() {
        let mut wizard = wizard_at_review();
        wizard.set_field(FormField::Email, "").unwrap();
        wizard.set_field(FormField::StorageVolume, "").unwrap();

        match wizard.submission() {
            Err(SubmitError::Incomplete { violations }) => {
                let fields: Vec<&str> = violations.iter().filter_map(|v| v.field()).collect();
                assert_eq!(fields, vec!["email", "storageVolume"]);
            }
            other => panic!("Expected incomplete submission, got {other:?}"),
        }
    }

    #[test]
    fn submission_carries_form_package_and_quote() {
        let mut wizard = wizard_at_review();
        wizard.select_package(Package::Premium);

        let submission = wizard.submission().unwrap();

        assert_eq!(submission.form.company_name, "Mbarara Dairy Co");
        assert_eq!(submission.package, Package::Premium);
        assert_eq!(submission.quote.total_monthly, 555_750);
        assert_eq!(submission.documents.len(), 6);
    }

    #[test]
    fn checkpoint_resume_restores_session_and_quote() {
        let mut wizard = OnboardingWizard::new();
        complete_business_info(&mut wizard);
        wizard.advance();
        complete_storage(&mut wizard);
        wizard.select_package(Package::Essential);

        let json = wizard.checkpoint().to_json().unwrap();
        let resumed = OnboardingWizard::resume(WizardCheckpoint::from_json(&json).unwrap()).unwrap();

        assert_eq!(resumed.step(), WizardStep::StorageRequirements);
        assert_eq!(resumed.form(), wizard.form());
        assert_eq!(resumed.package(), Package::Essential);
        assert_eq!(resumed.quote(), wizard.quote());
        assert_eq!(resumed.history().transitions().len(), 1);
    }

    #[test]
    fn resumed_session_keeps_gates() {
        let checkpoint = OnboardingWizard::new().checkpoint();
        let mut resumed = OnboardingWizard::resume(checkpoint).unwrap();

        assert!(matches!(resumed.advance(), StepResult::Blocked { .. }));
    }

    #[test]
    fn custom_engine_prices_session() {
        let mut config = PricingConfig::default();
        config.base_rates.standard = 40_000;
        let mut wizard = OnboardingWizard::with_engine(QuoteEngine::new(config).unwrap());

        wizard.set_field(FormField::ProductType, "industrial").unwrap();
        wizard.set_field(FormField::StorageVolume, "1").unwrap();
        wizard.set_field(FormField::Duration, "1-3").unwrap();

        assert_eq!(wizard.quote().unwrap().base_rate, 40_000);
    }

    #[test]
    fn price_labels_come_from_session_rate_card() {
        let mut config = PricingConfig::default();
        config.package_markups.premium = 0.40;
        let wizard = OnboardingWizard::with_engine(QuoteEngine::new(config).unwrap());

        assert_eq!(wizard.price_label(Package::Essential), "Base Rate");
        assert_eq!(wizard.price_label(Package::Premium), "+40%");
        assert_eq!(OnboardingWizard::new().price_label(Package::Premium), "+30%");
    }

    #[derive(Clone)]
    struct AcceptingGateway;

    impl SubmissionGateway for AcceptingGateway {
        fn deliver(&self, submission: &Submission) -> Result<SubmissionReceipt, SubmitError> {
            Ok(SubmissionReceipt {
                submission_id: submission.id,
                reference: format!("ONB-{}", submission.form.company_name.len()),
                accepted_at: Utc::now(),
            })
        }
    }

    #[derive(Clone)]
    struct RejectingGateway;

    impl SubmissionGateway for RejectingGateway {
        fn deliver(&self, _submission: &Submission) -> Result<SubmissionReceipt, SubmitError> {
            Err(SubmitError::Rejected {
                reason: "intake closed".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn submit_runs_through_gateway() {
        let wizard = wizard_at_review();

        let receipt = wizard.submit().run(&AcceptingGateway).await.unwrap();

        assert_eq!(receipt.reference, "ONB-16");
        assert_eq!(wizard.step(), WizardStep::ReviewSubmit);
    }

    #[tokio::test]
    async fn submit_surfaces_gateway_rejection() {
        let wizard = wizard_at_review();

        let result = wizard.submit().run(&RejectingGateway).await;

        assert!(matches!(result, Err(SubmitError::Rejected { .. })));
    }

    #[tokio::test]
    async fn submit_before_review_never_reaches_gateway() {
        let wizard = OnboardingWizard::new();

        let result = wizard.submit().run(&RejectingGateway).await;

        assert!(matches!(result, Err(SubmitError::NotAtReview { .. })));
    }
}
