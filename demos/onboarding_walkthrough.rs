//! Onboarding Walkthrough
//!
//! This demo drives one customer through all five wizard steps.
//!
//! Key concepts:
//! - Blocked steps report every missing field at once
//! - The quote follows every pricing edit, on any step
//! - A session can be checkpointed and resumed
//! - Submission is an effect run against a gateway environment
//!
//! Run with: RUST_LOG=onboarding=debug cargo run --example onboarding_walkthrough

use chrono::Utc;
use onboarding::checkpoint::WizardCheckpoint;
use onboarding::core::StepResult;
use onboarding::effects::{Submission, SubmissionGateway, SubmissionReceipt, SubmitError};
use onboarding::quote::{Package, Quote};
use onboarding::wizard::{FormField, OnboardingWizard, WizardStep};
use stillwater::effect::Effect;

#[derive(Clone)]
struct PrintingGateway;

impl SubmissionGateway for PrintingGateway {
    fn deliver(&self, submission: &Submission) -> Result<SubmissionReceipt, SubmitError> {
        println!(
            "  [Gateway] Received application from {} ({} documents requested)",
            submission.form.company_name,
            submission.documents.len()
        );
        Ok(SubmissionReceipt {
            submission_id: submission.id,
            reference: "ONB-2024-0001".to_string(),
            accepted_at: Utc::now(),
        })
    }
}

fn show_step(wizard: &OnboardingWizard) {
    let step = wizard.step();
    println!(
        "Step {}/{}: {} ({}%)",
        step.number(),
        WizardStep::COUNT,
        step.title(),
        step.progress_percent()
    );
}

fn show_quote(quote: Option<&Quote>) {
    match quote {
        Some(q) => println!(
            "  Quote: {} {} / month ({} storage + {} package, {}% discount, saves {})",
            q.currency,
            q.total_monthly,
            q.base_rate,
            q.package_cost,
            q.discount_percent,
            q.competitor_savings
        ),
        None => println!("  Quote: not available yet"),
    }
}

fn step_forward(wizard: &mut OnboardingWizard) {
    match wizard.advance() {
        StepResult::Moved { .. } => show_step(wizard),
        StepResult::Blocked { violations, .. } => {
            println!("  Cannot continue:");
            for violation in violations {
                println!("    - {}", violation);
            }
        }
        StepResult::AtBoundary(step) => println!("  Already on '{}'", step.title()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Onboarding Walkthrough ===\n");

    let mut wizard = OnboardingWizard::new();
    show_step(&wizard);

    wizard.set_field(FormField::CompanyName, "Kampala Pharma Ltd")?;
    step_forward(&mut wizard);

    wizard.set_field(FormField::ContactPerson, "Dr. Aisha Namutebi")?;
    wizard.set_field(FormField::Email, "aisha@kampalapharma.ug")?;
    wizard.set_field(FormField::BusinessType, "pharmaceutical")?;
    step_forward(&mut wizard);

    wizard.set_field(FormField::ProductType, "pharmaceutical")?;
    show_quote(wizard.quote());
    wizard.set_field(FormField::StorageVolume, "60")?;
    wizard.set_field(FormField::Duration, "12+")?;
    show_quote(wizard.quote());
    step_forward(&mut wizard);

    for package in Package::ALL {
        let descriptor = package.descriptor();
        println!(
            "  {} ({}): {} features",
            descriptor.name,
            wizard.price_label(*package),
            descriptor.features.len()
        );
    }
    wizard.select_package(Package::Premium);
    show_quote(wizard.quote());

    println!("\nSaving session...");
    let saved = wizard.checkpoint().to_json()?;
    let mut wizard = OnboardingWizard::resume(WizardCheckpoint::from_json(&saved)?)?;
    println!("Resumed session:");
    show_step(&wizard);

    step_forward(&mut wizard);
    for doc in wizard.document_checklist() {
        let marker = if doc.required { "required" } else { "optional" };
        println!("  [{}] {}: {}", marker, doc.name, doc.description);
    }
    step_forward(&mut wizard);

    println!("\nSubmitting:");
    let receipt = wizard.submit().run(&PrintingGateway).await?;
    println!("  Reference: {}", receipt.reference);

    println!("\n=== Walkthrough Complete ===");
    Ok(())
}
