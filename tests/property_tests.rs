//! Property-based tests for pricing and step navigation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use onboarding::core::{Direction, StateHistory, StepResult};
use onboarding::quote::{
    compute_quote, parse_pallets, BusinessType, Package, ProductType, Quote, StorageDuration,
};
use onboarding::wizard::{FormField, OnboardingWizard, WizardStep, BUSINESS_INFO_FIELDS};
use proptest::prelude::*;

/// Pallet counts where a new volume tier starts.
const TIER_STARTS: [u32; 3] = [10, 25, 50];

fn product_type() -> impl Strategy<Value = ProductType> {
    prop::sample::select(ProductType::ALL)
}

fn duration() -> impl Strategy<Value = StorageDuration> {
    prop::sample::select(StorageDuration::ALL)
}

fn package() -> impl Strategy<Value = Package> {
    prop::sample::select(Package::ALL)
}

fn quote_for(
    product_type: ProductType,
    temperature_control: bool,
    pallets: u32,
    duration: StorageDuration,
    package: Package,
) -> Quote {
    compute_quote(
        Some(product_type),
        temperature_control,
        Some(&pallets.to_string()),
        duration,
        package,
    )
    .expect("product type and volume are set")
}

fn expected_discount(duration: StorageDuration, pallets: u32) -> u32 {
    let by_duration = match duration {
        StorageDuration::OneToThree => 0,
        StorageDuration::ThreeToSix => 5,
        StorageDuration::SixToTwelve => 10,
        StorageDuration::TwelvePlus => 15,
    };
    let by_volume = match pallets {
        50.. => 15,
        25.. => 10,
        10.. => 5,
        _ => 0,
    };
    by_duration.max(by_volume)
}

#[derive(Clone, Copy, Debug)]
enum Nav {
    Advance,
    Retreat,
}

fn nav() -> impl Strategy<Value = Nav> {
    prop_oneof![Just(Nav::Advance), Just(Nav::Retreat)]
}

fn complete_wizard() -> OnboardingWizard {
    let mut wizard = OnboardingWizard::new();
    wizard.set_field(FormField::CompanyName, "Lira Agro").unwrap();
    wizard.set_field(FormField::ContactPerson, "Joan Acen").unwrap();
    wizard.set_field(FormField::Email, "joan@liraagro.ug").unwrap();
    wizard.set_field(FormField::BusinessType, "fmcg").unwrap();
    wizard.set_field(FormField::ProductType, "food").unwrap();
    wizard.set_field(FormField::StorageVolume, "20").unwrap();
    wizard
}

proptest! {
    #[test]
    fn quote_is_deterministic(
        product in product_type(),
        cold in any::<bool>(),
        pallets in 1u32..2_000,
        term in duration(),
        tier in package(),
    ) {
        let first = quote_for(product, cold, pallets, term, tier);
        let second = quote_for(product, cold, pallets, term, tier);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn total_is_base_plus_package(
        product in product_type(),
        cold in any::<bool>(),
        pallets in 1u32..2_000,
        term in duration(),
        tier in package(),
    ) {
        let quote = quote_for(product, cold, pallets, term, tier);
        prop_assert_eq!(quote.total_monthly, quote.base_rate + quote.package_cost);
        if tier == Package::Essential {
            prop_assert_eq!(quote.package_cost, 0);
        }
    }

    #[test]
    fn monthly_total_grows_within_a_volume_tier(
        product in product_type(),
        cold in any::<bool>(),
        pallets in 1u32..1_000,
        term in duration(),
        tier in package(),
    ) {
        prop_assume!(!TIER_STARTS.contains(&(pallets + 1)));

        let smaller = quote_for(product, cold, pallets, term, tier);
        let larger = quote_for(product, cold, pallets + 1, term, tier);

        prop_assert!(larger.total_monthly >= smaller.total_monthly);
    }

    #[test]
    fn discount_is_the_larger_of_duration_and_volume(
        product in product_type(),
        pallets in 1u32..200,
        term in duration(),
    ) {
        let quote = quote_for(product, false, pallets, term, Package::Essential);
        prop_assert_eq!(quote.discount_percent, expected_discount(term, pallets));
    }

    #[test]
    fn richer_packages_never_cost_less(
        product in product_type(),
        cold in any::<bool>(),
        pallets in 1u32..2_000,
        term in duration(),
    ) {
        let essential = quote_for(product, cold, pallets, term, Package::Essential);
        let professional = quote_for(product, cold, pallets, term, Package::Professional);
        let premium = quote_for(product, cold, pallets, term, Package::Premium);

        prop_assert!(essential.total_monthly <= professional.total_monthly);
        prop_assert!(professional.total_monthly <= premium.total_monthly);
        prop_assert_eq!(essential.base_rate, premium.base_rate);
    }

    #[test]
    fn parsed_pallets_are_never_zero(raw in ".{0,12}") {
        prop_assert!(parse_pallets(&raw) >= 1);
    }

    #[test]
    fn positive_counts_parse_exactly(pallets in 1u32..=u32::MAX) {
        prop_assert_eq!(parse_pallets(&pallets.to_string()), pallets);
    }

    #[test]
    fn step_one_gate_tracks_its_four_fields(
        company in "[ a-z]{0,4}",
        contact in "[ a-z]{0,4}",
        email in "[ a-z@.]{0,4}",
        business in prop::option::of(prop::sample::select(BusinessType::ALL)),
    ) {
        let mut wizard = OnboardingWizard::new();
        wizard.set_field(FormField::CompanyName, company.as_str()).unwrap();
        wizard.set_field(FormField::ContactPerson, contact.as_str()).unwrap();
        wizard.set_field(FormField::Email, email.as_str()).unwrap();
        let business_key = business.map(|b| b.key()).unwrap_or("");
        wizard.set_field(FormField::BusinessType, business_key).unwrap();

        let expected = !company.trim().is_empty()
            && !contact.trim().is_empty()
            && !email.trim().is_empty()
            && business.is_some();

        prop_assert_eq!(wizard.can_proceed(), expected);
        prop_assert_eq!(
            BUSINESS_INFO_FIELDS.iter().all(|f| wizard.form().is_filled(*f)),
            expected
        );
    }

    #[test]
    fn navigation_stays_within_the_five_steps(moves in prop::collection::vec(nav(), 0..30)) {
        let mut wizard = complete_wizard();

        for step in moves {
            let before = wizard.step();
            let result = match step {
                Nav::Advance => wizard.advance(),
                Nav::Retreat => wizard.retreat(),
            };

            match (step, before) {
                (Nav::Advance, WizardStep::ReviewSubmit) | (Nav::Retreat, WizardStep::BusinessInfo) => {
                    prop_assert_eq!(result, StepResult::AtBoundary(before));
                    prop_assert_eq!(wizard.step(), before);
                }
                _ => prop_assert!(result.moved()),
            }
            prop_assert!((1..=WizardStep::COUNT).contains(&wizard.step().number()));
            prop_assert_eq!(
                u32::from(wizard.step().progress_percent()),
                u32::from(wizard.step().number()) * 20
            );
        }
    }

    #[test]
    fn history_path_follows_every_move(moves in prop::collection::vec(nav(), 0..20)) {
        let mut wizard = complete_wizard();
        let mut visited = vec![wizard.step()];

        for step in moves {
            let moved = match step {
                Nav::Advance => wizard.advance().moved(),
                Nav::Retreat => wizard.retreat().moved(),
            };
            if moved {
                visited.push(wizard.step());
            }
        }

        let history: &StateHistory<WizardStep> = wizard.history();
        let path: Vec<WizardStep> = history.get_path().into_iter().copied().collect();
        if history.transitions().is_empty() {
            prop_assert!(path.is_empty());
        } else {
            prop_assert_eq!(path, visited);
        }
        prop_assert_eq!(
            history.count(Direction::Forward) + history.count(Direction::Back),
            history.transitions().len()
        );
    }

    #[test]
    fn blocked_step_two_never_moves(volume in "[ ]{0,3}", retries in 1usize..5) {
        let mut wizard = OnboardingWizard::new();
        wizard.set_field(FormField::CompanyName, "Soroti Fresh").unwrap();
        wizard.set_field(FormField::ContactPerson, "Moses Ekwaro").unwrap();
        wizard.set_field(FormField::Email, "moses@sorotifresh.ug").unwrap();
        wizard.set_field(FormField::BusinessType, "other").unwrap();
        wizard.advance();
        wizard.set_field(FormField::ProductType, "food").unwrap();
        wizard.set_field(FormField::StorageVolume, volume.as_str()).unwrap();

        for _ in 0..retries {
            let blocked = matches!(wizard.advance(), StepResult::Blocked { .. });
            prop_assert!(blocked);
        }
        prop_assert_eq!(wizard.step(), WizardStep::StorageRequirements);
        prop_assert!(wizard.quote().is_none());
    }

    #[test]
    fn checkpoint_round_trip_keeps_quote(
        pallets in 1u32..500,
        term in duration(),
        tier in package(),
    ) {
        let mut wizard = complete_wizard();
        wizard.set_field(FormField::StorageVolume, pallets.to_string()).unwrap();
        wizard.set_field(FormField::Duration, term.key()).unwrap();
        wizard.select_package(tier);
        wizard.advance();

        let bytes = wizard.checkpoint().to_bytes().unwrap();
        let restored = onboarding::checkpoint::WizardCheckpoint::from_bytes(&bytes).unwrap();
        let resumed = OnboardingWizard::resume(restored).unwrap();

        prop_assert_eq!(resumed.step(), wizard.step());
        prop_assert_eq!(resumed.quote(), wizard.quote());
    }
}
