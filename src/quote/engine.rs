//! Quote computation.
//!
//! Pricing is a pure projection of five inputs: product type, temperature
//! control, storage volume, duration and package. Nothing is cached and
//! nothing is mutated; the same inputs always produce the same [`Quote`].
//!
//! Amounts are whole currency units. Every intermediate value is a
//! non-negative `f64` rounded with [`f64::round`] (half away from zero).

use crate::quote::catalog::{Package, ProductType, StorageDuration};
use crate::quote::config::PricingConfig;
use crate::quote::error::ConfigurationError;
use serde::Serialize;
use std::sync::OnceLock;

/// Inputs the quote depends on.
///
/// `storage_volume` is the raw text the customer typed. Blank text counts
/// as unset; anything else is coerced to a pallet count of at least one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteInput<'a> {
    pub product_type: Option<ProductType>,
    pub temperature_control: bool,
    pub storage_volume: Option<&'a str>,
    pub duration: StorageDuration,
    pub package: Package,
}

/// A priced monthly storage quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Monthly storage rate after discount, before the package
    pub base_rate: u64,
    /// Monthly charge for the selected package
    pub package_cost: u64,
    /// `base_rate + package_cost`
    pub total_monthly: u64,
    /// Effective discount, whole percent
    pub discount_percent: u32,
    /// Quoted savings against competitors
    pub competitor_savings: u64,
    /// Monthly storage rate per square meter of floor area
    pub sq_meter_rate: u64,
    /// Pallet count the quote was priced on
    pub pallets: u32,
    /// Undiscounted monthly rate of one pallet for this storage class
    pub rate_per_pallet: u64,
    /// `total_monthly` spread over the pallets
    pub per_pallet_monthly: u64,
    /// Floor area the pallets occupy, in square meters
    pub floor_area_sqm: f64,
    pub package: Package,
    pub currency: String,
}

/// Prices quotes against a validated rate card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteEngine {
    config: PricingConfig,
}

impl QuoteEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: PricingConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine over the published rate card.
    pub fn standard() -> &'static QuoteEngine {
        static STANDARD: OnceLock<QuoteEngine> = OnceLock::new();
        STANDARD.get_or_init(QuoteEngine::default)
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price `input`, or `None` while product type or volume is unset.
    pub fn quote(&self, input: &QuoteInput<'_>) -> Option<Quote> {
        let product_type = input.product_type?;
        let raw_volume = input.storage_volume.filter(|v| !v.trim().is_empty())?;

        let config = &self.config;
        let pallets = parse_pallets(raw_volume);
        let volume = f64::from(pallets);
        let rate_per_pallet = config.base_rate(product_type, input.temperature_control);

        // The larger of the two discounts applies; they never stack.
        let discount = config
            .duration_discount(input.duration)
            .max(config.volume_discount(pallets));

        let base_rate = round_amount(rate_per_pallet as f64 * volume * (1.0 - discount));
        let package_cost = round_amount(base_rate as f64 * config.markup(input.package));
        let total_monthly = base_rate.saturating_add(package_cost);
        let floor_area_sqm = volume * config.sqm_per_pallet;

        Some(Quote {
            base_rate,
            package_cost,
            total_monthly,
            discount_percent: (discount * 100.0).round() as u32,
            competitor_savings: round_amount(base_rate as f64 * config.competitor_savings),
            sq_meter_rate: round_amount(base_rate as f64 / floor_area_sqm),
            pallets,
            rate_per_pallet,
            per_pallet_monthly: round_amount(total_monthly as f64 / volume),
            floor_area_sqm,
            package: input.package,
            currency: config.currency.clone(),
        })
    }
}

/// Price a quote with the published rate card.
///
/// Returns `None` when `product_type` is unset or `storage_volume` is unset
/// or blank.
///
/// # Example
///
/// ```rust
/// use onboarding::quote::{compute_quote, Package, ProductType, StorageDuration};
///
/// let quote = compute_quote(
///     Some(ProductType::Food),
///     false,
///     Some("10"),
///     StorageDuration::ThreeToSix,
///     Package::Essential,
/// )
/// .unwrap();
///
/// assert_eq!(quote.base_rate, 427_500);
/// assert_eq!(quote.discount_percent, 5);
/// ```
pub fn compute_quote(
    product_type: Option<ProductType>,
    temperature_control: bool,
    storage_volume: Option<&str>,
    duration: StorageDuration,
    package: Package,
) -> Option<Quote> {
    QuoteEngine::standard().quote(&QuoteInput {
        product_type,
        temperature_control,
        storage_volume,
        duration,
        package,
    })
}

/// Coerce free-text volume to a pallet count of at least one.
///
/// Leading whitespace and a `+` sign are skipped and the leading run of
/// digits is read, so `"12 pallets"` is 12 and `"7.5"` is 7. Text with no
/// leading digits, zero and negative numbers all become 1. Counts too
/// large for `u32` saturate.
pub fn parse_pallets(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    let count = match digits.parse::<u32>() {
        Ok(count) => count,
        Err(_) if !digits.is_empty() => u32::MAX,
        Err(_) => {
            tracing::debug!(input = raw, "storage volume is not numeric; pricing one pallet");
            0
        }
    };

    count.max(1)
}

fn round_amount(value: f64) -> u64 {
    value.round() as u64
}
