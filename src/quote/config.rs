//! Pricing tables.
//!
//! `PricingConfig::default()` carries the published rate card. A deployment
//! may override any part of it from TOML; missing sections fall back to the
//! defaults and the result is validated before an engine will use it.

use crate::quote::catalog::{Package, ProductType, StorageDuration};
use crate::quote::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ceiling for any quoted amount. Kept below `u64::MAX` so that rounding a
/// float near it cannot saturate.
const MAX_QUOTED_AMOUNT: f64 = (1u64 << 63) as f64;

/// Monthly price of one pallet position, by storage class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaseRates {
    pub standard: u64,
    pub temperature_controlled: u64,
    pub pharmaceutical: u64,
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            standard: 45_000,
            temperature_controlled: 65_000,
            pharmaceutical: 75_000,
        }
    }
}

/// Discount fraction per committed storage term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DurationDiscounts {
    #[serde(rename = "1-3")]
    pub one_to_three: f64,
    #[serde(rename = "3-6")]
    pub three_to_six: f64,
    #[serde(rename = "6-12")]
    pub six_to_twelve: f64,
    #[serde(rename = "12+")]
    pub twelve_plus: f64,
}

impl Default for DurationDiscounts {
    fn default() -> Self {
        Self {
            one_to_three: 0.0,
            three_to_six: 0.05,
            six_to_twelve: 0.10,
            twelve_plus: 0.15,
        }
    }
}

/// Discount that applies from `min_pallets` upwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolumeTier {
    pub min_pallets: u32,
    pub discount: f64,
}

/// Package markup fractions over the monthly storage rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageMarkups {
    pub essential: f64,
    pub professional: f64,
    pub premium: f64,
}

impl Default for PackageMarkups {
    fn default() -> Self {
        Self {
            essential: Package::Essential.descriptor().markup,
            professional: Package::Professional.descriptor().markup,
            premium: Package::Premium.descriptor().markup,
        }
    }
}

/// Complete rate card used by the quote engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// Label shown next to every amount
    pub currency: String,
    pub base_rates: BaseRates,
    pub duration_discounts: DurationDiscounts,
    pub volume_tiers: Vec<VolumeTier>,
    pub package_markups: PackageMarkups,
    /// Fraction of the monthly rate quoted as savings against competitors.
    /// A marketing heuristic, not a market lookup.
    pub competitor_savings: f64,
    /// Floor area occupied by one pallet position, in square meters
    pub sqm_per_pallet: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "UGX".to_string(),
            base_rates: BaseRates::default(),
            duration_discounts: DurationDiscounts::default(),
            volume_tiers: vec![
                VolumeTier {
                    min_pallets: 50,
                    discount: 0.15,
                },
                VolumeTier {
                    min_pallets: 25,
                    discount: 0.10,
                },
                VolumeTier {
                    min_pallets: 10,
                    discount: 0.05,
                },
            ],
            package_markups: PackageMarkups::default(),
            competitor_savings: 0.20,
            sqm_per_pallet: 0.96,
        }
    }
}

impl PricingConfig {
    /// Parse and validate a TOML rate card.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigurationError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML rate card from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded pricing configuration");
        Ok(config)
    }

    /// Check every table against the invariants quotes rely on.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.currency.trim().is_empty() {
            return Err(invalid("currency", "must not be empty"));
        }

        for (field, rate) in self.base_rate_fields() {
            if rate == 0 {
                return Err(invalid(field, "must be positive"));
            }
        }

        for duration in StorageDuration::ALL {
            check_discount("duration_discounts", self.duration_discount(*duration))?;
        }
        for tier in &self.volume_tiers {
            check_discount("volume_tiers.discount", tier.discount)?;
        }

        let markups = &self.package_markups;
        for markup in [markups.essential, markups.professional, markups.premium] {
            if !markup.is_finite() || markup < 0.0 {
                return Err(invalid(
                    "package_markups",
                    format!("{markup} is not a non-negative number"),
                ));
            }
        }
        if markups.essential > markups.professional || markups.professional > markups.premium {
            return Err(invalid(
                "package_markups",
                "must not decrease from essential to professional to premium",
            ));
        }

        // The largest pallet count times the dearest package must still fit.
        let max_rate = MAX_QUOTED_AMOUNT / (f64::from(u32::MAX) * (1.0 + markups.premium));
        for (field, rate) in self.base_rate_fields() {
            if rate as f64 > max_rate {
                return Err(invalid(
                    field,
                    format!("{rate} exceeds the maximum of {} per pallet", max_rate.floor()),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.competitor_savings) {
            return Err(invalid("competitor_savings", "must be between 0 and 1"));
        }
        if !self.sqm_per_pallet.is_finite() || self.sqm_per_pallet <= 0.0 {
            return Err(invalid("sqm_per_pallet", "must be positive"));
        }

        Ok(())
    }

    /// Per-pallet monthly rate for a storage class.
    ///
    /// Pharmaceutical products take precedence over temperature control.
    pub fn base_rate(&self, product_type: ProductType, temperature_control: bool) -> u64 {
        if product_type == ProductType::Pharmaceutical {
            self.base_rates.pharmaceutical
        } else if temperature_control {
            self.base_rates.temperature_controlled
        } else {
            self.base_rates.standard
        }
    }

    pub fn duration_discount(&self, duration: StorageDuration) -> f64 {
        let table = &self.duration_discounts;
        match duration {
            StorageDuration::OneToThree => table.one_to_three,
            StorageDuration::ThreeToSix => table.three_to_six,
            StorageDuration::SixToTwelve => table.six_to_twelve,
            StorageDuration::TwelvePlus => table.twelve_plus,
        }
    }

    /// Largest discount among the tiers `pallets` reaches.
    pub fn volume_discount(&self, pallets: u32) -> f64 {
        self.volume_tiers
            .iter()
            .filter(|tier| pallets >= tier.min_pallets)
            .map(|tier| tier.discount)
            .fold(0.0, f64::max)
    }

    pub fn markup(&self, package: Package) -> f64 {
        match package {
            Package::Essential => self.package_markups.essential,
            Package::Professional => self.package_markups.professional,
            Package::Premium => self.package_markups.premium,
        }
    }

    /// Price label for a package under this rate card: "Base Rate" when it
    /// carries no markup, otherwise the markup as "+N%".
    pub fn price_label(&self, package: Package) -> String {
        let markup = self.markup(package);
        if markup == 0.0 {
            "Base Rate".to_string()
        } else {
            format!("+{}%", (markup * 100.0).round())
        }
    }

    fn base_rate_fields(&self) -> [(&'static str, u64); 3] {
        [
            ("base_rates.standard", self.base_rates.standard),
            (
                "base_rates.temperature_controlled",
                self.base_rates.temperature_controlled,
            ),
            ("base_rates.pharmaceutical", self.base_rates.pharmaceutical),
        ]
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigurationError {
    ConfigurationError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_discount(field: &'static str, discount: f64) -> Result<(), ConfigurationError> {
    if discount.is_finite() && (0.0..1.0).contains(&discount) {
        Ok(())
    } else {
        Err(invalid(field, format!("{discount} is outside [0, 1)")))
    }
}
