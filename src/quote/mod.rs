//! Storage quote engine.
//!
//! The engine is a pure function of the pricing inputs. It knows nothing
//! about wizard steps; the wizard calls it whenever a pricing input changes.
//!
//! # Pricing rules
//!
//! 1. Base rate per pallet: pharmaceutical 75 000, temperature-controlled
//!    65 000, otherwise 45 000.
//! 2. The volume is coerced to at least one pallet.
//! 3. The larger of the duration discount and the volume discount applies.
//! 4. The package markup (0%, 15%, 30%) is charged on top of the
//!    discounted monthly rate.
//!
//! # Example
//!
//! ```rust
//! use onboarding::quote::{compute_quote, Package, ProductType, StorageDuration};
//!
//! let quote = compute_quote(
//!     Some(ProductType::Pharmaceutical),
//!     false,
//!     Some("60"),
//!     StorageDuration::TwelvePlus,
//!     Package::Premium,
//! )
//! .unwrap();
//!
//! assert_eq!(quote.base_rate, 3_825_000);
//! assert_eq!(quote.package_cost, 1_147_500);
//! assert_eq!(quote.total_monthly, 4_972_500);
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;

pub use catalog::{BusinessType, Package, PackageDescriptor, ProductType, StorageDuration, Urgency};
pub use config::{BaseRates, DurationDiscounts, PackageMarkups, PricingConfig, VolumeTier};
pub use engine::{compute_quote, parse_pallets, Quote, QuoteEngine, QuoteInput};
pub use error::ConfigurationError;
