//! Closed catalogs the pricing rules are keyed on.
//!
//! Every choice a customer makes from a fixed list is a closed enum here,
//! so an unknown value is rejected when it is parsed instead of silently
//! falling through a pricing table.

keyed_enum! {
    /// What kind of business is applying.
    pub enum BusinessType as "business type" {
        Pharmaceutical => "pharmaceutical",
        Fmcg => "fmcg",
        Manufacturing => "manufacturing",
        Trading => "trading",
        Ecommerce => "ecommerce",
        Other => "other",
    }
}

keyed_enum! {
    /// What will be stored. Pharmaceutical goods carry the top base rate.
    pub enum ProductType as "product type" {
        Pharmaceutical => "pharmaceutical",
        Medical => "medical",
        Consumer => "consumer",
        Industrial => "industrial",
        Food => "food",
        Other => "other",
    }
}

keyed_enum! {
    /// Committed storage term in months.
    pub enum StorageDuration as "storage duration" {
        OneToThree => "1-3",
        ThreeToSix => "3-6",
        SixToTwelve => "6-12",
        TwelvePlus => "12+",
    }
}

keyed_enum! {
    /// How soon storage is needed. Informational only; never priced.
    pub enum Urgency as "urgency" {
        Standard => "standard",
        Urgent => "urgent",
        Immediate => "immediate",
    }
}

keyed_enum! {
    /// Service tier layered on top of the storage rate.
    pub enum Package as "package" {
        Essential => "essential",
        Professional => "professional",
        Premium => "premium",
    }
}

impl Default for StorageDuration {
    fn default() -> Self {
        Self::ThreeToSix
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Self::Standard
    }
}

impl Default for Package {
    fn default() -> Self {
        Self::Professional
    }
}

/// Static description of a service package on the published rate card.
///
/// `price_label` and `markup` describe the default card only; a rate card
/// loaded from TOML reports its own labels through
/// [`PricingConfig::price_label`](crate::quote::PricingConfig::price_label).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackageDescriptor {
    pub name: &'static str,
    pub price_label: &'static str,
    pub features: &'static [&'static str],
    /// Fraction of the monthly storage rate charged for the package.
    pub markup: f64,
}

const ESSENTIAL: PackageDescriptor = PackageDescriptor {
    name: "Essential",
    price_label: "Base Rate",
    features: &[
        "Basic ambient storage",
        "Monthly reporting",
        "Standard security",
        "Email support",
        "Basic inventory tracking",
    ],
    markup: 0.0,
};

const PROFESSIONAL: PackageDescriptor = PackageDescriptor {
    name: "Professional",
    price_label: "+15%",
    features: &[
        "Climate-controlled storage",
        "Bi-weekly reporting",
        "24/7 monitoring",
        "Dedicated account manager",
        "Advanced inventory management",
        "Pick & pack services",
    ],
    markup: 0.15,
};

const PREMIUM: PackageDescriptor = PackageDescriptor {
    name: "Premium",
    price_label: "+30%",
    features: &[
        "Pharmaceutical-grade storage",
        "Real-time tracking",
        "Weekly custom reports",
        "Priority support (2hr response)",
        "Full distribution services",
        "Compliance documentation",
        "Quality control inspections",
    ],
    markup: 0.30,
};

impl Package {
    pub fn descriptor(&self) -> &'static PackageDescriptor {
        match self {
            Self::Essential => &ESSENTIAL,
            Self::Professional => &PROFESSIONAL,
            Self::Premium => &PREMIUM,
        }
    }
}
