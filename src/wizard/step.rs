//! The five onboarding screens.

use crate::core::{Sequential, State};
use serde::{Deserialize, Serialize};

/// A wizard screen. Screens are numbered 1 through 5.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BusinessInfo,
    StorageRequirements,
    PackageSelection,
    Documentation,
    ReviewSubmit,
}

impl WizardStep {
    pub const COUNT: u8 = 5;

    /// Every step in screen order.
    pub const ALL: [WizardStep; 5] = [
        Self::BusinessInfo,
        Self::StorageRequirements,
        Self::PackageSelection,
        Self::Documentation,
        Self::ReviewSubmit,
    ];

    /// 1-based screen number.
    pub fn number(&self) -> u8 {
        match self {
            Self::BusinessInfo => 1,
            Self::StorageRequirements => 2,
            Self::PackageSelection => 3,
            Self::Documentation => 4,
            Self::ReviewSubmit => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Heading shown in the progress bar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::BusinessInfo => "Business Information",
            Self::StorageRequirements => "Storage Requirements",
            Self::PackageSelection => "Service Packages",
            Self::Documentation => "Documentation",
            Self::ReviewSubmit => "Review & Submit",
        }
    }

    /// Share of the wizard reached on this step, in whole percent.
    pub fn progress_percent(&self) -> u8 {
        // Widened first: 100 times any step past 2 overflows u8.
        let percent = u16::from(self.number()) * 100 / u16::from(Self::COUNT);
        percent as u8
    }
}

impl State for WizardStep {
    fn name(&self) -> &str {
        match self {
            Self::BusinessInfo => "BusinessInfo",
            Self::StorageRequirements => "StorageRequirements",
            Self::PackageSelection => "PackageSelection",
            Self::Documentation => "Documentation",
            Self::ReviewSubmit => "ReviewSubmit",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::ReviewSubmit)
    }
}

impl Sequential for WizardStep {
    fn first() -> Self {
        Self::BusinessInfo
    }

    fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    fn previous(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }
}
