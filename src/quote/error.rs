//! Pricing configuration errors.

use thiserror::Error;

/// Errors raised while building the pricing tables or parsing closed keys.
///
/// These indicate a programming or deployment mistake, never bad user
/// input: user-entered volumes are normalized rather than rejected.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A key outside a closed table (package, product type, duration, ...)
    #[error("Unknown {table} '{key}'")]
    UnknownKey { table: &'static str, key: String },

    /// A pricing table value that would break quote invariants
    #[error("Invalid pricing configuration: {field} {reason}")]
    Invalid { field: &'static str, reason: String },

    /// The configuration file could not be read
    #[error("Failed to read pricing configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for `PricingConfig`
    #[error("Failed to parse pricing configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
