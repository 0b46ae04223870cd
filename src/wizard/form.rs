//! The application form and field-by-field editing.

use crate::quote::{BusinessType, ConfigurationError, ProductType, StorageDuration, Urgency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything the customer has entered so far.
///
/// Free-text fields start empty, choice fields start unset, and duration
/// and urgency start at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub business_type: Option<BusinessType>,
    pub product_type: Option<ProductType>,
    /// Pallet count exactly as typed. Priced through `parse_pallets`.
    pub storage_volume: String,
    pub temperature_control: bool,
    pub special_requirements: String,
    pub duration: StorageDuration,
    pub urgency: Urgency,
}

keyed_enum! {
    /// Names of the editable form fields.
    pub enum FormField as "form field" {
        CompanyName => "companyName",
        ContactPerson => "contactPerson",
        Email => "email",
        Phone => "phone",
        BusinessType => "businessType",
        ProductType => "productType",
        StorageVolume => "storageVolume",
        TemperatureControl => "temperatureControl",
        SpecialRequirements => "specialRequirements",
        Duration => "duration",
        Urgency => "urgency",
    }
}

impl FormField {
    /// Whether changing this field can change the quote.
    pub fn affects_pricing(&self) -> bool {
        matches!(
            self,
            Self::ProductType | Self::StorageVolume | Self::TemperatureControl | Self::Duration
        )
    }
}

/// A value relayed from an input control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Errors from applying a field edit.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error(transparent)]
    UnknownValue(#[from] ConfigurationError),

    #[error("Field '{field}' expects {expected}")]
    TypeMismatch {
        field: FormField,
        expected: &'static str,
    },
}

impl ApplicationForm {
    /// Apply one edit. The form is unchanged when an error is returned.
    pub fn set(&mut self, field: FormField, value: FieldValue) -> Result<(), FieldError> {
        match (field, value) {
            (FormField::TemperatureControl, FieldValue::Flag(flag)) => {
                self.temperature_control = flag;
            }
            (FormField::TemperatureControl, FieldValue::Text(_)) => {
                return Err(FieldError::TypeMismatch {
                    field,
                    expected: "a flag",
                });
            }
            (_, FieldValue::Flag(_)) => {
                return Err(FieldError::TypeMismatch {
                    field,
                    expected: "text",
                });
            }
            (FormField::CompanyName, FieldValue::Text(text)) => self.company_name = text,
            (FormField::ContactPerson, FieldValue::Text(text)) => self.contact_person = text,
            (FormField::Email, FieldValue::Text(text)) => self.email = text,
            (FormField::Phone, FieldValue::Text(text)) => self.phone = text,
            (FormField::StorageVolume, FieldValue::Text(text)) => self.storage_volume = text,
            (FormField::SpecialRequirements, FieldValue::Text(text)) => {
                self.special_requirements = text;
            }
            (FormField::BusinessType, FieldValue::Text(text)) => {
                self.business_type = parse_choice(&text)?;
            }
            (FormField::ProductType, FieldValue::Text(text)) => {
                self.product_type = parse_choice(&text)?;
            }
            (FormField::Duration, FieldValue::Text(text)) => self.duration = text.parse()?,
            (FormField::Urgency, FieldValue::Text(text)) => self.urgency = text.parse()?,
        }
        Ok(())
    }

    /// Whether the given text field has non-blank content.
    ///
    /// Choice fields count as filled once chosen; the flag always counts.
    pub fn is_filled(&self, field: FormField) -> bool {
        match field {
            FormField::CompanyName => filled(&self.company_name),
            FormField::ContactPerson => filled(&self.contact_person),
            FormField::Email => filled(&self.email),
            FormField::Phone => filled(&self.phone),
            FormField::BusinessType => self.business_type.is_some(),
            FormField::ProductType => self.product_type.is_some(),
            FormField::StorageVolume => filled(&self.storage_volume),
            FormField::SpecialRequirements => filled(&self.special_requirements),
            FormField::TemperatureControl | FormField::Duration | FormField::Urgency => true,
        }
    }
}

fn filled(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Blank selects back to "not chosen".
fn parse_choice<T>(text: &str) -> Result<Option<T>, ConfigurationError>
where
    T: std::str::FromStr<Err = ConfigurationError>,
{
    if text.trim().is_empty() {
        Ok(None)
    } else {
        text.parse().map(Some)
    }
}
