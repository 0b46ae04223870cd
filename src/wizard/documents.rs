//! Verification documents requested on the documentation step.
//!
//! The checklist is informational. Uploads are handled outside this crate
//! and the documentation step never blocks navigation.

use crate::quote::ProductType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequirement {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Documents to request for an applicant storing `product_type`.
///
/// Product licenses become mandatory for pharmaceutical products.
pub fn document_checklist(product_type: Option<ProductType>) -> Vec<DocumentRequirement> {
    let pharmaceutical = product_type == Some(ProductType::Pharmaceutical);

    vec![
        DocumentRequirement {
            name: "Business Registration Certificate",
            description: "Official business registration document",
            required: true,
        },
        DocumentRequirement {
            name: "Tax Identification Number",
            description: "Valid TIN certificate",
            required: true,
        },
        DocumentRequirement {
            name: "Product Licenses",
            description: "Required for pharmaceutical products",
            required: pharmaceutical,
        },
        DocumentRequirement {
            name: "Insurance Certificate",
            description: "Product liability insurance (recommended)",
            required: false,
        },
        DocumentRequirement {
            name: "Safety Data Sheets",
            description: "For hazardous or special materials",
            required: false,
        },
        DocumentRequirement {
            name: "Previous Storage Contracts",
            description: "For reference and migration planning",
            required: false,
        },
    ]
}
