//! Service type offered by the company.

use serde::{Deserialize, Serialize};

/// Known services as `(key, display name, category)`.
const CATALOG: &[(&str, &str, &str)] = &[
    ("snow-ice-removal", "Snow & Ice Removal", "seasonal"),
    ("landscaping", "Landscaping", "grounds"),
    ("concrete-asphalt", "Concrete & Asphalt", "construction"),
    ("demolition", "Demolition", "construction"),
    ("painting", "Painting", "finishing"),
    ("general-construction", "General Construction", "construction"),
];

/// The service a quote was requested for.
///
/// Quotes carry the full triple so that renamed or retired catalog entries
/// still render the way they were submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceType {
    pub key: String,
    pub name: String,
    pub category: String,
}

impl ServiceType {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            category: category.into(),
        }
    }

    /// Looks up a service in the built-in catalog by key.
    pub fn from_catalog(key: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(k, name, category)| Self::new(*k, *name, *category))
    }

    /// All catalog services in display order.
    pub fn catalog() -> Vec<Self> {
        CATALOG
            .iter()
            .map(|(k, name, category)| Self::new(*k, *name, *category))
            .collect()
    }
}
