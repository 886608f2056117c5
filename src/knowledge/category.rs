//! Topical categories for knowledge entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of topics the knowledge base covers.
///
/// Every knowledge entry, corpus variant, and classifier label carries one
/// of these. Keeping the set closed means every dispatch point (fallback
/// responses, enrichment merging) is checked exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Department history and organization.
    About,
    /// Citizen-facing services (connections, availability checks).
    Services,
    /// Departmental functions (projects, flood control, planning).
    Functions,
    /// Required documents for services.
    Documents,
    /// Irrigation charges and fees.
    Charges,
    /// Complaint registration and tracking.
    Complaints,
    /// Office contact information.
    Contact,
    /// Government schemes.
    Schemes,
}

impl Category {
    /// All categories in their fixed declaration order.
    ///
    /// This ordering is load-bearing: the classifier iterates it during
    /// argmax, so exact score ties resolve to the earlier category.
    pub const ALL: [Category; 8] = [
        Category::About,
        Category::Services,
        Category::Functions,
        Category::Documents,
        Category::Charges,
        Category::Complaints,
        Category::Contact,
        Category::Schemes,
    ];

    /// The lowercase name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::About => "about",
            Category::Services => "services",
            Category::Functions => "functions",
            Category::Documents => "documents",
            Category::Charges => "charges",
            Category::Complaints => "complaints",
            Category::Contact => "contact",
            Category::Schemes => "schemes",
        }
    }

    /// Parse a category key as found in enrichment payloads.
    ///
    /// Accepts the canonical names plus the legacy keys the deployed
    /// scraper used for its fallback mapping. Returns `None` for anything
    /// unrecognized; callers log and skip those.
    pub fn parse_key(key: &str) -> Option<Category> {
        match key.trim().to_lowercase().as_str() {
            "about" => Some(Category::About),
            "services" => Some(Category::Services),
            "functions" => Some(Category::Functions),
            "documents" => Some(Category::Documents),
            "charges" => Some(Category::Charges),
            "complaints" => Some(Category::Complaints),
            "contact" | "contact_info" => Some(Category::Contact),
            "schemes" => Some(Category::Schemes),
            // Legacy scraper keys.
            "departments" => Some(Category::Functions),
            "procedures" => Some(Category::Services),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(Category::ALL.len(), 8);
        for category in Category::ALL {
            assert_eq!(Category::parse_key(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_parse_legacy_keys() {
        assert_eq!(Category::parse_key("departments"), Some(Category::Functions));
        assert_eq!(Category::parse_key("procedures"), Some(Category::Services));
        assert_eq!(Category::parse_key("contact_info"), Some(Category::Contact));
        assert_eq!(Category::parse_key("weather"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Charges.to_string(), "charges");
    }
}
