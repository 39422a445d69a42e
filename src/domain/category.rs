//! Domain types representing budget categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A detailed category nested under exactly one primary category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    pub primary: String,
    /// Provider category code, kept verbatim.
    pub detailed_id: String,
    pub detailed_name: String,
    pub description: String,
    pub full_name: String,
}

impl CategoryEntry {
    pub fn new(
        primary: impl Into<String>,
        detailed_id: impl Into<String>,
        detailed_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let primary = primary.into();
        let detailed_name = detailed_name.into();
        let full_name = format!("{} - {}", primary, detailed_name);
        Self {
            primary,
            detailed_id: detailed_id.into(),
            detailed_name,
            description: description.into(),
            full_name,
        }
    }

    /// Case-insensitive match on the detailed name or description.
    pub fn matches(&self, lowered_term: &str) -> bool {
        self.detailed_name.to_lowercase().contains(lowered_term)
            || self.description.to_lowercase().contains(lowered_term)
    }
}

impl NamedEntity for CategoryEntry {
    fn name(&self) -> &str {
        &self.detailed_name
    }
}

impl Displayable for CategoryEntry {
    fn display_label(&self) -> String {
        self.full_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_primary_and_detail() {
        let entry = CategoryEntry::new("Travel", "TRAVEL_FLIGHTS", "Flights", "Airline expenses");
        assert_eq!(entry.full_name, "Travel - Flights");
        assert_eq!(entry.display_label(), "Travel - Flights");
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let entry = CategoryEntry::new("Travel", "TRAVEL_FLIGHTS", "Flights", "Airline expenses");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["detailedId"], "TRAVEL_FLIGHTS");
        assert_eq!(json["fullName"], "Travel - Flights");
    }

    #[test]
    fn matches_name_or_description() {
        let entry = CategoryEntry::new("Travel", "TRAVEL_LODGING", "Lodging", "Hotels");
        assert!(entry.matches("lodg"));
        assert!(entry.matches("hotel"));
        assert!(!entry.matches("flight"));
    }
}
