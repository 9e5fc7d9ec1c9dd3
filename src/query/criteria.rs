use std::collections::BTreeMap;

use crate::catalog::Facet;
use crate::models::Item;

/// Free-text query plus exact-match facet selections.
///
/// An unset or blank selection means "no constraint" for that facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    query: String,
    selections: BTreeMap<Facet, String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style facet selection, mostly for callers assembling criteria in one go.
    pub fn with_facet(mut self, facet: Facet, value: &str) -> Self {
        self.set_facet(facet, Some(value));
        self
    }

    pub fn with_query(mut self, text: &str) -> Self {
        self.set_query(text);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
    }

    /// Sets or clears a facet. `None` and blank strings both clear it.
    pub fn set_facet(&mut self, facet: Facet, value: Option<&str>) {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(v) => {
                self.selections.insert(facet, v.to_string());
            }
            None => {
                self.selections.remove(&facet);
            }
        }
    }

    pub fn selection(&self, facet: Facet) -> Option<&str> {
        self.selections.get(&facet).map(String::as_str)
    }

    /// True when no clause would reject anything.
    pub fn is_unconstrained(&self) -> bool {
        self.selections.is_empty() && self.query.trim().is_empty()
    }

    /// All clauses AND-ed; unset clauses pass.
    pub fn matches(&self, item: &Item) -> bool {
        let needle = self.query.trim().to_lowercase();
        if !needle.is_empty() && !item.search_haystack().contains(&needle) {
            return false;
        }

        self.selections.iter().all(|(facet, wanted)| {
            if facet.is_list_valued() {
                facet.values_of(item).contains(&wanted.as_str())
            } else {
                facet.values_of(item).first() == Some(&wanted.as_str())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::normalizer::normalize;
    use crate::models::{ItemId, RawRecord};
    use serde_json::json;

    fn item(value: serde_json::Value) -> Item {
        normalize(ItemId(0), &serde_json::from_value::<RawRecord>(value).unwrap())
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_unconstrained());
        assert!(criteria.matches(&item(json!({}))));
    }

    #[test]
    fn test_blank_selection_is_unset() {
        let mut criteria = FilterCriteria::new().with_facet(Facet::Location, "Pier");
        criteria.set_facet(Facet::Location, Some("   "));
        assert_eq!(criteria.selection(Facet::Location), None);
        assert_eq!(criteria, FilterCriteria::new());
    }

    #[test]
    fn test_brand_membership() {
        let multi = item(json!({ "brand": "Acme, Zenith" }));
        assert!(FilterCriteria::new().with_facet(Facet::Brand, "Acme").matches(&multi));
        assert!(FilterCriteria::new().with_facet(Facet::Brand, "Zenith").matches(&multi));
        assert!(!FilterCriteria::new().with_facet(Facet::Brand, "Acme, Zenith").matches(&multi));
    }

    #[test]
    fn test_scalar_facets_exact() {
        let it = item(json!({ "location": "Pier 9", "device": "Nikon" }));
        assert!(FilterCriteria::new().with_facet(Facet::Location, "Pier 9").matches(&it));
        assert!(!FilterCriteria::new().with_facet(Facet::Location, "Pier").matches(&it));
        assert!(!FilterCriteria::new().with_facet(Facet::Device, "nikon").matches(&it));
    }

    #[test]
    fn test_units_facet() {
        let multi = item(json!({ "rarity": ["Rare", "Epic"] }));
        assert!(FilterCriteria::new().with_facet(Facet::Units, "Multiple").matches(&multi));
        assert!(!FilterCriteria::new().with_facet(Facet::Units, "Single").matches(&multi));
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let it = item(json!({ "oem": "Foxconn", "tags": ["Night Market"] }));
        assert!(FilterCriteria::new().with_query("  FOXCONN ").matches(&it));
        assert!(FilterCriteria::new().with_query("market").matches(&it));
        assert!(!FilterCriteria::new().with_query("harbor").matches(&it));
    }

    #[test]
    fn test_query_does_not_search_src_or_date() {
        let it = item(json!({ "src": "harbor.jpg", "date": "2024-01-01" }));
        assert!(!FilterCriteria::new().with_query("harbor").matches(&it));
        assert!(!FilterCriteria::new().with_query("2024").matches(&it));
    }

    #[test]
    fn test_clauses_are_anded() {
        let it = item(json!({ "location": "Pier", "brand": "Acme" }));
        let criteria = FilterCriteria::new()
            .with_facet(Facet::Location, "Pier")
            .with_facet(Facet::Brand, "Bolt");
        assert!(!criteria.matches(&it));
    }
}
