//! The immutable set of normalized items for one gallery session.

pub mod facets;
pub mod loader;
pub mod normalizer;

pub use facets::{Facet, FacetOption, FacetOptions};
pub use loader::CatalogSource;

use tracing::info;

use crate::models::{Item, ItemId, RawRecord};

/// All items from one load plus the facet values derived from them.
///
/// Nothing mutates a catalog after [`Catalog::load`]; filtered views and
/// pages are id projections over it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    facets: FacetOptions,
}

impl Catalog {
    /// Normalizes every record once. Slots that held no record still consume
    /// their position, so ids always match load order and are never reused.
    pub fn load<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Option<RawRecord>>,
    {
        let items: Vec<Item> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                raw.map(|raw| normalizer::normalize(ItemId(index), &raw))
            })
            .collect();
        let facets = FacetOptions::from_items(&items);

        info!(items = items.len(), "Catalog loaded");
        Self { items, facets }
    }

    /// Convenience for fully-formed record lists.
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self::load(records.into_iter().map(Some))
    }

    /// The no-data catalog used when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id. Ids are sorted, so this is a binary search.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items
            .binary_search_by_key(&id, Item::id)
            .ok()
            .map(|pos| &self.items[pos])
    }

    /// Ids of every item in load order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(Item::id).collect()
    }

    /// Distinct non-empty values for `facet`, sorted. Computed once at load.
    pub fn facet_values(&self, facet: Facet) -> &[String] {
        self.facets.values(facet)
    }

    pub fn facet_options(&self) -> &FacetOptions {
        &self.facets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ids_follow_load_order() {
        let catalog = Catalog::load(vec![
            Some(record(json!({ "src": "a.jpg" }))),
            None,
            Some(record(json!({ "src": "c.jpg" }))),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ids(), vec![ItemId(0), ItemId(2)]);
        assert_eq!(catalog.get(ItemId(2)).unwrap().src(), "c.jpg");
        assert!(catalog.get(ItemId(1)).is_none());
    }

    #[test]
    fn test_facet_values_flatten_lists() {
        let catalog = Catalog::from_records(vec![
            record(json!({ "brand": "Zenith, Acme", "location": "Pier" })),
            record(json!({ "brand": ["Acme", "Bolt"], "location": "" })),
        ]);

        assert_eq!(catalog.facet_values(Facet::Brand), ["Acme", "Bolt", "Zenith"]);
        assert_eq!(catalog.facet_values(Facet::Location), ["Pier"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.facet_values(Facet::Brand).is_empty());
        assert!(catalog.get(ItemId(0)).is_none());
    }
}
