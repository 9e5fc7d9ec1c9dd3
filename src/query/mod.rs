//! Filtering and ordering of the catalog.

pub mod criteria;
pub mod sort;

pub use criteria::FilterCriteria;
pub use sort::SortKey;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{Item, ItemId};

/// Ids of the items matching `criteria`, ordered by `sort`.
///
/// Pure function of its inputs. Items that tie under `sort` stay in catalog
/// load order. An empty result is a normal outcome.
pub fn query(catalog: &Catalog, criteria: &FilterCriteria, sort: SortKey) -> Vec<ItemId> {
    let mut matched: Vec<&Item> = catalog
        .items()
        .iter()
        .filter(|item| criteria.matches(item))
        .collect();
    sort.sort(&mut matched);

    debug!(
        matched = matched.len(),
        total = catalog.len(),
        sort = %sort,
        "Query recomputed"
    );
    matched.into_iter().map(Item::id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Facet;
    use crate::models::RawRecord;
    use serde_json::json;

    fn catalog() -> Catalog {
        let records = [
            json!({ "src": "0.jpg", "date": "2024-01-03", "location": "Pier", "brand": "Acme, Zenith", "tags": ["dusk"] }),
            json!({ "src": "1.jpg", "date": "2024-01-01", "location": "Attic", "brand": "Bolt", "oem": "Foxconn" }),
            json!({ "src": "2.jpg", "date": "2024-01-02", "location": "Pier", "brand": ["Acme"], "rarity": "Rare" }),
            json!({ "src": "3.jpg", "date": "2024-01-02", "location": "Shed", "tags": ["Dusk", "fog"] }),
        ];
        Catalog::from_records(
            records
                .into_iter()
                .map(|v| serde_json::from_value::<RawRecord>(v).unwrap())
                .collect(),
        )
    }

    fn ids(values: &[usize]) -> Vec<ItemId> {
        values.iter().copied().map(ItemId).collect()
    }

    #[test]
    fn test_unconstrained_query_returns_everything() {
        let catalog = catalog();
        for key in SortKey::ALL {
            let result = query(&catalog, &FilterCriteria::new(), key);
            assert_eq!(result.len(), catalog.len(), "sort {key}");
        }
        assert_eq!(
            query(&catalog, &FilterCriteria::new(), SortKey::Oldest),
            ids(&[1, 2, 3, 0])
        );
    }

    #[test]
    fn test_multi_brand_item_matches_single_brand_filter() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_facet(Facet::Brand, "Acme");
        assert_eq!(query(&catalog, &criteria, SortKey::Newest), ids(&[0, 2]));
    }

    #[test]
    fn test_text_and_facet_combined() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_query("dusk")
            .with_facet(Facet::Location, "Shed");
        assert_eq!(query(&catalog, &criteria, SortKey::Newest), ids(&[3]));
    }

    #[test]
    fn test_no_matches_is_empty() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_facet(Facet::Oem, "Nobody");
        assert!(query(&catalog, &criteria, SortKey::Az).is_empty());
    }

    #[test]
    fn test_query_does_not_touch_catalog() {
        let catalog = catalog();
        let before = catalog.items().to_vec();
        let _ = query(&catalog, &FilterCriteria::new().with_query("pier"), SortKey::Za);
        assert_eq!(catalog.items(), before.as_slice());
    }

    #[test]
    fn test_newest_ties_follow_load_order() {
        let catalog = catalog();
        assert_eq!(
            query(&catalog, &FilterCriteria::new(), SortKey::Newest),
            ids(&[0, 2, 3, 1])
        );
    }
}
