use std::fmt;

/// Stable identity of an item: its position in the original load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Single/composite classification derived from brand and rarity counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    Single,
    Multiple,
}

impl Units {
    pub fn from_count(unit_count: usize) -> Self {
        if unit_count > 1 {
            Self::Multiple
        } else {
            Self::Single
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Multiple => "Multiple",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized catalog record.
///
/// Items are only ever built by the normalizer, so `unit_count` and `units`
/// always agree with the brand and rarity lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    src: String,
    date: String,
    location: String,
    device: String,
    brand: Vec<String>,
    oem: Vec<String>,
    rarity: Vec<String>,
    tags: Vec<String>,
    unit_count: usize,
    units: Units,
}

/// Field values for [`Item::from_parts`], already in canonical shape.
#[derive(Debug, Clone, Default)]
pub(crate) struct ItemParts {
    pub src: String,
    pub date: String,
    pub location: String,
    pub device: String,
    pub brand: Vec<String>,
    pub oem: Vec<String>,
    pub rarity: Vec<String>,
    pub tags: Vec<String>,
}

impl Item {
    pub(crate) fn from_parts(id: ItemId, parts: ItemParts) -> Self {
        let unit_count = parts.brand.len().max(parts.rarity.len());
        Self {
            id,
            src: parts.src,
            date: parts.date,
            location: parts.location,
            device: parts.device,
            brand: parts.brand,
            oem: parts.oem,
            rarity: parts.rarity,
            tags: parts.tags,
            unit_count,
            units: Units::from_count(unit_count),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Image location. Empty when the record had none; the renderer shows a placeholder.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn has_src(&self) -> bool {
        !self.src.is_empty()
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn brand(&self) -> &[String] {
        &self.brand
    }

    pub fn oem(&self) -> &[String] {
        &self.oem
    }

    pub fn rarity(&self) -> &[String] {
        &self.rarity
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    pub fn units(&self) -> Units {
        self.units
    }

    /// First brand, or the empty string. Used as the alphabetical sort key.
    pub fn primary_brand(&self) -> &str {
        self.brand.first().map(String::as_str).unwrap_or("")
    }

    /// Card heading: the first tag, falling back to the location.
    pub fn title(&self) -> &str {
        self.tags
            .first()
            .map(String::as_str)
            .unwrap_or(&self.location)
    }

    /// Lines shown in the lightbox meta panel. Empty lines are omitted.
    pub fn detail_lines(&self) -> Vec<String> {
        let oem_rarity = [self.oem.join(", "), self.rarity.join(", ")]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" \u{2022} ");

        [
            self.date.clone(),
            self.location.clone(),
            self.device.clone(),
            oem_rarity,
            self.tags.join(", "),
        ]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect()
    }

    /// Lower-cased text the free-text query is matched against.
    pub fn search_haystack(&self) -> String {
        self.brand
            .iter()
            .chain(&self.oem)
            .chain(&self.rarity)
            .chain(std::iter::once(&self.location))
            .chain(std::iter::once(&self.device))
            .chain(&self.tags)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Item {
        Item::from_parts(
            ItemId(3),
            ItemParts {
                src: "img/3.jpg".into(),
                date: "2024-03-01".into(),
                location: "Harbor".into(),
                device: "Pixel 8".into(),
                brand: strings(&["Acme", "Zenith"]),
                oem: strings(&["Foxconn"]),
                rarity: strings(&["Rare"]),
                tags: strings(&["Dockside", "Night"]),
            },
        )
    }

    #[test]
    fn test_units_derived_from_lists() {
        let item = sample();
        assert_eq!(item.unit_count(), 2);
        assert_eq!(item.units(), Units::Multiple);

        let single = Item::from_parts(ItemId(0), ItemParts::default());
        assert_eq!(single.unit_count(), 0);
        assert_eq!(single.units(), Units::Single);
    }

    #[test]
    fn test_title_falls_back_to_location() {
        assert_eq!(sample().title(), "Dockside");

        let untagged = Item::from_parts(
            ItemId(1),
            ItemParts {
                location: "Harbor".into(),
                ..ItemParts::default()
            },
        );
        assert_eq!(untagged.title(), "Harbor");
    }

    #[test]
    fn test_detail_lines() {
        assert_eq!(
            sample().detail_lines(),
            vec![
                "2024-03-01",
                "Harbor",
                "Pixel 8",
                "Foxconn \u{2022} Rare",
                "Dockside, Night",
            ]
        );
    }

    #[test]
    fn test_search_haystack_is_lowercase() {
        let haystack = sample().search_haystack();
        assert!(haystack.contains("acme zenith foxconn rare harbor pixel 8 dockside night"));
    }

    #[test]
    fn test_primary_brand_empty() {
        let item = Item::from_parts(ItemId(0), ItemParts::default());
        assert_eq!(item.primary_brand(), "");
        assert_eq!(sample().primary_brand(), "Acme");
    }
}
