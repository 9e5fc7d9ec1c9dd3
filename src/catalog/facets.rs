use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::models::Item;

/// A categorical filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Location,
    Device,
    Brand,
    Oem,
    Rarity,
    Units,
}

impl Facet {
    pub const ALL: [Facet; 6] = [
        Facet::Location,
        Facet::Device,
        Facet::Brand,
        Facet::Oem,
        Facet::Rarity,
        Facet::Units,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Device => "device",
            Self::Brand => "brand",
            Self::Oem => "oem",
            Self::Rarity => "rarity",
            Self::Units => "units",
        }
    }

    /// Whether the item carries a list of values for this facet.
    pub fn is_list_valued(self) -> bool {
        matches!(self, Self::Brand | Self::Oem | Self::Rarity)
    }

    /// The item's values for this facet. Scalar facets yield at most one value.
    pub fn values_of(self, item: &Item) -> Vec<&str> {
        match self {
            Self::Location => vec![item.location()],
            Self::Device => vec![item.device()],
            Self::Brand => item.brand().iter().map(String::as_str).collect(),
            Self::Oem => item.oem().iter().map(String::as_str).collect(),
            Self::Rarity => item.rarity().iter().map(String::as_str).collect(),
            Self::Units => vec![item.units().as_str()],
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::ALL
            .into_iter()
            .find(|facet| facet.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownFacet(s.to_string()))
    }
}

/// One entry of a facet dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetOption {
    /// "No constraint" sentinel, always listed first.
    All,
    Value(String),
}

impl FacetOption {
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Value(v) => v,
        }
    }

    /// The selection this option stands for; `All` selects nothing.
    pub fn selection(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Value(v) => Some(v.as_str()),
        }
    }
}

/// Distinct values per facet across the whole catalog, computed once at load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    location: Vec<String>,
    device: Vec<String>,
    brand: Vec<String>,
    oem: Vec<String>,
    rarity: Vec<String>,
    units: Vec<String>,
}

impl FacetOptions {
    pub fn from_items(items: &[Item]) -> Self {
        let collect = |facet: Facet| -> Vec<String> {
            items
                .iter()
                .flat_map(|item| facet.values_of(item))
                .filter(|value| !value.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        Self {
            location: collect(Facet::Location),
            device: collect(Facet::Device),
            brand: collect(Facet::Brand),
            oem: collect(Facet::Oem),
            rarity: collect(Facet::Rarity),
            units: collect(Facet::Units),
        }
    }

    /// Sorted distinct non-empty values for `facet`.
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Location => &self.location,
            Facet::Device => &self.device,
            Facet::Brand => &self.brand,
            Facet::Oem => &self.oem,
            Facet::Rarity => &self.rarity,
            Facet::Units => &self.units,
        }
    }

    /// Dropdown entries: the `All` sentinel followed by every value.
    pub fn dropdown(&self, facet: Facet) -> Vec<FacetOption> {
        std::iter::once(FacetOption::All)
            .chain(self.values(facet).iter().cloned().map(FacetOption::Value))
            .collect()
    }
}
