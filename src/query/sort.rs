use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::models::Item;

/// Result ordering chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Az,
    Za,
    UnitsDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Az,
        SortKey::Za,
        SortKey::UnitsDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Az => "az",
            Self::Za => "za",
            Self::UnitsDesc => "units-desc",
        }
    }

    /// Dates compare as plain strings; the catalog stores ISO 8601 dates.
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            Self::Newest => b.date().cmp(a.date()),
            Self::Oldest => a.date().cmp(b.date()),
            Self::Az => a.primary_brand().cmp(b.primary_brand()),
            Self::Za => b.primary_brand().cmp(a.primary_brand()),
            Self::UnitsDesc => b.unit_count().cmp(&a.unit_count()),
        }
    }

    /// Stable sort: items that compare equal keep their current relative order.
    pub fn sort(self, items: &mut [&Item]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownSortKey(s.to_string()))
    }
}
