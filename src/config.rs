//! Gallery settings with tolerant environment overrides.

use crate::catalog::CatalogSource;
use crate::pagination::DEFAULT_WINDOW_SIZE;
use crate::query::SortKey;
use crate::ui::lightbox::DEFAULT_SWIPE_THRESHOLD;

/// Relative location of the catalog resource.
pub const DEFAULT_CATALOG: &str = "gallery/gallery.json";
pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// File path or http(s) URL of the catalog JSON.
    pub catalog: String,
    pub page_size: usize,
    pub window_size: usize,
    pub swipe_threshold: f32,
    pub default_sort: SortKey,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            default_sort: SortKey::default(),
        }
    }
}

impl GalleryConfig {
    /// Defaults overlaid with `GALLERY_*` environment variables.
    /// Unparseable or out-of-range values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            catalog: lookup("GALLERY_CATALOG")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.catalog),
            page_size: lookup("GALLERY_PAGE_SIZE")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.page_size),
            window_size: lookup("GALLERY_WINDOW_SIZE")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.window_size),
            swipe_threshold: lookup("GALLERY_SWIPE_THRESHOLD")
                .and_then(|v| v.trim().parse::<f32>().ok())
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(defaults.swipe_threshold),
            default_sort: lookup("GALLERY_SORT")
                .and_then(|v| v.parse::<SortKey>().ok())
                .unwrap_or(defaults.default_sort),
        }
    }

    pub fn source(&self) -> CatalogSource {
        CatalogSource::parse(&self.catalog)
    }
}
