//! Headless core of a photo gallery widget: catalog normalization, faceted
//! search, windowed pagination and lightbox navigation.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod session;
pub mod ui;

pub use catalog::{Catalog, CatalogSource, Facet, FacetOption, FacetOptions};
pub use config::GalleryConfig;
pub use error::{LoadError, ParseError};
pub use models::{Item, ItemId, RawRecord, Units};
pub use pagination::{paginate, Page, PageWindow, PaginationState};
pub use query::{query, FilterCriteria, SortKey};
pub use session::{Card, Frame, Gallery, GalleryEvent, LightboxView, LoadState, Renderer};
pub use ui::{Key, Lightbox, LightboxState, ViewMode};
