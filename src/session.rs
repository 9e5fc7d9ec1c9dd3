//! One gallery instance: catalog, current query, pager and lightbox.
//!
//! The host owns a [`Gallery`], forwards user input to its entry points (or
//! as [`GalleryEvent`]s through [`Gallery::dispatch`]) and hands each
//! resulting [`Frame`] to its [`Renderer`]. Everything after the initial load
//! is synchronous.

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogSource, Facet, FacetOptions};
use crate::config::GalleryConfig;
use crate::error::LoadError;
use crate::models::{Item, ItemId, RawRecord};
use crate::pagination::{PageWindow, PaginationState};
use crate::query::{self, FilterCriteria, SortKey};
use crate::ui::keybindings::{self, Key, ViewMode};
use crate::ui::Lightbox;

/// Where the one-shot catalog load stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready,
    /// Load failed; the gallery stays empty for the rest of the session.
    Failed(String),
}

/// User input forwarded by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEvent {
    QueryTextChanged(String),
    FacetChanged(Facet, Option<String>),
    SortChanged(SortKey),
    PageSizeChanged(usize),
    GotoPage(usize),
    NextPage,
    PreviousPage,
    NextWindow,
    PreviousWindow,
    /// Position of the activated card within the filtered sequence.
    CardActivated(usize),
    LightboxNext,
    LightboxPrevious,
    LightboxClose,
    LightboxZoomToggle,
    /// Click on the dimmed area around the lightbox image.
    BackdropClicked,
    Swipe(f32),
    KeyPressed(Key),
}

/// Draws frames. Implemented by whatever UI hosts the gallery.
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
}

/// A grid card: an item and its position in the filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    pub position: usize,
    pub item: &'a Item,
}

/// What the lightbox overlay shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxView<'a> {
    pub item: &'a Item,
    pub index: usize,
    pub len: usize,
    pub zoomed: bool,
}

/// Snapshot of everything the renderer draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub load_state: &'a LoadState,
    pub cards: Vec<Card<'a>>,
    pub pager: PageWindow,
    pub facets: &'a FacetOptions,
    pub criteria: &'a FilterCriteria,
    pub sort: SortKey,
    pub lightbox: Option<LightboxView<'a>>,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Catalog,
    load_state: LoadState,
    criteria: FilterCriteria,
    sort: SortKey,
    filtered: Vec<ItemId>,
    pagination: PaginationState,
    lightbox: Lightbox,
}

impl Gallery {
    /// An empty gallery waiting for its catalog.
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            catalog: Catalog::empty(),
            load_state: LoadState::Pending,
            criteria: FilterCriteria::new(),
            sort: config.default_sort,
            filtered: Vec::new(),
            pagination: PaginationState::new(config.page_size, config.window_size),
            lightbox: Lightbox::new(config.swipe_threshold),
        }
    }

    /// A ready gallery over an already-built catalog.
    pub fn with_catalog(catalog: Catalog, config: &GalleryConfig) -> Self {
        let mut gallery = Self::new(config);
        gallery.install(catalog);
        gallery
    }

    /// Fetches the catalog and builds the gallery. Never fails: a load error
    /// leaves the gallery in [`LoadState::Failed`] with no items.
    pub async fn load(source: &CatalogSource, config: &GalleryConfig) -> Self {
        let mut gallery = Self::new(config);
        gallery.finish_load(source.fetch().await);
        gallery
    }

    /// Applies the outcome of the catalog fetch. Only the first call has any effect.
    pub fn finish_load(&mut self, result: Result<Vec<Option<RawRecord>>, LoadError>) {
        if self.load_state != LoadState::Pending {
            warn!("Ignoring repeated catalog load");
            return;
        }
        match result {
            Ok(records) => self.install(Catalog::load(records)),
            Err(err) => {
                warn!(error = ?err, "Failed to load catalog");
                self.load_state = LoadState::Failed(err.to_string());
            }
        }
    }

    fn install(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.load_state = LoadState::Ready;
        self.refresh();
        info!(
            items = self.catalog.len(),
            pages = self.page_window().total_pages,
            "Gallery ready"
        );
    }

    /// Recomputes the result set and puts the pager back on page 1.
    fn refresh(&mut self) {
        self.filtered = query::query(&self.catalog, &self.criteria, self.sort);
        self.pagination.reset();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn filtered(&self) -> &[ItemId] {
        &self.filtered
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn view_mode(&self) -> ViewMode {
        if self.lightbox.is_open() {
            ViewMode::Lightbox
        } else {
            ViewMode::Grid
        }
    }

    pub fn page_window(&self) -> PageWindow {
        self.pagination.page(&self.filtered).window
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    pub fn on_query_text_changed(&mut self, text: &str) {
        self.criteria.set_query(text);
        self.refresh();
    }

    /// `None` (or a blank value) clears the facet.
    pub fn on_facet_changed(&mut self, facet: Facet, value: Option<&str>) {
        self.criteria.set_facet(facet, value);
        self.refresh();
    }

    pub fn on_sort_changed(&mut self, sort: SortKey) {
        self.sort = sort;
        self.refresh();
    }

    pub fn on_page_size_changed(&mut self, page_size: usize) -> bool {
        self.pagination.set_page_size(page_size)
    }

    pub fn on_goto_page(&mut self, page: usize) -> bool {
        self.pagination.goto_page(page, self.filtered.len())
    }

    pub fn on_next_page(&mut self) -> bool {
        self.pagination.next_page(self.filtered.len())
    }

    pub fn on_previous_page(&mut self) -> bool {
        self.pagination.previous_page(self.filtered.len())
    }

    pub fn on_next_window(&mut self) -> bool {
        self.pagination.next_window(self.filtered.len())
    }

    pub fn on_previous_window(&mut self) -> bool {
        self.pagination.previous_window(self.filtered.len())
    }

    /// Opens the lightbox over the current filtered sequence at `position`.
    pub fn on_card_activated(&mut self, position: usize) -> bool {
        self.lightbox.open(self.filtered.clone(), position)
    }

    pub fn on_lightbox_next(&mut self) -> bool {
        self.lightbox.next()
    }

    pub fn on_lightbox_previous(&mut self) -> bool {
        self.lightbox.previous()
    }

    pub fn on_lightbox_close(&mut self) -> bool {
        self.lightbox.close()
    }

    pub fn on_lightbox_zoom_toggle(&mut self) -> bool {
        self.lightbox.toggle_zoom()
    }

    pub fn on_swipe(&mut self, delta_x: f32) -> bool {
        self.lightbox.swipe(delta_x)
    }

    pub fn on_key(&mut self, key: Key) -> bool {
        match keybindings::handle_key_press(self.view_mode(), key) {
            Some(event) => self.dispatch(event),
            None => false,
        }
    }

    /// Routes an event to its entry point. Returns whether anything changed.
    pub fn dispatch(&mut self, event: GalleryEvent) -> bool {
        debug!(?event, "Dispatching gallery event");
        match event {
            GalleryEvent::QueryTextChanged(text) => {
                self.on_query_text_changed(&text);
                true
            }
            GalleryEvent::FacetChanged(facet, value) => {
                self.on_facet_changed(facet, value.as_deref());
                true
            }
            GalleryEvent::SortChanged(sort) => {
                self.on_sort_changed(sort);
                true
            }
            GalleryEvent::PageSizeChanged(n) => self.on_page_size_changed(n),
            GalleryEvent::GotoPage(n) => self.on_goto_page(n),
            GalleryEvent::NextPage => self.on_next_page(),
            GalleryEvent::PreviousPage => self.on_previous_page(),
            GalleryEvent::NextWindow => self.on_next_window(),
            GalleryEvent::PreviousWindow => self.on_previous_window(),
            GalleryEvent::CardActivated(position) => self.on_card_activated(position),
            GalleryEvent::LightboxNext => self.on_lightbox_next(),
            GalleryEvent::LightboxPrevious => self.on_lightbox_previous(),
            GalleryEvent::LightboxClose | GalleryEvent::BackdropClicked => {
                self.on_lightbox_close()
            }
            GalleryEvent::LightboxZoomToggle => self.on_lightbox_zoom_toggle(),
            GalleryEvent::Swipe(delta_x) => self.on_swipe(delta_x),
            GalleryEvent::KeyPressed(key) => self.on_key(key),
        }
    }

    /// Dispatches `event` and redraws if it changed anything.
    pub fn handle<R: Renderer>(&mut self, event: GalleryEvent, renderer: &mut R) -> bool {
        let changed = self.dispatch(event);
        if changed {
            renderer.draw(&self.frame());
        }
        changed
    }

    /// Builds the renderer snapshot for the current state.
    pub fn frame(&self) -> Frame<'_> {
        let page = self.pagination.page(&self.filtered);
        let offset = page.window.range.start;
        let cards = page
            .items
            .iter()
            .enumerate()
            .filter_map(|(i, id)| {
                self.catalog.get(*id).map(|item| Card {
                    position: offset + i,
                    item,
                })
            })
            .collect();

        let lightbox = self.lightbox.current_item().and_then(|id| {
            self.catalog.get(id).map(|item| LightboxView {
                item,
                index: self.lightbox.current_index().unwrap_or_default(),
                len: self.lightbox.sequence_len(),
                zoomed: self.lightbox.is_zoomed(),
            })
        });

        Frame {
            load_state: &self.load_state,
            cards,
            pager: page.window,
            facets: self.catalog.facet_options(),
            criteria: &self.criteria,
            sort: self.sort,
            lightbox,
        }
    }
}
