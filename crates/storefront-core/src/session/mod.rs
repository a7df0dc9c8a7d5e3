//! Page controllers that own the per-page state and drive the components.

pub mod product;

use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::catalog::{Product, ProductCatalog};
use crate::config::StorefrontConfig;
use crate::filter::{self, CategoryAvailability, FilterCriteria, PriceRange};
use crate::render::{BatchRenderer, BatchRequest, RendererSettings, ScrollMetrics};

pub use product::ProductPage;

/// State of the catalog browsing page.
///
/// A session can only be built from a loaded catalog, so no filtering or
/// rendering can run before the catalog fetch has resolved. Every criteria
/// setter commits a new filter pass: the in-flight batch is cancelled, the
/// renderer restarts from zero, availability is recomputed and the first
/// batch is requested.
pub struct CatalogSession {
    catalog: Arc<ProductCatalog>,
    criteria: FilterCriteria,
    categories: Vec<String>,
    price_ceiling: u64,
    availability: Vec<CategoryAvailability>,
    renderer: BatchRenderer<Arc<Product>>,
    filter_generation: u64,
}

impl CatalogSession {
    pub fn new(catalog: Arc<ProductCatalog>, config: &StorefrontConfig, now: Instant) -> Self {
        let price_ceiling = catalog.price_ceiling();
        let mut criteria = FilterCriteria::with_policy(config.filter.rating_policy);
        criteria.price = PriceRange::new(0, price_ceiling);

        let mut session = Self {
            categories: catalog.categories(),
            catalog,
            criteria,
            price_ceiling,
            availability: Vec::new(),
            renderer: BatchRenderer::new(RendererSettings::from(&config.render)),
            filter_generation: 0,
        };
        session.apply(now);
        session
    }

    pub fn set_category(&mut self, category: impl Into<String>, now: Instant) {
        self.criteria.category = category.into();
        self.apply(now);
    }

    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
        self.criteria.query = query.into();
        self.apply(now);
    }

    /// Update the price window from the two slider handles. Returns the
    /// range actually applied.
    pub fn set_price_range(&mut self, min: u64, max: u64, now: Instant) -> PriceRange {
        self.criteria.price = PriceRange::from_slider(min, max);
        self.apply(now);
        self.criteria.price
    }

    pub fn set_rating(&mut self, rating: u8, now: Instant) {
        self.criteria.rating = rating;
        self.apply(now);
    }

    fn apply(&mut self, now: Instant) {
        let filtered = filter::filter(&self.catalog, &self.criteria);
        self.availability = filter::availability(&self.catalog, &self.criteria);
        self.renderer.reset(filtered);
        self.filter_generation += 1;
        info!(
            generation = self.filter_generation,
            matched = self.renderer.total(),
            "Filter committed"
        );
        self.renderer.request_next_batch(now);
    }

    pub fn activate_load_more(&mut self, now: Instant) -> BatchRequest {
        self.renderer.activate_manual(now)
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics, now: Instant) -> BatchRequest {
        self.renderer.on_scroll(metrics, now)
    }

    /// Advance timers. Returns the range appended, if a batch landed.
    pub fn tick(&mut self, now: Instant) -> Option<Range<usize>> {
        self.renderer.poll(now)
    }

    pub fn set_viewport_width(&mut self, width: f32) -> bool {
        self.renderer.set_viewport_width(width)
    }

    pub fn catalog(&self) -> &Arc<ProductCatalog> {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn price_ceiling(&self) -> u64 {
        self.price_ceiling
    }

    pub fn availability(&self) -> &[CategoryAvailability] {
        &self.availability
    }

    /// Whether the control for `category` would yield any result.
    pub fn is_category_available(&self, category: &str) -> bool {
        self.availability
            .iter()
            .find(|a| a.category == category)
            .is_some_and(CategoryAvailability::is_available)
    }

    pub fn renderer(&self) -> &BatchRenderer<Arc<Product>> {
        &self.renderer
    }

    /// Incremented on every committed filter pass; the page scrolls back to
    /// the top whenever it changes.
    pub fn filter_generation(&self) -> u64 {
        self.filter_generation
    }
}
