// Private module declaration
mod server;

use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::{start_server, AppState};

// ============================================================================
// Metrics Module - Prometheus metrics for the review endpoint
// ============================================================================
//
// Tracks:
// - Review outcomes (rendered vs. each rejection reason)
// - Lines per rendered summary
// - Catalog misses (lines priced with the placeholder entry)
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub order_reviews_total: IntCounterVec,
    pub order_review_lines: Histogram,
    pub catalog_misses_total: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let order_reviews_total = IntCounterVec::new(
            Opts::new("order_reviews_total", "Total review actions by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(order_reviews_total.clone()))?;

        let order_review_lines = Histogram::with_opts(
            HistogramOpts::new("order_review_lines", "Order lines per rendered summary")
                .buckets(vec![1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0]),
        )?;
        registry.register(Box::new(order_review_lines.clone()))?;

        let catalog_misses_total = IntCounter::new(
            "catalog_misses_total",
            "Order lines whose item id had no catalog entry",
        )?;
        registry.register(Box::new(catalog_misses_total.clone()))?;

        Ok(Self {
            registry,
            order_reviews_total,
            order_review_lines,
            catalog_misses_total,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record a rendered summary
    pub fn record_rendered(&self, lines: usize, catalog_misses: usize) {
        self.order_reviews_total.with_label_values(&["rendered"]).inc();
        self.order_review_lines.observe(lines as f64);
        self.catalog_misses_total.inc_by(catalog_misses as u64);
    }

    /// Record a blocked review
    pub fn record_rejected(&self, reason: &str) {
        self.order_reviews_total.with_label_values(&[reason]).inc();
    }
}
