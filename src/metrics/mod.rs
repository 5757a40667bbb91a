// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Ingredient operations (throughput, latency, outcome)
// - Post-save reconciliation strategy
// - Recipe operations
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the service
pub struct Metrics {
    registry: Registry,

    // Ingredient Metrics
    pub ingredient_operations: IntCounterVec,
    pub ingredient_operation_duration: HistogramVec,
    pub ingredient_reconciliations: IntCounterVec,

    // Recipe Metrics
    pub recipe_operations: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let ingredient_operations = IntCounterVec::new(
            Opts::new("ingredient_operations_total", "Total ingredient operations"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(ingredient_operations.clone()))?;

        let ingredient_operation_duration = HistogramVec::new(
            HistogramOpts::new(
                "ingredient_operation_duration_seconds",
                "Ingredient operation duration",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["operation"],
        )?;
        registry.register(Box::new(ingredient_operation_duration.clone()))?;

        let ingredient_reconciliations = IntCounterVec::new(
            Opts::new(
                "ingredient_reconciliations_total",
                "Saved ingredients re-located after a recipe save, by strategy",
            ),
            &["strategy"],
        )?;
        registry.register(Box::new(ingredient_reconciliations.clone()))?;

        let recipe_operations = IntCounterVec::new(
            Opts::new("recipe_operations_total", "Total recipe operations"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(recipe_operations.clone()))?;

        Ok(Self {
            registry,
            ingredient_operations,
            ingredient_operation_duration,
            ingredient_reconciliations,
            recipe_operations,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record an ingredient operation
    pub fn record_ingredient_operation(&self, operation: &str, duration_secs: f64, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.ingredient_operations.with_label_values(&[operation, outcome]).inc();
        self.ingredient_operation_duration.with_label_values(&[operation]).observe(duration_secs);
    }

    /// Helper to record how a saved ingredient was found again
    pub fn record_reconciliation(&self, strategy: &str) {
        self.ingredient_reconciliations.with_label_values(&[strategy]).inc();
    }

    /// Helper to record a recipe operation
    pub fn record_recipe_operation(&self, operation: &str, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.recipe_operations.with_label_values(&[operation, outcome]).inc();
    }
}
