use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use toymatch::error::AppError;
use toymatch::matching::{PriceRange, ProductCatalog};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads the catalog CSV at `path`, or falls back to the storefront seed products.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<ProductCatalog, AppError> {
    let catalog = match path {
        Some(path) => {
            let catalog = ProductCatalog::from_csv_path(path)?;
            info!(path = %path.display(), products = catalog.len(), "product catalog loaded");
            catalog
        }
        None => {
            let catalog = ProductCatalog::sample();
            info!(products = catalog.len(), "no catalog configured, using sample products");
            catalog
        }
    };
    Ok(catalog)
}

/// A lone bound leaves the other side open.
pub(crate) fn budget_range(min: Option<u64>, max: Option<u64>) -> Option<PriceRange> {
    match (min, max) {
        (None, None) => None,
        (min, max) => Some(PriceRange {
            min: min.unwrap_or(0),
            max: max.unwrap_or(u64::MAX),
        }),
    }
}
