//! CatalogSource trait: where sessions get their read-only snapshot.

use std::sync::Arc;

use crate::errors::CatalogError;
use crate::models::Catalog;

/// Provider of catalog snapshots. Loaded once per session and treated as
/// immutable for its duration.
pub trait CatalogSource: Send + Sync {
    /// Snapshot restricted to `candidate_ids`, or the whole catalog for `None`.
    fn snapshot(&self, candidate_ids: Option<&[String]>) -> Result<Arc<Catalog>, CatalogError>;
}

/// In-memory source serving one fixed catalog.
pub struct StaticCatalogSource {
    catalog: Arc<Catalog>,
}

impl StaticCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn snapshot(&self, candidate_ids: Option<&[String]>) -> Result<Arc<Catalog>, CatalogError> {
        match candidate_ids {
            None => Ok(Arc::clone(&self.catalog)),
            Some(ids) => self.catalog.subset(ids).map(Arc::new),
        }
    }
}
