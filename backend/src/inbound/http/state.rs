//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureProductCatalogueQuery, ProductCatalogueQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Product listing use-case.
    pub products: Arc<dyn ProductCatalogueQuery>,
}

impl HttpState {
    /// Construct state from the product listing port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use catalogue_backend::domain::ports::FixtureProductCatalogueQuery;
    /// use catalogue_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureProductCatalogueQuery));
    /// # let _ = state;
    /// ```
    pub fn new(products: Arc<dyn ProductCatalogueQuery>) -> Self {
        Self { products }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureProductCatalogueQuery))
    }
}
