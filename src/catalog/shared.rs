use std::sync::{Arc, Mutex};
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};

// SharedCatalog puts a whole catalog behind one lock. Borrow and return touch both
// collections, so nothing finer than the whole catalog is locked.
#[derive(Clone)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Box<dyn CatalogService>>>,
}

impl SharedCatalog {
    pub fn new(catalog: Box<dyn CatalogService>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    // Runs `op` while holding the catalog lock
    pub fn with<T>(&self, op: impl FnOnce(&mut dyn CatalogService) -> LibraryResult<T>) -> LibraryResult<T> {
        let mut catalog = self.inner.lock().map_err(|_| LibraryError::runtime(
            "catalog lock poisoned", Some("poisoned".to_string())))?;
        op(catalog.as_mut())
    }
}
