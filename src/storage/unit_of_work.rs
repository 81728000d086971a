//! Groups the repositories a request works with

use crate::domain::{Customer, Product};
use crate::storage::in_memory::InMemoryRepository;
use crate::storage::repository::{CustomerRepository, ProductRepository};
use std::sync::Arc;

/// Shared handle to every repository
///
/// Cheap to clone; clones point to the same repositories.
#[derive(Clone)]
pub struct UnitOfWork {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl UnitOfWork {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            customers,
            products,
        }
    }

    /// Unit of work backed by in-memory repositories holding the given data
    pub fn in_memory(
        customers: impl IntoIterator<Item = Customer>,
        products: impl IntoIterator<Item = Product>,
    ) -> Self {
        Self::new(
            Arc::new(InMemoryRepository::with_entities(customers)),
            Arc::new(InMemoryRepository::with_entities(products)),
        )
    }

    pub fn customers(&self) -> &dyn CustomerRepository {
        self.customers.as_ref()
    }

    pub fn products(&self) -> &dyn ProductRepository {
        self.products.as_ref()
    }
}

impl Default for UnitOfWork {
    fn default() -> Self {
        Self::in_memory(Vec::new(), Vec::new())
    }
}
