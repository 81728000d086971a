//! Repository traits for customers and products

use crate::core::{PagedList, Specification};
use crate::domain::{Customer, Product};
use crate::storage::in_memory::InMemoryRepository;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Customer access
///
/// Implementations apply the specification through
/// [`SpecificationEvaluator`](crate::core::SpecificationEvaluator) so filtering
/// and ordering stay in the query until the page is materialized.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Customers matching `specification`, sorted by its directives and
    /// sliced to the requested page
    async fn get_customers_with_pagination(
        &self,
        specification: &Specification<Customer>,
        current_page: usize,
        page_size: usize,
    ) -> Result<PagedList<Customer>>;

    /// Get a customer by ID, with its sales
    async fn get_customer(&self, id: &Uuid) -> Result<Option<Customer>>;

    /// Store a new customer
    async fn add_customer(&self, customer: Customer) -> Result<Customer>;

    /// Replace a stored customer and its sales
    ///
    /// Fails with [`EntityError::NotFound`](crate::core::EntityError) when no
    /// customer has the same id.
    async fn update_customer(&self, customer: Customer) -> Result<Customer>;

    /// Remove a customer together with its sales
    async fn delete_customer(&self, id: &Uuid) -> Result<()>;
}

/// Product access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in storage order
    async fn get_products(&self) -> Result<Vec<Product>>;

    async fn get_product(&self, id: &Uuid) -> Result<Option<Product>>;

    /// Store a new product
    async fn add_product(&self, product: Product) -> Result<Product>;
}

#[async_trait]
impl CustomerRepository for InMemoryRepository<Customer> {
    async fn get_customers_with_pagination(
        &self,
        specification: &Specification<Customer>,
        current_page: usize,
        page_size: usize,
    ) -> Result<PagedList<Customer>> {
        self.find_paged(specification, current_page, page_size).await
    }

    async fn get_customer(&self, id: &Uuid) -> Result<Option<Customer>> {
        self.get(id).await
    }

    async fn add_customer(&self, customer: Customer) -> Result<Customer> {
        self.add(customer).await
    }

    async fn update_customer(&self, customer: Customer) -> Result<Customer> {
        self.update(customer).await
    }

    async fn delete_customer(&self, id: &Uuid) -> Result<()> {
        self.delete(id).await
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository<Product> {
    async fn get_products(&self) -> Result<Vec<Product>> {
        self.list().await
    }

    async fn get_product(&self, id: &Uuid) -> Result<Option<Product>> {
        self.get(id).await
    }

    async fn add_product(&self, product: Product) -> Result<Product> {
        self.add(product).await
    }
}
