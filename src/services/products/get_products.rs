//! Product listing

use super::models::ProductForListDto;
use crate::core::CrudResult;
use crate::storage::UnitOfWork;

/// Lists every product in storage order
#[derive(Clone)]
pub struct GetProducts {
    unit_of_work: UnitOfWork,
}

impl GetProducts {
    pub fn new(unit_of_work: UnitOfWork) -> Self {
        Self { unit_of_work }
    }

    pub async fn execute(&self) -> CrudResult<Vec<ProductForListDto>> {
        let products = self.unit_of_work.products().get_products().await?;

        tracing::debug!(count = products.len(), "listing products");

        Ok(products.into_iter().map(ProductForListDto::from).collect())
    }
}
