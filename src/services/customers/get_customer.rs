//! Single customer lookup

use super::models::CustomerForDetailDto;
use crate::core::{CrudResult, Entity, EntityError};
use crate::domain::Customer;
use crate::storage::UnitOfWork;
use uuid::Uuid;

/// Fetches one customer with its sales
#[derive(Clone)]
pub struct GetCustomer {
    unit_of_work: UnitOfWork,
}

impl GetCustomer {
    pub fn new(unit_of_work: UnitOfWork) -> Self {
        Self { unit_of_work }
    }

    pub async fn execute(&self, customer_id: Uuid) -> CrudResult<CustomerForDetailDto> {
        let customer = self
            .unit_of_work
            .customers()
            .get_customer(&customer_id)
            .await?
            .ok_or_else(|| EntityError::NotFound {
                entity_type: Customer::resource_name_singular().to_string(),
                id: customer_id,
            })?;

        Ok(customer.into())
    }
}
