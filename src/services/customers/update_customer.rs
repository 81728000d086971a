//! Customer update

use super::models::{CustomerForDetailDto, CustomerForUpdateDto};
use super::sales::{SaleLine, find_product, reconcile_sales};
use crate::core::{CrudError, CrudResult, Entity, EntityError};
use crate::domain::Customer;
use crate::storage::UnitOfWork;
use uuid::Uuid;
use validator::Validate;

/// Replaces a customer's details and reconciles its sales
#[derive(Clone)]
pub struct UpdateCustomer {
    unit_of_work: UnitOfWork,
}

impl UpdateCustomer {
    pub fn new(unit_of_work: UnitOfWork) -> Self {
        Self { unit_of_work }
    }

    pub async fn execute(
        &self,
        customer_id: Uuid,
        model: CustomerForUpdateDto,
    ) -> CrudResult<CustomerForDetailDto> {
        model.validate()?;

        let stored = self
            .unit_of_work
            .customers()
            .get_customer(&customer_id)
            .await?
            .ok_or_else(|| {
                CrudError::from(EntityError::NotFound {
                    entity_type: Customer::resource_name_singular().to_string(),
                    id: customer_id,
                })
            })?;

        let mut lines = Vec::new();
        for sale in model.sales.unwrap_or_default() {
            lines.push(SaleLine {
                sale_id: sale.sale_id,
                product: find_product(&self.unit_of_work, sale.product_id).await?,
                quantity: sale.quantity,
                unit_price: sale.unit_price,
            });
        }

        let customer = Customer {
            id: stored.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            address: model.address,
            phone_number: model.phone_number,
            sales: reconcile_sales(stored.id, stored.sales, lines)?,
        };

        let customer = self.unit_of_work.customers().update_customer(customer).await?;

        tracing::info!(
            customer_id = %customer.id,
            sales = customer.sales.len(),
            "updated customer"
        );

        Ok(customer.into())
    }
}
