//! Customer creation

use super::models::{CustomerForCreateDto, CustomerForDetailDto};
use super::sales::find_product;
use crate::core::CrudResult;
use crate::domain::{Customer, Sale};
use crate::storage::UnitOfWork;
use validator::Validate;

/// Validates a new customer, records its sales and stores it
#[derive(Clone)]
pub struct CreateCustomer {
    unit_of_work: UnitOfWork,
}

impl CreateCustomer {
    pub fn new(unit_of_work: UnitOfWork) -> Self {
        Self { unit_of_work }
    }

    /// Every sale must name a stored product; the product's current name is
    /// copied onto the sale.
    pub async fn execute(&self, model: CustomerForCreateDto) -> CrudResult<CustomerForDetailDto> {
        model.validate()?;

        let mut customer = Customer::new(
            model.first_name,
            model.last_name,
            model.email,
            model.phone_number,
        )
        .with_address(model.address);

        for sale in model.sales.unwrap_or_default() {
            let product = find_product(&self.unit_of_work, sale.product_id).await?;
            customer.sales.push(Sale::new(
                customer.id,
                product.id,
                product.name,
                sale.quantity,
                sale.unit_price,
            ));
        }

        let customer = self.unit_of_work.customers().add_customer(customer).await?;

        tracing::info!(
            customer_id = %customer.id,
            sales = customer.sales.len(),
            "created customer"
        );

        Ok(customer.into())
    }
}
