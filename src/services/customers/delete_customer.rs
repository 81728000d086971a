//! Customer removal

use crate::core::CrudResult;
use crate::storage::UnitOfWork;
use uuid::Uuid;

/// Removes a customer together with its sales
#[derive(Clone)]
pub struct DeleteCustomer {
    unit_of_work: UnitOfWork,
}

impl DeleteCustomer {
    pub fn new(unit_of_work: UnitOfWork) -> Self {
        Self { unit_of_work }
    }

    pub async fn execute(&self, customer_id: Uuid) -> CrudResult<()> {
        self.unit_of_work
            .customers()
            .delete_customer(&customer_id)
            .await?;

        tracing::info!(customer_id = %customer_id, "deleted customer");
        Ok(())
    }
}
