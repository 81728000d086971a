//! Application services
//!
//! Each service turns request parameters into a repository call and maps the
//! stored entities to response models. Services return
//! [`CrudResult`](crate::core::CrudResult) so callers can render errors
//! directly.

pub mod customers;
pub mod products;

use crate::config::PagingConfig;
use crate::storage::UnitOfWork;

pub use customers::{CreateCustomer, DeleteCustomer, GetCustomer, GetCustomers, UpdateCustomer};
pub use products::GetProducts;

/// Every service, sharing one unit of work
#[derive(Clone)]
pub struct Services {
    pub get_customers: GetCustomers,
    pub get_customer: GetCustomer,
    pub create_customer: CreateCustomer,
    pub update_customer: UpdateCustomer,
    pub delete_customer: DeleteCustomer,
    pub get_products: GetProducts,
}

impl Services {
    pub fn new(unit_of_work: UnitOfWork, paging: PagingConfig) -> Self {
        Self {
            get_customers: GetCustomers::new(unit_of_work.clone(), paging),
            get_customer: GetCustomer::new(unit_of_work.clone()),
            create_customer: CreateCustomer::new(unit_of_work.clone()),
            update_customer: UpdateCustomer::new(unit_of_work.clone()),
            delete_customer: DeleteCustomer::new(unit_of_work.clone()),
            get_products: GetProducts::new(unit_of_work),
        }
    }
}
