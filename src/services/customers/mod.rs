//! Customer use cases

pub mod create_customer;
pub mod delete_customer;
pub mod get_customer;
pub mod get_customers;
pub mod models;
mod sales;
pub mod specifications;
pub mod update_customer;

pub use create_customer::CreateCustomer;
pub use delete_customer::DeleteCustomer;
pub use get_customer::GetCustomer;
pub use get_customers::GetCustomers;
pub use models::{
    CustomerForCreateDto, CustomerForDetailDto, CustomerForListDto, CustomerForUpdateDto,
    SaleForCreateDto, SaleForDetailDto, SaleForListDto, SaleForUpdateDto,
};
pub use specifications::{CustomerByNameSpecification, SortCustomerByLastNameSpecification};
pub use update_customer::UpdateCustomer;
