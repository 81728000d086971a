//! Product use cases

pub mod get_products;
pub mod models;

pub use get_products::GetProducts;
pub use models::ProductForListDto;
