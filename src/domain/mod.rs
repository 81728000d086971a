//! Customers, products and the sales linking them

pub mod customer;
pub mod product;
pub mod sale;

pub use customer::Customer;
pub use product::Product;
pub use sale::Sale;
