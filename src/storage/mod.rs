//! Repositories and their in-memory backend

pub mod in_memory;
pub mod repository;
pub mod unit_of_work;

pub use in_memory::InMemoryRepository;
pub use repository::{CustomerRepository, ProductRepository};
pub use unit_of_work::UnitOfWork;
