//! # crud-rs
//!
//! Customers, products and sales exposed over a small REST API, built on
//! composable query specifications and paged lists.
//!
//! ## Features
//!
//! - **Specifications**: Filter predicates combined with `and`/`or`/`not` plus ordered
//!   sort directives
//! - **Deferred Evaluation**: Specifications become filter and ordering stages on a
//!   queryable source
//! - **Paged Lists**: 1-based pages with total counts, page counts and navigation flags
//! - **Repositories**: In-memory repositories grouped in a unit of work
//! - **Configuration-Based**: Server, paging limits and log filters from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use crud::prelude::*;
//!
//! let spec = Specification::<Customer>::all()
//!     .and(CustomerByNameSpecification::new(Some("Smith".to_string())).into())
//!     .sort_ascending(SortCustomerByLastNameSpecification.into());
//!
//! let customers = vec![
//!     Customer::new("Jane", "Smith", "jane.smith@example.com", "1234567890"),
//!     Customer::new("Phil", "Boyce", "phil.boyce@example.com", "9876543210"),
//! ];
//!
//! let query = SpecificationEvaluator::get_query(InMemoryQuery::new(customers), &spec);
//! let page = PagedList::create(query.execute(), 1, 10).unwrap();
//!
//! assert_eq!(page.total_count(), 1);
//! assert_eq!(page.items()[0].first_name, "Jane");
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod services;
pub mod storage;
pub mod telemetry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        CollectionResource, CrudError, CrudResult, CustomerResourceParameter, Entity, EntityError,
        FieldValue, InMemoryQuery, OrderedQueryable, PagedList, PaginationMetadata, PagingError,
        QueryExecutor, Queryable, ResourceParameter, SortDirection, Specification,
        SpecificationEvaluator, SpecificationRule, UNPAGED,
    };

    // === Domain ===
    pub use crate::domain::{Customer, Product, Sale};

    // === Services ===
    pub use crate::services::Services;
    pub use crate::services::customers::{
        CreateCustomer, CustomerByNameSpecification, CustomerForCreateDto, CustomerForDetailDto,
        CustomerForListDto, CustomerForUpdateDto, DeleteCustomer, GetCustomer, GetCustomers,
        SaleForCreateDto, SaleForUpdateDto, SortCustomerByLastNameSpecification, UpdateCustomer,
    };
    pub use crate::services::products::{GetProducts, ProductForListDto};

    // === Storage ===
    pub use crate::storage::{CustomerRepository, InMemoryRepository, ProductRepository, UnitOfWork};

    // === Config ===
    pub use crate::config::{AppConfig, LoggingConfig, PagingConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder, build_router};
    pub use crate::telemetry::init_tracing;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use uuid::Uuid;
}
