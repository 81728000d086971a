//! Core module: specifications, their evaluation and pagination

pub mod entity;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod paged_list;
pub mod query;
pub mod queryable;
pub mod specification;

pub use entity::Entity;
pub use error::{CrudError, CrudResult, EntityError, PagingError, StorageError, ValidationError};
pub use evaluator::SpecificationEvaluator;
pub use field::FieldValue;
pub use paged_list::{PagedList, UNPAGED};
pub use query::{
    CollectionResource, CustomerResourceParameter, PaginationMetadata, ResourceParameter,
};
pub use queryable::{InMemoryQuery, OrderedQueryable, QueryExecutor, Queryable};
pub use specification::{
    BoolExpression, ObjectExpression, SortDirection, SortDirective, Specification,
    SpecificationRule,
};
