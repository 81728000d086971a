//! HTTP exposure of the application services

pub mod builder;
pub mod extract;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use extract::{JsonBody, QueryParams};
pub use handlers::AppState;
pub use router::build_router;
