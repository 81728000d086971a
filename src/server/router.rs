//! Route table

use super::handlers::{
    AppState, create_customer, delete_customer, get_customer, list_customers, list_products,
    update_customer,
};
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// - GET /customers - Paged, filtered and sorted customer listing
/// - POST /customers - Create a customer (also mounted at POST /customer)
/// - GET /customers/{id} - One customer with its sales
/// - PUT /customers/{id} - Replace a customer and reconcile its sales
/// - DELETE /customers/{id} - Remove a customer
/// - GET /products - Every product
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customer", post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/products", get(list_products))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
