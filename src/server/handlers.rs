//! HTTP handlers for customers and products

use super::extract::{JsonBody, QueryParams};
use crate::core::error::ValidationError;
use crate::core::{CollectionResource, CrudError, CrudResult, CustomerResourceParameter};
use crate::services::Services;
use crate::services::customers::{
    CustomerForCreateDto, CustomerForDetailDto, CustomerForListDto, CustomerForUpdateDto,
};
use crate::services::products::ProductForListDto;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

/// Shared state of every handler
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
}

impl AppState {
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

fn parse_id(id: &str) -> CrudResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| {
        CrudError::Validation(ValidationError::InvalidUuid {
            value: id.to_string(),
        })
    })
}

/// List customers
///
/// GET /customers?currentPage=1&pageSize=10&isAscending=true&sortBy=name&searchText=Jane
pub async fn list_customers(
    State(state): State<AppState>,
    QueryParams(parameter): QueryParams<CustomerResourceParameter>,
) -> CrudResult<Json<CollectionResource<CustomerForListDto>>> {
    let customers = state.services.get_customers.execute(parameter).await?;
    Ok(Json(customers))
}

/// Get a customer with its sales
///
/// GET /customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CrudResult<Json<CustomerForDetailDto>> {
    let customer = state.services.get_customer.execute(parse_id(&id)?).await?;
    Ok(Json(customer))
}

/// Create a customer with its sales
///
/// POST /customers
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(model): JsonBody<CustomerForCreateDto>,
) -> CrudResult<(StatusCode, Json<CustomerForDetailDto>)> {
    let customer = state.services.create_customer.execute(model).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Replace a customer's details and sales
///
/// PUT /customers/{id}
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(model): JsonBody<CustomerForUpdateDto>,
) -> CrudResult<Json<CustomerForDetailDto>> {
    let id = parse_id(&id)?;
    let customer = state.services.update_customer.execute(id, model).await?;
    Ok(Json(customer))
}

/// Delete a customer
///
/// DELETE /customers/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CrudResult<StatusCode> {
    state.services.delete_customer.execute(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List products
///
/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> CrudResult<Json<Vec<ProductForListDto>>> {
    let products = state.services.get_products.execute().await?;
    Ok(Json(products))
}
