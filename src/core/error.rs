//! Typed error handling for the CRUD service
//!
//! Every failure the service can report to a caller is a [`CrudError`]. Each
//! category carries its own enum so callers can match on the specific case,
//! and every variant knows its HTTP status code and stable error code.
//!
//! # Error Categories
//!
//! - [`EntityError`]: lookups of customers, products and sales
//! - [`PagingError`]: degenerate paging arguments
//! - [`ValidationError`]: rejected request parameters
//! - [`ConfigError`]: configuration parsing and validation
//! - [`StorageError`]: failures reported by a data source
//!
//! # Example
//!
//! ```rust,ignore
//! match get_customer.execute(id).await {
//!     Ok(customer) => println!("Found: {:?}", customer),
//!     Err(CrudError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("Customer {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type of the service
#[derive(Debug)]
pub enum CrudError {
    /// Entity lookups
    Entity(EntityError),

    /// Paging arguments
    Paging(PagingError),

    /// Request validation
    Validation(ValidationError),

    /// Configuration
    Config(ConfigError),

    /// Data source failures
    Storage(StorageError),

    /// Anything else (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for CrudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrudError::Entity(e) => write!(f, "{}", e),
            CrudError::Paging(e) => write!(f, "{}", e),
            CrudError::Validation(e) => write!(f, "{}", e),
            CrudError::Config(e) => write!(f, "{}", e),
            CrudError::Storage(e) => write!(f, "{}", e),
            CrudError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CrudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrudError::Entity(e) => Some(e),
            CrudError::Paging(e) => Some(e),
            CrudError::Validation(e) => Some(e),
            CrudError::Config(e) => Some(e),
            CrudError::Storage(e) => Some(e),
            CrudError::Internal(_) => None,
        }
    }
}

/// Error body returned by the HTTP layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CrudError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CrudError::Entity(e) => e.status_code(),
            CrudError::Paging(_) => StatusCode::BAD_REQUEST,
            CrudError::Validation(_) => StatusCode::BAD_REQUEST,
            CrudError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CrudError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CrudError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CrudError::Entity(e) => e.error_code(),
            CrudError::Paging(_) => "INVALID_PAGING",
            CrudError::Validation(_) => "VALIDATION_ERROR",
            CrudError::Config(_) => "CONFIG_ERROR",
            CrudError::Storage(_) => "STORAGE_ERROR",
            CrudError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CrudError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id.to_string()
                }))
            }
            CrudError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for CrudError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

#[derive(Debug)]
pub enum EntityError {
    /// Entity was not found
    NotFound { entity_type: String, id: Uuid },

    /// Entity already exists
    AlreadyExists { entity_type: String, id: Uuid },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
            EntityError::AlreadyExists { entity_type, id } => {
                write!(f, "{} with id '{}' already exists", entity_type, id)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::AlreadyExists { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
        }
    }
}

impl From<EntityError> for CrudError {
    fn from(err: EntityError) -> Self {
        CrudError::Entity(err)
    }
}

// =============================================================================
// Paging Errors
// =============================================================================

/// Degenerate arguments to [`PagedList`](crate::core::paged_list::PagedList)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagingError {
    #[error("Page size must be at least 1 (got {page_size})")]
    InvalidPageSize { page_size: usize },
}

impl From<PagingError> for CrudError {
    fn from(err: PagingError) -> Self {
        CrudError::Paging(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

#[derive(Debug)]
pub enum ValidationError {
    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid UUID format
    InvalidUuid { value: String },

    /// Query string or body that could not be decoded
    InvalidRequest { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidUuid { value } => {
                write!(f, "Invalid UUID format: {}", value)
            }
            ValidationError::InvalidRequest { message } => {
                write!(f, "Invalid request: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for CrudError {
    fn from(err: ValidationError) -> Self {
        CrudError::Validation(err)
    }
}

/// Nested structs and lists are flattened into paths such as
/// `sales[1].quantity`.
impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_field_errors("", &errors, &mut fields);
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationError::FieldErrors(fields)
    }
}

fn collect_field_errors(
    prefix: &str,
    errors: &validator::ValidationErrors,
    out: &mut Vec<FieldValidationError>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(errors) => {
                out.extend(errors.iter().map(|error| FieldValidationError {
                    field: path.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

impl From<validator::ValidationErrors> for CrudError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CrudError::Validation(errors.into())
    }
}

// =============================================================================
// Config Errors
// =============================================================================

#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for CrudError {
    fn from(err: ConfigError) -> Self {
        CrudError::Config(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

#[derive(Debug)]
pub enum StorageError {
    /// The data source failed while running a query
    QueryError { backend: String, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::QueryError { backend, message } => {
                write!(f, "{} query failed: {}", backend, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for CrudError {
    fn from(err: StorageError) -> Self {
        CrudError::Storage(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

/// Recovers typed errors that travelled through `anyhow`
///
/// Entity, paging, config and storage errors keep their category; anything
/// else becomes [`CrudError::Internal`].
impl From<anyhow::Error> for CrudError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<EntityError>() {
            Ok(entity) => return CrudError::Entity(entity),
            Err(err) => err,
        };
        let err = match err.downcast::<PagingError>() {
            Ok(paging) => return CrudError::Paging(paging),
            Err(err) => err,
        };
        let err = match err.downcast::<ConfigError>() {
            Ok(config) => return CrudError::Config(config),
            Err(err) => err,
        };
        match err.downcast::<StorageError>() {
            Ok(storage) => CrudError::Storage(storage),
            Err(err) => CrudError::Internal(format!("{:#}", err)),
        }
    }
}

/// A specialized Result type for service operations
pub type CrudResult<T> = Result<T, CrudError>;
