//! Entity trait shared by every stored type

use uuid::Uuid;

/// Base trait for all entities in the system.
///
/// All entities have a unique identifier and a resource name used in URLs
/// and error messages.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "customers")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "customer")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;
}
