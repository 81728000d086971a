//! In-memory repository for any entity type

use crate::core::error::StorageError;
use crate::core::{
    Entity, EntityError, InMemoryQuery, PagedList, Specification, SpecificationEvaluator,
};
use anyhow::Result;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

const BACKEND: &str = "in_memory";

/// In-memory repository implementation
///
/// Entities are kept in insertion order, so queries without sort directives
/// return them in the order they were added. Uses RwLock for thread-safe
/// access; clones share the same data.
#[derive(Clone)]
pub struct InMemoryRepository<T: Entity> {
    entities: Arc<RwLock<IndexMap<Uuid, T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a repository pre-filled with `entities`
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let entities = entities
            .into_iter()
            .map(|entity| (entity.id(), entity))
            .collect();

        Self {
            entities: Arc::new(RwLock::new(entities)),
        }
    }

    /// Store a new entity
    pub async fn add(&self, entity: T) -> Result<T> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| lock_error("write", e))?;

        let id = entity.id();
        if entities.contains_key(&id) {
            return Err(EntityError::AlreadyExists {
                entity_type: T::resource_name_singular().to_string(),
                id,
            }
            .into());
        }

        entities.insert(id, entity.clone());

        Ok(entity)
    }

    pub async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let entities = self.entities.read().map_err(|e| lock_error("read", e))?;

        Ok(entities.get(id).cloned())
    }

    /// Replace a stored entity in place, keeping its position
    pub async fn update(&self, entity: T) -> Result<T> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| lock_error("write", e))?;

        let id = entity.id();
        let Some(stored) = entities.get_mut(&id) else {
            return Err(EntityError::NotFound {
                entity_type: T::resource_name_singular().to_string(),
                id,
            }
            .into());
        };
        *stored = entity.clone();

        Ok(entity)
    }

    /// Remove an entity, failing if it does not exist
    pub async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| lock_error("write", e))?;

        if entities.shift_remove(id).is_none() {
            return Err(EntityError::NotFound {
                entity_type: T::resource_name_singular().to_string(),
                id: *id,
            }
            .into());
        }

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<T>> {
        let entities = self.entities.read().map_err(|e| lock_error("read", e))?;

        Ok(entities.values().cloned().collect())
    }

    pub async fn count(&self) -> Result<usize> {
        let entities = self.entities.read().map_err(|e| lock_error("read", e))?;

        Ok(entities.len())
    }

    /// A deferred query over a snapshot of the current entities
    ///
    /// Later writes are not visible to the returned query.
    pub fn query(&self) -> Result<InMemoryQuery<T>> {
        let entities = self.entities.read().map_err(|e| lock_error("read", e))?;

        Ok(InMemoryQuery::new(entities.values().cloned().collect()))
    }

    /// Apply `specification` and return the requested page
    pub async fn find_paged(
        &self,
        specification: &Specification<T>,
        current_page: usize,
        page_size: usize,
    ) -> Result<PagedList<T>> {
        let query = SpecificationEvaluator::get_query(self.query()?, specification);

        PagedList::create_async(query, current_page, page_size).await
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(kind: &str, error: impl std::fmt::Display) -> anyhow::Error {
    StorageError::QueryError {
        backend: BACKEND.to_string(),
        message: format!("Failed to acquire {} lock: {}", kind, error),
    }
    .into()
}
