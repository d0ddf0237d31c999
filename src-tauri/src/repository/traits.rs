//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity, returning it with its assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// Update an existing entity. Missing IDs are `NotFound`.
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID. Missing IDs are `NotFound`.
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}

/// Extension for repositories whose entities belong to a user
#[async_trait]
pub trait OwnedRepository<T: Entity>: Repository<T> {
    /// All entities owned by `owner_id`, oldest first
    async fn list_by_owner(&self, owner_id: &str) -> DomainResult<Vec<T>>;
}
