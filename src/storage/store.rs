//! The storage contract for the shoe collection.

use crate::domain::{Shoe, ShoeFields};
use async_trait::async_trait;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation (connection, query, write).
    #[error("{0}")]
    Backend(String),

    /// A stored document could not be decoded into a shoe.
    #[error("{0}")]
    Decode(String),
}

/// Persistence for shoes keyed by their application-level `id`.
///
/// Implementations are shared across request tasks, so every method takes `&self`
/// and must tolerate concurrent calls.
#[async_trait]
pub trait ShoeStore: Send + Sync {
    /// Short backend name, used in logs.
    fn backend(&self) -> &'static str;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    async fn insert(&self, shoe: &Shoe) -> StoreResult<()>;

    /// Returns every stored shoe. The whole collection is materialized in memory.
    async fn list(&self) -> StoreResult<Vec<Shoe>>;

    async fn find(&self, id: &str) -> StoreResult<Option<Shoe>>;

    /// Overwrites every field but `id` of the matching shoe and returns the result.
    ///
    /// The write and the read of the updated document happen as one atomic step.
    /// Returns `None` when no shoe has this id.
    async fn replace_fields(&self, id: &str, fields: &ShoeFields) -> StoreResult<Option<Shoe>>;

    /// Removes the matching shoe. Returns `false` when nothing matched.
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}
