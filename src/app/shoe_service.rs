//! The shoe service.
//!
//! Sits between the HTTP handlers and the configured [`ShoeStore`]. It owns the
//! parts of each operation that are not transport concerns:
//! 1.  Assigning a fresh id on create (any id supplied by the caller is discarded).
//! 2.  Full-overwrite updates keyed by `id`.
//! 3.  Logging store failures once, with the operation and id attached.

use crate::domain::{generate_id, Shoe, ShoeFields};
use crate::storage::{ShoeStore, StoreResult};
use std::sync::Arc;

#[derive(Clone)]
pub struct ShoeService {
    store: Arc<dyn ShoeStore>,
}

impl ShoeService {
    pub fn new(store: Arc<dyn ShoeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ShoeStore> {
        &self.store
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.store.ping().await
    }

    /// Stores a new shoe under a freshly generated id and returns it.
    pub async fn create(&self, fields: ShoeFields) -> StoreResult<Shoe> {
        let shoe = Shoe::new(generate_id(), fields);
        if let Err(e) = self.store.insert(&shoe).await {
            tracing::error!(id = %shoe.id, "insert failed: {}", e);
            return Err(e);
        }
        tracing::info!(id = %shoe.id, "created shoe");
        Ok(shoe)
    }

    pub async fn list(&self) -> StoreResult<Vec<Shoe>> {
        self.store.list().await.inspect_err(|e| {
            tracing::error!("listing shoes failed: {}", e);
        })
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Shoe>> {
        self.store.find(id).await.inspect_err(|e| {
            tracing::warn!(id, "lookup failed: {}", e);
        })
    }

    /// Replaces name, brand, size and price of the shoe with this id.
    ///
    /// Fields missing from the caller's payload have already defaulted to zero values,
    /// so they overwrite whatever was stored. Returns `None` when no shoe matched.
    pub async fn update(&self, id: &str, fields: ShoeFields) -> StoreResult<Option<Shoe>> {
        let updated = self
            .store
            .replace_fields(id, &fields)
            .await
            .inspect_err(|e| tracing::error!(id, "update failed: {}", e))?;
        if updated.is_some() {
            tracing::info!(id, "updated shoe");
        }
        Ok(updated)
    }

    /// Returns whether a shoe was removed.
    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let deleted = self
            .store
            .delete(id)
            .await
            .inspect_err(|e| tracing::error!(id, "delete failed: {}", e))?;
        if deleted {
            tracing::info!(id, "deleted shoe");
        }
        Ok(deleted)
    }
}
