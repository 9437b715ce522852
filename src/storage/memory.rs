//! In-process shoe store, for local runs without a database and for tests.

use crate::domain::{Shoe, ShoeFields};
use crate::storage::store::{ShoeStore, StoreResult};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Keeps shoes in insertion order behind an async read/write lock.
#[derive(Default)]
pub struct MemoryShoeStore {
    shoes: RwLock<Vec<Shoe>>,
}

impl MemoryShoeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShoeStore for MemoryShoeStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn insert(&self, shoe: &Shoe) -> StoreResult<()> {
        self.shoes.write().await.push(shoe.clone());
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Shoe>> {
        Ok(self.shoes.read().await.clone())
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Shoe>> {
        let shoes = self.shoes.read().await;
        Ok(shoes.iter().find(|s| s.id == id).cloned())
    }

    async fn replace_fields(&self, id: &str, fields: &ShoeFields) -> StoreResult<Option<Shoe>> {
        let mut shoes = self.shoes.write().await;
        Ok(shoes.iter_mut().find(|s| s.id == id).map(|shoe| {
            shoe.apply(fields);
            shoe.clone()
        }))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut shoes = self.shoes.write().await;
        match shoes.iter().position(|s| s.id == id) {
            Some(idx) => {
                shoes.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
