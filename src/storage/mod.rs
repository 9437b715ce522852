pub mod memory;
pub mod mongo;
pub mod store;

pub use memory::MemoryShoeStore;
pub use mongo::MongoShoeStore;
pub use store::{ShoeStore, StoreError, StoreResult};

use crate::infra::config::{Config, StoreBackend};
use std::sync::Arc;

/// Opens the store selected by `config`.
pub async fn open_store(config: &Config) -> StoreResult<Arc<dyn ShoeStore>> {
    match config.store_backend {
        StoreBackend::Mongo => {
            let store = MongoShoeStore::connect(
                &config.mongodb_uri,
                &config.mongodb_database,
                &config.mongodb_collection,
            )
            .await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => Ok(Arc::new(MemoryShoeStore::new())),
    }
}
