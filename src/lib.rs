pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::ShoeService;
pub use domain::{Shoe, ShoeFields};
pub use infra::config::Config;
pub use storage::{MemoryShoeStore, MongoShoeStore, ShoeStore, StoreError};
