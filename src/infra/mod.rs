pub mod config;

pub use config::{Config, StoreBackend};
