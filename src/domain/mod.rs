//! Domain types for the shoe collection.

pub mod shoe;

pub use shoe::{generate_id, Shoe, ShoeFields, ID_LEN};
