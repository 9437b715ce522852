//! The shoe record and its identifier scheme.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored shoe.
///
/// `id` is the application-level key used by every lookup. It is unrelated to the
/// document database's own `_id`, which is ignored when decoding.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(default)]
pub struct Shoe {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub size: i64,
    pub price: f64,
}

/// The mutable part of a shoe: everything except `id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoeFields {
    pub name: String,
    pub brand: String,
    pub size: i64,
    pub price: f64,
}

impl Shoe {
    pub fn new(id: String, fields: ShoeFields) -> Self {
        Self {
            id,
            name: fields.name,
            brand: fields.brand,
            size: fields.size,
            price: fields.price,
        }
    }

    /// Drops the id, keeping the fields a caller is allowed to write.
    pub fn into_fields(self) -> ShoeFields {
        ShoeFields {
            name: self.name,
            brand: self.brand,
            size: self.size,
            price: self.price,
        }
    }

    /// Overwrites every field except `id`.
    pub fn apply(&mut self, fields: &ShoeFields) {
        self.name = fields.name.clone();
        self.brand = fields.brand.clone();
        self.size = fields.size;
        self.price = fields.price;
    }
}

/// Length in characters of a generated id (128 bits, hex encoded).
pub const ID_LEN: usize = 32;

/// Generates a fresh shoe id from the thread-local CSPRNG.
pub fn generate_id() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}
