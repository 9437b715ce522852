//! MongoDB-backed shoe store.

use crate::domain::{Shoe, ShoeFields};
use crate::storage::store::{ShoeStore, StoreError, StoreResult};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Client, Collection, Database};

/// A shoe store over one MongoDB collection.
///
/// The driver client is a connection pool, so a single instance is shared by every
/// request task for the life of the process.
#[derive(Clone)]
pub struct MongoShoeStore {
    database: Database,
    collection: Collection<Shoe>,
}

impl MongoShoeStore {
    /// Builds the client for `uri`. The driver connects lazily, so an unreachable
    /// server only shows up on the first operation (or `ping`).
    pub async fn connect(uri: &str, database: &str, collection: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await.map_err(backend)?;
        Ok(Self::with_client(&client, database, collection))
    }

    pub fn with_client(client: &Client, database: &str, collection: &str) -> Self {
        let database = client.database(database);
        let collection = database.collection::<Shoe>(collection);
        Self {
            database,
            collection,
        }
    }

    pub fn collection(&self) -> &Collection<Shoe> {
        &self.collection
    }
}

fn by_id(id: &str) -> Document {
    doc! { "id": id }
}

fn backend(e: MongoError) -> StoreError {
    StoreError::Backend(e.to_string())
}

/// Splits driver errors caused by undecodable documents from everything else.
fn classify(e: MongoError) -> StoreError {
    match *e.kind {
        ErrorKind::BsonDeserialization(_) => StoreError::Decode(e.to_string()),
        _ => StoreError::Backend(e.to_string()),
    }
}

#[async_trait]
impl ShoeStore for MongoShoeStore {
    fn backend(&self) -> &'static str {
        "mongo"
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn insert(&self, shoe: &Shoe) -> StoreResult<()> {
        self.collection
            .insert_one(shoe, None)
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Shoe>> {
        let cursor = self
            .collection
            .find(doc! {}, None)
            .await
            .map_err(backend)?;
        cursor.try_collect::<Vec<Shoe>>().await.map_err(classify)
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Shoe>> {
        self.collection
            .find_one(by_id(id), None)
            .await
            .map_err(classify)
    }

    async fn replace_fields(&self, id: &str, fields: &ShoeFields) -> StoreResult<Option<Shoe>> {
        let update = doc! {
            "$set": {
                "name": fields.name.as_str(),
                "brand": fields.brand.as_str(),
                "size": fields.size,
                "price": fields.price,
            }
        };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        self.collection
            .find_one_and_update(by_id(id), update, options)
            .await
            .map_err(classify)
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let result = self
            .collection
            .delete_one(by_id(id), None)
            .await
            .map_err(backend)?;
        Ok(result.deleted_count > 0)
    }
}
