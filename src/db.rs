use bson::{Document, doc};
use futures::stream::TryStreamExt;
use mongodb::{Client, Database};
use serde::Serialize;

use crate::error::AppError;

/// Thin adapter over a MongoDB database: insert a validated payload into a
/// named collection, or query a named collection with a filter and limit.
/// The store performs no schema enforcement of its own.
pub struct Store {
    db: Database,
}

impl Store {
    /// Connects and pings, so a bad address fails here instead of on the
    /// first query.
    pub async fn connect(uri: &str, name: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(name);
        db.run_command(doc! { "ping": 1 }).await?;
        Ok(Store { db })
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }

    /// Inserts `payload` into `collection` and returns the new id as a hex
    /// string.
    pub async fn create_document<T>(&self, collection: &str, payload: &T) -> Result<String, AppError>
    where
        T: Serialize + Send + Sync,
    {
        let result = self.db.collection::<T>(collection).insert_one(payload).await?;
        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or(AppError::UnexpectedId)
    }

    /// Raw documents matching `filter`, in store order, capped at `limit`.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    pub async fn aggregate(
        &self,
        collection: &str,
        pipeline: Vec<Document>,
    ) -> Result<Vec<Document>, AppError> {
        let cursor = self.db.collection::<Document>(collection).aggregate(pipeline).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs)
    }

    pub async fn collection_names(&self) -> Result<Vec<String>, mongodb::error::Error> {
        self.db.list_collection_names().await
    }

    pub async fn drop_collection(&self, collection: &str) -> Result<(), mongodb::error::Error> {
        self.db.collection::<Document>(collection).drop().await
    }
}
