//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use database::mongodb::DEFAULT_COLLECTION;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemInput};
use crate::repository::ItemRepository;

/// Persisted shape: `{ _id, name, price }`
///
/// Missing fields decode to their zero value. `_id` is left out on insert so
/// the server assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: i64,
}

impl ItemDocument {
    fn into_item(self) -> ItemResult<Item> {
        let id = self
            .id
            .ok_or_else(|| ItemError::Internal("stored item has no _id".to_string()))?;
        Ok(Item {
            id,
            name: self.name,
            price: self.price,
        })
    }
}

impl From<ItemInput> for ItemDocument {
    fn from(input: ItemInput) -> Self {
        Self {
            id: None,
            name: input.name,
            price: input.price,
        }
    }
}

impl From<&Item> for ItemDocument {
    fn from(item: &Item) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            price: item.price,
        }
    }
}

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Repository over the default `items` collection of `db`.
    ///
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoItemRepository::new(client.database("testdb"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<ItemDocument>(collection_name),
        }
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let document = ItemDocument::from(input);
        let result = self.collection.insert_one(&document).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ItemError::Internal(format!(
                "insert returned a non-ObjectId id: {}",
                result.inserted_id
            ))
        })?;

        tracing::info!(item_id = %id, "Item created successfully");
        Ok(Item {
            id,
            name: document.name,
            price: document.price,
        })
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ItemResult<Option<Item>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(ItemDocument::into_item)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ItemDocument> = cursor.try_collect().await?;

        documents.into_iter().map(ItemDocument::into_item).collect()
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn replace(&self, item: &Item) -> ItemResult<bool> {
        let result = self
            .collection
            .replace_one(doc! { "_id": item.id }, ItemDocument::from(item))
            .await?;

        if result.matched_count > 0 {
            tracing::info!(item_id = %item.id, "Item replaced successfully");
        }
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ItemResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(item_id = %id, "Item deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}
