use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::{Item, ItemInput};

/// Repository trait for Item persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item; the store assigns the id.
    async fn create(&self, input: ItemInput) -> ItemResult<Item>;

    async fn get_by_id(&self, id: ObjectId) -> ItemResult<Option<Item>>;

    /// Every item, in store order.
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Overwrite the item with `item.id`. Returns whether one matched.
    async fn replace(&self, item: &Item) -> ItemResult<bool>;

    /// Returns whether an item was removed.
    async fn delete(&self, id: ObjectId) -> ItemResult<bool>;
}

/// Process-local repository for tests and database-free runs.
///
/// Ordered by id, which for freshly generated ObjectIds is creation order.
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<BTreeMap<ObjectId, Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let item = Item::from_input(ObjectId::new(), input);
        self.items.write().await.insert(item.id, item.clone());

        tracing::info!(item_id = %item.id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: ObjectId) -> ItemResult<Option<Item>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn replace(&self, item: &Item) -> ItemResult<bool> {
        let mut items = self.items.write().await;
        match items.get_mut(&item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> ItemResult<bool> {
        Ok(self.items.write().await.remove(&id).is_some())
    }
}
