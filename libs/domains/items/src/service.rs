//! Item Service - use cases on top of a repository

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemInput};
use crate::repository::ItemRepository;

pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: ItemInput) -> ItemResult<Item> {
        self.repository.create(input).await
    }

    /// Missing ids are [`ItemError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ObjectId) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Full replace. An id with no stored item is not an error; the
    /// submitted item is returned either way.
    #[instrument(skip(self, input))]
    pub async fn replace_item(&self, id: ObjectId, input: ItemInput) -> ItemResult<Item> {
        let item = Item::from_input(id, input);

        if !self.repository.replace(&item).await? {
            tracing::debug!(item_id = %id, "Replace matched no item");
        }

        Ok(item)
    }

    /// Deleting an absent id succeeds.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ObjectId) -> ItemResult<()> {
        if !self.repository.delete(id).await? {
            tracing::debug!(item_id = %id, "Delete matched no item");
        }
        Ok(())
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_get_item_missing_is_not_found() {
        let id = ObjectId::new();
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(None));

        let service = ItemService::new(repo);
        let err = service.get_item(id).await.unwrap_err();
        assert!(matches!(err, ItemError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_replace_item_returns_submitted_item_when_unmatched() {
        let id = ObjectId::new();
        let mut repo = MockItemRepository::new();
        repo.expect_replace()
            .withf(move |item| item.id == id && item.name == "b" && item.price == 0)
            .times(1)
            .returning(|_| Ok(false));

        let service = ItemService::new(repo);
        let item = service
            .replace_item(id, ItemInput::new("b", 0))
            .await
            .unwrap();
        assert_eq!(item, Item::from_input(id, ItemInput::new("b", 0)));
    }

    #[tokio::test]
    async fn test_delete_item_absent_is_ok() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = ItemService::new(repo);
        assert!(service.delete_item(ObjectId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut repo = MockItemRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Err(ItemError::Database("server selection timeout".into())));

        let service = ItemService::new(repo);
        let err = service.list_items().await.unwrap_err();
        assert_eq!(err.to_string(), "server selection timeout");
    }

    #[tokio::test]
    async fn test_create_item_passes_input_through() {
        let mut repo = MockItemRepository::new();
        repo.expect_create()
            .with(eq(ItemInput::new("widget", 10)))
            .times(1)
            .returning(|input| Ok(Item::from_input(ObjectId::new(), input)));

        let service = ItemService::new(repo);
        let item = service
            .create_item(ItemInput::new("widget", 10))
            .await
            .unwrap();
        assert_eq!((item.name.as_str(), item.price), ("widget", 10));
    }
}
