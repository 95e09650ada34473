//! Create/read/list/update/delete over the item datastore.

use std::sync::Arc;

use crate::error::CoreError;
use crate::gateway::ItemStore;
use crate::types::{Item, ItemDraft};

/// Executes item operations against an injected [`ItemStore`].
///
/// Every operation is exactly one store call; no caching, no batching.
#[derive(Clone)]
pub struct ItemResolver {
    store: Arc<dyn ItemStore>,
}

impl ItemResolver {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Validate, stamp the timestamp, persist, and return the stored item.
    ///
    /// # Errors
    ///
    /// `Validation` when either field is empty; `Upstream` on store failure.
    pub async fn create(&self, prompt: &str, result_url: &str) -> Result<Item, CoreError> {
        if prompt.trim().is_empty() || result_url.trim().is_empty() {
            return Err(CoreError::Validation(
                "prompt and resultUrl are required".into(),
            ));
        }

        let draft = ItemDraft {
            prompt: prompt.to_string(),
            result_url: result_url.to_string(),
            timestamp: now_millis(),
        };
        let id = self.store.add(&draft).await?;

        tracing::info!(item_id = %id, "Item created");

        Ok(Item {
            id,
            prompt: draft.prompt,
            result_url: draft.result_url,
            timestamp: draft.timestamp,
        })
    }

    /// All items, timestamp descending. Empty list when none exist.
    pub async fn list(&self) -> Result<Vec<Item>, CoreError> {
        Ok(self.store.list_desc().await?)
    }

    /// One item by id.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id is unknown.
    pub async fn get(&self, id: &str) -> Result<Item, CoreError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("item {id} not found")))
    }

    /// Overwrite prompt, resultUrl, and timestamp (refreshed to now).
    ///
    /// # Errors
    ///
    /// `NotFound` when the store reports the id absent.
    pub async fn update(
        &self,
        id: &str,
        prompt: &str,
        result_url: &str,
    ) -> Result<Item, CoreError> {
        let draft = ItemDraft {
            prompt: prompt.to_string(),
            result_url: result_url.to_string(),
            timestamp: now_millis(),
        };

        if !self.store.update(id, &draft).await? {
            return Err(CoreError::NotFound(format!("item {id} not found")));
        }

        tracing::info!(item_id = %id, "Item updated");

        Ok(Item {
            id: id.to_string(),
            prompt: draft.prompt,
            result_url: draft.result_url,
            timestamp: draft.timestamp,
        })
    }

    /// Delete by id. Deleting an id that never existed is still success.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        self.store.delete(id).await?;
        tracing::info!(item_id = %id, "Item deleted");
        Ok(())
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::error::GatewayError;

    /// In-memory store with Firestore-like add/get/update/delete semantics.
    #[derive(Default)]
    struct MemStore {
        docs: Mutex<HashMap<String, Item>>,
        next_id: Mutex<u32>,
    }

    #[async_trait]
    impl ItemStore for MemStore {
        async fn add(&self, draft: &ItemDraft) -> Result<String, GatewayError> {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let id = format!("doc-{next}");
            self.docs.lock().unwrap().insert(
                id.clone(),
                Item {
                    id: id.clone(),
                    prompt: draft.prompt.clone(),
                    result_url: draft.result_url.clone(),
                    timestamp: draft.timestamp,
                },
            );
            Ok(id)
        }

        async fn get(&self, id: &str) -> Result<Option<Item>, GatewayError> {
            Ok(self.docs.lock().unwrap().get(id).cloned())
        }

        async fn list_desc(&self) -> Result<Vec<Item>, GatewayError> {
            let mut items: Vec<Item> = self.docs.lock().unwrap().values().cloned().collect();
            items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            Ok(items)
        }

        async fn update(&self, id: &str, draft: &ItemDraft) -> Result<bool, GatewayError> {
            let mut docs = self.docs.lock().unwrap();
            match docs.get_mut(id) {
                Some(item) => {
                    item.prompt = draft.prompt.clone();
                    item.result_url = draft.result_url.clone();
                    item.timestamp = draft.timestamp;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: &str) -> Result<(), GatewayError> {
            self.docs.lock().unwrap().remove(id);
            Ok(())
        }
    }

    fn resolver() -> ItemResolver {
        ItemResolver::new(Arc::new(MemStore::default()))
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let r = resolver();
        let before = now_millis();
        let created = r.create("a cat", "https://img/1.png").await.unwrap();
        let after = now_millis();

        let fetched = r.get(&created.id).await.unwrap();
        assert_eq!(fetched.prompt, "a cat");
        assert_eq!(fetched.result_url, "https://img/1.png");
        assert!(fetched.timestamp >= before && fetched.timestamp <= after);
    }

    #[tokio::test]
    async fn create_rejects_empty_fields() {
        let r = resolver();
        assert_matches!(
            r.create("", "https://img/1.png").await,
            Err(CoreError::Validation(_))
        );
        assert_matches!(r.create("a cat", "").await, Err(CoreError::Validation(_)));
        assert_matches!(r.create("   ", "x").await, Err(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn list_is_timestamp_descending() {
        let store = Arc::new(MemStore::default());
        // Insert with explicit, out-of-order timestamps.
        for (id_ts, ts) in [(1, 100), (2, 300), (3, 200)] {
            store
                .add(&ItemDraft {
                    prompt: format!("p{id_ts}"),
                    result_url: "u".into(),
                    timestamp: ts,
                })
                .await
                .unwrap();
        }
        let r = ItemResolver::new(store);

        let items = r.list().await.unwrap();
        let stamps: Vec<i64> = items.iter().map(|i| i.timestamp).collect();
        assert_eq!(stamps, vec![300, 200, 100]);
    }

    #[tokio::test]
    async fn update_refreshes_fields_and_timestamp() {
        let r = resolver();
        let created = r.create("old", "https://img/old.png").await.unwrap();

        let updated = r
            .update(&created.id, "new", "https://img/new.png")
            .await
            .unwrap();
        assert!(updated.timestamp >= created.timestamp);

        let fetched = r.get(&created.id).await.unwrap();
        assert_eq!(fetched.prompt, "new");
        assert_eq!(fetched.result_url, "https://img/new.png");
        assert_eq!(fetched.timestamp, updated.timestamp);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let r = resolver();
        assert_matches!(
            r.update("missing", "p", "u").await,
            Err(CoreError::NotFound(_))
        );
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let r = resolver();
        let created = r.create("p", "u").await.unwrap();

        r.delete(&created.id).await.unwrap();
        assert_matches!(r.get(&created.id).await, Err(CoreError::NotFound(_)));

        // Second delete of the same id is still success.
        r.delete(&created.id).await.unwrap();
        // So is deleting an id that never existed.
        r.delete("never-existed").await.unwrap();
    }
}
