//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    ids_by_key: HashMap<(String, String), i64>,
    links: BTreeMap<i64, Link>,
}

/// Process-local link storage.
///
/// A single lock guards both the key index and the records, so the
/// uniqueness check and the insert in [`LinkRepository::create`] happen
/// under the same write guard. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    store: RwLock<Store>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut store = self.store.write().await;

        let key = (new_link.prefix, new_link.slug);
        if store.ids_by_key.contains_key(&key) {
            return Err(AppError::conflict(
                "Short link already exists",
                json!({ "prefix": key.0, "slug": key.1 }),
            ));
        }

        store.last_id += 1;
        let id = store.last_id;
        let link = Link::new(
            id,
            key.0.clone(),
            key.1.clone(),
            new_link.long_url,
            Utc::now(),
        );

        store.ids_by_key.insert(key, id);
        store.links.insert(id, link.clone());

        Ok(link)
    }

    async fn find_by_key(&self, prefix: &str, slug: &str) -> Result<Option<Link>, AppError> {
        let store = self.store.read().await;

        let link = store
            .ids_by_key
            .get(&(prefix.to_owned(), slug.to_owned()))
            .and_then(|id| store.links.get(id))
            .cloned();

        Ok(link)
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let store = self.store.read().await;

        let mut links: Vec<Link> = store.links.values().cloned().collect();
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(links)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut store = self.store.write().await;

        let Some(link) = store.links.remove(&id) else {
            return Ok(false);
        };
        store.ids_by_key.remove(&(link.prefix, link.slug));

        Ok(true)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
