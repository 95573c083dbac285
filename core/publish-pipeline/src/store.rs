//! Item store abstraction.
//!
//! The decision core never reads a database directly. Hosts implement
//! [`ItemStore`] over whatever backs their content; each call is one
//! suspension point.

use crate::error::PublishResult;
use async_trait::async_trait;
use publish_model::Item;
use publish_types::{DatabaseName, ItemId, Language};

/// Read access to one content database.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// The database this store reads.
    fn database(&self) -> &DatabaseName;

    /// Loads an item in the given language. Returns the latest version in
    /// that language, or a shared-fields-only snapshot when the language has
    /// no versions. `None` if the item does not exist.
    async fn load_item(&self, id: &ItemId, language: &Language) -> PublishResult<Option<Item>>;

    /// Loads every version of the item, across all languages.
    async fn load_versions(&self, item: &Item) -> PublishResult<Vec<Item>>;

    /// Picks the version of `item` that should be published into `target`,
    /// in the item's language. `None` if no version is eligible.
    async fn resolve_version_to_publish(
        &self,
        item: &Item,
        target: &DatabaseName,
    ) -> PublishResult<Option<Item>>;
}

/// An in-memory store, for tests and for hosts that stage content in memory.
pub mod memory {
    use super::*;
    use crate::error::PublishError;
    use publish_model::FieldCollection;
    use publish_types::VersionNumber;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Debug, Clone)]
    struct StoredVersion {
        language: Language,
        number: VersionNumber,
        fields: FieldCollection,
        publishable: bool,
    }

    #[derive(Debug, Clone)]
    struct StoredItem {
        name: String,
        shared: FieldCollection,
        clone_of: Option<ItemId>,
        versions: Vec<StoredVersion>,
    }

    impl StoredItem {
        fn from_snapshot(item: &Item) -> Self {
            Self {
                name: item.name.clone(),
                shared: item.fields.iter().filter(|f| f.shared).cloned().collect(),
                clone_of: item.clone_of,
                versions: Vec::new(),
            }
        }

        fn latest_in(&self, language: &Language) -> Option<&StoredVersion> {
            self.versions
                .iter()
                .filter(|v| v.language == *language)
                .max_by_key(|v| v.number)
        }
    }

    /// Item store backed by a map, keyed by item id.
    ///
    /// Each version carries a publishable flag given on insert. The version
    /// picked for publishing is the highest-numbered publishable one in the
    /// item's language.
    pub struct InMemoryItemStore {
        database: DatabaseName,
        items: RwLock<HashMap<ItemId, StoredItem>>,
    }

    impl InMemoryItemStore {
        pub fn new(database: DatabaseName) -> Self {
            Self {
                database,
                items: RwLock::new(HashMap::new()),
            }
        }

        /// Stores the shared state of an item (name, clone link, shared
        /// fields). Existing versions are kept.
        pub async fn put_item(&self, item: &Item) {
            let mut items = self.items.write().await;
            let incoming = StoredItem::from_snapshot(item);
            match items.get_mut(&item.id) {
                Some(existing) => {
                    existing.name = incoming.name;
                    existing.shared = incoming.shared;
                    existing.clone_of = incoming.clone_of;
                }
                None => {
                    items.insert(item.id, incoming);
                }
            }
        }

        /// Stores one version of an item. The snapshot must carry a version
        /// number; its non-shared fields become the version's fields. The
        /// item is created from the snapshot's shared fields if unknown.
        pub async fn put_version(&self, item: &Item, publishable: bool) -> PublishResult<()> {
            let number = item.version.ok_or_else(|| {
                PublishError::InvalidArgument(format!("item {} has no version number", item.id))
            })?;
            let version = StoredVersion {
                language: item.language.clone(),
                number,
                fields: item.fields.iter().filter(|f| !f.shared).cloned().collect(),
                publishable,
            };

            let mut items = self.items.write().await;
            let stored = items
                .entry(item.id)
                .or_insert_with(|| StoredItem::from_snapshot(item));
            stored
                .versions
                .retain(|v| !(v.language == version.language && v.number == version.number));
            stored.versions.push(version);
            Ok(())
        }

        /// Removes an item and all its versions.
        pub async fn remove_item(&self, id: &ItemId) -> bool {
            self.items.write().await.remove(id).is_some()
        }

        pub async fn len(&self) -> usize {
            self.items.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.items.read().await.is_empty()
        }

        fn snapshot(
            &self,
            id: ItemId,
            stored: &StoredItem,
            language: &Language,
            version: Option<&StoredVersion>,
        ) -> Item {
            let mut item = Item::new(id, &stored.name, language.clone(), self.database.clone());
            item.clone_of = stored.clone_of;
            item.fields = stored.shared.clone();
            if let Some(v) = version {
                item.version = Some(v.number);
                for field in v.fields.iter() {
                    item.fields.set(field.clone());
                }
            }
            item
        }
    }

    #[async_trait]
    impl ItemStore for InMemoryItemStore {
        fn database(&self) -> &DatabaseName {
            &self.database
        }

        async fn load_item(&self, id: &ItemId, language: &Language) -> PublishResult<Option<Item>> {
            let items = self.items.read().await;
            Ok(items
                .get(id)
                .map(|stored| self.snapshot(*id, stored, language, stored.latest_in(language))))
        }

        async fn load_versions(&self, item: &Item) -> PublishResult<Vec<Item>> {
            let items = self.items.read().await;
            let Some(stored) = items.get(&item.id) else {
                return Ok(Vec::new());
            };
            Ok(stored
                .versions
                .iter()
                .map(|v| self.snapshot(item.id, stored, &v.language, Some(v)))
                .collect())
        }

        async fn resolve_version_to_publish(
            &self,
            item: &Item,
            _target: &DatabaseName,
        ) -> PublishResult<Option<Item>> {
            let items = self.items.read().await;
            let Some(stored) = items.get(&item.id) else {
                return Ok(None);
            };
            Ok(stored
                .versions
                .iter()
                .filter(|v| v.publishable && v.language == item.language)
                .max_by_key(|v| v.number)
                .map(|v| self.snapshot(item.id, stored, &item.language, Some(v))))
        }
    }
}
