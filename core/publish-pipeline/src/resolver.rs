//! Looks up the source item, its publishable version and the target item.

use crate::context::PublishItemContext;
use crate::error::PublishResult;
use crate::options::PublishOptions;
use crate::store::ItemStore;
use publish_model::Item;
use publish_types::{DatabaseName, FieldId, ItemId, Language};
use std::sync::Arc;
use tracing::trace;

/// Resolves items against the source and target databases of one publish
/// operation.
#[derive(Clone)]
pub struct TargetResolver {
    source: Arc<dyn ItemStore>,
    target: Arc<dyn ItemStore>,
}

impl TargetResolver {
    pub fn new(source: Arc<dyn ItemStore>, target: Arc<dyn ItemStore>) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &Arc<dyn ItemStore> {
        &self.source
    }

    pub fn target(&self) -> &Arc<dyn ItemStore> {
        &self.target
    }

    /// Loads the context's item from the source database in the requested
    /// language. `None` if it does not exist (or was deleted).
    pub async fn get_source_item(&self, context: &PublishItemContext) -> PublishResult<Option<Item>> {
        self.source
            .load_item(&context.item_id(), &context.options().language)
            .await
    }

    /// Picks the version of `source_item` to publish into `target_database`.
    pub async fn get_version_to_publish(
        &self,
        source_item: &Item,
        target_database: &DatabaseName,
    ) -> PublishResult<Option<Item>> {
        self.source
            .resolve_version_to_publish(source_item, target_database)
            .await
    }

    /// Loads the corresponding item from the target database.
    pub async fn get_target_item(&self, item_id: &ItemId, language: &Language) -> PublishResult<Option<Item>> {
        self.target.load_item(item_id, language).await
    }

    /// Every version of a target item, across all languages.
    pub async fn target_versions(&self, target_item: &Item) -> PublishResult<Vec<Item>> {
        self.target.load_versions(target_item).await
    }

    /// Whether `item` may be published to any of the operation's publishing
    /// targets. Only an empty or unset targets field matches everything; a
    /// field holding nothing but separators matches nothing.
    pub fn matches_publishing_targets(item: &Item, options: &PublishOptions) -> bool {
        if item.field_value(&FieldId::PUBLISHING_TARGETS).is_empty() {
            return true;
        }
        let restricted_to = item.publishing_targets();
        let matched = options
            .publishing_targets
            .iter()
            .any(|requested| restricted_to.iter().any(|t| *t == requested.as_str()));
        trace!(
            "Publishing targets of item {}: {:?} (requested {:?}, matched={})",
            item.id, restricted_to, options.publishing_targets, matched
        );
        matched
    }
}
