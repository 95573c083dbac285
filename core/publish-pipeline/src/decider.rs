//! Action decider: picks the publish action for one item.
//!
//! The decider is a single pass over the item's source and target state:
//!
//! 1. Source item missing, or restricted to other publishing targets:
//!    delete the target copy.
//! 2. A publishable source version exists: publish that version.
//! 3. Otherwise look at the target item:
//!    - no target item: publish a shared-fields shell when empty items are
//!      allowed, else skip;
//!    - target has versions in other languages: skip if the shared fields
//!      already match, else publish the shared fields;
//!    - anything else: delete the target copy, or leave it alone when empty
//!      items are allowed.
//!
//! `decide` never touches the context. `process` records the decision in one
//! step, so a future dropped mid-decision leaves the context unchanged.

use crate::comparator::FieldComparator;
use crate::context::{
    AbortSignal, Decision, PublishItemContext, REASON_NO_SOURCE_VERSION_NO_TARGET,
    reason_no_versions_in_language,
};
use crate::error::PublishResult;
use crate::options::SettingsProvider;
use crate::resolver::TargetResolver;
use publish_model::Item;
use std::sync::Arc;
use tracing::debug;

/// Decides the publish action for items. Holds no per-item state, so one
/// decider can be shared across tasks.
pub struct ActionDecider {
    resolver: TargetResolver,
    comparator: FieldComparator,
    settings: Arc<dyn SettingsProvider>,
}

impl ActionDecider {
    pub fn new(
        resolver: TargetResolver,
        comparator: FieldComparator,
        settings: Arc<dyn SettingsProvider>,
    ) -> Self {
        Self {
            resolver,
            comparator,
            settings,
        }
    }

    pub fn resolver(&self) -> &TargetResolver {
        &self.resolver
    }

    pub fn comparator(&self) -> &FieldComparator {
        &self.comparator
    }

    /// Decides and records the action for `context`.
    ///
    /// Does nothing if an earlier stage already decided. Store errors are
    /// returned unchanged and leave the context untouched.
    pub async fn process(&self, context: &mut PublishItemContext) -> PublishResult<()> {
        if context.is_decided() {
            debug!(
                "Item {} already decided ({}), skipping",
                context.item_id(),
                context.action()
            );
            return Ok(());
        }

        let decision = self.decide(context).await?;
        context.record(decision)
    }

    /// Decides the action for `context` without recording it.
    pub async fn decide(&self, context: &PublishItemContext) -> PublishResult<Decision> {
        context.validate()?;
        let item_id = context.item_id();

        let decision = match self.resolver.get_source_item(context).await? {
            None => {
                debug!("Source item {} not found", item_id);
                Decision::DeleteTargetItem
            }
            Some(source_item)
                if !TargetResolver::matches_publishing_targets(&source_item, context.options()) =>
            {
                debug!("Source item {} does not match the requested publishing targets", item_id);
                Decision::DeleteTargetItem
            }
            Some(source_item) => {
                let version = self
                    .resolver
                    .get_version_to_publish(&source_item, &context.options().target_database)
                    .await?;
                match version {
                    Some(version) => Decision::PublishVersion(version),
                    None => {
                        debug!(
                            "No publishable version of item {} in '{}'",
                            item_id, source_item.language
                        );
                        self.decide_without_source_version(&source_item).await?
                    }
                }
            }
        };

        debug!("Decided {} for item {}", decision, item_id);
        Ok(decision)
    }

    async fn decide_without_source_version(&self, source_item: &Item) -> PublishResult<Decision> {
        let publish_empty_items = self.settings.publish_empty_items();

        let target_item = self
            .resolver
            .get_target_item(&source_item.id, &source_item.language)
            .await?;
        let Some(target_item) = target_item else {
            return Ok(if publish_empty_items {
                Decision::PublishSharedFields
            } else {
                Decision::Abort(AbortSignal::skipped(REASON_NO_SOURCE_VERSION_NO_TARGET))
            });
        };

        let versions = self.resolver.target_versions(&target_item).await?;
        if versions.iter().any(|v| v.language != source_item.language) {
            // Versions in other languages must survive, so only the shared
            // fields may be written.
            if self.comparator.compare_shared_fields(source_item, &target_item) {
                return Ok(Decision::Abort(AbortSignal::skipped(
                    reason_no_versions_in_language(&source_item.language),
                )));
            }
            return Ok(Decision::PublishSharedFields);
        }

        Ok(if publish_empty_items {
            Decision::NoAction
        } else {
            Decision::DeleteTargetItem
        })
    }
}
