//! Per-item decision context and the values a decision can produce.
//!
//! The action names and the abort reasons below are matched on by log and
//! analytics consumers; keep them stable.

use crate::error::{PublishError, PublishResult};
use crate::options::PublishOptions;
use publish_model::Item;
use publish_types::{ItemId, Language};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Abort reason when there is neither a publishable version nor a target item.
pub const REASON_NO_SOURCE_VERSION_NO_TARGET: &str =
    "No publishable source version exists (and there is no target item).";

/// Abort reason when only other-language versions exist and shared fields
/// already match.
pub fn reason_no_versions_in_language(language: &Language) -> String {
    format!("No versions to publish in '{language}' language.")
}

/// The synchronization action chosen for an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublishAction {
    /// Nothing decided yet, or nothing to do.
    #[default]
    None,
    /// Write a full version of the item to the target.
    PublishVersion,
    /// Write only the shared fields, leaving target versions untouched.
    PublishSharedFields,
    /// Remove the item from the target.
    DeleteTargetItem,
}

impl PublishAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::PublishVersion => "PublishVersion",
            Self::PublishSharedFields => "PublishSharedFields",
            Self::DeleteTargetItem => "DeleteTargetItem",
        }
    }
}

impl fmt::Display for PublishAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome reported for an item whose processing was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PublishOperation {
    Skipped,
}

/// What the orchestrator should do with the item's descendants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublishChildAction {
    #[default]
    Allow,
    Skip,
}

/// Terminal "nothing to do" signal. Not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbortSignal {
    pub operation: PublishOperation,
    pub child_action: PublishChildAction,
    pub reason: String,
}

impl AbortSignal {
    /// Skip this item and its descendants.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            operation: PublishOperation::Skipped,
            child_action: PublishChildAction::Skip,
            reason: reason.into(),
        }
    }
}

/// The single result of deciding one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Publish this exact version.
    PublishVersion(Item),
    PublishSharedFields,
    DeleteTargetItem,
    Abort(AbortSignal),
    /// Leave the action unset.
    NoAction,
}

impl Decision {
    /// The action this decision assigns. Aborts and no-ops assign `None`.
    pub fn action(&self) -> PublishAction {
        match self {
            Self::PublishVersion(_) => PublishAction::PublishVersion,
            Self::PublishSharedFields => PublishAction::PublishSharedFields,
            Self::DeleteTargetItem => PublishAction::DeleteTargetItem,
            Self::Abort(_) | Self::NoAction => PublishAction::None,
        }
    }

    pub fn abort_signal(&self) -> Option<&AbortSignal> {
        match self {
            Self::Abort(signal) => Some(signal),
            _ => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PublishVersion(v) => match v.version {
                Some(n) => write!(f, "PublishVersion({} #{n})", v.language),
                None => write!(f, "PublishVersion({})", v.language),
            },
            Self::Abort(signal) => write!(f, "Abort({:?}: {})", signal.operation, signal.reason),
            Self::NoAction => f.write_str("None"),
            other => f.write_str(other.action().as_str()),
        }
    }
}

/// Decision state for one item in one publish operation.
///
/// Created by the orchestrator, filled in once, then handed to the
/// executors. Never reused across items.
#[derive(Debug, Clone)]
pub struct PublishItemContext {
    item_id: ItemId,
    options: Arc<PublishOptions>,
    action: PublishAction,
    version_to_publish: Option<Item>,
    abort: Option<AbortSignal>,
}

impl PublishItemContext {
    pub fn new(item_id: ItemId, options: Arc<PublishOptions>) -> Self {
        Self {
            item_id,
            options,
            action: PublishAction::None,
            version_to_publish: None,
            abort: None,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn options(&self) -> &PublishOptions {
        &self.options
    }

    pub fn action(&self) -> PublishAction {
        self.action
    }

    /// The version to write. Set only when the action is `PublishVersion`.
    pub fn version_to_publish(&self) -> Option<&Item> {
        self.version_to_publish.as_ref()
    }

    pub fn abort_signal(&self) -> Option<&AbortSignal> {
        self.abort.as_ref()
    }

    pub fn is_aborted(&self) -> bool {
        self.abort.is_some()
    }

    /// What to do with descendants: `Skip` after an abort, `Allow` otherwise.
    pub fn child_action(&self) -> PublishChildAction {
        self.abort
            .as_ref()
            .map(|a| a.child_action)
            .unwrap_or_default()
    }

    /// Whether an action or an abort has been recorded.
    pub fn is_decided(&self) -> bool {
        self.action != PublishAction::None || self.abort.is_some()
    }

    /// Checks the inputs a decision needs.
    pub fn validate(&self) -> PublishResult<()> {
        if self.item_id.is_nil() {
            return Err(PublishError::InvalidArgument("context item id is nil".into()));
        }
        Ok(())
    }

    /// Writes a decision into the context. Fails, leaving the context as it
    /// was, if a decision is already recorded.
    pub fn record(&mut self, decision: Decision) -> PublishResult<()> {
        if self.is_decided() {
            return Err(PublishError::DecisionAlreadyRecorded { action: self.action });
        }
        match decision {
            Decision::PublishVersion(version) => {
                self.action = PublishAction::PublishVersion;
                self.version_to_publish = Some(version);
            }
            Decision::PublishSharedFields => self.action = PublishAction::PublishSharedFields,
            Decision::DeleteTargetItem => self.action = PublishAction::DeleteTargetItem,
            Decision::Abort(signal) => self.abort = Some(signal),
            Decision::NoAction => {}
        }
        Ok(())
    }
}
