//! Publish options and host settings.

use crate::error::PublishResult;
use publish_types::{DatabaseName, Language};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Options shared by every item of one publish operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishOptions {
    /// Database items are read from.
    pub source_database: DatabaseName,
    /// Database items are published into.
    pub target_database: DatabaseName,
    /// Language being published.
    pub language: Language,
    /// Publishing target ids this operation serves. Items restricted to other
    /// targets are removed from the target database.
    #[serde(default)]
    pub publishing_targets: Vec<String>,
    /// Whether descendants are published too. Read by the orchestrator only.
    #[serde(default)]
    pub deep: bool,
}

impl PublishOptions {
    pub fn new(source_database: DatabaseName, target_database: DatabaseName, language: Language) -> Self {
        Self {
            source_database,
            target_database,
            language,
            publishing_targets: Vec::new(),
            deep: false,
        }
    }

    /// Builder: adds a publishing target id.
    #[must_use]
    pub fn with_publishing_target(mut self, target: impl Into<String>) -> Self {
        self.publishing_targets.push(target.into());
        self
    }

    /// Builder: publishes descendants too.
    #[must_use]
    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }
}

/// Host-level publishing switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishSettings {
    /// Publish items that have no publishable version as a shared-fields
    /// shell instead of skipping or removing them.
    pub publish_empty_items: bool,
}

impl PublishSettings {
    /// Parses settings from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> PublishResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Source of the settings the decider reads at decision time.
pub trait SettingsProvider: Send + Sync {
    fn publish_empty_items(&self) -> bool;
}

impl SettingsProvider for PublishSettings {
    fn publish_empty_items(&self) -> bool {
        self.publish_empty_items
    }
}

/// Settings that the host can replace while deciders are running.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<PublishSettings>>,
}

impl SharedSettings {
    pub fn new(settings: PublishSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Replaces the current settings. Decisions already in flight keep the
    /// value they read.
    pub fn update(&self, settings: PublishSettings) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = settings;
    }

    /// Returns a copy of the current settings.
    pub fn snapshot(&self) -> PublishSettings {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl SettingsProvider for SharedSettings {
    fn publish_empty_items(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .publish_empty_items
    }
}
