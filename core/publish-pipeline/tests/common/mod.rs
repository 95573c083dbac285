//! Shared test helpers for publish pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use publish_model::{Field, Item, Template, TemplateField};
use publish_pipeline::memory::InMemoryItemStore;
use publish_pipeline::{
    ActionDecider, FieldComparator, ItemStore, PublishError, PublishItemContext, PublishOptions,
    PublishResult, SharedSettings, PublishSettings, TargetResolver,
};
use publish_types::{DatabaseName, FieldId, ItemId, Language, VersionNumber};
use std::sync::Arc;

pub fn lang(code: &str) -> Language {
    Language::new(code).unwrap()
}

pub fn version(n: u32) -> VersionNumber {
    VersionNumber::new(n).unwrap()
}

pub fn master() -> DatabaseName {
    DatabaseName::new("master").unwrap()
}

pub fn web() -> DatabaseName {
    DatabaseName::new("web").unwrap()
}

/// Field ids of the test template.
#[derive(Debug, Clone, Copy)]
pub struct Fields {
    pub title: FieldId,
    pub layout: FieldId,
    pub body: FieldId,
}

impl Fields {
    pub fn new() -> Self {
        Self {
            title: FieldId::new(),
            layout: FieldId::new(),
            body: FieldId::new(),
        }
    }

    /// Title and layout are shared, body is versioned. The publishing
    /// targets field is shared too.
    pub fn template(&self) -> Template {
        Template::new("Page")
            .with_field(TemplateField::shared(self.title, "Title"))
            .with_field(TemplateField::shared(self.layout, "Layout"))
            .with_field(TemplateField::versioned(self.body, "Body"))
            .with_field(TemplateField::shared(FieldId::PUBLISHING_TARGETS, "__Publishing targets"))
    }
}

/// Source and target stores wired to a decider.
pub struct Fixture {
    pub fields: Fields,
    pub source: Arc<InMemoryItemStore>,
    pub target: Arc<InMemoryItemStore>,
    pub settings: SharedSettings,
    pub decider: ActionDecider,
    pub options: Arc<PublishOptions>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_settings(PublishSettings::default())
    }

    pub fn with_settings(settings: PublishSettings) -> Self {
        let fields = Fields::new();
        let source = Arc::new(InMemoryItemStore::new(master()));
        let target = Arc::new(InMemoryItemStore::new(web()));
        let settings = SharedSettings::new(settings);
        let decider = ActionDecider::new(
            TargetResolver::new(source.clone(), target.clone()),
            FieldComparator::new(Arc::new(fields.template())),
            Arc::new(settings.clone()),
        );
        let options = Arc::new(PublishOptions::new(master(), web(), lang("en")));
        Self {
            fields,
            source,
            target,
            settings,
            decider,
            options,
        }
    }

    pub fn context(&self, item_id: ItemId) -> PublishItemContext {
        PublishItemContext::new(item_id, self.options.clone())
    }

    /// A shared-fields-only snapshot of a page item.
    pub fn page(&self, id: ItemId, language: &str, database: DatabaseName) -> Item {
        Item::new(id, "Home", lang(language), database)
            .with_field(Field::shared(self.fields.title, "Welcome"))
            .with_field(Field::shared(self.fields.layout, "<r/>"))
    }

    /// A versioned snapshot of a page item.
    pub fn page_version(&self, id: ItemId, language: &str, n: u32, database: DatabaseName) -> Item {
        self.page(id, language, database)
            .with_version(version(n))
            .with_field(Field::versioned(self.fields.body, format!("body {language} {n}")))
    }
}

/// A store whose every call fails.
pub struct FailingStore {
    pub database: DatabaseName,
}

#[async_trait]
impl ItemStore for FailingStore {
    fn database(&self) -> &DatabaseName {
        &self.database
    }

    async fn load_item(&self, _id: &ItemId, _language: &Language) -> PublishResult<Option<Item>> {
        Err(PublishError::Store("connection reset".into()))
    }

    async fn load_versions(&self, _item: &Item) -> PublishResult<Vec<Item>> {
        Err(PublishError::Store("connection reset".into()))
    }

    async fn resolve_version_to_publish(
        &self,
        _item: &Item,
        _target: &DatabaseName,
    ) -> PublishResult<Option<Item>> {
        Err(PublishError::Store("connection reset".into()))
    }
}

/// Installs a tracing subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
