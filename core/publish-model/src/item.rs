use crate::{Field, FieldCollection, FieldValue};
use publish_types::{DatabaseName, FieldId, ItemId, Language, VersionNumber};
use serde::{Deserialize, Serialize};

/// Separator used by list-valued system fields such as publishing targets.
pub const PUBLISHING_TARGETS_SEPARATOR: char = '|';

/// A snapshot of one content item in one language.
///
/// When `version` is set the snapshot is that specific version; otherwise it
/// carries only the item's shared state in `language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionNumber>,
    pub fields: FieldCollection,
    /// Set when this item is a clone of another item. Clones may leave
    /// fields unmaterialized and read them from the original instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_of: Option<ItemId>,
    /// The database that owns this snapshot.
    pub database: DatabaseName,
}

impl Item {
    /// Creates an item snapshot with no fields and no version.
    pub fn new(id: ItemId, name: &str, language: Language, database: DatabaseName) -> Self {
        Self {
            id,
            name: name.into(),
            language,
            version: None,
            fields: FieldCollection::new(),
            clone_of: None,
            database,
        }
    }

    /// Builder: pins the snapshot to a version.
    #[must_use]
    pub fn with_version(mut self, version: VersionNumber) -> Self {
        self.version = Some(version);
        self
    }

    /// Builder: adds or replaces a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.set(field);
        self
    }

    /// Builder: marks the item as a clone of `original`.
    #[must_use]
    pub fn cloned_from(mut self, original: ItemId) -> Self {
        self.clone_of = Some(original);
        self
    }

    #[must_use]
    pub fn is_clone(&self) -> bool {
        self.clone_of.is_some()
    }

    /// Raw value of a field, empty when not materialized.
    #[must_use]
    pub fn field_value(&self, id: &FieldId) -> &FieldValue {
        self.fields.value_of(id)
    }

    /// The publishing targets listed in the item's targets field, without
    /// empty segments.
    #[must_use]
    pub fn publishing_targets(&self) -> Vec<&str> {
        match self.field_value(&FieldId::PUBLISHING_TARGETS).as_text() {
            Some(raw) => parse_publishing_targets(raw),
            None => Vec::new(),
        }
    }
}

/// Splits a `|`-delimited list field, dropping empty segments.
pub fn parse_publishing_targets(raw: &str) -> Vec<&str> {
    raw.split(PUBLISHING_TARGETS_SEPARATOR)
        .filter(|s| !s.is_empty())
        .collect()
}
