use crate::FieldSchema;
use publish_types::{FieldId, ItemId};
use serde::{Deserialize, Serialize};

/// Field metadata declared by a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateField {
    pub id: FieldId,
    pub name: String,
    /// Whether the field holds one value for all languages and versions.
    pub shared: bool,
}

impl TemplateField {
    /// Shorthand for a shared field definition.
    pub fn shared(id: FieldId, name: &str) -> Self {
        Self {
            id,
            name: name.into(),
            shared: true,
        }
    }

    /// Shorthand for a versioned (language-specific) field definition.
    pub fn versioned(id: FieldId, name: &str) -> Self {
        Self {
            id,
            name: name.into(),
            shared: false,
        }
    }
}

/// Describes an item type's fields.
///
/// A template is the usual [`FieldSchema`] handed to the field comparator.
/// Hosts with several templates can merge them into one, since field ids are
/// globally unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Template {
    pub id: Option<ItemId>,
    pub name: String,
    pub fields: Vec<TemplateField>,
}

impl Template {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field definition, replacing one with the same id.
    #[must_use]
    pub fn with_field(mut self, field: TemplateField) -> Self {
        self.fields.retain(|f| f.id != field.id);
        self.fields.push(field);
        self
    }

    /// Adds every field definition of another template.
    #[must_use]
    pub fn merged(mut self, other: &Template) -> Self {
        for field in &other.fields {
            self = self.with_field(field.clone());
        }
        self
    }
}

impl FieldSchema for Template {
    fn definition(&self, field_id: &FieldId) -> Option<&TemplateField> {
        self.fields.iter().find(|f| f.id == *field_id)
    }
}
