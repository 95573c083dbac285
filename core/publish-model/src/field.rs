use publish_types::FieldId;
use serde::{Deserialize, Serialize};

static EMPTY_VALUE: FieldValue = FieldValue::Text(String::new());

/// The raw stored value of a field.
///
/// Values are compared as stored; no standard-value or clone fallback is
/// resolved here. Any two empty values are equal regardless of kind, so an
/// unset field and an empty blob compare the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Blob(Vec<u8>),
}

impl FieldValue {
    /// The value reported for a field that is not materialized on an item.
    #[must_use]
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Blob(b) => b.is_empty(),
        }
    }

    /// Returns the text if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Blob(_) => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Blob(a), Self::Blob(b)) => a == b,
            _ => self.is_empty() && other.is_empty(),
        }
    }
}

impl Eq for FieldValue {}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

/// A materialized field on an item snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub value: FieldValue,
    /// Shared fields hold one value per item, independent of language and
    /// version.
    pub shared: bool,
}

impl Field {
    /// Shorthand for a shared field.
    pub fn shared(id: FieldId, value: impl Into<FieldValue>) -> Self {
        Self {
            id,
            value: value.into(),
            shared: true,
        }
    }

    /// Shorthand for a field that belongs to one language version.
    pub fn versioned(id: FieldId, value: impl Into<FieldValue>) -> Self {
        Self {
            id,
            value: value.into(),
            shared: false,
        }
    }
}

/// The ordered set of fields materialized on an item. Field ids are unique
/// within a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCollection(Vec<Field>);

impl FieldCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any existing field with the same id in
    /// place.
    pub fn set(&mut self, field: Field) {
        match self.0.iter_mut().find(|f| f.id == field.id) {
            Some(existing) => *existing = field,
            None => self.0.push(field),
        }
    }

    /// Removes a field, returning it if it was present.
    pub fn remove(&mut self, id: &FieldId) -> Option<Field> {
        let pos = self.0.iter().position(|f| f.id == *id)?;
        Some(self.0.remove(pos))
    }

    #[must_use]
    pub fn get(&self, id: &FieldId) -> Option<&Field> {
        self.0.iter().find(|f| f.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &FieldId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the raw value of a field, or the empty value when the field
    /// is not materialized.
    #[must_use]
    pub fn value_of(&self, id: &FieldId) -> &FieldValue {
        self.get(id).map(|f| &f.value).unwrap_or(&EMPTY_VALUE)
    }

    pub fn ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.0.iter().map(|f| f.id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    /// Number of fields flagged as shared.
    #[must_use]
    pub fn shared_count(&self) -> usize {
        self.0.iter().filter(|f| f.shared).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Field> for FieldCollection {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut fields = Self::new();
        for field in iter {
            fields.set(field);
        }
        fields
    }
}

impl<'a> IntoIterator for &'a FieldCollection {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
