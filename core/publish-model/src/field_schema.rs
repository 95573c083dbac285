use crate::TemplateField;
use publish_types::FieldId;
use std::collections::HashMap;

/// Read-only lookup of template-defined field metadata.
///
/// The schema is owned by the host store. Comparisons only ask whether a
/// field is shared; a field without a definition yields `None` and is left
/// out of per-field comparisons.
pub trait FieldSchema: Send + Sync {
    /// Returns the template definition of a field, if one exists.
    fn definition(&self, field_id: &FieldId) -> Option<&TemplateField>;

    /// Whether the field is shared, or `None` when it has no definition.
    fn is_shared(&self, field_id: &FieldId) -> Option<bool> {
        self.definition(field_id).map(|d| d.shared)
    }
}

impl FieldSchema for HashMap<FieldId, TemplateField> {
    fn definition(&self, field_id: &FieldId) -> Option<&TemplateField> {
        self.get(field_id)
    }
}
