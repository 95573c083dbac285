//! Shared-field comparison between a source item and its target copy.

use publish_model::{FieldCollection, FieldSchema, Item};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::trace;

/// Compares the shared (language and version independent) fields of two
/// item snapshots.
#[derive(Clone)]
pub struct FieldComparator {
    schema: Arc<dyn FieldSchema>,
}

impl FieldComparator {
    /// Creates a comparator that reads field metadata from `schema`.
    pub fn new(schema: Arc<dyn FieldSchema>) -> Self {
        Self { schema }
    }

    /// Returns true if the shared fields of `source` and `target` are
    /// equivalent.
    ///
    /// Every field of `source` whose definition is shared is compared by raw
    /// value against the same field on `target`. Fields without a definition
    /// are skipped. If no value differs, the number of shared fields on each
    /// side must also agree; for clones a count mismatch is tolerated as long
    /// as the fields present on only one side hold the same (usually empty)
    /// values on both sides.
    pub fn compare_shared_fields(&self, source: &Item, target: &Item) -> bool {
        for field in &source.fields {
            match self.schema.is_shared(&field.id) {
                Some(true) => {
                    if field.value != *target.fields.value_of(&field.id) {
                        trace!("Shared field {} differs on item {}", field.id, source.id);
                        return false;
                    }
                }
                Some(false) => {}
                None => trace!("Field {} on item {} has no definition, skipped", field.id, source.id),
            }
        }

        let source_count = source.fields.shared_count();
        let target_count = target.fields.shared_count();
        if source_count == target_count {
            return true;
        }

        if source.is_clone() {
            trace!(
                "Shared field count differs on clone {} ({} vs {}), comparing unmatched fields",
                source.id, source_count, target_count
            );
            self.compare_cloned_fields(&source.fields, &target.fields)
        } else {
            trace!(
                "Shared field count differs on item {} ({} vs {})",
                source.id, source_count, target_count
            );
            false
        }
    }

    /// Returns true if every field present in only one of the collections
    /// has the same raw value in both, an absent field reading as empty.
    pub fn compare_cloned_fields(&self, a: &FieldCollection, b: &FieldCollection) -> bool {
        let ids_a: BTreeSet<_> = a.ids().collect();
        let ids_b: BTreeSet<_> = b.ids().collect();

        ids_a
            .symmetric_difference(&ids_b)
            .all(|id| a.value_of(id) == b.value_of(id))
    }
}
