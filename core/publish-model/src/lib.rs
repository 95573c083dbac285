//! Item snapshot model for the publish decision core.
//!
//! Defines the read-only view of content that the decision core works on:
//! - [`Item`]: one item in one language (and optionally one version)
//! - [`Field`] / [`FieldValue`] / [`FieldCollection`]: the materialized field values
//! - [`Template`] / [`TemplateField`]: field metadata declared by a template
//! - [`FieldSchema`]: the metadata lookup injected into field comparison
//!
//! Snapshots are plain data. Loading them is the job of a store behind the
//! `ItemStore` trait in `publish-pipeline`.

mod field;
mod field_schema;
mod item;
mod template;

pub use field::{Field, FieldCollection, FieldValue};
pub use field_schema::FieldSchema;
pub use item::{Item, PUBLISHING_TARGETS_SEPARATOR, parse_publishing_targets};
pub use template::{Template, TemplateField};
