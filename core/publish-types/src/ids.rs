//! Identifier types for items and fields.
//!
//! Content identifiers are plain UUIDs. Hosts usually hand in ids read from
//! their store; freshly minted ids use UUID v7 so they sort by creation time.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Shared plumbing for UUID-backed identifiers.
macro_rules! uuid_id {
    ($name:ident) => {
        impl $name {
            /// Mints a fresh, time-ordered id.
            #[must_use]
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }

            /// Parses an id. Braced (`{...}`) and plain forms are both
            /// accepted, in any case.
            pub fn parse(s: &str) -> Result<Self> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }
    };
}

/// Unique identifier for a content item. The same id addresses the item in
/// the source and in every target database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

uuid_id!(ItemId);

impl ItemId {
    /// Returns true for the all-zero id, which never addresses a real item.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

/// Unique identifier for a field, as declared by an item's template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Uuid);

uuid_id!(FieldId);

impl FieldId {
    /// The `__Publishing targets` system field. Holds a `|`-delimited list of
    /// publishing target ids the item is restricted to.
    pub const PUBLISHING_TARGETS: FieldId =
        FieldId(Uuid::from_u128(0x7448_4bdf_7c86_463c_b49f_7b73_b9af_c965));
}
