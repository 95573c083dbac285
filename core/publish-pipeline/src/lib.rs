//! Publish action decision core.
//!
//! Decides, for one content item being published from a source database to a
//! target database, which action the executors should apply:
//! - publish a full version
//! - publish only the shared fields
//! - delete the item from the target
//! - nothing (left undecided, or aborted with a "skipped" reason)
//!
//! # Components
//!
//! - **TargetResolver**: loads the source item, its publishable version and
//!   the target item through the [`ItemStore`] trait
//! - **FieldComparator**: compares shared fields, tolerating clone artifacts
//! - **ActionDecider**: the decision procedure itself
//! - **PublishItemContext**: per-item inputs and the recorded decision
//!
//! Loading, writing, scheduling and sequencing belong to the host.
//!
//! # Example
//!
//! ```
//! use publish_model::Template;
//! use publish_pipeline::memory::InMemoryItemStore;
//! use publish_pipeline::{ActionDecider, FieldComparator, PublishSettings, TargetResolver};
//! use publish_types::DatabaseName;
//! use std::sync::Arc;
//!
//! let source = Arc::new(InMemoryItemStore::new(DatabaseName::new("master").unwrap()));
//! let target = Arc::new(InMemoryItemStore::new(DatabaseName::new("web").unwrap()));
//!
//! let _decider = ActionDecider::new(
//!     TargetResolver::new(source, target),
//!     FieldComparator::new(Arc::new(Template::new("Page"))),
//!     Arc::new(PublishSettings::default()),
//! );
//! ```

mod comparator;
mod context;
mod decider;
mod error;
mod options;
mod resolver;
mod store;

pub use comparator::FieldComparator;
pub use context::{
    AbortSignal, Decision, PublishAction, PublishChildAction, PublishItemContext,
    PublishOperation, REASON_NO_SOURCE_VERSION_NO_TARGET, reason_no_versions_in_language,
};
pub use decider::ActionDecider;
pub use error::{PublishError, PublishResult};
pub use options::{PublishOptions, PublishSettings, SettingsProvider, SharedSettings};
pub use resolver::TargetResolver;
pub use store::{ItemStore, memory};
