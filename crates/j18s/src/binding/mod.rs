//! Bound entities: host objects whose content is a translation.
//!
//! An entity is bound once with [`Engine::bind`](crate::Engine::bind), which
//! stores its translation metadata on the entity and marks it. Later renders
//! and language refreshes read everything back from that metadata.

mod entity;
mod memory;
mod metadata;
mod refresh;
mod render;

pub use entity::{BoundEntity, Document, TRANSLATE_MARKER};
pub use memory::{MemoryDocument, MemoryElement};
pub use metadata::{
    ARGS_SEPARATOR, ElementMetadata, Field, KeyConvention, METADATA_PREFIX, MetadataAccessor,
    join_args, parse_plural_count, split_args,
};
pub use refresh::{DocumentRefresh, Refresh, RefreshFailure, RefreshReport};
pub use render::{ElementOptions, UpdateOptions};
