//! Host interfaces for entities that carry translation metadata.

use crate::interpreter::BindingError;

/// Class token marking an entity for translation refreshes.
pub const TRANSLATE_MARKER: &str = "j18s-translate";

/// An external object (e.g. a UI element) whose displayed content is a
/// translation.
///
/// The engine stores the source text, plural text, context, count, arguments
/// and language override on the entity through `metadata`/`set_metadata`, so
/// a later refresh can reproduce the output without the caller.
pub trait BoundEntity {
    /// The entity's current displayed content.
    fn raw_content(&self) -> String;

    /// Replace the displayed content with a resolved translation.
    fn apply_result(&mut self, resolved: &str);

    /// Read a stored metadata value.
    fn metadata(&self, key: &str) -> Option<String>;

    /// Store a metadata value.
    ///
    /// # Errors
    ///
    /// Hosts may refuse a write, for example on a read-only entity.
    fn set_metadata(&mut self, key: &str, value: &str) -> Result<(), BindingError>;

    /// Whether the entity carries the [`TRANSLATE_MARKER`].
    fn is_marked(&self) -> bool;

    /// Add the [`TRANSLATE_MARKER`], keeping any other markers.
    fn mark(&mut self);

    /// Arguments cached natively on the entity.
    ///
    /// Stored arguments are serialized as a `"; "`-joined string, which loses
    /// arguments containing `;`. Hosts that can keep the list itself return
    /// it here and it takes precedence over the serialized form.
    fn cached_args(&self) -> Option<Vec<String>> {
        None
    }

    /// Cache the argument list natively. The default does nothing.
    fn cache_args(&mut self, _args: &[String]) {}
}

/// A host collection of entities, such as a document.
pub trait Document {
    /// The entity type this host holds.
    type Entity: BoundEntity;

    /// Whether entities offer a structured key/value store (camelCase keys)
    /// rather than flat string attributes (hyphenated `data-` keys).
    fn supports_structured_metadata(&self) -> bool;

    /// Every entity carrying the [`TRANSLATE_MARKER`], in collection order.
    fn marked_entities(&mut self) -> Vec<&mut Self::Entity>;
}
