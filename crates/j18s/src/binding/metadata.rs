//! Per-entity translation metadata and its storage keys.

use tracing::debug;

use crate::binding::{BoundEntity, Document};
use crate::interpreter::BindingError;
use crate::types::{DEFAULT_CONTEXT, non_empty};

/// Prefix of every metadata key.
pub const METADATA_PREFIX: &str = "j18s";

/// Separator used when serializing the argument list to a single string.
pub const ARGS_SEPARATOR: &str = "; ";

/// A metadata field stored on a bound entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Text,
    Plural,
    Context,
    PluralCount,
    TextArgs,
    UseLang,
}

impl Field {
    /// The camelCase field name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Text => "text",
            Field::Plural => "plural",
            Field::Context => "context",
            Field::PluralCount => "pluralCount",
            Field::TextArgs => "textArgs",
            Field::UseLang => "useLang",
        }
    }
}

/// How metadata keys are spelled in the host's storage.
///
/// Pick one per host with [`KeyConvention::probe`] and reuse it.
///
/// # Example
///
/// ```
/// use j18s::{Field, KeyConvention};
///
/// assert_eq!(KeyConvention::Structured.key(Field::PluralCount), "j18sPluralCount");
/// assert_eq!(KeyConvention::FlatAttribute.key(Field::PluralCount), "data-j18s-plural-count");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyConvention {
    /// Structured key/value store: prefix plus the capitalized field name.
    #[default]
    Structured,
    /// Flat string attributes: `data-` prefix plus the hyphenated field name.
    FlatAttribute,
}

impl KeyConvention {
    /// Choose the convention a host supports.
    pub fn probe<D: Document + ?Sized>(host: &D) -> Self {
        if host.supports_structured_metadata() {
            KeyConvention::Structured
        } else {
            KeyConvention::FlatAttribute
        }
    }

    /// The storage key for a field.
    pub fn key(self, field: Field) -> String {
        match self {
            KeyConvention::Structured => {
                format!("{METADATA_PREFIX}{}", capitalize_first(field.name()))
            }
            KeyConvention::FlatAttribute => {
                format!("data-{METADATA_PREFIX}-{}", hyphenate(field.name()))
            }
        }
    }
}

/// Uppercase the first character: `pluralCount` -> `PluralCount`.
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert camelCase to hyphenated: `pluralCount` -> `plural-count`.
fn hyphenate(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Reads and writes metadata fields on one entity under one key convention.
pub struct MetadataAccessor<'e, E: ?Sized> {
    entity: &'e mut E,
    keys: KeyConvention,
}

impl<'e, E: BoundEntity + ?Sized> MetadataAccessor<'e, E> {
    /// Wrap an entity.
    pub fn new(entity: &'e mut E, keys: KeyConvention) -> Self {
        Self { entity, keys }
    }

    /// Read a field.
    pub fn get(&self, field: Field) -> Option<String> {
        self.entity.metadata(&self.keys.key(field))
    }

    /// Write a field.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), BindingError> {
        self.entity.set_metadata(&self.keys.key(field), value)
    }

    /// Write the argument list, both natively cached and serialized.
    pub fn set_args(&mut self, args: &[String]) -> Result<(), BindingError> {
        self.entity.cache_args(args);
        self.set(Field::TextArgs, &join_args(args))
    }

    /// The wrapped entity.
    pub fn entity(&mut self) -> &mut E {
        self.entity
    }
}

/// Translation metadata of one bound entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMetadata {
    /// Source text, also the catalog lookup key.
    pub text: String,
    /// Untranslated plural text.
    pub plural: String,
    /// Quantity selecting the plural form.
    pub plural_count: u64,
    /// Context grouping.
    pub context: String,
    /// Placeholder arguments.
    pub text_args: Vec<String>,
    /// Language override for this entity.
    pub use_lang: Option<String>,
}

impl ElementMetadata {
    /// Read an entity's metadata, filling in defaults.
    ///
    /// A missing text is taken from the entity's trimmed content and a
    /// missing plural from the text; both are written back so the next read
    /// sees the same values. A non-numeric or empty stored count reads as 1.
    ///
    /// # Errors
    ///
    /// Returns an error if writing back a synthesized value is refused.
    pub fn load<E: BoundEntity + ?Sized>(
        entity: &mut E,
        keys: KeyConvention,
    ) -> Result<Self, BindingError> {
        let mut access = MetadataAccessor::new(entity, keys);

        let text = match access.get(Field::Text) {
            Some(text) => text,
            None => {
                let text = access.entity().raw_content().trim().to_string();
                access.set(Field::Text, &text)?;
                text
            }
        };

        let plural = match access.get(Field::Plural) {
            Some(plural) => plural,
            None => {
                access.set(Field::Plural, &text)?;
                text.clone()
            }
        };

        let plural_count = parse_plural_count(access.get(Field::PluralCount).as_deref());
        let context = non_empty(access.get(Field::Context).as_deref())
            .unwrap_or(DEFAULT_CONTEXT)
            .to_string();

        let text_args = match access.entity().cached_args() {
            Some(args) => args,
            None => {
                let args = access
                    .get(Field::TextArgs)
                    .map(|stored| split_args(&stored))
                    .unwrap_or_default();
                access.entity().cache_args(&args);
                args
            }
        };

        let use_lang = non_empty(access.get(Field::UseLang).as_deref()).map(str::to_string);

        Ok(Self {
            text,
            plural,
            plural_count,
            context,
            text_args,
            use_lang,
        })
    }
}

/// Parse a stored plural count.
///
/// Empty, non-numeric, negative or non-finite values read as 1. Fractional
/// counts are truncated.
pub fn parse_plural_count(stored: Option<&str>) -> u64 {
    let Some(stored) = stored.map(str::trim).filter(|s| !s.is_empty()) else {
        return 1;
    };
    if let Ok(count) = stored.parse::<u64>() {
        return count;
    }
    match stored.parse::<f64>() {
        Ok(count) if count.is_finite() && count >= 0.0 => count.trunc() as u64,
        _ => {
            debug!(stored, "malformed plural count, using 1");
            1
        }
    }
}

/// Serialize arguments for string-only storage.
pub fn join_args(args: &[String]) -> String {
    args.join(ARGS_SEPARATOR)
}

/// Parse serialized arguments, dropping whitespace around each `;`.
///
/// Whitespace at the very start and end is kept. An empty string holds no
/// arguments.
pub fn split_args(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    let parts: Vec<&str> = stored.split(';').collect();
    let last = parts.len() - 1;
    parts
        .into_iter()
        .enumerate()
        .map(|(index, part)| {
            let part = if index > 0 { part.trim_start() } else { part };
            let part = if index < last { part.trim_end() } else { part };
            part.to_string()
        })
        .collect()
}
