use bon::Builder;

use super::Value;

/// Context used when a request names none.
pub const DEFAULT_CONTEXT: &str = "default";

/// Options for translating a single string with [`Engine::translate`].
///
/// Every field is optional: the context defaults to `"default"`, the count
/// to 1, the language to the engine's active language, and the plural text
/// to the source text.
///
/// # Example
///
/// ```
/// use j18s::{TranslateOptions, Value};
///
/// let options = TranslateOptions::builder()
///     .plural("%d cats")
///     .plural_count(3)
///     .args(vec![Value::from(3)])
///     .build();
///
/// assert_eq!(options.plural.as_deref(), Some("%d cats"));
/// assert_eq!(options.context, None);
/// ```
///
/// [`Engine::translate`]: crate::Engine::translate
#[derive(Debug, Clone, Default, Builder)]
pub struct TranslateOptions {
    /// Untranslated plural text, used when no catalog entry exists.
    #[builder(into)]
    pub plural: Option<String>,

    /// Quantity selecting the plural form.
    pub plural_count: Option<u64>,

    /// Context grouping for the source text.
    #[builder(into)]
    pub context: Option<String>,

    /// One-shot language override. Does not change the active language.
    #[builder(into)]
    pub language: Option<String>,

    /// Replacement values for placeholders.
    #[builder(default)]
    pub args: Vec<Value>,
}

/// A fully resolved translation request, as the resolver consumes it.
///
/// Built by [`Engine::translate`] from [`TranslateOptions`] and by the
/// bound-entity operations from stored metadata.
///
/// [`Engine::translate`]: crate::Engine::translate
#[derive(Debug, Clone, Copy)]
pub struct TranslationRequest<'a> {
    /// Source text, also the catalog lookup key.
    pub text: &'a str,
    /// Untranslated plural text. `None` means the source text.
    pub plural: Option<&'a str>,
    /// Context grouping for the lookup.
    pub context: &'a str,
    /// Quantity selecting the plural form.
    pub plural_count: u64,
    /// Language override. `None` means the active language.
    pub language: Option<&'a str>,
    /// Replacement values for placeholders.
    pub args: &'a [Value],
    /// The bound entity's current content, the last fallback.
    pub raw_content: Option<&'a str>,
}

impl<'a> TranslationRequest<'a> {
    /// A singular request in the default context with no arguments.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            plural: None,
            context: DEFAULT_CONTEXT,
            plural_count: 1,
            language: None,
            args: &[],
            raw_content: None,
        }
    }

    /// Build a request from single-string translation options.
    ///
    /// Empty strings in the options count as unset.
    pub fn from_options(text: &'a str, options: &'a TranslateOptions) -> Self {
        Self {
            text,
            plural: non_empty(options.plural.as_deref()),
            context: non_empty(options.context.as_deref()).unwrap_or(DEFAULT_CONTEXT),
            plural_count: options.plural_count.unwrap_or(1),
            language: non_empty(options.language.as_deref()),
            args: &options.args,
            raw_content: None,
        }
    }
}

/// Treat an empty string like an absent one.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
