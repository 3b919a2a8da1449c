//! Bound-entity translation: metadata read, resolve, write-back, apply.

use bon::Builder;

use crate::binding::{BoundEntity, ElementMetadata, Field, MetadataAccessor};
use crate::interpreter::{BindingError, Engine};
use crate::types::{DEFAULT_CONTEXT, TranslationRequest, Value, non_empty};

/// Options for turning an entity into a translated entity with [`Engine::bind`].
///
/// Unset text and plural fall back to the entity's trimmed content, the
/// context to `"default"`. Unset count, arguments and language leave any
/// previously stored value in place.
#[derive(Debug, Clone, Default, Builder)]
pub struct ElementOptions {
    /// Untranslated source text.
    #[builder(into)]
    pub text: Option<String>,

    /// Untranslated plural text.
    #[builder(into)]
    pub plural: Option<String>,

    /// Quantity selecting the plural form.
    pub plural_count: Option<u64>,

    /// Context grouping for the source text.
    #[builder(into)]
    pub context: Option<String>,

    /// Language to use for this entity instead of the active one.
    #[builder(into)]
    pub use_lang: Option<String>,

    /// Replacement strings for placeholders.
    pub text_args: Option<Vec<String>>,
}

/// Options for re-rendering a bound entity with [`Engine::update_with`].
///
/// Unset fields keep the values stored on the entity.
#[derive(Debug, Clone, Default, Builder)]
pub struct UpdateOptions {
    /// Context grouping for the source text.
    #[builder(into)]
    pub context: Option<String>,

    /// Quantity selecting the plural form.
    pub plural_count: Option<u64>,

    /// Replacement strings for placeholders.
    pub text_args: Option<Vec<String>>,
}

impl Engine {
    /// Turn an entity into a translated entity and render it.
    ///
    /// Stores the options as metadata, adds the translation marker (keeping
    /// other markers), then renders from the stored metadata. Returns the
    /// resolved string that was applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses a metadata write.
    pub fn bind<E: BoundEntity + ?Sized>(
        &self,
        entity: &mut E,
        options: &ElementOptions,
    ) -> Result<String, BindingError> {
        let content = entity.raw_content().trim().to_string();
        let text = non_empty(options.text.as_deref()).unwrap_or(&content);
        let plural = non_empty(options.plural.as_deref()).unwrap_or(text);
        let context = non_empty(options.context.as_deref()).unwrap_or(DEFAULT_CONTEXT);

        let mut access = MetadataAccessor::new(entity, self.key_convention());
        access.set(Field::Text, text)?;
        access.set(Field::Plural, plural)?;
        access.set(Field::Context, context)?;
        if let Some(count) = options.plural_count {
            access.set(Field::PluralCount, &count.to_string())?;
        }
        if let Some(args) = &options.text_args {
            access.set_args(args)?;
        }
        if let Some(language) = non_empty(options.use_lang.as_deref()) {
            access.set(Field::UseLang, language)?;
        }

        if !entity.is_marked() {
            entity.mark();
        }

        self.update_with(entity, &UpdateOptions::default())
    }

    /// Render the singular form of a bound entity.
    ///
    /// `context` None keeps the stored context. `args` replace the stored
    /// arguments, so an empty slice clears them.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses a metadata write.
    pub fn update<E: BoundEntity + ?Sized>(
        &self,
        entity: &mut E,
        context: Option<&str>,
        args: &[String],
    ) -> Result<String, BindingError> {
        self.update_plural(entity, context, 1, args)
    }

    /// Render a bound entity for a count.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses a metadata write.
    pub fn update_plural<E: BoundEntity + ?Sized>(
        &self,
        entity: &mut E,
        context: Option<&str>,
        plural_count: u64,
        args: &[String],
    ) -> Result<String, BindingError> {
        let metadata = ElementMetadata::load(entity, self.key_convention())?;
        let context = context.unwrap_or(&metadata.context);
        self.render(entity, &metadata, context, plural_count, args)
    }

    /// Render a bound entity, taking unset options from stored metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses a metadata write.
    pub fn update_with<E: BoundEntity + ?Sized>(
        &self,
        entity: &mut E,
        options: &UpdateOptions,
    ) -> Result<String, BindingError> {
        let metadata = ElementMetadata::load(entity, self.key_convention())?;
        let context = options.context.as_deref().unwrap_or(&metadata.context);
        let plural_count = options.plural_count.unwrap_or(metadata.plural_count);
        let args = options.text_args.as_deref().unwrap_or(&metadata.text_args);
        self.render(entity, &metadata, context, plural_count, args)
    }

    /// Write back count, context and changed arguments, then resolve and
    /// apply the result.
    fn render<E: BoundEntity + ?Sized>(
        &self,
        entity: &mut E,
        metadata: &ElementMetadata,
        context: &str,
        plural_count: u64,
        args: &[String],
    ) -> Result<String, BindingError> {
        let context = if context.is_empty() {
            DEFAULT_CONTEXT
        } else {
            context
        };

        let mut access = MetadataAccessor::new(entity, self.key_convention());
        access.set(Field::PluralCount, &plural_count.to_string())?;
        access.set(Field::Context, context)?;
        if metadata.text_args != args {
            access.set_args(args)?;
        }

        let content = entity.raw_content();
        let values: Vec<Value> = args.iter().map(Value::from).collect();
        let request = TranslationRequest {
            text: &metadata.text,
            plural: Some(metadata.plural.as_str()),
            context,
            plural_count,
            language: metadata.use_lang.as_deref(),
            args: &values,
            raw_content: Some(content.trim()),
        };

        let resolved = self.resolve(&request);
        entity.apply_result(&resolved);
        Ok(resolved)
    }
}
