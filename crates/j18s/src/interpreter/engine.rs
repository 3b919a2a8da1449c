//! The translation engine.
//!
//! The Engine struct provides the user-facing API for registering catalogs,
//! switching the active language and translating strings.

use bon::Builder;
use tracing::debug;

use crate::binding::{KeyConvention, Refresh, RefreshReport};
use crate::interpreter::error::PluralRuleError;
use crate::interpreter::{Catalog, Contexts, PluralRule, plural_form, resolve};
use crate::types::{TranslateOptions, TranslationRequest};

/// User-facing translation engine.
///
/// Engine owns the catalog, the active language and the refresh callback.
/// It is an ordinary value: construct one, keep it where your rendering code
/// can reach it, and pass it by reference. Each language carries its own
/// plural rule, and registering a language again replaces it entirely.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use j18s::{Engine, PluralRule, TranslateOptions, Value, Variant};
///
/// let mut engine = Engine::builder().language("et").build();
/// let contexts = HashMap::from([(
///     "default".to_string(),
///     HashMap::from([("%d cats".to_string(), Variant::from(["%d kass", "%d kassi"]))]),
/// )]);
/// engine.register_language("et", contexts, PluralRule::Default).unwrap();
///
/// let options = TranslateOptions::builder()
///     .plural_count(3)
///     .args(vec![Value::from(3)])
///     .build();
/// assert_eq!(engine.translate("%d cats", &options), "3 kassi");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Engine {
    /// Active language identifier (e.g., "en", "et", "ru").
    #[builder(default = "en".to_string())]
    language: String,

    /// How metadata keys are spelled on bound entities.
    ///
    /// Chosen once for the host, usually with [`KeyConvention::probe`].
    #[builder(default)]
    key_convention: KeyConvention,

    /// Registered languages.
    #[builder(skip)]
    catalog: Catalog,

    /// Called when the active language changes or its catalog is replaced.
    #[builder(skip)]
    refresh: Option<Box<dyn Refresh>>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::builder().build()
    }
}

impl Engine {
    /// Create a new Engine with default settings (English, camelCase keys).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Engine with the specified active language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Engine::builder().language(language.into()).build()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// Get the active language identifier.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the active language.
    ///
    /// When the language actually changes, or `force_refresh` is set, the
    /// refresh callback runs exactly once and its report is returned.
    /// Setting the current language again without forcing is a no-op and
    /// returns None.
    pub fn set_language(
        &mut self,
        language: impl Into<String>,
        force_refresh: bool,
    ) -> Option<RefreshReport> {
        let language = language.into();
        if self.language == language && !force_refresh {
            return None;
        }
        debug!(from = %self.language, to = %language, force_refresh, "switching language");
        self.language = language;
        Some(self.refresh())
    }

    /// Install the callback that re-renders bound entities.
    ///
    /// Replaces any previously installed callback.
    pub fn set_refresh(&mut self, refresh: impl Refresh + 'static) {
        self.refresh = Some(Box::new(refresh));
    }

    /// Remove the refresh callback, returning it.
    pub fn take_refresh(&mut self) -> Option<Box<dyn Refresh>> {
        self.refresh.take()
    }

    /// Run the refresh callback now.
    ///
    /// Returns an empty report when no callback is installed.
    pub fn refresh(&mut self) -> RefreshReport {
        let Some(mut refresh) = self.refresh.take() else {
            return RefreshReport::default();
        };
        let report = refresh.refresh(self);
        self.refresh = Some(refresh);
        report
    }

    /// Get the metadata key convention for bound entities.
    pub fn key_convention(&self) -> KeyConvention {
        self.key_convention
    }

    // =========================================================================
    // Catalog Registration
    // =========================================================================

    /// Register (or replace) a language's translations and plural rule.
    ///
    /// `rule` may be an expression (`&str`/`String`), [`PluralRule::Default`]
    /// for the default rule, or a ready [`PluralSelector`](crate::PluralSelector).
    /// An empty language identifier is stored under the empty-string key.
    ///
    /// Re-registering a language replaces its contexts and selector entirely.
    /// When the registered language is the active one, a forced refresh runs
    /// and its report is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule expression does not compile. The catalog
    /// is left unchanged in that case.
    pub fn register_language(
        &mut self,
        language: &str,
        contexts: Contexts,
        rule: impl Into<PluralRule>,
    ) -> Result<Option<RefreshReport>, PluralRuleError> {
        let selector = rule.into().into_selector()?;
        let replaced = self.catalog.insert(language, contexts, selector).is_some();
        debug!(language, replaced, "registered language");

        if self.language == language {
            Ok(self.set_language(language, true))
        } else {
            Ok(None)
        }
    }

    /// Get the catalog (read-only).
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the catalog (mutable) for live editing of translations.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate a string.
    ///
    /// Stateless: neither the catalog nor the active language change, even
    /// with a language override in `options`. Missing translations fall back
    /// to the source or plural text; this never fails.
    pub fn translate(&self, text: &str, options: &TranslateOptions) -> String {
        self.resolve(&TranslationRequest::from_options(text, options))
    }

    /// Resolve a fully specified request against this engine's catalog.
    pub fn resolve(&self, request: &TranslationRequest<'_>) -> String {
        resolve(&self.catalog, &self.language, request)
    }

    /// Select the plural form index for a count in a language.
    pub fn plural_form(&self, language: &str, count: u64) -> usize {
        plural_form(&self.catalog, language, count)
    }
}
