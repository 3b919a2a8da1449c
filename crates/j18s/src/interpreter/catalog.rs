//! Catalog store: per-language translations and plural selectors.

use std::collections::{BTreeMap, HashMap};

use strsim::levenshtein;

use crate::interpreter::PluralSelector;
use crate::types::Variant;

/// Source text to translation, within one context.
pub type Messages = HashMap<String, Variant>;

/// Context name to messages, for one language.
pub type Contexts = HashMap<String, Messages>;

/// Everything registered for one language.
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    contexts: Contexts,
    selector: PluralSelector,
}

impl LanguageEntry {
    /// The translations, grouped by context.
    pub fn contexts(&self) -> &Contexts {
        &self.contexts
    }

    /// The compiled plural selector.
    pub fn selector(&self) -> &PluralSelector {
        &self.selector
    }
}

/// The in-memory collection of all registered languages.
///
/// Languages are replaced wholesale on re-registration, never merged. Every
/// language carries a plural selector.
#[derive(Debug, Default)]
pub struct Catalog {
    languages: BTreeMap<String, LanguageEntry>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a language, replacing any previous entry for it.
    ///
    /// Returns the replaced entry.
    pub fn insert(
        &mut self,
        language: &str,
        contexts: Contexts,
        selector: PluralSelector,
    ) -> Option<LanguageEntry> {
        self.languages
            .insert(language.to_string(), LanguageEntry { contexts, selector })
    }

    /// Remove a language.
    pub fn remove(&mut self, language: &str) -> Option<LanguageEntry> {
        self.languages.remove(language)
    }

    /// Check whether a language is registered.
    pub fn contains(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Registered language identifiers, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Get everything registered for a language.
    pub fn entry(&self, language: &str) -> Option<&LanguageEntry> {
        self.languages.get(language)
    }

    /// Get the plural selector for a language.
    pub fn selector(&self, language: &str) -> Option<&PluralSelector> {
        self.languages.get(language).map(LanguageEntry::selector)
    }

    /// Look up the stored translation for a source text.
    pub fn variant(&self, language: &str, context: &str, text: &str) -> Option<&Variant> {
        self.languages
            .get(language)?
            .contexts
            .get(context)?
            .get(text)
    }

    /// Mutable access to a language's translations for live editing.
    ///
    /// Changes are visible to the next lookup.
    pub fn contexts_mut(&mut self, language: &str) -> Option<&mut Contexts> {
        self.languages
            .get_mut(language)
            .map(|entry| &mut entry.contexts)
    }

    /// Source texts in a context that are close to `text`.
    ///
    /// Useful for reporting likely typos when a lookup misses.
    pub fn suggestions(&self, language: &str, context: &str, text: &str) -> Vec<String> {
        let Some(messages) = self
            .languages
            .get(language)
            .and_then(|entry| entry.contexts.get(context))
        else {
            return Vec::new();
        };

        let available: Vec<String> = messages.keys().cloned().collect();
        compute_suggestions(text, &available)
    }
}

/// Find up to three entries of `available` within a small edit distance of
/// `key`, closest first.
///
/// Keys of three characters or fewer allow distance 1; longer keys allow 2.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };

    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
