//! Translation resolution: the fallback cascade.
//!
//! Given a request, the resolver picks a plural form index, walks the lookup
//! cascade from the most specific candidate to the least, and formats the
//! first usable template with the request's arguments.

use tracing::trace;

use crate::formatter::format;
use crate::interpreter::Catalog;
use crate::types::TranslationRequest;

/// Resolve a request to its final, formatted string.
///
/// The cascade, skipping absent and empty candidates:
/// 1. the catalog translation at the selected form index,
/// 2. the catalog translation at form 0,
/// 3. the untranslated text for the form (form 0 is the source text, any
///    other form the plural text),
/// 4. the source text,
/// 5. the bound entity's raw content, when the request carries one.
///
/// Resolution never fails and has no side effects.
pub fn resolve(catalog: &Catalog, active_language: &str, request: &TranslationRequest<'_>) -> String {
    let language = request
        .language
        .filter(|l| !l.is_empty())
        .unwrap_or(active_language);
    let form = plural_form(catalog, language, request.plural_count);
    let template = select_template(catalog, language, form, request);
    format(template, request.args)
}

/// Select the plural form index for a count in a language.
///
/// Registered languages use their selector. Unregistered languages use a
/// fixed two-form guess: 0 for a count of 1, 1 otherwise.
pub fn plural_form(catalog: &Catalog, language: &str, count: u64) -> usize {
    match catalog.selector(language) {
        Some(selector) => selector.select(count),
        None => usize::from(count != 1),
    }
}

/// Walk the fallback cascade and return the chosen template.
fn select_template<'a>(
    catalog: &'a Catalog,
    language: &str,
    form: usize,
    request: &TranslationRequest<'a>,
) -> &'a str {
    let variant = catalog.variant(language, request.context, request.text);
    if variant.is_none() {
        trace!(
            language,
            context = request.context,
            text = request.text,
            "no translation, using source text"
        );
    }

    let untranslated = if form == 0 {
        request.text
    } else {
        request.plural.unwrap_or(request.text)
    };

    let candidates = [
        variant.and_then(|v| v.form(form)),
        variant.and_then(|v| v.form(0)),
        Some(untranslated),
        Some(request.text),
        request.raw_content,
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_default()
}
