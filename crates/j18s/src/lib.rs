pub mod binding;
pub mod formatter;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use binding::{
    BoundEntity, Document, DocumentRefresh, ElementMetadata, ElementOptions, Field,
    KeyConvention, MemoryDocument, MemoryElement, Refresh, RefreshFailure, RefreshReport,
    TRANSLATE_MARKER, UpdateOptions,
};
pub use formatter::format;
pub use interpreter::{
    BindingError, Catalog, Contexts, DEFAULT_PLURAL_RULE, Engine, Error, LanguageEntry, Messages,
    PluralRule, PluralRuleError, PluralSelector, compute_suggestions,
};
pub use types::{DEFAULT_CONTEXT, TranslateOptions, TranslationRequest, Value, Variant};

/// Creates a `Vec<Value>` of placeholder arguments.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats or strings directly.
///
/// # Example
///
/// ```
/// use j18s::{args, format};
///
/// let values = args![3, "Alice"];
/// assert_eq!(values.len(), 2);
/// assert_eq!(format("%2$s has %1$d cats", &values), "Alice has 3 cats");
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![$(::std::convert::Into::<$crate::Value>::into($value)),+]
    };
}
