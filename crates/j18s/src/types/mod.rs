mod request;
mod value;
mod variant;

pub(crate) use request::non_empty;
pub use request::{DEFAULT_CONTEXT, TranslateOptions, TranslationRequest};
pub use value::Value;
pub use variant::Variant;
