use serde::{Deserialize, Serialize};

/// The translation stored for one source string.
///
/// A single string covers every plural form; a sequence is indexed by the
/// form index the language's plural rule selects. In JSON, the two shapes
/// are a plain string and an array of strings.
///
/// # Example
///
/// ```
/// use j18s::Variant;
///
/// let cats = Variant::from(["1 cat", "%d cats"]);
/// assert_eq!(cats.form(1), Some("%d cats"));
/// assert_eq!(cats.form(2), None);
///
/// let hello = Variant::from("Tere");
/// assert_eq!(hello.form(0), Some("Tere"));
/// assert_eq!(hello.form(1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variant {
    /// One translation for all forms.
    Single(String),
    /// One translation per plural form.
    Plural(Vec<String>),
}

impl Variant {
    /// Get the translation at a form index.
    ///
    /// A `Single` variant only has form 0.
    pub fn form(&self, index: usize) -> Option<&str> {
        match self {
            Variant::Single(text) => (index == 0).then_some(text.as_str()),
            Variant::Plural(forms) => forms.get(index).map(String::as_str),
        }
    }

    /// Number of stored forms.
    pub fn len(&self) -> usize {
        match self {
            Variant::Single(_) => 1,
            Variant::Plural(forms) => forms.len(),
        }
    }

    /// Whether no forms are stored (an empty sequence).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Variant {
    fn from(text: &str) -> Self {
        Variant::Single(text.to_string())
    }
}

impl From<String> for Variant {
    fn from(text: String) -> Self {
        Variant::Single(text)
    }
}

impl From<Vec<String>> for Variant {
    fn from(forms: Vec<String>) -> Self {
        Variant::Plural(forms)
    }
}

impl<const N: usize> From<[&str; N]> for Variant {
    fn from(forms: [&str; N]) -> Self {
        Variant::Plural(forms.iter().map(|f| (*f).to_string()).collect())
    }
}
