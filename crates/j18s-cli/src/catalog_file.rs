//! JSON catalog files.
//!
//! A catalog file holds one language:
//!
//! ```json
//! {
//!   "language": "et",
//!   "pluralForms": "nplurals=2; plural=n != 1",
//!   "contexts": {
//!     "default": { "Hello": "Tere", "%d cats": ["%d kass", "%d kassi"] }
//!   }
//! }
//! ```
//!
//! `language` defaults to the file stem and `pluralForms` to the default rule.

use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use j18s::{Contexts, Engine, PluralRule, PluralRuleError, PluralSelector};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogFileError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog {path}: {source}")]
    Json {
        path: PathBuf,
        content: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: {source}")]
    Rule {
        path: PathBuf,
        content: String,
        #[source]
        source: PluralRuleError,
    },
}

/// The on-disk shape of one language's catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogFile {
    pub language: Option<String>,
    pub plural_forms: Option<String>,
    #[serde(default)]
    pub contexts: Contexts,
}

/// A parsed catalog file with its compiled plural rule.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub path: PathBuf,
    pub language: String,
    pub selector: PluralSelector,
    pub contexts: Contexts,
}

impl LoadedCatalog {
    /// Every `(context, source text)` pair in the catalog, sorted.
    pub fn keys(&self) -> Vec<(String, String)> {
        let mut keys: Vec<(String, String)> = self
            .contexts
            .iter()
            .flat_map(|(context, messages)| {
                messages
                    .keys()
                    .map(move |text| (context.clone(), text.clone()))
            })
            .collect();
        keys.sort();
        keys
    }

    /// Register this catalog with an engine.
    pub fn register(self, engine: &mut Engine) -> Result<(), PluralRuleError> {
        engine.register_language(
            &self.language,
            self.contexts,
            PluralRule::Selector(self.selector),
        )?;
        Ok(())
    }
}

/// Read, parse and compile a catalog file.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, CatalogFileError> {
    let content = read_to_string(path).map_err(|source| CatalogFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(path, content)
}

/// Parse catalog file content read from `path`.
pub fn parse_catalog(path: &Path, content: String) -> Result<LoadedCatalog, CatalogFileError> {
    let file: CatalogFile = match serde_json::from_str(&content) {
        Ok(file) => file,
        Err(source) => {
            return Err(CatalogFileError::Json {
                path: path.to_path_buf(),
                content,
                source,
            });
        }
    };

    let selector = match PluralSelector::compile(file.plural_forms.as_deref()) {
        Ok(selector) => selector,
        Err(source) => {
            return Err(CatalogFileError::Rule {
                path: path.to_path_buf(),
                content,
                source,
            });
        }
    };

    let language = file
        .language
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_default();
    debug!(path = %path.display(), language, "loaded catalog file");

    Ok(LoadedCatalog {
        path: path.to_path_buf(),
        language,
        selector,
        contexts: file.contexts,
    })
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use j18s::{TranslateOptions, Value};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_catalog_uses_file_stem_for_language() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("et.json");
        write(
            &path,
            r#"{"contexts": {"default": {"%d cats": ["%d kass", "%d kassi"]}}}"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.language, "et");
        assert_eq!(catalog.selector.source(), Some("nplurals=2; plural=n != 1"));
        assert_eq!(
            catalog.keys(),
            vec![("default".to_string(), "%d cats".to_string())]
        );
    }

    #[test]
    fn test_loaded_catalog_translates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        write(
            &path,
            r#"{
                "language": "ru",
                "pluralForms": "nplurals=3; plural=n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2",
                "contexts": {"default": {"%d files": ["%d файл", "%d файла", "%d файлов"]}}
            }"#,
        )
        .unwrap();

        let mut engine = Engine::with_language("ru");
        load_catalog(&path).unwrap().register(&mut engine).unwrap();

        let options = TranslateOptions::builder()
            .plural_count(5)
            .args(vec![Value::from(5)])
            .build();
        assert_eq!(engine.translate("%d files", &options), "5 файлов");
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        write(&path, r#"{"contexts": {"default": }}"#).unwrap();

        let error = load_catalog(&path).unwrap_err();
        assert!(matches!(error, CatalogFileError::Json { .. }));
    }

    #[test]
    fn test_invalid_rule_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        write(&path, r#"{"pluralForms": "nplurals=2; plural=n !="}"#).unwrap();

        let error = load_catalog(&path).unwrap_err();
        assert!(matches!(error, CatalogFileError::Rule { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let error = load_catalog(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(error, CatalogFileError::Io { .. }));
    }
}
