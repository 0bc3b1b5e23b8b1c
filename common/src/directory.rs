//! Discovery of `<prefix>_<locale>.ts` files in a translation directory.

use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use unic_langid::LanguageIdentifier;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::loader::load_file;
use crate::locale::normalise_locale;

const LOG_TARGET: &str = "tsloc::directory";

/// Folder of translation files sharing a common file-name prefix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TranslationDirectory {
    root: Utf8PathBuf,
    prefix: String,
}

/// Catalog loaded from a translation directory.
#[derive(Debug)]
pub struct LoadedCatalog {
    /// The parsed catalog.
    pub catalog: Catalog,
    /// File the catalog was read from.
    pub path: Utf8PathBuf,
    /// Locale suffix of that file, such as `de` or `de_AT`.
    pub locale: String,
}

impl TranslationDirectory {
    /// Describe the directory `root` holding `<prefix>_<locale>.ts` files.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    /// Directory searched for translation files.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// File-name prefix shared by the translation files.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Locale suffixes of all translation files present, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Directory`] when the directory cannot be
    /// scanned.
    pub fn available_locales(&self) -> Result<Vec<String>, CatalogError> {
        let pattern = format!(
            "{}/{}_*.ts",
            glob::Pattern::escape(self.root.as_str()),
            glob::Pattern::escape(&self.prefix),
        );
        let entries = glob::glob(&pattern).map_err(|error| CatalogError::Directory {
            pattern: pattern.clone(),
            reason: error.to_string(),
        })?;

        let marker = format!("{}_", self.prefix);
        let mut locales = Vec::new();
        for entry in entries {
            let path = entry.map_err(|error| CatalogError::Directory {
                pattern: pattern.clone(),
                reason: error.to_string(),
            })?;
            let Ok(path) = Utf8PathBuf::from_path_buf(path) else {
                continue;
            };
            if let Some(locale) = path
                .file_stem()
                .and_then(|stem| stem.strip_prefix(&marker))
                .filter(|locale| !locale.is_empty())
            {
                locales.push(locale.to_owned());
            }
        }

        locales.sort();
        locales.dedup();
        Ok(locales)
    }

    /// Files that may hold `locale`, most specific first.
    ///
    /// `de-AT` and `de_AT` both yield `<prefix>_de_AT.ts` followed by
    /// `<prefix>_de.ts`.
    ///
    /// ```
    /// use tsloc_common::TranslationDirectory;
    ///
    /// let directory = TranslationDirectory::new("translations", "app");
    /// let candidates = directory.candidates("de-AT").unwrap();
    /// assert_eq!(candidates[0], "translations/app_de_AT.ts");
    /// assert_eq!(candidates[1], "translations/app_de.ts");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidLocale`] when `locale` is not a valid
    /// language tag.
    pub fn candidates(&self, locale: &str) -> Result<Vec<Utf8PathBuf>, CatalogError> {
        let invalid = || CatalogError::InvalidLocale {
            locale: locale.to_owned(),
        };
        let tag = normalise_locale(Some(locale)).ok_or_else(invalid)?;
        let identifier = LanguageIdentifier::from_str(tag).map_err(|_| invalid())?;

        let mut parts = vec![identifier.language.as_str().to_owned()];
        parts.extend(identifier.script.map(|script| script.as_str().to_owned()));
        parts.extend(identifier.region.map(|region| region.as_str().to_owned()));
        parts.extend(identifier.variants().map(|variant| variant.as_str().to_owned()));

        let mut candidates = Vec::with_capacity(parts.len());
        for length in (1..=parts.len()).rev() {
            let suffix = parts.get(..length).unwrap_or(&parts).join("_");
            candidates.push(self.root.join(format!("{}_{suffix}.ts", self.prefix)));
        }
        Ok(candidates)
    }

    /// Whether a translation file exists for `locale`.
    #[must_use]
    pub fn supports(&self, locale: &str) -> bool {
        self.candidates(locale)
            .is_ok_and(|candidates| candidates.iter().any(|path| path.is_file()))
    }

    /// Load the most specific translation file for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::LocaleNotFound`] when no candidate file
    /// exists, [`CatalogError::InvalidLocale`] for malformed tags, and the
    /// errors of [`load_file`] when the file cannot be read or parsed.
    pub fn load(&self, locale: &str) -> Result<LoadedCatalog, CatalogError> {
        let path = self
            .candidates(locale)?
            .into_iter()
            .find(|path| path.is_file())
            .ok_or_else(|| CatalogError::LocaleNotFound {
                locale: locale.to_owned(),
                directory: self.root.clone(),
            })?;

        debug!(target: LOG_TARGET, "loading `{locale}` from {path}");
        let catalog = load_file(&path)?;
        let file_locale = path
            .file_stem()
            .and_then(|stem| stem.strip_prefix(&format!("{}_", self.prefix)))
            .unwrap_or(locale)
            .to_owned();

        Ok(LoadedCatalog {
            catalog,
            path,
            locale: file_locale,
        })
    }
}
