//! Locale activation: pick a locale, load its catalog, and install it.

use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use tsloc_common::{
    Catalog, CatalogError, LOCALE_ENV_VAR, LocaleSelection, TranslationDirectory, Translator,
    resolve_locale,
};

use crate::config::SharedConfig;

const LOG_TARGET: &str = "tsloc::session";

/// Describes the catalog installed by [`activate_locale`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivatedLocale {
    selection: LocaleSelection,
    path: Option<Utf8PathBuf>,
    messages: usize,
}

impl ActivatedLocale {
    /// How the locale was chosen.
    #[must_use]
    pub const fn selection(&self) -> &LocaleSelection {
        &self.selection
    }

    /// The active locale tag.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.selection.locale()
    }

    /// Translation file the catalog came from, or `None` when the fallback
    /// locale has no file and an empty catalog was installed.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Number of messages in the installed catalog.
    #[must_use]
    pub const fn messages(&self) -> usize {
        self.messages
    }
}

/// Reads the `TSLOC_LOCALE` override from the process environment.
#[must_use]
pub fn environment_locale() -> Option<String> {
    std::env::var(LOCALE_ENV_VAR).ok()
}

/// Resolve the locale, load its catalog, and install it into `translator`.
///
/// Candidates are tried in the order described by [`resolve_locale`]:
/// `explicit`, then `environment`, then the configured locale. A candidate
/// counts as supported when the configured translation directory holds a
/// file for it. When nothing matches, the fallback locale is used; if it
/// has no file either, an empty catalog is installed so every lookup
/// returns its source text.
///
/// # Errors
///
/// Returns [`CatalogError`] when the chosen translation file cannot be read
/// or parsed. The previously installed catalog stays active in that case.
pub fn activate_locale(
    translator: &Translator,
    config: &SharedConfig,
    explicit: Option<&str>,
    environment: Option<String>,
) -> Result<ActivatedLocale, CatalogError> {
    activate_in(
        translator,
        config,
        &config.translation_directory(),
        explicit,
        environment,
    )
}

/// Like [`activate_locale`], but searches `directory` instead of the
/// configured one.
///
/// # Errors
///
/// See [`activate_locale`].
pub fn activate_in(
    translator: &Translator,
    config: &SharedConfig,
    directory: &TranslationDirectory,
    explicit: Option<&str>,
    environment: Option<String>,
) -> Result<ActivatedLocale, CatalogError> {
    let fallback = config.translations.fallback_locale();
    let selection = resolve_locale(
        explicit,
        environment,
        config.locale(),
        fallback,
        |locale| directory.supports(locale),
    );

    let (catalog, path) = if selection.used_fallback() && !directory.supports(fallback) {
        info!(
            target: LOG_TARGET,
            "no translation file for fallback locale `{fallback}` in {}; source text will be shown",
            directory.root(),
        );
        (
            Catalog::new().with_language(Some(fallback.to_owned())),
            None,
        )
    } else {
        let loaded = directory.load(selection.locale())?;
        (loaded.catalog, Some(loaded.path))
    };

    let messages = catalog.len();
    translator.install_catalog(catalog);

    Ok(ActivatedLocale {
        selection,
        path,
        messages,
    })
}
