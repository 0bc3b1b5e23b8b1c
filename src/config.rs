//! Shared configuration for hosts embedding the catalog runtime.
//!
//! Settings live in a TOML file (conventionally `tsloc.toml`) next to the
//! application. Every field is optional: a missing file or an empty table
//! yields the defaults, so a host only spells out what it changes.
//!
//! ```toml
//! locale = "de"
//!
//! [translations]
//! directory = "translations"
//! prefix = "app"
//! fallback_locale = "en"
//! ```

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::Deserialize;
use tsloc_common::{TranslationDirectory, normalise_locale};

use crate::error::ConfigError;

/// Conventional file name for the shared configuration.
pub const CONFIG_FILE_NAME: &str = "tsloc.toml";

/// Shared configuration for the catalog runtime.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SharedConfig {
    /// Preferred locale when neither the caller nor the environment picks one.
    ///
    /// The resolver trims whitespace and ignores blank values, so
    /// `locale = ""` falls back cleanly to the configured fallback locale.
    pub locale: Option<String>,
    /// Where translation files live and how they are named.
    pub translations: TranslationsConfig,
}

impl SharedConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsloc::SharedConfig;
    ///
    /// let config = SharedConfig::from_toml_str("locale = \"de\"\n")?;
    /// assert_eq!(config.locale(), Some("de"));
    /// assert_eq!(config.translations.prefix, "app");
    /// # Ok::<(), toml::de::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the text is malformed, a value has the
    /// wrong type, or an unknown field is present.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Read configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file exists but cannot be read
    /// and [`ConfigError::Parse`] when its contents are invalid.
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(
                    target: "tsloc::config",
                    "no configuration at {path}; using defaults",
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_toml_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads configuration using the supplied loader.
    ///
    /// The loader receives `path` and decides how to produce the
    /// configuration. Tests use this to inject a stub without touching the
    /// file system; hosts normally pass [`Self::load_from_path`].
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use tsloc::SharedConfig;
    ///
    /// let config = SharedConfig::load_with(Utf8Path::new("tsloc.toml"), |_| {
    ///     Ok(SharedConfig::default())
    /// })?;
    /// assert_eq!(config.translations.fallback_locale, "en");
    /// # Ok::<(), tsloc::ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns whatever error the loader reports.
    pub fn load_with<F>(path: &Utf8Path, loader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&Utf8Path) -> Result<Self, ConfigError>,
    {
        loader(path)
    }

    /// Returns the configured locale override, if present.
    ///
    /// Whitespace-only values are treated as absent.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        normalise_locale(self.locale.as_deref())
    }

    /// The translation directory, with a relative path left as written.
    #[must_use]
    pub fn translation_directory(&self) -> TranslationDirectory {
        TranslationDirectory::new(
            self.translations.directory.clone(),
            self.translations.prefix.clone(),
        )
    }

    /// The translation directory, resolving a relative path against `base`.
    #[must_use]
    pub fn translation_directory_in(&self, base: &Utf8Path) -> TranslationDirectory {
        TranslationDirectory::new(
            base.join(&self.translations.directory),
            self.translations.prefix.clone(),
        )
    }
}

/// Location and naming of translation files.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TranslationsConfig {
    /// Folder holding `<prefix>_<locale>.ts` files.
    pub directory: Utf8PathBuf,
    /// File-name prefix shared by the translation files.
    pub prefix: String,
    /// Locale used when no requested locale has a translation file.
    pub fallback_locale: String,
}

impl TranslationsConfig {
    fn default_directory() -> Utf8PathBuf {
        Utf8PathBuf::from("translations")
    }

    /// The fallback locale, trimmed.
    #[must_use]
    pub fn fallback_locale(&self) -> &str {
        self.fallback_locale.trim()
    }
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            directory: Self::default_directory(),
            prefix: String::from("app"),
            fallback_locale: String::from("en"),
        }
    }
}
