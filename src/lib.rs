//! Runtime for Qt Linguist translation catalogs.
//!
//! This crate layers shared configuration and locale activation on top of
//! [`tsloc_common`], which provides the catalog model, loader, and
//! resolver. A typical host reads [`SharedConfig`], calls
//! [`activate_locale`] once at startup (and again on a locale switch), and
//! resolves strings through the [`Translator`] it passed in.

pub mod config;
pub mod error;
pub mod session;

pub use config::{CONFIG_FILE_NAME, SharedConfig, TranslationsConfig};
pub use error::ConfigError;
pub use session::{ActivatedLocale, activate_in, activate_locale, environment_locale};
pub use tsloc_common::{
    Catalog, CatalogError, CompletenessReport, FallbackReason, LOCALE_ENV_VAR, LocaleSelection,
    LocaleSource, Lookup, Message, MessageStatus, Outcome, ParseError, Resolution,
    TranslationDirectory, Translator, load, load_file, resolve, resolve_detailed, to_ts_string,
};
