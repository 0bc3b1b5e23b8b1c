//! Catalog model, loader, and resolver for Qt Linguist `.ts` translation
//! files.
//!
//! A [`Catalog`] is parsed once with [`load`], shared read-only, and queried
//! with [`resolve`]. Lookups never fail: a missing or unusable translation
//! falls back to the source text. Hosts hold the active catalog in a
//! [`Translator`] and swap it wholesale when the locale changes.

pub mod catalog;
pub mod directory;
pub mod error;
pub mod loader;
pub mod locale;
pub mod report;
pub mod resolver;
pub mod test_support;
pub mod translator;
pub mod writer;

pub use catalog::{Catalog, Context, Location, Message, MessageKey, MessageStatus, UnknownStatus};
pub use directory::{LoadedCatalog, TranslationDirectory};
pub use error::{CatalogError, ParseError, ParseErrorKind, Position};
pub use loader::{load, load_file, load_str};
pub use locale::{LOCALE_ENV_VAR, LocaleSelection, LocaleSource, normalise_locale, resolve_locale};
pub use report::{CompletenessReport, ContextReport, PlaceholderMismatch, Tally};
pub use resolver::{
    FallbackReason, Lookup, NO_ARGS, Outcome, Resolution, highest_marker, resolve,
    resolve_detailed, substitute,
};
pub use translator::{Translator, active_catalog, global, install_catalog, translate};
pub use writer::{to_ts_string, write_ts};
