//! Translation lookup with deterministic fallback.
//!
//! Resolution never fails: when no usable translation exists the source text
//! is returned instead, so end users see the original string rather than a
//! blank. The rules are:
//!
//! | Message state | Result |
//! |---------------|--------|
//! | `Finished` | translation |
//! | `Unfinished`, non-empty translation | translation |
//! | `Unfinished`, empty translation | source |
//! | `Obsolete` | source |
//! | key not found | source |
//!
//! Positional markers are substituted in whichever text is returned.

use std::fmt;

use crate::catalog::{Catalog, MessageStatus};

mod placeholder;

pub use placeholder::{highest_marker, substitute};

/// Empty argument list for lookups without placeholders.
pub const NO_ARGS: &[&str] = &[];

/// Why the resolver returned the source text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FallbackReason {
    /// No message matched the key.
    NotFound,
    /// The message is unfinished and has no translation yet.
    Untranslated,
    /// The message is obsolete.
    Obsolete,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => formatter.write_str("no matching message"),
            Self::Untranslated => formatter.write_str("message not yet translated"),
            Self::Obsolete => formatter.write_str("message is obsolete"),
        }
    }
}

/// How a lookup was satisfied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// A finished translation was used.
    Translated,
    /// An unfinished but non-empty translation was used.
    Partial,
    /// The source text was used.
    Fallback(FallbackReason),
}

/// Resolved text together with the way it was obtained.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
    /// Text after placeholder substitution.
    pub text: String,
    /// Which rule produced `text`.
    pub outcome: Outcome,
}

/// Resolve a lookup against `catalog`.
///
/// ```
/// use tsloc_common::{Catalog, Message, MessageStatus, resolve};
///
/// let mut catalog = Catalog::new();
/// catalog.insert("ClipPlaneWidget", Message::new("Plane %1", "Ebene %1", MessageStatus::Finished));
///
/// assert_eq!(resolve(&catalog, "ClipPlaneWidget", "Plane %1", None, &["2"]), "Ebene 2");
/// assert_eq!(resolve(&catalog, "Elsewhere", "Plane %1", None, &["2"]), "Plane 2");
/// ```
#[must_use]
pub fn resolve<S: AsRef<str>>(
    catalog: &Catalog,
    context: &str,
    source: &str,
    disambiguation: Option<&str>,
    args: &[S],
) -> String {
    resolve_detailed(catalog, context, source, disambiguation, args).text
}

/// Resolve a lookup and report which rule applied.
#[must_use]
pub fn resolve_detailed<S: AsRef<str>>(
    catalog: &Catalog,
    context: &str,
    source: &str,
    disambiguation: Option<&str>,
    args: &[S],
) -> Resolution {
    let (template, outcome) = match catalog.find(context, source, disambiguation) {
        None => (source, Outcome::Fallback(FallbackReason::NotFound)),
        Some(message) => match message.status() {
            MessageStatus::Finished => (message.translation(), Outcome::Translated),
            MessageStatus::Unfinished if !message.translation().is_empty() => {
                (message.translation(), Outcome::Partial)
            }
            MessageStatus::Unfinished => (source, Outcome::Fallback(FallbackReason::Untranslated)),
            MessageStatus::Obsolete => (source, Outcome::Fallback(FallbackReason::Obsolete)),
        },
    };

    Resolution {
        text: substitute(template, args).into_owned(),
        outcome,
    }
}

/// A lookup key plus its placeholder arguments.
///
/// ```
/// use tsloc_common::{Catalog, Lookup};
///
/// let lookup = Lookup::new("ExportDialog", "Export options for %1 writer").arg("Silo");
/// assert_eq!(lookup.resolve(&Catalog::new()), "Export options for Silo writer");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Lookup {
    context: String,
    source: String,
    disambiguation: Option<String>,
    args: Vec<String>,
}

impl Lookup {
    /// Start a lookup for `source` in `context`.
    #[must_use]
    pub fn new(context: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            disambiguation: None,
            args: Vec::new(),
        }
    }

    /// Require an exact disambiguation match.
    #[must_use]
    pub fn disambiguation(mut self, disambiguation: impl Into<String>) -> Self {
        self.disambiguation = Some(disambiguation.into());
        self
    }

    /// Append the next positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl fmt::Display) -> Self {
        self.args.push(value.to_string());
        self
    }

    /// Context name.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Positional arguments in order.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Resolve against `catalog`.
    #[must_use]
    pub fn resolve(&self, catalog: &Catalog) -> String {
        self.resolve_detailed(catalog).text
    }

    /// Resolve against `catalog`, reporting which rule applied.
    #[must_use]
    pub fn resolve_detailed(&self, catalog: &Catalog) -> Resolution {
        resolve_detailed(
            catalog,
            &self.context,
            &self.source,
            self.disambiguation.as_deref(),
            &self.args,
        )
    }
}
