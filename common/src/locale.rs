//! Locale selection across explicit, environment, and configured sources.

use std::fmt;

use log::{debug, warn};

/// Environment variable consulted for a locale override.
pub const LOCALE_ENV_VAR: &str = "TSLOC_LOCALE";

const LOG_TARGET: &str = "tsloc::locale";

/// Source for a resolved locale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// Locale supplied explicitly by the caller.
    ExplicitArgument,
    /// Locale sourced from the `TSLOC_LOCALE` environment variable.
    EnvironmentVariable,
    /// Locale taken from the shared configuration.
    Configuration,
    /// Configured fallback locale.
    Fallback,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitArgument => formatter.write_str("explicit locale override"),
            Self::EnvironmentVariable => formatter.write_str(LOCALE_ENV_VAR),
            Self::Configuration => formatter.write_str("configuration locale"),
            Self::Fallback => formatter.write_str("fallback locale"),
        }
    }
}

/// Outcome of locale resolution including provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleSelection {
    locale: String,
    source: LocaleSource,
    requested: Option<String>,
}

impl LocaleSelection {
    fn new(locale: &str, source: LocaleSource, requested: Option<String>) -> Self {
        Self {
            locale: locale.to_owned(),
            source,
            requested,
        }
    }

    /// Returns the resolved locale tag.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the effective locale source.
    #[must_use]
    pub const fn source(&self) -> LocaleSource {
        self.source
    }

    /// Returns the locale requested by the resolved source, if any.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// Whether the fallback locale was used.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.source == LocaleSource::Fallback
    }

    /// Emit a debug log summarising the resolved locale.
    pub fn log_outcome(&self, target: &str) {
        debug!(
            target: target,
            "resolved {} to `{}`",
            self.source(),
            self.locale(),
        );
    }
}

fn try_candidate(
    source: LocaleSource,
    raw: Option<&str>,
    fallback: &str,
    supports: &impl Fn(&str) -> bool,
) -> Option<LocaleSelection> {
    let candidate = normalise_locale(raw)?;

    if supports(candidate) {
        return Some(LocaleSelection::new(
            candidate,
            source,
            Some(candidate.to_owned()),
        ));
    }

    warn!(
        target: LOG_TARGET,
        "skipping unsupported {source} `{candidate}`; falling back to {fallback}",
    );

    None
}

/// Resolve a locale using explicit, environment, and configuration overrides.
///
/// Candidates are considered in order:
///
/// 1. The explicit locale supplied by the caller.
/// 2. The `TSLOC_LOCALE` environment variable.
/// 3. The configured locale.
/// 4. `fallback` when no candidate is supported.
///
/// `supports` decides whether a candidate has a catalog available.
///
/// ```
/// use tsloc_common::{LocaleSource, resolve_locale};
///
/// let selection = resolve_locale(Some("fr"), None, Some("de"), "en", |locale| locale == "de");
/// assert_eq!(selection.locale(), "de");
/// assert_eq!(selection.source(), LocaleSource::Configuration);
/// ```
#[must_use]
pub fn resolve_locale(
    explicit: Option<&str>,
    environment: Option<String>,
    configuration: Option<&str>,
    fallback: &str,
    supports: impl Fn(&str) -> bool,
) -> LocaleSelection {
    let candidates = [
        (LocaleSource::ExplicitArgument, explicit),
        (LocaleSource::EnvironmentVariable, environment.as_deref()),
        (LocaleSource::Configuration, configuration),
    ];

    let selection = candidates
        .into_iter()
        .find_map(|(source, raw)| try_candidate(source, raw, fallback, &supports))
        .unwrap_or_else(|| LocaleSelection::new(fallback, LocaleSource::Fallback, None));

    selection.log_outcome(LOG_TARGET);
    selection
}

/// Trim whitespace and discard empty locale candidates.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input
        .map(str::trim)
        .and_then(|value| if value.is_empty() { None } else { Some(value) })
}
