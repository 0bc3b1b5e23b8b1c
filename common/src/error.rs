//! Error types for catalog loading and lookup.
//!
//! Data-quality gaps such as missing translations never surface here; the
//! resolver recovers from them by falling back to the source text. The
//! variants below describe conditions the host application has to act on.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Reason a translation resource could not be parsed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// The resource is not valid UTF-8.
    #[error("resource is not valid UTF-8: {reason}")]
    InvalidUtf8 {
        /// Decoder message.
        reason: String,
    },

    /// The markup itself is malformed (bad tag, mismatched end tag, bad
    /// entity).
    #[error("malformed markup: {reason}")]
    Syntax {
        /// Message reported by the markup reader.
        reason: String,
    },

    /// The document has no `<TS>` root element.
    #[error("missing <TS> root element")]
    MissingRoot,

    /// The document root is not `<TS>`.
    #[error("unexpected root element <{element}>")]
    UnexpectedRoot {
        /// Name of the element found instead.
        element: String,
    },

    /// An element was still open when the input ended.
    #[error("unterminated <{element}> block")]
    Unterminated {
        /// Innermost open element.
        element: String,
    },

    /// A structural element appeared outside its expected parent.
    #[error("<{element}> is not allowed inside <{parent}>")]
    Misplaced {
        /// The misplaced element.
        element: String,
        /// Its actual parent.
        parent: String,
    },

    /// A `<context>` block has no `<name>`.
    #[error("context without a <name>")]
    MissingContextName,

    /// A `<message>` block has no `<source>`.
    #[error("message without a <source> in context `{context}`")]
    MissingSource {
        /// Context containing the message.
        context: String,
    },

    /// A `<translation>` carries an unrecognised `type` attribute.
    #[error("unknown translation type `{value}`")]
    UnknownStatus {
        /// Raw attribute value.
        value: String,
    },
}

/// Fatal load-time failure, positioned within the resource.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{kind} at {position}")]
pub struct ParseError {
    position: Position,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) const fn new(position: Position, kind: ParseErrorKind) -> Self {
        Self { position, kind }
    }

    /// Where the problem was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// What went wrong.
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// One-based line and column within a resource.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// Compute the position of byte `offset` within `text`.
    ///
    /// Offsets past the end of `text`, or inside a multi-byte character,
    /// are clamped to the nearest preceding character boundary.
    #[must_use]
    pub fn at_offset(text: &str, offset: usize) -> Self {
        let mut boundary = offset.min(text.len());
        while !text.is_char_boundary(boundary) {
            boundary -= 1;
        }
        let prefix = text.get(..boundary).unwrap_or(text);
        let line = prefix.matches('\n').count() + 1;
        let column = prefix
            .rsplit('\n')
            .next()
            .map_or(0, |tail| tail.chars().count())
            + 1;

        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "line {}, column {}", self.line, self.column)
    }
}

/// Errors raised by catalog loading, discovery, and installed lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A lookup was attempted before any catalog was installed.
    #[error("no translation catalog has been installed")]
    CatalogNotLoaded,

    /// The resource could not be parsed.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Resource that failed to parse.
        path: Utf8PathBuf,
        /// Underlying parse failure.
        #[source]
        source: ParseError,
    },

    /// The resource could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Resource that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// No translation file exists for the requested locale.
    #[error("no translation file for locale `{locale}` in {directory}")]
    LocaleNotFound {
        /// Locale that was requested.
        locale: String,
        /// Directory that was searched.
        directory: Utf8PathBuf,
    },

    /// The locale tag could not be parsed.
    #[error("invalid locale `{locale}`")]
    InvalidLocale {
        /// Raw locale tag.
        locale: String,
    },

    /// Scanning a translation directory failed.
    #[error("failed to scan translations matching {pattern}: {reason}")]
    Directory {
        /// Glob pattern used for the scan.
        pattern: String,
        /// Description of the failure.
        reason: String,
    },
}
