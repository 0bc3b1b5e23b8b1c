//! Message records and their completion status.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Completion marker carried by every translation.
///
/// `.ts` files express the status through the `type` attribute of the
/// `<translation>` element. A missing attribute means the translator marked
/// the message as done.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MessageStatus {
    /// The translation is complete and approved.
    #[default]
    Finished,
    /// The translation is missing or still in progress.
    Unfinished,
    /// The source string no longer exists in the application.
    Obsolete,
}

impl MessageStatus {
    /// Map a `type` attribute value onto a status.
    ///
    /// `None` (no attribute) is [`MessageStatus::Finished`]. Qt 5's
    /// `vanished` marker is folded into [`MessageStatus::Obsolete`].
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStatus`] for any other attribute value.
    pub fn from_attribute(value: Option<&str>) -> Result<Self, UnknownStatus> {
        value.map_or(Ok(Self::Finished), str::parse)
    }

    /// The `type` attribute used when serialising, if any.
    #[must_use]
    pub const fn attribute(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Obsolete => Some("obsolete"),
        }
    }
}

impl FromStr for MessageStatus {
    type Err = UnknownStatus;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "finished" => Ok(Self::Finished),
            "unfinished" => Ok(Self::Unfinished),
            "obsolete" | "vanished" => Ok(Self::Obsolete),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => formatter.write_str("finished"),
            Self::Unfinished => formatter.write_str("unfinished"),
            Self::Obsolete => formatter.write_str("obsolete"),
        }
    }
}

/// Raised when a `type` attribute carries an unrecognised status.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unknown translation type `{0}`")]
pub struct UnknownStatus(pub String);

/// Lookup key identifying a message within one context.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MessageKey {
    source: String,
    disambiguation: Option<String>,
}

impl MessageKey {
    /// Build a key. Empty disambiguation strings are treated as absent.
    #[must_use]
    pub fn new(source: impl Into<String>, disambiguation: Option<String>) -> Self {
        Self {
            source: source.into(),
            disambiguation: disambiguation.filter(|value| !value.is_empty()),
        }
    }

    /// The source text half of the key.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The disambiguation half of the key.
    #[must_use]
    pub fn disambiguation(&self) -> Option<&str> {
        self.disambiguation.as_deref()
    }
}

/// Source-file reference recorded by the extraction tool.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Location {
    /// Path of the file that contains the string, relative to the `.ts` file.
    pub filename: Option<String>,
    /// Line number within `filename`. Qt writes relative offsets such as
    /// `+3`, so the raw attribute text is kept.
    pub line: Option<String>,
}

/// A single source/translation pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    key: MessageKey,
    translation: String,
    status: MessageStatus,
    numerus_forms: Vec<String>,
    locations: Vec<Location>,
    extra_comment: Option<String>,
    translator_comment: Option<String>,
}

impl Message {
    /// Create a message with the given source and translation.
    ///
    /// ```
    /// use tsloc_common::{Message, MessageStatus};
    ///
    /// let message = Message::new("Add operator", "Operator hinzufügen", MessageStatus::Finished);
    /// assert_eq!(message.source(), "Add operator");
    /// assert!(message.disambiguation().is_none());
    /// ```
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        translation: impl Into<String>,
        status: MessageStatus,
    ) -> Self {
        Self {
            key: MessageKey::new(source, None),
            translation: translation.into(),
            status,
            numerus_forms: Vec::new(),
            locations: Vec::new(),
            extra_comment: None,
            translator_comment: None,
        }
    }

    /// Attach a disambiguation comment.
    #[must_use]
    pub fn with_disambiguation(mut self, disambiguation: impl Into<String>) -> Self {
        let source = std::mem::take(&mut self.key.source);
        self.key = MessageKey::new(source, Some(disambiguation.into()));
        self
    }

    /// Attach plural forms. The first form also becomes the translation.
    #[must_use]
    pub fn with_numerus_forms(mut self, forms: Vec<String>) -> Self {
        if let Some(first) = forms.first() {
            self.translation.clone_from(first);
        }
        self.numerus_forms = forms;
        self
    }

    /// Attach source locations.
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    /// Attach the developer note shown to translators.
    #[must_use]
    pub fn with_extra_comment(mut self, comment: Option<String>) -> Self {
        self.extra_comment = comment;
        self
    }

    /// Attach the translator's own note.
    #[must_use]
    pub fn with_translator_comment(mut self, comment: Option<String>) -> Self {
        self.translator_comment = comment;
        self
    }

    /// The lookup key.
    #[must_use]
    pub const fn key(&self) -> &MessageKey {
        &self.key
    }

    /// The canonical source text.
    #[must_use]
    pub fn source(&self) -> &str {
        self.key.source()
    }

    /// The disambiguation comment, if any.
    #[must_use]
    pub fn disambiguation(&self) -> Option<&str> {
        self.key.disambiguation()
    }

    /// The translated text; empty when nothing has been translated yet.
    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// The completion status.
    #[must_use]
    pub const fn status(&self) -> MessageStatus {
        self.status
    }

    /// Whether the message carries plural forms.
    #[must_use]
    pub fn is_numerus(&self) -> bool {
        !self.numerus_forms.is_empty()
    }

    /// Plural forms in file order.
    #[must_use]
    pub fn numerus_forms(&self) -> &[String] {
        &self.numerus_forms
    }

    /// Source locations recorded for the message.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Developer note shown to translators.
    #[must_use]
    pub fn extra_comment(&self) -> Option<&str> {
        self.extra_comment.as_deref()
    }

    /// Translator note.
    #[must_use]
    pub fn translator_comment(&self) -> Option<&str> {
        self.translator_comment.as_deref()
    }
}
