//! In-memory catalog of contexts and messages.
//!
//! A [`Catalog`] is built once per locale and then shared read-only. Within
//! a [`Context`] every `(source, disambiguation)` pair is unique: inserting a
//! message whose key already exists replaces the earlier message in place, so
//! the last write wins while the first occurrence keeps its ordinal position.

use std::collections::HashMap;

mod message;

pub use message::{Location, Message, MessageKey, MessageStatus, UnknownStatus};

/// A named group of messages, usually one UI component.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Context {
    name: String,
    messages: Vec<Message>,
    index: HashMap<MessageKey, usize>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The context name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert `message`, returning the message it replaced, if any.
    pub fn insert(&mut self, message: Message) -> Option<Message> {
        if let Some(slot) = self
            .index
            .get(message.key())
            .and_then(|&position| self.messages.get_mut(position))
        {
            return Some(std::mem::replace(slot, message));
        }

        self.index.insert(message.key().clone(), self.messages.len());
        self.messages.push(message);
        None
    }

    /// Messages in ordinal order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Exact lookup by source and disambiguation.
    #[must_use]
    pub fn get(&self, source: &str, disambiguation: Option<&str>) -> Option<&Message> {
        let key = MessageKey::new(source, disambiguation.map(str::to_owned));
        self.index
            .get(&key)
            .and_then(|&position| self.messages.get(position))
    }

    /// Find the message for `source`.
    ///
    /// With a disambiguation only the exact key matches. Without one, the
    /// lowest-ordinal message sharing `source` is returned regardless of its
    /// comment; callers are expected to pass a disambiguation whenever the
    /// source text is genuinely ambiguous.
    #[must_use]
    pub fn find(&self, source: &str, disambiguation: Option<&str>) -> Option<&Message> {
        match disambiguation {
            Some(_) => self.get(source, disambiguation),
            None => self
                .messages
                .iter()
                .find(|message| message.source() == source),
        }
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the context has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Every context loaded from one translation resource.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    language: Option<String>,
    source_language: Option<String>,
    contexts: Vec<Context>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog. Every lookup against it falls back to the
    /// source text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target language tag (the `language` attribute of `<TS>`).
    #[must_use]
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    /// Set the source language tag (the `sourcelanguage` attribute).
    #[must_use]
    pub fn with_source_language(mut self, language: Option<String>) -> Self {
        self.source_language = language;
        self
    }

    /// Target language, as written in the resource.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Source language, as written in the resource.
    #[must_use]
    pub fn source_language(&self) -> Option<&str> {
        self.source_language.as_deref()
    }

    /// Insert a message into `context`, creating the context on first use.
    ///
    /// Returns the message that was replaced when the key already existed.
    ///
    /// ```
    /// use tsloc_common::{Catalog, Message, MessageStatus};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.insert("ClipPlane", Message::new("Plane %1", "", MessageStatus::Obsolete));
    /// let replaced = catalog.insert(
    ///     "ClipPlane",
    ///     Message::new("Plane %1", "Ebene %1", MessageStatus::Unfinished),
    /// );
    ///
    /// assert!(replaced.is_some());
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn insert(&mut self, context: &str, message: Message) -> Option<Message> {
        let position = self.context_position(context);
        self.contexts
            .get_mut(position)
            .and_then(|target| target.insert(message))
    }

    /// Merge a whole context. Messages are inserted one by one, so keys that
    /// already exist are overwritten. A context without messages is still
    /// recorded.
    pub fn merge_context(&mut self, context: Context) {
        let position = self.context_position(&context.name);
        if let Some(target) = self.contexts.get_mut(position) {
            for message in context.messages {
                target.insert(message);
            }
        }
    }

    fn context_position(&mut self, name: &str) -> usize {
        if let Some(&position) = self.index.get(name) {
            return position;
        }

        let position = self.contexts.len();
        self.contexts.push(Context::new(name));
        self.index.insert(name.to_owned(), position);
        position
    }

    /// Look up a context by name.
    #[must_use]
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.index
            .get(name)
            .and_then(|&position| self.contexts.get(position))
    }

    /// Contexts in first-appearance order.
    #[must_use]
    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    /// Find a message; see [`Context::find`] for the tie-break rule.
    #[must_use]
    pub fn find(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
    ) -> Option<&Message> {
        self.context(context)
            .and_then(|found| found.find(source, disambiguation))
    }

    /// Iterate over `(context name, message)` pairs in file order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts.iter().flat_map(|context| {
            context
                .messages
                .iter()
                .map(move |message| (context.name(), message))
        })
    }

    /// Total number of messages across all contexts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contexts.iter().map(Context::len).sum()
    }

    /// Whether the catalog holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.iter().all(Context::is_empty)
    }
}
