//! Parse Qt Linguist `.ts` resources into a [`Catalog`].
//!
//! The loader walks the markup with `quick-xml`, keeping a stack of open
//! elements so structural mistakes (unterminated blocks, messages outside a
//! context, a missing `<source>`) are reported with a line and column. It
//! never returns a partially populated catalog: the first error aborts the
//! load.
//!
//! Characters XML 1.0 cannot carry are written by Linguist as
//! `<byte value="xNN"/>` and are decoded back into the surrounding text.
//! Other elements the runtime has no use for (`oldsource`, length
//! variants, …) are skipped.

use camino::Utf8Path;
use log::debug;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::catalog::{Catalog, Context, Location, Message, MessageStatus};
use crate::error::{CatalogError, ParseError, ParseErrorKind, Position};

const LOG_TARGET: &str = "tsloc::loader";

/// Parse a complete translation resource.
///
/// ```
/// use tsloc_common::{MessageStatus, load};
///
/// let catalog = load(r#"<TS version="2.1" language="de">
///   <context>
///     <name>AddOperatorAction</name>
///     <message>
///       <source>Add operator</source>
///       <translation>Operator hinzufügen</translation>
///     </message>
///   </context>
/// </TS>"#.as_bytes())?;
///
/// let message = catalog.find("AddOperatorAction", "Add operator", None).unwrap();
/// assert_eq!(message.status(), MessageStatus::Finished);
/// # Ok::<(), tsloc_common::ParseError>(())
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] when the input is not UTF-8, the markup is
/// malformed, or a required element is missing.
pub fn load(bytes: &[u8]) -> Result<Catalog, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|error| {
        let valid = bytes
            .get(..error.valid_up_to())
            .and_then(|prefix| std::str::from_utf8(prefix).ok())
            .unwrap_or_default();
        ParseError::new(
            Position::at_offset(valid, valid.len()),
            ParseErrorKind::InvalidUtf8 {
                reason: error.to_string(),
            },
        )
    })?;

    load_str(text)
}

/// Parse a translation resource that is already decoded.
///
/// # Errors
///
/// See [`load`].
pub fn load_str(text: &str) -> Result<Catalog, ParseError> {
    let catalog = Parser::new(text).run()?;

    debug!(
        target: LOG_TARGET,
        "loaded {} messages across {} contexts (language {})",
        catalog.len(),
        catalog.contexts().len(),
        catalog.language().unwrap_or("unspecified"),
    );

    Ok(catalog)
}

/// Read and parse a translation resource from disk.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be read and
/// [`CatalogError::Parse`] when its contents are malformed.
pub fn load_file(path: &Utf8Path) -> Result<Catalog, CatalogError> {
    let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load(&bytes).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Field {
    ContextName,
    Source,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
}

#[derive(Debug)]
struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

/// Failure located by byte offset; converted to a [`Position`] only once an
/// error actually escapes, so successful loads never scan for line breaks.
#[derive(Debug)]
struct Failure {
    offset: usize,
    kind: ParseErrorKind,
}

impl Failure {
    const fn new(offset: usize, kind: ParseErrorKind) -> Self {
        Self { offset, kind }
    }

    fn syntax(offset: usize, error: &impl std::fmt::Display) -> Self {
        Self::new(
            offset,
            ParseErrorKind::Syntax {
                reason: error.to_string(),
            },
        )
    }
}

#[derive(Debug)]
struct ContextDraft {
    start: usize,
    name: Option<String>,
    messages: Vec<Message>,
}

#[derive(Debug)]
struct MessageDraft {
    start: usize,
    source: Option<String>,
    comment: Option<String>,
    extra_comment: Option<String>,
    translator_comment: Option<String>,
    translation: Option<String>,
    status: MessageStatus,
    numerus_forms: Vec<String>,
    locations: Vec<Location>,
}

impl MessageDraft {
    const fn new(start: usize) -> Self {
        Self {
            start,
            source: None,
            comment: None,
            extra_comment: None,
            translator_comment: None,
            translation: None,
            status: MessageStatus::Unfinished,
            numerus_forms: Vec::new(),
            locations: Vec::new(),
        }
    }

    fn build(self, source: String) -> Message {
        let message = Message::new(source, self.translation.unwrap_or_default(), self.status)
            .with_locations(self.locations)
            .with_extra_comment(self.extra_comment)
            .with_translator_comment(self.translator_comment)
            .with_numerus_forms(self.numerus_forms);

        match self.comment {
            Some(comment) => message.with_disambiguation(comment),
            None => message,
        }
    }
}

struct Parser<'a> {
    text: &'a str,
    reader: Reader<&'a [u8]>,
    open: Vec<String>,
    captures: Vec<Capture>,
    catalog: Option<Catalog>,
    context: Option<ContextDraft>,
    message: Option<MessageDraft>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        let mut reader = Reader::from_str(text);
        let config = reader.config_mut();
        config.trim_text(false);
        config.expand_empty_elements = true;
        config.check_end_names = true;

        Self {
            text,
            reader,
            open: Vec::new(),
            captures: Vec::new(),
            catalog: None,
            context: None,
            message: None,
        }
    }

    fn run(mut self) -> Result<Catalog, ParseError> {
        let text = self.text;
        self.walk().map_err(|failure| {
            ParseError::new(Position::at_offset(text, failure.offset), failure.kind)
        })
    }

    fn walk(&mut self) -> Result<Catalog, Failure> {
        loop {
            let offset = self.offset(self.reader.buffer_position());
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(error) => {
                    let at = self.offset(self.reader.error_position());
                    return Err(Failure::syntax(at, &error));
                }
            };

            match event {
                Event::Start(start) => self.open_element(&start, offset)?,
                Event::Empty(start) => {
                    self.open_element(&start, offset)?;
                    self.close_element(offset)?;
                }
                Event::End(_) => self.close_element(offset)?,
                Event::Text(text) => {
                    let decoded = text
                        .unescape()
                        .map_err(|error| Failure::syntax(offset, &error))?;
                    self.append_text(&decoded);
                }
                Event::CData(data) => {
                    let raw = data.into_inner();
                    self.append_text(&String::from_utf8_lossy(&raw));
                }
                Event::Eof => return self.finish(offset),
                _ => {}
            }
        }
    }

    fn offset<T>(&self, raw: T) -> usize
    where
        usize: TryFrom<T>,
    {
        usize::try_from(raw).unwrap_or(self.text.len())
    }

    fn open_element(&mut self, start: &BytesStart<'_>, offset: usize) -> Result<(), Failure> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let parent = self.open.last().cloned();

        match (parent.as_deref(), name.as_str()) {
            (None, "TS") if self.catalog.is_none() => {
                let language = attribute(start, "language", offset)?;
                let source_language = attribute(start, "sourcelanguage", offset)?;
                self.catalog = Some(
                    Catalog::new()
                        .with_language(language)
                        .with_source_language(source_language),
                );
            }
            (None, _) => {
                return Err(Failure::new(
                    offset,
                    ParseErrorKind::UnexpectedRoot { element: name },
                ));
            }
            (Some("TS"), "context") => {
                self.context = Some(ContextDraft {
                    start: offset,
                    name: None,
                    messages: Vec::new(),
                });
            }
            (Some("context"), "name") => self.begin_capture(Field::ContextName),
            (Some("context"), "message") => self.message = Some(MessageDraft::new(offset)),
            (Some("message"), "source") => self.begin_capture(Field::Source),
            (Some("message"), "comment") => self.begin_capture(Field::Comment),
            (Some("message"), "extracomment") => self.begin_capture(Field::ExtraComment),
            (Some("message"), "translatorcomment") => {
                self.begin_capture(Field::TranslatorComment);
            }
            (Some("message"), "translation") => {
                let raw = attribute(start, "type", offset)?;
                let status = MessageStatus::from_attribute(raw.as_deref()).map_err(|error| {
                    Failure::new(offset, ParseErrorKind::UnknownStatus { value: error.0 })
                })?;
                if let Some(message) = self.message.as_mut() {
                    message.status = status;
                    message.translation = Some(String::new());
                }
                self.begin_capture(Field::Translation);
            }
            (Some("message"), "location") => {
                let location = Location {
                    filename: attribute(start, "filename", offset)?,
                    line: attribute(start, "line", offset)?,
                };
                if let Some(message) = self.message.as_mut() {
                    message.locations.push(location);
                }
            }
            (Some("translation"), "numerusform") => self.begin_capture(Field::NumerusForm),
            (Some(_), "byte") if self.capturing() => {
                let decoded = byte_value(start, offset)?;
                self.append_text(decoded.encode_utf8(&mut [0; 4]));
            }
            (Some(parent), "context" | "message") => {
                return Err(Failure::new(
                    offset,
                    ParseErrorKind::Misplaced {
                        element: name,
                        parent: parent.to_owned(),
                    },
                ));
            }
            _ => {}
        }

        self.open.push(name);
        Ok(())
    }

    fn close_element(&mut self, offset: usize) -> Result<(), Failure> {
        let depth = self.open.len();
        if self
            .captures
            .last()
            .is_some_and(|capture| capture.depth == depth)
        {
            if let Some(capture) = self.captures.pop() {
                self.commit(capture);
            }
        }

        let Some(name) = self.open.pop() else {
            return Err(Failure::new(
                offset,
                ParseErrorKind::Syntax {
                    reason: String::from("unexpected end tag"),
                },
            ));
        };

        match name.as_str() {
            "message" => self.finish_message(),
            "context" => self.finish_context(),
            _ => Ok(()),
        }
    }

    fn begin_capture(&mut self, field: Field) {
        self.captures.push(Capture {
            field,
            depth: self.open.len() + 1,
            text: String::new(),
        });
    }

    fn capturing(&self) -> bool {
        self.captures
            .last()
            .is_some_and(|capture| capture.depth == self.open.len())
    }

    fn append_text(&mut self, text: &str) {
        let depth = self.open.len();
        if let Some(capture) = self
            .captures
            .last_mut()
            .filter(|capture| capture.depth == depth)
        {
            capture.text.push_str(text);
        }
    }

    fn commit(&mut self, capture: Capture) {
        let Capture { field, text, .. } = capture;

        if field == Field::ContextName {
            if let Some(context) = self.context.as_mut() {
                context.name = Some(text);
            }
            return;
        }

        let Some(message) = self.message.as_mut() else {
            return;
        };
        match field {
            Field::Source => message.source = Some(text),
            Field::Comment => message.comment = Some(text),
            Field::ExtraComment => message.extra_comment = Some(text),
            Field::TranslatorComment => message.translator_comment = Some(text),
            Field::Translation => message.translation = Some(text),
            Field::NumerusForm => message.numerus_forms.push(text),
            Field::ContextName => {}
        }
    }

    fn finish_message(&mut self) -> Result<(), Failure> {
        let Some(mut draft) = self.message.take() else {
            return Ok(());
        };
        let Some(context) = self.context.as_mut() else {
            return Ok(());
        };

        let Some(source) = draft.source.take() else {
            return Err(Failure::new(
                draft.start,
                ParseErrorKind::MissingSource {
                    context: context
                        .name
                        .clone()
                        .unwrap_or_else(|| String::from("<unnamed>")),
                },
            ));
        };

        context.messages.push(draft.build(source));
        Ok(())
    }

    fn finish_context(&mut self) -> Result<(), Failure> {
        let Some(draft) = self.context.take() else {
            return Ok(());
        };
        let Some(name) = draft.name else {
            return Err(Failure::new(
                draft.start,
                ParseErrorKind::MissingContextName,
            ));
        };

        let mut context = Context::new(name);
        for message in draft.messages {
            context.insert(message);
        }
        if let Some(catalog) = self.catalog.as_mut() {
            catalog.merge_context(context);
        }
        Ok(())
    }

    fn finish(&mut self, offset: usize) -> Result<Catalog, Failure> {
        if let Some(element) = self.open.last() {
            return Err(Failure::new(
                offset,
                ParseErrorKind::Unterminated {
                    element: element.clone(),
                },
            ));
        }

        self.catalog
            .take()
            .ok_or_else(|| Failure::new(offset, ParseErrorKind::MissingRoot))
    }
}

fn attribute(start: &BytesStart<'_>, name: &str, offset: usize) -> Result<Option<String>, Failure> {
    let Some(raw) = start
        .try_get_attribute(name)
        .map_err(|error| Failure::syntax(offset, &error))?
    else {
        return Ok(None);
    };

    raw.unescape_value()
        .map(|value| Some(value.into_owned()))
        .map_err(|error| Failure::syntax(offset, &error))
}

/// Decode the `value` attribute of a `<byte>` element: `x` followed by hex
/// digits, or a plain decimal code point.
fn byte_value(start: &BytesStart<'_>, offset: usize) -> Result<char, Failure> {
    let invalid = |reason: String| Failure::new(offset, ParseErrorKind::Syntax { reason });

    let value = attribute(start, "value", offset)?
        .ok_or_else(|| invalid(String::from("`byte` element without a `value` attribute")))?;
    let code = match value.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => value.parse::<u32>().ok(),
    };

    code.and_then(char::from_u32)
        .ok_or_else(|| invalid(format!("invalid `byte` value `{value}`")))
}

#[cfg(test)]
mod tests;
