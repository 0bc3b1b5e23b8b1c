//! Serialise a [`Catalog`] back into the `.ts` format.
//!
//! The output follows the element order Linguist itself writes, so files
//! survive a load and save without spurious diffs in those tools. Loading
//! the output yields a catalog equal to the one written. Characters that
//! XML 1.0 cannot carry are written as `<byte value="xNN"/>`, as Linguist
//! does.

use std::io;

use quick_xml::escape::escape;

use crate::catalog::{Catalog, Context, Location, Message};

const INDENT: &str = "    ";

/// Render `catalog` as a `.ts` document.
///
/// ```
/// use tsloc_common::{Catalog, Message, MessageStatus, load_str, to_ts_string};
///
/// let mut catalog = Catalog::new().with_language(Some(String::from("de")));
/// catalog.insert("AddOperatorAction", Message::new("Add operator", "Operator hinzufügen", MessageStatus::Finished));
///
/// let text = to_ts_string(&catalog);
/// assert_eq!(load_str(&text)?, catalog);
/// # Ok::<(), tsloc_common::ParseError>(())
/// ```
#[must_use]
pub fn to_ts_string(catalog: &Catalog) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n");

    out.push_str("<TS version=\"2.1\"");
    push_attribute(&mut out, "language", catalog.language());
    push_attribute(&mut out, "sourcelanguage", catalog.source_language());
    out.push_str(">\n");

    for context in catalog.contexts() {
        push_context(&mut out, context);
    }

    out.push_str("</TS>\n");
    out
}

/// Write `catalog` as a `.ts` document to `writer`.
///
/// # Errors
///
/// Returns any error raised by `writer`.
pub fn write_ts<W: io::Write>(catalog: &Catalog, mut writer: W) -> io::Result<()> {
    writer.write_all(to_ts_string(catalog).as_bytes())?;
    writer.flush()
}

fn push_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    push_element(out, 1, "name", context.name());
    for message in context.messages() {
        push_message(out, message);
    }
    out.push_str("</context>\n");
}

fn push_message(out: &mut String, message: &Message) {
    out.push_str(INDENT);
    out.push_str(if message.is_numerus() {
        "<message numerus=\"yes\">\n"
    } else {
        "<message>\n"
    });

    for location in message.locations() {
        push_location(out, location);
    }
    push_element(out, 2, "source", message.source());
    if let Some(comment) = message.disambiguation() {
        push_element(out, 2, "comment", comment);
    }
    if let Some(comment) = message.extra_comment() {
        push_element(out, 2, "extracomment", comment);
    }
    if let Some(comment) = message.translator_comment() {
        push_element(out, 2, "translatorcomment", comment);
    }
    push_translation(out, message);

    out.push_str(INDENT);
    out.push_str("</message>\n");
}

fn push_location(out: &mut String, location: &Location) {
    out.push_str(&INDENT.repeat(2));
    out.push_str("<location");
    push_attribute(out, "filename", location.filename.as_deref());
    push_attribute(out, "line", location.line.as_deref());
    out.push_str("/>\n");
}

fn push_translation(out: &mut String, message: &Message) {
    out.push_str(&INDENT.repeat(2));
    out.push_str("<translation");
    push_attribute(out, "type", message.status().attribute());
    out.push('>');

    if message.is_numerus() {
        out.push('\n');
        for form in message.numerus_forms() {
            push_element(out, 3, "numerusform", form);
        }
        out.push_str(&INDENT.repeat(2));
    } else {
        push_text(out, message.translation());
    }

    out.push_str("</translation>\n");
}

fn push_element(out: &mut String, depth: usize, name: &str, text: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push('<');
    out.push_str(name);
    out.push('>');
    push_text(out, text);
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

fn push_text(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(index) = rest.find(is_unrepresentable) {
        let (plain, tail) = rest.split_at(index);
        out.push_str(&escape(plain));

        let mut chars = tail.chars();
        if let Some(ch) = chars.next() {
            out.push_str(&format!("<byte value=\"x{:x}\"/>", u32::from(ch)));
        }
        rest = chars.as_str();
    }
    out.push_str(&escape(rest));
}

/// Outside the XML 1.0 `Char` production.
const fn is_unrepresentable(ch: char) -> bool {
    matches!(
        ch,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
    )
}

fn push_attribute(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
}
