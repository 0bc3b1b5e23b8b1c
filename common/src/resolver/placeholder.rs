//! Positional `%1`…`%9` substitution.
//!
//! Substitution is a single left-to-right pass: replaced values are copied
//! verbatim and never rescanned. Markers without a matching argument, `%0`,
//! and a `%` that is not followed by a digit are all emitted unchanged.

use std::borrow::Cow;

/// Replace each `%N` marker in `template` with `args[N - 1]`.
///
/// Only single-digit markers are recognised, so `%12` is marker `%1`
/// followed by a literal `2`. `%%` is not an escape.
///
/// ```
/// use tsloc_common::substitute;
///
/// assert_eq!(substitute("Export options for %1 writer", &["Silo"]), "Export options for Silo writer");
/// assert_eq!(substitute("Export options for %1 writer", &[] as &[&str]), "Export options for %1 writer");
/// assert_eq!(substitute("100% done", &["x"]), "100% done");
/// ```
#[must_use]
pub fn substitute<'t, S: AsRef<str>>(template: &'t str, args: &[S]) -> Cow<'t, str> {
    if !template.contains('%') {
        return Cow::Borrowed(template);
    }

    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            result.push(ch);
            continue;
        }

        let argument = chars
            .peek()
            .and_then(|next| next.to_digit(10))
            .filter(|&index| index > 0)
            .and_then(|index| usize::try_from(index - 1).ok())
            .and_then(|index| args.get(index));

        match argument {
            Some(value) => {
                chars.next();
                result.push_str(value.as_ref());
            }
            None => result.push('%'),
        }
    }

    Cow::Owned(result)
}

/// Highest marker index used in `template`, or `0` when there are none.
#[must_use]
pub fn highest_marker(template: &str) -> u32 {
    let mut highest = 0;
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '%' {
            if let Some(index) = chars.peek().and_then(|next| next.to_digit(10)) {
                highest = highest.max(index);
                chars.next();
            }
        }
    }
    highest
}
