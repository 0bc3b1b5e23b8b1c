//! Translation completeness statistics.
//!
//! A report counts messages per context by how the resolver would treat
//! them, and flags translations whose placeholder markers disagree with
//! their source.

use crate::catalog::{Catalog, Message, MessageStatus};
use crate::resolver::highest_marker;

/// Message counts grouped by resolution behaviour.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    /// Finished messages.
    pub finished: usize,
    /// Unfinished messages that already carry a translation.
    pub partial: usize,
    /// Unfinished messages with an empty translation.
    pub untranslated: usize,
    /// Obsolete messages.
    pub obsolete: usize,
}

impl Tally {
    fn record(&mut self, message: &Message) {
        match message.status() {
            MessageStatus::Finished => self.finished += 1,
            MessageStatus::Unfinished if message.translation().is_empty() => {
                self.untranslated += 1;
            }
            MessageStatus::Unfinished => self.partial += 1,
            MessageStatus::Obsolete => self.obsolete += 1,
        }
    }

    fn absorb(&mut self, other: Self) {
        self.finished += other.finished;
        self.partial += other.partial;
        self.untranslated += other.untranslated;
        self.obsolete += other.obsolete;
    }

    /// All counted messages.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.finished + self.partial + self.untranslated + self.obsolete
    }

    /// Messages that are not obsolete.
    #[must_use]
    pub const fn active(&self) -> usize {
        self.finished + self.partial + self.untranslated
    }

    /// Finished messages as a percentage (0.0–100.0) of the active ones.
    ///
    /// An empty set counts as complete.
    #[must_use]
    pub fn percent_finished(&self) -> f32 {
        let active = self.active();
        if active == 0 {
            100.0
        } else {
            self.finished as f32 / active as f32 * 100.0
        }
    }
}

/// Completeness of a single context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContextReport {
    /// Context name.
    pub name: String,
    /// Message counts for the context.
    pub tally: Tally,
}

/// A used translation whose highest `%N` marker differs from its source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlaceholderMismatch {
    /// Context holding the message.
    pub context: String,
    /// Source text of the message.
    pub source: String,
    /// Highest marker in the source.
    pub expected: u32,
    /// Highest marker in the translation.
    pub found: u32,
}

/// Completeness statistics for a whole catalog.
///
/// ```
/// use tsloc_common::{Catalog, CompletenessReport, Message, MessageStatus};
///
/// let mut catalog = Catalog::new();
/// catalog.insert("A", Message::new("Open", "Öffnen", MessageStatus::Finished));
/// catalog.insert("A", Message::new("Close", "", MessageStatus::Unfinished));
///
/// let report = CompletenessReport::from_catalog(&catalog);
/// assert_eq!(report.total.finished, 1);
/// assert_eq!(report.total.untranslated, 1);
/// assert!((report.total.percent_finished() - 50.0).abs() < f32::EPSILON);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompletenessReport {
    /// Per-context statistics in catalog order.
    pub contexts: Vec<ContextReport>,
    /// Statistics across every context.
    pub total: Tally,
    /// Translations whose markers disagree with their source.
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
}

impl CompletenessReport {
    /// Build a report for `catalog`.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut report = Self::default();

        for context in catalog.contexts() {
            let mut tally = Tally::default();
            for message in context.messages() {
                tally.record(message);
                if let Some(mismatch) = placeholder_mismatch(context.name(), message) {
                    report.placeholder_mismatches.push(mismatch);
                }
            }
            report.total.absorb(tally);
            report.contexts.push(ContextReport {
                name: context.name().to_owned(),
                tally,
            });
        }

        report
    }

    /// Statistics for the context called `name`.
    #[must_use]
    pub fn context(&self, name: &str) -> Option<&ContextReport> {
        self.contexts.iter().find(|context| context.name == name)
    }
}

fn placeholder_mismatch(context: &str, message: &Message) -> Option<PlaceholderMismatch> {
    let used = match message.status() {
        MessageStatus::Finished => true,
        MessageStatus::Unfinished => !message.translation().is_empty(),
        MessageStatus::Obsolete => false,
    };
    if !used {
        return None;
    }

    let expected = highest_marker(message.source());
    let found = highest_marker(message.translation());
    (expected != found).then(|| PlaceholderMismatch {
        context: context.to_owned(),
        source: message.source().to_owned(),
        expected,
        found,
    })
}
