//! Core types: the question/answer record and the widget display state.

use serde::{Deserialize, Serialize};

/// One question/answer record in the dataset.
///
/// The dataset's interchange format is a JSON array of these records,
/// produced by the [`crate::indexer`] module or supplied directly by the
/// host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaItem {
    /// The question text. Treated as plain text: rendered escaped, so
    /// markup in a question cannot inject into the page.
    pub question: String,
    /// The answer as HTML markup. Trusted content from the curated
    /// dataset; rendered verbatim after image path correction.
    pub answer: String,
}

impl QaItem {
    /// Construct a record from question text and answer markup.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// What the widget's results panel currently shows.
///
/// The widget moves `Idle → Loading → Rendered`/`Unavailable`; every
/// failure path is a view rather than an error, so the widget stays
/// usable for the next query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    /// No query (blank or whitespace-only input) — a prompt is shown.
    Idle,
    /// A query is in flight, waiting for the dataset to become available.
    /// The results panel is empty while loading.
    Loading,
    /// The dataset never arrived within the polling budget.
    Unavailable,
    /// Search completed. Matches are in dataset order; an empty list
    /// renders as a "no matches" message.
    Rendered(Vec<QaItem>),
}

impl SearchView {
    /// True if this view holds at least one match.
    pub fn has_matches(&self) -> bool {
        matches!(self, Self::Rendered(items) if !items.is_empty())
    }
}
