//! Substring filtering over the dataset.
//!
//! Deliberately simple: linear scan, case-insensitive `contains` on the
//! question and the raw answer markup, dataset order preserved. No
//! tokenization, ranking, or fuzzy matching.

use crate::types::QaItem;

/// The items whose question OR answer contains `query` case-insensitively.
///
/// Returns borrowed items in dataset order. The answer is matched as raw
/// markup, so a query can also hit text inside tags.
pub fn matching_items<'a>(items: &'a [QaItem], query: &str) -> Vec<&'a QaItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.question.to_lowercase().contains(&needle)
                || item.answer.to_lowercase().contains(&needle)
        })
        .collect()
}
