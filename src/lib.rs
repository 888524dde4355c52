//! # qa-widget
//!
//! Embeddable question/answer search for curated documentation pages.
//!
//! This crate builds and drives a minimal search widget over a host-owned
//! dataset of question/answer records. It is a library, not a server — the
//! embedding page supplies the dataset and a mount point, and the widget
//! does the rest.
//!
//! ## Design
//!
//! - The dataset is an explicitly passed, cloneable [`DatasetHandle`]; the
//!   widget only reads, and waits for readiness with a bounded polling
//!   budget (default 100 × 100 ms ≈ 10 s)
//! - Input events are debounced (300 ms quiet period); button/Enter submits
//!   search immediately
//! - Filtering is a linear case-insensitive substring match over question
//!   and answer, dataset order preserved
//! - Matches render as HTML blocks: question text escaped, answer markup
//!   trusted, embedded image paths corrected against the static-asset root
//! - The [`indexer`] module produces the dataset from a Markdown QA
//!   document
//!
//! ## Failure semantics
//!
//! Every search failure resolves to a user-visible view rather than an
//! error — a missing dataset renders a message and the widget stays usable
//! for the next query. Only construction, mounting, and the indexer return
//! `Result`.

pub mod assets;
pub mod config;
pub mod dataset;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod filter;
pub mod indexer;
pub mod render;
pub mod types;
pub mod widget;

pub use config::{WidgetConfig, WidgetMessages};
pub use dataset::DatasetHandle;
pub use error::{Result, WidgetError};
pub use types::{QaItem, SearchView};
pub use widget::SearchWidget;

/// One-shot search against a dataset handle.
///
/// Builds a transient widget over `dataset` and runs a single query.
/// Useful for hosts that manage their own display state and only need
/// the filtered view.
///
/// # Errors
///
/// Returns [`WidgetError::Config`] if `config` is invalid. Dataset
/// unavailability is not an error — it yields
/// [`SearchView::Unavailable`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> qa_widget::Result<()> {
/// let dataset = qa_widget::DatasetHandle::preloaded(vec![
///     qa_widget::QaItem::new("How to install?", "<p>Run the installer.</p>"),
/// ]);
/// let config = qa_widget::WidgetConfig::default();
/// let view = qa_widget::search("install", &dataset, &config).await?;
/// assert!(view.has_matches());
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: &str,
    dataset: &DatasetHandle,
    config: &WidgetConfig,
) -> Result<SearchView> {
    let widget = SearchWidget::new(config.clone(), dataset.clone())?;
    Ok(widget.search(query).await)
}

/// One-shot search with the default configuration.
///
/// Convenience wrapper around [`search`] using
/// [`WidgetConfig::default()`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_default(query: &str, dataset: &DatasetHandle) -> Result<SearchView> {
    search(query, dataset, &WidgetConfig::default()).await
}
