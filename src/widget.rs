//! The search widget: mount, input handling, and the search state machine.
//!
//! The widget moves `Idle → Loading → Rendered`/`Unavailable`. Every
//! failure path resolves to a view with a user-visible message, so the
//! widget stays usable for the next query; only `mount` and construction
//! are fallible surfaces.

use std::future::Future;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::config::WidgetConfig;
use crate::dataset::DatasetHandle;
use crate::debounce::Debouncer;
use crate::dom::{nodes_to_html, Element, Node};
use crate::error::{Result, WidgetError};
use crate::filter;
use crate::render;
use crate::types::SearchView;

/// An embeddable question/answer search widget.
///
/// Holds a read-only clone of the dataset handle, the current display
/// state, and the input debouncer. Debounced and submitted searches run
/// as detached tasks that update the shared view slot.
#[derive(Debug)]
pub struct SearchWidget {
    config: WidgetConfig,
    dataset: DatasetHandle,
    view: Arc<RwLock<SearchView>>,
    debounce: Debouncer,
}

impl SearchWidget {
    /// Construct a widget over the given dataset handle.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] if the configuration is invalid.
    pub fn new(config: WidgetConfig, dataset: DatasetHandle) -> Result<Self> {
        config.validate()?;
        let debounce = Debouncer::new(Duration::from_millis(config.debounce_ms));
        Ok(Self {
            config,
            dataset,
            view: Arc::new(RwLock::new(SearchView::Idle)),
            debounce,
        })
    }

    /// The widget's configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Build the widget subtree under the designated container.
    ///
    /// Locates the container by `config.container_id` anywhere under
    /// `page` and appends the search input, button, and results
    /// container. Idempotent: if the input already exists the page is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingContainer`] (after logging a
    /// warning) when the container is absent. The host may ignore the
    /// error; nothing is mounted in that case.
    pub fn mount(&self, page: &mut Element) -> Result<()> {
        let config = &self.config;
        let Some(container) = page.find_by_id_mut(&config.container_id) else {
            tracing::warn!(container = %config.container_id, "mount container not found");
            return Err(WidgetError::MissingContainer(config.container_id.clone()));
        };

        if container.find_by_id(&config.input_id).is_some() {
            tracing::debug!("widget already mounted, skipping rebuild");
            return Ok(());
        }

        let input = Element::new("input")
            .with_attr("type", "text")
            .with_attr("id", config.input_id.as_str())
            .with_attr("placeholder", config.messages.placeholder.as_str());
        let button = Element::new("button")
            .with_attr("id", config.button_id.as_str())
            .with_attr("type", "button")
            .with_text(config.messages.button_label.as_str());
        let results = Element::new("div").with_attr("id", config.results_id.as_str());

        container.append(Node::Element(input));
        container.append(Node::Element(button));
        container.append(Node::Element(results));
        tracing::debug!(container = %config.container_id, "widget mounted");
        Ok(())
    }

    /// Run a search and return the resulting view without touching the
    /// widget's display state.
    ///
    /// A blank (or whitespace-only) query yields [`SearchView::Idle`].
    /// Otherwise the dataset is awaited within the polling budget;
    /// exhaustion yields [`SearchView::Unavailable`], success filters by
    /// case-insensitive substring over question and answer and yields
    /// [`SearchView::Rendered`] with matches in dataset order.
    pub async fn search(&self, query: &str) -> SearchView {
        run_query(&self.config, &self.dataset, query).await
    }

    /// Handle an input change: debounced search after the quiet period.
    ///
    /// Each call aborts and replaces the pending quiet-period timer. A
    /// search that has already started is never cancelled and applies
    /// its view on completion, so when queries overlap a slower older
    /// search can overwrite a newer result.
    pub fn on_query_change(&self, query: &str) {
        self.debounce.schedule(self.search_task(query));
    }

    /// Handle an explicit submit (button click or Enter): immediate,
    /// non-debounced search.
    pub fn submit(&self, query: &str) {
        tokio::spawn(self.search_task(query));
    }

    /// A detached task that runs the query and applies the view.
    fn search_task(&self, query: &str) -> impl Future<Output = ()> + Send + 'static {
        let config = self.config.clone();
        let dataset = self.dataset.clone();
        let view = Arc::clone(&self.view);
        let query = query.to_owned();
        async move {
            store_view(&view, SearchView::Loading);
            let outcome = run_query(&config, &dataset, &query).await;
            store_view(&view, outcome);
        }
    }

    /// Snapshot of the current display state.
    pub fn view(&self) -> SearchView {
        self.view.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The results container's inner HTML for the current view.
    pub fn results_html(&self) -> String {
        nodes_to_html(&render::view_nodes(&self.view(), &self.config))
    }

    /// Write the current view into the mounted results container.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingContainer`] if the results container
    /// is not in the page (the widget was never mounted there).
    pub fn sync(&self, page: &mut Element) -> Result<()> {
        let nodes = render::view_nodes(&self.view(), &self.config);
        let Some(results) = page.find_by_id_mut(&self.config.results_id) else {
            tracing::warn!(results = %self.config.results_id, "results container not found");
            return Err(WidgetError::MissingContainer(self.config.results_id.clone()));
        };
        results.clear_children();
        for node in nodes {
            results.append(node);
        }
        Ok(())
    }
}

/// The search pipeline shared by direct, debounced, and submitted paths.
async fn run_query(config: &WidgetConfig, dataset: &DatasetHandle, query: &str) -> SearchView {
    let query = query.trim();
    if query.is_empty() {
        return SearchView::Idle;
    }

    let interval = Duration::from_millis(config.poll_interval_ms);
    match dataset.wait(config.poll_attempts, interval).await {
        Ok(items) => {
            let matches: Vec<_> = filter::matching_items(&items, query)
                .into_iter()
                .cloned()
                .collect();
            tracing::debug!(matches = matches.len(), "search completed");
            SearchView::Rendered(matches)
        }
        Err(err) => {
            tracing::warn!(error = %err, "search could not reach the dataset");
            SearchView::Unavailable
        }
    }
}

fn store_view(view: &Arc<RwLock<SearchView>>, value: SearchView) {
    *view.write().unwrap_or_else(|e| e.into_inner()) = value;
}
