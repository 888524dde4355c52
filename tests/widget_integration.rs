//! Integration tests for the full widget pipeline.
//!
//! These tests exercise mount → publish → search → render → sync against
//! an in-memory page tree, plus the indexer → loader script → widget
//! round trip. No external resources.

use std::time::Duration;

use qa_widget::dom::{Element, Node};
use qa_widget::{indexer, DatasetHandle, QaItem, SearchView, SearchWidget, WidgetConfig};
use scraper::{Html, Selector};

fn fast_config() -> WidgetConfig {
    WidgetConfig {
        debounce_ms: 5,
        poll_attempts: 5,
        poll_interval_ms: 2,
        ..Default::default()
    }
}

fn page_with_container() -> Element {
    let mut page = Element::new("body");
    page.append(Node::Element(
        Element::new("div").with_attr("id", "search-box-container"),
    ));
    page
}

fn install_dataset() -> Vec<QaItem> {
    vec![QaItem::new(
        "How to install?",
        "See <img src='images/a.png'>",
    )]
}

#[tokio::test]
async fn mount_search_sync_renders_corrected_result() {
    let dataset = DatasetHandle::preloaded(install_dataset());
    let widget = SearchWidget::new(fast_config(), dataset).expect("valid config");

    let mut page = page_with_container();
    widget.mount(&mut page).expect("container present");

    let view = widget.search("install").await;
    match &view {
        SearchView::Rendered(items) => assert_eq!(items.len(), 1),
        other => panic!("expected Rendered, got {other:?}"),
    }

    widget.submit("install");
    tokio::time::sleep(Duration::from_millis(60)).await;
    widget.sync(&mut page).expect("results container mounted");

    let html = page.to_html();
    assert!(html.contains("class=\"qa-result-item\""));
    assert!(html.contains("How to install?"));
    assert!(html.contains("src='_static/images/a.png'"));
}

#[tokio::test]
async fn rendered_markup_has_expected_structure() {
    let dataset = DatasetHandle::preloaded(install_dataset());
    let widget = SearchWidget::new(fast_config(), dataset).expect("valid config");

    widget.submit("install");
    tokio::time::sleep(Duration::from_millis(60)).await;

    let fragment = Html::parse_fragment(&widget.results_html());

    let heading_selector = Selector::parse(".qa-result-item h3").expect("valid selector");
    let headings: Vec<String> = fragment
        .select(&heading_selector)
        .map(|el| el.text().collect::<String>())
        .collect();
    assert_eq!(headings, vec!["How to install?"]);

    let img_selector = Selector::parse(".qa-result-item img").expect("valid selector");
    let sources: Vec<&str> = fragment
        .select(&img_selector)
        .filter_map(|el| el.value().attr("src"))
        .collect();
    assert_eq!(sources, vec!["_static/images/a.png"]);
}

#[tokio::test]
async fn question_markup_cannot_inject() {
    let dataset = DatasetHandle::preloaded(vec![QaItem::new(
        "<script>alert('q')</script>",
        "<p>safe</p>",
    )]);
    let widget = SearchWidget::new(fast_config(), dataset).expect("valid config");

    let view = widget.search("alert").await;
    assert!(view.has_matches());

    widget.submit("alert");
    tokio::time::sleep(Duration::from_millis(60)).await;

    let html = widget.results_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn late_publish_within_budget_is_found() {
    let dataset = DatasetHandle::new();
    let config = WidgetConfig {
        poll_attempts: 50,
        poll_interval_ms: 2,
        ..Default::default()
    };
    let widget = SearchWidget::new(config, dataset.clone()).expect("valid config");

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        dataset.publish(install_dataset());
    });

    let view = widget.search("install").await;
    assert!(view.has_matches());
}

#[tokio::test]
async fn exhausted_budget_renders_unavailable_message() {
    let widget =
        SearchWidget::new(fast_config(), DatasetHandle::new()).expect("valid config");
    let mut page = page_with_container();
    widget.mount(&mut page).expect("container present");

    widget.submit("anything");
    tokio::time::sleep(Duration::from_millis(80)).await;
    widget.sync(&mut page).expect("results container mounted");

    let message = &widget.config().messages.unavailable;
    assert!(page.to_html().contains(message));
    assert_eq!(widget.view(), SearchView::Unavailable);
}

#[tokio::test]
async fn no_matches_renders_empty_state_message() {
    let dataset = DatasetHandle::preloaded(install_dataset());
    let widget = SearchWidget::new(fast_config(), dataset).expect("valid config");

    widget.submit("completely unrelated query");
    tokio::time::sleep(Duration::from_millis(60)).await;

    let message = &widget.config().messages.no_matches;
    assert!(widget.results_html().contains(message));
}

#[test]
fn double_mount_keeps_one_widget() {
    let widget =
        SearchWidget::new(fast_config(), DatasetHandle::new()).expect("valid config");
    let mut page = page_with_container();

    widget.mount(&mut page).expect("first mount");
    widget.mount(&mut page).expect("second mount");

    let container = page
        .find_by_id("search-box-container")
        .expect("container present");
    assert_eq!(container.child_element_count(), 3);

    // Exactly one input in the serialized page.
    let occurrences = page.to_html().matches("full-screen-search-input").count();
    assert_eq!(occurrences, 1);
}

#[tokio::test]
async fn rapid_typing_settles_on_last_query() {
    let dataset = DatasetHandle::preloaded(vec![
        QaItem::new("How to install?", "<p>Installer.</p>"),
        QaItem::new("How to update?", "<p>Updater.</p>"),
    ]);
    let widget = SearchWidget::new(
        WidgetConfig {
            debounce_ms: 20,
            poll_attempts: 5,
            poll_interval_ms: 2,
            ..Default::default()
        },
        dataset,
    )
    .expect("valid config");

    for query in ["i", "in", "ins", "install"] {
        widget.on_query_change(query);
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    widget.on_query_change("update");
    tokio::time::sleep(Duration::from_millis(100)).await;

    match widget.view() {
        SearchView::Rendered(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].question, "How to update?");
        }
        other => panic!("expected Rendered, got {other:?}"),
    }
}

#[tokio::test]
async fn indexer_to_widget_round_trip() {
    let doc = "\
## How do I install it?

Run the installer.

![setup](images/setup.png)

## Where are the logs?

Under the data directory.
";
    let items = indexer::parse_qa_document(doc);
    let script = indexer::render_index_script(&items).expect("serializable");

    // The loader script carries the interchange JSON; feed it back in the
    // way an embedding page would.
    let json = script
        .trim_start_matches("window.qaData = ")
        .trim_end()
        .trim_end_matches(';');
    let dataset = DatasetHandle::new();
    dataset.publish_json(json).expect("valid interchange JSON");

    let widget = SearchWidget::new(fast_config(), dataset).expect("valid config");
    widget.submit("installer");
    tokio::time::sleep(Duration::from_millis(60)).await;

    let html = widget.results_html();
    assert!(html.contains("How do I install it?"));
    assert!(html.contains("src=\"_static/images/setup.png\""));
}
