//! Rendering — converts the widget's display state to element nodes.
//!
//! Each match renders as a result block: the question as an escaped text
//! heading (markup in a question cannot inject into the page), the answer
//! as trusted raw markup with corrected image paths. Non-result states
//! render as message paragraphs.

use crate::assets;
use crate::config::WidgetConfig;
use crate::dom::{Element, Node};
use crate::types::{QaItem, SearchView};

/// Render one match as a result block.
pub fn item_block(item: &QaItem, config: &WidgetConfig) -> Element {
    let images = assets::image_sources(&item.answer).len();
    if images > 0 {
        tracing::debug!(images, "correcting image paths in answer markup");
    }
    let answer_html = assets::rewrite_image_sources(&item.answer, &config.static_root);

    let mut heading = Element::new("h3");
    heading.append(Node::Text(item.question.clone()));

    let mut body = Element::new("div");
    body.append(Node::RawHtml(answer_html));

    let mut block = Element::new("div").with_attr("class", config.result_class.as_str());
    block.append(Node::Element(heading));
    block.append(Node::Element(body));
    block
}

/// The results container's children for a given view.
pub fn view_nodes(view: &SearchView, config: &WidgetConfig) -> Vec<Node> {
    match view {
        SearchView::Idle => vec![message(&config.messages.prompt)],
        // Loading clears the panel; there is nothing to show until the
        // dataset wait resolves.
        SearchView::Loading => Vec::new(),
        SearchView::Unavailable => vec![message(&config.messages.unavailable)],
        SearchView::Rendered(items) if items.is_empty() => {
            vec![message(&config.messages.no_matches)]
        }
        SearchView::Rendered(items) => items
            .iter()
            .map(|item| Node::Element(item_block(item, config)))
            .collect(),
    }
}

fn message(text: &str) -> Node {
    Node::Element(Element::new("p").with_text(text))
}
