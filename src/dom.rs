//! Minimal element tree for the widget's mount surface.
//!
//! The embedding page hands the widget a mutable [`Element`] root; the
//! widget locates its container by identifier, appends its own children,
//! and later rewrites the results subtree. Serialization to HTML escapes
//! text and attribute values; [`Node::RawHtml`] passes trusted markup
//! through verbatim.

use std::fmt::Write as _;

/// Elements with no closing tag in serialized HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// One child slot in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Plain text — escaped on serialization.
    Text(String),
    /// Trusted markup — serialized verbatim.
    RawHtml(String),
}

impl Node {
    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&html_escape(text)),
            Node::RawHtml(html) => out.push_str(html),
        }
    }
}

/// An element with a tag, attributes, and child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag and no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style text child appender.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The element's `id` attribute, if set.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Append a child node.
    pub fn append(&mut self, node: Node) {
        self.children.push(node);
    }

    /// The element's children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Remove all children.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Depth-first search for a descendant (or self) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        for child in &self.children {
            if let Node::Element(el) = child {
                if let Some(found) = el.find_by_id(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Mutable variant of [`Element::find_by_id`].
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(el) = child {
                if let Some(found) = el.find_by_id_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Number of direct child elements (text and raw nodes excluded).
    pub fn child_element_count(&self) -> usize {
        self.children
            .iter()
            .filter(|c| matches!(c, Node::Element(_)))
            .count()
    }

    /// Serialize this element and its subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", html_escape(value));
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Serialize a node list to HTML — the inner markup of a container.
pub fn nodes_to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
