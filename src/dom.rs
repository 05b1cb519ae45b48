//! DOM Adapter
//!
//! The extractors only need a handful of tree capabilities: attribute access,
//! CSS queries, child navigation and rendered text. [`DomAdapter`] names those
//! capabilities so the core never depends on a concrete parser, and
//! [`HtmlDom`] provides them on top of the `dom_query` crate.

use dom_query::{Document, Selection};

/// Tree capabilities the SERP extractors rely on.
///
/// Nodes are cheap handles borrowed from the adapter, so every method takes
/// the node by reference and returns owned strings.
pub trait DomAdapter {
    /// Handle to one element in the tree.
    type Node<'a>: Clone
    where
        Self: 'a;

    /// The document element.
    fn root(&self) -> Self::Node<'_>;

    /// All descendants of `node` matching `selector`, in document order.
    fn query_all<'a>(&'a self, node: &Self::Node<'a>, selector: &str) -> Vec<Self::Node<'a>>;

    /// First descendant of `node` matching `selector`.
    fn query_first<'a>(&'a self, node: &Self::Node<'a>, selector: &str) -> Option<Self::Node<'a>> {
        self.query_all(node, selector).into_iter().next()
    }

    /// Direct element children of `node`.
    fn children<'a>(&'a self, node: &Self::Node<'a>) -> Vec<Self::Node<'a>>;

    /// All attributes of `node` as name/value pairs.
    fn attributes_of<'a>(&'a self, node: &Self::Node<'a>) -> Vec<(String, String)>;

    /// Single attribute value.
    fn attribute<'a>(&'a self, node: &Self::Node<'a>, name: &str) -> Option<String> {
        self.attributes_of(node)
            .into_iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Lowercase tag name.
    fn tag_name<'a>(&'a self, node: &Self::Node<'a>) -> Option<String>;

    /// Rendered text of `node` and its descendants, markup removed.
    fn text_content<'a>(&'a self, node: &Self::Node<'a>) -> String;

    /// Whether the raw `class` attribute contains `fragment` as a substring.
    ///
    /// Substring, not token, membership: `serp-adv` also matches
    /// `serp-adv__item`.
    fn class_contains<'a>(&'a self, node: &Self::Node<'a>, fragment: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|class| class.contains(fragment))
    }

    /// First direct child with the given tag name.
    fn first_child_tag<'a>(&'a self, node: &Self::Node<'a>, tag: &str) -> Option<Self::Node<'a>> {
        self.children(node)
            .into_iter()
            .find(|child| self.tag_name(child).is_some_and(|t| t == tag))
    }
}

/// [`DomAdapter`] backed by a `dom_query` document.
///
/// `dom_query` trees are reference-counted without atomics, so an `HtmlDom`
/// is built and dropped within a single extraction call.
pub struct HtmlDom {
    document: Document,
}

impl HtmlDom {
    /// Parse markup into a navigable tree. Never fails: html5ever recovers
    /// from malformed input the way browsers do.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: Document::from(html),
        }
    }
}

impl DomAdapter for HtmlDom {
    type Node<'a> = Selection<'a>;

    fn root(&self) -> Selection<'_> {
        self.document.select("html")
    }

    fn query_all<'a>(&'a self, node: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
        node.select(selector)
            .nodes()
            .iter()
            .map(|n| Selection::from(*n))
            .collect()
    }

    fn query_first<'a>(&'a self, node: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
        let found = node.select_single(selector);
        found.exists().then_some(found)
    }

    fn children<'a>(&'a self, node: &Selection<'a>) -> Vec<Selection<'a>> {
        node.children()
            .nodes()
            .iter()
            .map(|n| Selection::from(*n))
            .collect()
    }

    fn attributes_of<'a>(&'a self, node: &Selection<'a>) -> Vec<(String, String)> {
        node.nodes()
            .first()
            .map(|n| {
                n.attrs()
                    .iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn attribute<'a>(&'a self, node: &Selection<'a>, name: &str) -> Option<String> {
        node.attr(name).map(|s| s.to_string())
    }

    fn tag_name<'a>(&'a self, node: &Selection<'a>) -> Option<String> {
        node.nodes()
            .first()
            .and_then(dom_query::NodeRef::node_name)
            .map(|t| t.to_ascii_lowercase())
    }

    fn text_content<'a>(&'a self, node: &Selection<'a>) -> String {
        node.text().to_string()
    }
}
