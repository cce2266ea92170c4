//! Small accessors over the `scraper` DOM tree.
//!
//! The page extractors match fixed node shapes by tag name and the exact
//! `class` attribute string. Everything here works on borrowed
//! [`NodeRef`]s from an [`scraper::Html`] tree and never panics on an
//! unexpected shape: absence is expressed with `Option` or an empty value.

use ego_tree::NodeRef;
use scraper::Node;

/// Direct children of `node`, in document order.
pub fn children<'a>(node: NodeRef<'a, Node>) -> impl Iterator<Item = NodeRef<'a, Node>> {
    node.children()
}

/// Value of attribute `key`, or `""` when the attribute is missing or the
/// node is not an element.
pub fn attr<'a>(node: NodeRef<'a, Node>, key: &str) -> &'a str {
    node.value()
        .as_element()
        .and_then(|el| el.attr(key))
        .unwrap_or("")
}

pub fn is_text(node: NodeRef<'_, Node>) -> bool {
    node.value().is_text()
}

/// `true` for an element whose tag name equals `tag` exactly.
pub fn is_element(node: NodeRef<'_, Node>, tag: &str) -> bool {
    node.value().as_element().is_some_and(|el| el.name() == tag)
}

/// `true` for a `tag` element whose whole `class` attribute equals `class`.
///
/// This is a string comparison, not a class-token lookup: `"foo bar"` does
/// not match `"foo"`.
pub fn is_class(node: NodeRef<'_, Node>, tag: &str, class: &str) -> bool {
    is_element(node, tag) && attr(node, "class") == class
}

/// Text content of a text node.
pub fn text_of<'a>(node: NodeRef<'a, Node>) -> Option<&'a str> {
    node.value().as_text().map(|t| &**t)
}

/// Depth-first pre-order search from `root` (inclusive).
///
/// Returns the first value `matcher` produces. Once a node matches, the walk
/// stops, so nothing beneath or after it is inspected.
pub fn find_first<'a, T>(
    root: NodeRef<'a, Node>,
    matcher: impl FnMut(NodeRef<'a, Node>) -> Option<T>,
) -> Option<T> {
    root.descendants().find_map(matcher)
}
