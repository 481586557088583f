//! Tolerant HTML fragment loading
//!
//! html5ever repairs whatever it is given (unclosed tags, stray end tags, bare
//! entities), so loading never fails. The parsed tree is copied into an owned
//! arena whose elements can be mutated in place.

use ego_tree::{NodeId, Tree};
use scraper::Html;
use scraper::node::Node;

use super::Document;
use super::node::{ElementData, HtmlNode};
use crate::utils::WRAPPER_TAG;

/// Wrap content in the synthetic container expected by [`load`]
#[must_use]
pub fn wrap(content: &str) -> String {
    format!("<{WRAPPER_TAG}>{content}</{WRAPPER_TAG}>")
}

/// Load an HTML fragment into a mutable document.
///
/// Input is Rust UTF-8, which the parser consumes natively, so non-ASCII
/// characters survive without an entity-encoding pass. The returned
/// document is empty only when parsing produced no top-level element.
#[must_use]
pub fn load(html: &str) -> Document {
    let parsed = Html::parse_fragment(html);
    if !parsed.errors.is_empty() {
        log::debug!("Recovered from {} HTML parse errors", parsed.errors.len());
    }

    let mut tree = Tree::new(HtmlNode::Document);
    let mut pending: Vec<(NodeId, NodeId)> = vec![(parsed.tree.root().id(), tree.root().id())];

    // Iterative copy: every child of a node is appended in one pass, so
    // sibling order is preserved no matter which node is popped next.
    while let Some((source_id, target_id)) = pending.pop() {
        let Some(source) = parsed.tree.get(source_id) else {
            continue;
        };
        for child in source.children() {
            let Some(value) = convert(child.value()) else {
                continue;
            };
            let Some(mut target) = tree.get_mut(target_id) else {
                continue;
            };
            let copied = target.append(value).id();
            pending.push((child.id(), copied));
        }
    }

    let root = top_level_element(&tree);
    if root.is_none() {
        log::debug!("HTML fragment produced no top-level element");
    }

    Document { tree, root }
}

fn convert(node: &Node) -> Option<HtmlNode> {
    match node {
        Node::Element(element) => Some(HtmlNode::Element(ElementData::new(
            element.name(),
            element
                .attrs
                .iter()
                .map(|(name, value)| {
                    // Foreign attributes keep their prefix, as in `xlink:href`
                    let qualified = match &name.prefix {
                        Some(prefix) => format!("{prefix}:{}", name.local),
                        None => name.local.to_string(),
                    };
                    (qualified, value.to_string())
                })
                .collect(),
        ))),
        Node::Text(text) => Some(HtmlNode::Text(String::from(&**text))),
        Node::Comment(comment) => Some(HtmlNode::Comment(String::from(&**comment))),
        Node::Doctype(doctype) => Some(HtmlNode::Doctype(doctype.name().to_string())),
        Node::Document | Node::Fragment | Node::ProcessingInstruction(_) => None,
    }
}

/// First element below the fragment's implicit `<html>` container
fn top_level_element(tree: &Tree<HtmlNode>) -> Option<NodeId> {
    let root = tree.root();
    let container = root
        .children()
        .find(|node| matches!(node.value(), HtmlNode::Element(e) if e.is("html")))
        .unwrap_or(root);

    container
        .children()
        .find(|node| matches!(node.value(), HtmlNode::Element(_)))
        .map(|node| node.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_is_root() {
        let doc = load(&wrap("<p>Hello</p>"));
        let root = doc.root().expect("wrapper element");
        assert_eq!(doc.element(root).map(ElementData::name), Some(WRAPPER_TAG));
    }

    #[test]
    fn test_text_only_input_is_empty_document() {
        let doc = load("just words");
        assert!(doc.is_empty());
        assert_eq!(doc.to_html(), "");
    }

    #[test]
    fn test_malformed_markup_still_loads() {
        let doc = load(&wrap("<p>Unclosed <b>bold <img src=\"a.jpg\"> &copy; & more"));
        assert!(!doc.is_empty());
        assert_eq!(doc.elements_by_tag("img").len(), 1);
    }

    #[test]
    fn test_stray_div_end_tag_does_not_close_wrapper() {
        let doc = load(&wrap("<p>before</p></div><p>after</p>"));
        let html = doc.to_html();
        assert!(html.contains("before"));
        assert!(html.contains("after"));
    }

    #[test]
    fn test_non_ascii_survives() {
        let doc = load(&wrap("<p>Café – naïve ☕</p>"));
        assert_eq!(doc.to_html(), "<p>Café – naïve ☕</p>");
    }

    #[test]
    fn test_namespaced_attributes_keep_prefix() {
        let html = r##"<svg><use xlink:href="#icon"></use></svg>"##;
        assert_eq!(load(&wrap(html)).to_html(), html);
    }

    #[test]
    fn test_attribute_order_preserved() {
        let doc = load(&wrap(r#"<img src="a.jpg" width="300" class="alignleft" alt="x">"#));
        let img = doc.elements_by_tag("img")[0];
        let names: Vec<_> = doc
            .element(img)
            .map(|e| e.attrs().map(|(k, _)| k.to_string()).collect())
            .unwrap_or_default();
        assert_eq!(names, ["src", "width", "class", "alt"]);
    }
}
