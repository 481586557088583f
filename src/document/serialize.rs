//! HTML serialization of document subtrees

use ego_tree::NodeRef;
use ego_tree::iter::Edge;

use super::node::{ElementData, HtmlNode};
use super::{Document, NodeId};

/// Elements that never have an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text children are written without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "noscript", "plaintext",
];

impl Document {
    /// Serialize the children of `node`, leaving out the node's own tags.
    ///
    /// Walks the subtree iteratively, so deeply nested input cannot exhaust
    /// the stack.
    #[must_use]
    pub fn serialize(&self, node: NodeId) -> String {
        let Some(start) = self.tree.get(node) else {
            return String::new();
        };

        let mut output = String::new();
        for edge in start.traverse() {
            match edge {
                Edge::Open(current) if current.id() == node => {}
                Edge::Close(current) if current.id() == node => {}
                Edge::Open(current) => open(&current, &mut output),
                Edge::Close(current) => {
                    if let HtmlNode::Element(element) = current.value()
                        && !is_void(element)
                    {
                        output.push_str("</");
                        output.push_str(element.name());
                        output.push('>');
                    }
                }
            }
        }
        output
    }
}

fn open(node: &NodeRef<'_, HtmlNode>, output: &mut String) {
    match node.value() {
        HtmlNode::Element(element) => {
            output.push('<');
            output.push_str(element.name());
            for (name, value) in element.attrs() {
                output.push(' ');
                output.push_str(name);
                output.push_str("=\"");
                output.push_str(&escape_nbsp(&html_escape::encode_double_quoted_attribute(value)));
                output.push('"');
            }
            output.push('>');
        }
        HtmlNode::Text(text) => {
            let raw = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(is_raw_text))
                .unwrap_or(false);
            if raw {
                output.push_str(text);
            } else {
                output.push_str(&escape_nbsp(&html_escape::encode_text(text)));
            }
        }
        HtmlNode::Comment(comment) => {
            output.push_str("<!--");
            output.push_str(comment);
            output.push_str("-->");
        }
        HtmlNode::Doctype(name) => {
            output.push_str("<!DOCTYPE ");
            output.push_str(name);
            output.push('>');
        }
        HtmlNode::Document => {}
    }
}

/// Non-breaking spaces are written as `&nbsp;`
fn escape_nbsp(escaped: &str) -> String {
    escaped.replace('\u{a0}', "&nbsp;")
}

fn is_void(element: &ElementData) -> bool {
    VOID_ELEMENTS.iter().any(|tag| element.is(tag))
}

fn is_raw_text(element: &ElementData) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|tag| element.is(tag))
}

#[cfg(test)]
mod tests {
    use crate::document::{load, wrap};

    fn roundtrip(html: &str) -> String {
        load(&wrap(html)).to_html()
    }

    #[test]
    fn test_canonical_markup_roundtrips() {
        let html = r#"<p>Hello <strong>world</strong></p><figure class="wp-caption alignleft"><img src="/up/a.jpg" width="300"><figcaption>Caption</figcaption></figure>"#;
        assert_eq!(roundtrip(html), html);
    }

    #[test]
    fn test_void_elements_have_no_end_tag() {
        assert_eq!(roundtrip("<p>a<br>b</p><hr>"), "<p>a<br>b</p><hr>");
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        assert_eq!(
            roundtrip(r#"<p title="say &quot;hi&quot;">1 &lt; 2 &amp;&amp; 3</p>"#),
            r#"<p title="say &quot;hi&quot;">1 &lt; 2 &amp;&amp; 3</p>"#
        );
    }

    #[test]
    fn test_non_breaking_space_is_an_entity() {
        assert_eq!(
            roundtrip(r#"<p title="a&nbsp;b">one&nbsp;two</p>"#),
            r#"<p title="a&nbsp;b">one&nbsp;two</p>"#
        );
    }

    #[test]
    fn test_raw_text_is_not_escaped() {
        let html = "<style>p > a { color: red; }</style>";
        assert_eq!(roundtrip(html), html);
    }

    #[test]
    fn test_comments_survive() {
        let html = "<!-- wp:paragraph --><p>x</p><!-- /wp:paragraph -->";
        assert_eq!(roundtrip(html), html);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let depth = 5_000;
        let html = format!("{}x{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let out = roundtrip(&html);
        assert!(out.contains('x'));
    }
}
