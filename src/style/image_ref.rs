//! Per-image view of an `<img>` node

use crate::document::{Document, NodeId};

/// One `<img>` under consideration during a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedImageRef {
    pub node: NodeId,
    pub source_url: String,
    pub css_classes: Vec<String>,
    /// Width attribute, when it holds a usable pixel value
    pub declared_width: Option<u32>,
    /// Nearest ancestor carrying the caption marker class
    pub caption_container: Option<NodeId>,
}

impl ManagedImageRef {
    /// Read an image's state from the document.
    ///
    /// Returns `None` when `node` is not an element.
    #[must_use]
    pub fn from_node(doc: &Document, node: NodeId, caption_class: &str) -> Option<Self> {
        let element = doc.element(node)?;
        let caption_container = doc.ancestor_elements(node).find(|&ancestor| {
            doc.element(ancestor)
                .is_some_and(|e| e.has_class(caption_class))
        });

        Some(Self {
            node,
            source_url: element.attr("src").unwrap_or_default().to_string(),
            css_classes: element.classes().map(str::to_string).collect(),
            declared_width: element.attr("width").and_then(parse_declared_width),
            caption_container,
        })
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.css_classes.iter().any(|c| c == class)
    }
}

/// Parse a width attribute: `"300"` or `"300px"`
#[must_use]
pub fn parse_declared_width(value: &str) -> Option<u32> {
    let value = value.trim();
    let digits = value.strip_suffix("px").unwrap_or(value).trim_end();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{load, wrap};

    #[test]
    fn test_parse_declared_width() {
        assert_eq!(parse_declared_width("300"), Some(300));
        assert_eq!(parse_declared_width(" 300px "), Some(300));
        assert_eq!(parse_declared_width("100%"), None);
        assert_eq!(parse_declared_width("auto"), None);
        assert_eq!(parse_declared_width(""), None);
        assert_eq!(parse_declared_width("-5"), None);
    }

    #[test]
    fn test_caption_container_is_nearest_marked_ancestor() {
        let doc = load(&wrap(
            r#"<div class="wp-caption alignright"><a href="/p"><img src="/up/a.jpg" width="200" class="size-medium"></a></div>"#,
        ));
        let img = doc.elements_by_tag("img")[0];
        let image = ManagedImageRef::from_node(&doc, img, "wp-caption").unwrap();

        assert_eq!(image.source_url, "/up/a.jpg");
        assert_eq!(image.declared_width, Some(200));
        assert!(image.has_class("size-medium"));

        let caption = image.caption_container.unwrap();
        assert!(doc.element(caption).unwrap().is("div"));
    }

    #[test]
    fn test_caption_text_class_is_not_a_wrapper() {
        let doc = load(&wrap(r#"<p class="wp-caption-text"><img src="/up/a.jpg"></p>"#));
        let img = doc.elements_by_tag("img")[0];
        let image = ManagedImageRef::from_node(&doc, img, "wp-caption").unwrap();
        assert_eq!(image.caption_container, None);
        assert_eq!(image.declared_width, None);
    }
}
