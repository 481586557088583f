//! Gallery and block normalization
//!
//! Gallery thumbnails carry small-thumbnail file names and dimensions. Before
//! the document is loaded, these are stripped so the style engine sees the
//! original file, unsized, and swaps it for the email rendition.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Document, NodeId};
use crate::utils::{BLOCK_GALLERY_CLASSES, GALLERY_ITEM_STYLE, GALLERY_LIST_STYLE};

static GALLERY_SHORTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[gallery(\s[^\]]*)?\]").expect("GALLERY_SHORTCODE_RE: hardcoded regex is valid")
});

const GALLERY_BLOCK_MARKER: &str = "<!-- wp:gallery";

static THUMBNAIL_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-\d{3,4}x\d{3,4}\.").expect("THUMBNAIL_SUFFIX_RE: hardcoded regex is valid")
});

static WIDTH_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"width="\d{2,3}""#).expect("WIDTH_ATTR_RE: hardcoded regex is valid")
});

static HEIGHT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"height="\d{2,3}""#).expect("HEIGHT_ATTR_RE: hardcoded regex is valid")
});

/// Whether the raw, unrendered post contains a gallery shortcode or block
#[must_use]
pub fn has_gallery_marker(raw_post: &str) -> bool {
    raw_post.contains(GALLERY_BLOCK_MARKER) || GALLERY_SHORTCODE_RE.is_match(raw_post)
}

/// Strip thumbnail suffixes and small width/height attributes.
///
/// Plain string substitution: text that merely looks like an attribute is
/// rewritten as well.
#[must_use]
pub fn normalize(content: &str) -> String {
    let content = THUMBNAIL_SUFFIX_RE.replace_all(content, ".");
    let content = WIDTH_ATTR_RE.replace_all(&content, "");
    HEIGHT_ATTR_RE.replace_all(&content, "").into_owned()
}

/// [`normalize`] when `raw_post` has a gallery, otherwise `content` unchanged
#[must_use]
pub fn normalize_if_gallery(raw_post: &str, content: &str) -> String {
    if has_gallery_marker(raw_post) {
        log::debug!("Normalizing gallery markup");
        normalize(content)
    } else {
        content.to_string()
    }
}

/// Hide list bullets of block-editor galleries.
///
/// Appends to any existing inline style, keeping the list semantics intact.
/// Returns the number of lists styled.
pub fn style_block_gallery_lists(doc: &mut Document) -> usize {
    let lists: Vec<_> = doc
        .elements_by_tag("ul")
        .into_iter()
        .filter(|&id| {
            doc.element(id)
                .is_some_and(|e| BLOCK_GALLERY_CLASSES.iter().any(|c| e.has_class(c)))
        })
        .collect();

    let items: Vec<_> = doc
        .elements_by_tag("li")
        .into_iter()
        .filter(|&id| doc.ancestor_elements(id).any(|a| lists.contains(&a)))
        .collect();

    for &id in &lists {
        append_style(doc, id, GALLERY_LIST_STYLE);
    }
    for id in items {
        append_style(doc, id, GALLERY_ITEM_STYLE);
    }
    lists.len()
}

fn append_style(doc: &mut Document, id: NodeId, extra: &str) {
    doc.update_element(id, |element| {
        let style = format!("{}{extra}", element.attr("style").unwrap_or_default());
        element.set_attr("style", style);
    });
}
