//! Video treatment: full email width, wrapper's fixed width removed

use crate::config::ImagePolicy;
use crate::document::{Document, NodeId};

/// Stretch a `<video>` to the maximum width.
///
/// The nearest ancestor carrying the video wrapper class loses its style.
pub fn style_video(doc: &mut Document, node: NodeId, policy: &ImagePolicy) {
    doc.update_element(node, |element| {
        element.remove_attr("height");
        element.set_attr("width", policy.max_width().to_string());
    });

    let wrapper = doc.ancestor_elements(node).find(|&ancestor| {
        doc.element(ancestor)
            .is_some_and(|e| e.has_class(policy.video_wrapper_class()))
    });
    if let Some(wrapper) = wrapper {
        doc.update_element(wrapper, |element| element.remove_attr("style"));
    }
}
