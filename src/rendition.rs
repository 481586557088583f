//! Rendition selection
//!
//! Picks the best email-sized rendition of a managed attachment, falling back
//! to a larger size when the custom size was never generated for it.

use serde::{Deserialize, Serialize};

use crate::resolver::{AttachmentId, AttachmentIdentity};

/// A stored rendition of an attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendition {
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// False when the store substituted another size for the one requested
    pub exists_at_requested_size: bool,
}

/// Rendition lookup for managed attachments
pub trait RenditionStore {
    /// Rendition of `id` at the named size, or whatever the store substitutes
    fn rendition(&self, id: AttachmentId, size_name: &str) -> Option<Rendition>;
}

/// Select the rendition to swap into the feed.
///
/// Returns the custom-size rendition when it exists at that size. Otherwise
/// the fallback size is requested; if the store has nothing for it either,
/// the substituted custom-size answer is used. External images get nothing.
#[must_use]
pub fn select(
    store: &dyn RenditionStore,
    identity: AttachmentIdentity,
    custom_size: &str,
    fallback_size: &str,
) -> Option<Rendition> {
    let id = identity.id()?;

    let primary = store.rendition(id, custom_size);
    if let Some(rendition) = primary.as_ref().filter(|r| r.exists_at_requested_size) {
        return Some(rendition.clone());
    }

    let fallback = store.rendition(id, fallback_size);
    if fallback.is_none() && primary.is_none() {
        log::debug!("Attachment {id} has no '{custom_size}' or '{fallback_size}' rendition");
    }
    fallback.or(primary)
}
