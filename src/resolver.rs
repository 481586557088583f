//! Image identity resolution
//!
//! Maps an image URL found in post content to the media-library attachment it
//! was rendered from. URLs outside the upload base, or with no matching
//! attachment, are external.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Web-layout resize suffix: `photo-300x200.jpg` is a resized `photo.jpg`
static RESIZE_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)-\d+x\d+\.(jpe?g|png|gif)$")
        .expect("RESIZE_SUFFIX_RE: hardcoded regex is valid")
});

static EXTENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.[A-Za-z0-9]+$").expect("EXTENSION_RE: hardcoded regex is valid")
});

const SCALED_SUFFIX: &str = "-scaled";

/// Media-library attachment id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentId(pub u64);

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Result of resolving an image URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentIdentity {
    /// The image belongs to the media library
    Managed(AttachmentId),
    /// Hosted elsewhere, or unknown to the media library
    External,
}

impl AttachmentIdentity {
    #[must_use]
    pub fn id(self) -> Option<AttachmentId> {
        match self {
            AttachmentIdentity::Managed(id) => Some(id),
            AttachmentIdentity::External => None,
        }
    }

    #[must_use]
    pub fn is_external(self) -> bool {
        matches!(self, AttachmentIdentity::External)
    }
}

/// Media library lookup used by the resolver
pub trait AssetStore {
    /// Public URL prefix under which uploaded files are served
    fn upload_base_url(&self) -> &str;

    /// Attachment stored under a path relative to the upload base
    fn find_attachment_id(&self, relative_path: &str) -> Option<AttachmentId>;
}

/// Remove a trailing `-WxH` resize suffix before the image extension.
///
/// `photo-300x200.jpg` becomes `photo.jpg`; paths without a suffix are
/// returned unchanged.
#[must_use]
pub fn strip_resize_suffix(path: &str) -> Cow<'_, str> {
    RESIZE_SUFFIX_RE.replace(path, ".$1")
}

/// Resolve an image URL to its attachment.
///
/// Never fails; every miss is [`AttachmentIdentity::External`].
///
/// A URL and its resize-stripped form usually resolve alike. The exception
/// is an asset stored only under its resized file name (`icon-16x16.png`):
/// that URL resolves through the original-path candidate, but the stripped
/// URL (`icon.png`) is external.
#[must_use]
pub fn resolve(store: &dyn AssetStore, url: &str) -> AttachmentIdentity {
    if url.is_empty() {
        return AttachmentIdentity::External;
    }

    let base = store.upload_base_url().trim_end_matches('/');
    let Some(relative) = relative_path(url, base) else {
        return AttachmentIdentity::External;
    };

    for candidate in candidates(relative) {
        if let Some(id) = store.find_attachment_id(&candidate) {
            log::trace!("Resolved {url} to attachment {id} via {candidate}");
            return AttachmentIdentity::Managed(id);
        }
    }

    log::debug!("No attachment found for {url}");
    AttachmentIdentity::External
}

/// Path after the first occurrence of the upload base, without query or fragment
fn relative_path<'a>(url: &'a str, base: &str) -> Option<&'a str> {
    if base.is_empty() {
        return None;
    }
    let start = url.find(base)? + base.len();
    let rest = url[start..].trim_start_matches('/');
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    let relative = &rest[..end];
    (!relative.is_empty()).then_some(relative)
}

/// Lookup candidates in order: stripped, stripped and scaled, original
fn candidates(relative: &str) -> Vec<String> {
    let stripped = strip_resize_suffix(relative).into_owned();
    let mut out = Vec::with_capacity(3);

    if let Some(ext) = EXTENSION_RE.find(&stripped) {
        let stem = &stripped[..ext.start()];
        if !stem.ends_with(SCALED_SUFFIX) {
            out.push(stripped.clone());
            out.push(format!("{stem}{SCALED_SUFFIX}{}", ext.as_str()));
        }
    }
    if out.is_empty() {
        out.push(stripped);
    }
    if !out.iter().any(|c| c == relative) {
        out.push(relative.to_string());
    }
    out
}
