//! JSON media manifest
//!
//! A static description of the media library: where uploads are served from
//! and which renditions exist for each attachment.
//!
//! ```json
//! {
//!   "upload_base_url": "https://example.com/wp-content/uploads",
//!   "upload_dir": "/srv/www/wp-content/uploads",
//!   "attachments": [
//!     {
//!       "id": 42,
//!       "file": "2024/05/photo.jpg",
//!       "renditions": {
//!         "mailchimp": { "url": "https://example.com/wp-content/uploads/2024/05/photo-560x373.jpg", "width": 560, "height": 373 }
//!       }
//!     }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FeedError, FeedResult};
use crate::probe::UploadDirProbe;
use crate::rendition::{Rendition, RenditionStore};
use crate::resolver::{AssetStore, AttachmentId};

/// Size served when the requested one was never generated
const FULL_SIZE: &str = "full";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenditionEntry {
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Whether the file really has this size, rather than standing in for it
    #[serde(default = "default_exact")]
    pub exact: bool,
}

fn default_exact() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentEntry {
    pub id: u64,
    /// Path relative to the upload base
    pub file: String,
    #[serde(default)]
    pub renditions: HashMap<String, RenditionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct ManifestFile {
    upload_base_url: String,
    #[serde(default)]
    upload_dir: Option<PathBuf>,
    #[serde(default)]
    attachments: Vec<AttachmentEntry>,
}

/// Media library backed by a manifest
#[derive(Debug, Clone)]
pub struct MediaManifest {
    upload_base_url: String,
    upload_dir: Option<PathBuf>,
    by_file: HashMap<String, AttachmentId>,
    attachments: HashMap<AttachmentId, AttachmentEntry>,
}

impl MediaManifest {
    /// Parse and index a manifest
    pub fn from_json(json: &str) -> FeedResult<Self> {
        let file: ManifestFile = serde_json::from_str(json)?;
        validate_base_url(&file.upload_base_url)?;

        let mut by_file = HashMap::with_capacity(file.attachments.len());
        let mut attachments = HashMap::with_capacity(file.attachments.len());
        for entry in file.attachments {
            let id = AttachmentId(entry.id);
            if attachments.contains_key(&id) {
                return Err(FeedError::DuplicateAttachment(entry.id));
            }
            by_file.insert(entry.file.trim_start_matches('/').to_string(), id);
            attachments.insert(id, entry);
        }

        log::debug!(
            "Loaded media manifest with {} attachments under {}",
            attachments.len(),
            file.upload_base_url
        );

        Ok(Self {
            upload_base_url: file.upload_base_url,
            upload_dir: file.upload_dir,
            by_file,
            attachments,
        })
    }

    /// Read a manifest file
    pub fn from_path(path: impl AsRef<Path>) -> FeedResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }

    #[must_use]
    pub fn attachment(&self, id: AttachmentId) -> Option<&AttachmentEntry> {
        self.attachments.get(&id)
    }

    /// Dimension probe over the upload directory, when the manifest names one
    #[must_use]
    pub fn probe(&self) -> Option<UploadDirProbe> {
        self.upload_dir
            .as_ref()
            .map(|dir| UploadDirProbe::new(self.upload_base_url.clone(), dir.clone()))
    }
}

/// Absolute bases must be well-formed URLs; path-only bases are accepted as is
fn validate_base_url(base: &str) -> FeedResult<()> {
    if base.trim().is_empty() {
        return Err(FeedError::InvalidUploadBase {
            url: base.to_string(),
            reason: "empty".to_string(),
        });
    }
    if base.contains("://") {
        url::Url::parse(base).map_err(|e| FeedError::InvalidUploadBase {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

impl AssetStore for MediaManifest {
    fn upload_base_url(&self) -> &str {
        &self.upload_base_url
    }

    fn find_attachment_id(&self, relative_path: &str) -> Option<AttachmentId> {
        self.by_file.get(relative_path).copied()
    }
}

impl RenditionStore for MediaManifest {
    /// Missing sizes are answered with the full-size rendition, marked inexact
    fn rendition(&self, id: AttachmentId, size_name: &str) -> Option<Rendition> {
        let entry = self.attachments.get(&id)?;
        if let Some(found) = entry.renditions.get(size_name) {
            return Some(Rendition {
                url: found.url.clone(),
                width: found.width,
                height: found.height,
                exists_at_requested_size: found.exact,
            });
        }
        entry.renditions.get(FULL_SIZE).map(|full| Rendition {
            url: full.url.clone(),
            width: full.width,
            height: full.height,
            exists_at_requested_size: false,
        })
    }
}
