//! Pixel-dimension probing
//!
//! The style engine asks a probe for the real width of an image when the
//! policy allows it. Every failure reads as "unknown".

use std::path::{Component, Path, PathBuf};

/// Reads the pixel dimensions of an image by URL
pub trait DimensionProbe {
    /// `(width, height)` in pixels, or `None` when unknown
    fn dimensions(&self, url: &str) -> Option<(u32, u32)>;
}

/// Probe that never knows anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl DimensionProbe for NoProbe {
    fn dimensions(&self, _url: &str) -> Option<(u32, u32)> {
        None
    }
}

/// Probe reading image headers from the local upload directory
#[derive(Debug, Clone)]
pub struct UploadDirProbe {
    base_url: String,
    base_dir: PathBuf,
}

impl UploadDirProbe {
    #[must_use]
    pub fn new(base_url: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            base_dir: base_dir.into(),
        }
    }

    /// File under the upload directory serving `url`
    fn local_path(&self, url: &str) -> Option<PathBuf> {
        if self.base_url.is_empty() {
            return None;
        }
        let rest = url.strip_prefix(self.base_url.as_str())?;
        if !rest.starts_with('/') {
            return None;
        }
        let end = rest.find(['?', '#']).unwrap_or(rest.len());
        let relative = Path::new(rest[..end].trim_start_matches('/'));

        // Only plain components, so the probe cannot leave the upload directory
        if relative.as_os_str().is_empty()
            || !relative.components().all(|c| matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(self.base_dir.join(relative))
    }
}

impl DimensionProbe for UploadDirProbe {
    fn dimensions(&self, url: &str) -> Option<(u32, u32)> {
        let path = self.local_path(url)?;
        match image::image_dimensions(&path) {
            Ok(dimensions) => Some(dimensions),
            Err(e) => {
                log::debug!("Could not read dimensions of {}: {e}", path.display());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_probe_is_unknown() {
        assert_eq!(NoProbe.dimensions("/up/a.jpg"), None);
    }

    #[test]
    fn test_local_path_mapping() {
        let probe = UploadDirProbe::new("https://example.com/up/", "/srv/uploads");
        assert_eq!(
            probe.local_path("https://example.com/up/2024/05/a.jpg?ver=2"),
            Some(PathBuf::from("/srv/uploads/2024/05/a.jpg"))
        );
        assert_eq!(probe.local_path("https://cdn.other.net/up/a.jpg"), None);
        assert_eq!(probe.local_path("https://example.com/up/../secret.png"), None);
        assert_eq!(probe.local_path("https://example.com/up/"), None);
    }

    #[test]
    fn test_missing_file_is_unknown() {
        let probe = UploadDirProbe::new("/up", "/nonexistent-upload-dir");
        assert_eq!(probe.dimensions("/up/a.jpg"), None);
    }
}
