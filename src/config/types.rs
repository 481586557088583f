//! Core configuration types for feed image rewriting
//!
//! `ImagePolicy` is the read-only snapshot the transformation core works from;
//! `FeedSettings` drives the per-request route decision.

use serde::{Deserialize, Serialize};

use crate::utils::{
    DEFAULT_ALTERNATE_FEED, DEFAULT_CAPTION_CLASS, DEFAULT_CUSTOM_SIZE, DEFAULT_FALLBACK_SIZE,
    DEFAULT_MARGIN_PX, DEFAULT_MAX_WIDTH, DEFAULT_VIDEO_WRAPPER_CLASS,
};

/// Image policy applied to one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePolicy {
    /// Maximum rendered image width in pixels.
    ///
    /// **INVARIANT:** Always within `200..=900` (validated at the settings boundary).
    pub(crate) max_width: u32,

    /// Swap small images for the email-sized rendition too.
    /// Large or unsized images are always swapped.
    pub(crate) change_small_images: bool,

    /// Restyle images that do not belong to the media library
    pub(crate) process_external_images: bool,

    pub(crate) margin_px: u32,

    /// Probe image files for their real pixel width.
    ///
    /// Turned off when a hardening plugin strips file metadata, where
    /// probing would raise errors in the host.
    pub(crate) allow_dimension_probe: bool,

    /// Rendition requested for email output
    pub(crate) custom_size: String,

    /// Rendition requested when the custom size does not exist for an asset
    pub(crate) fallback_size: String,

    pub(crate) caption_class: String,
    pub(crate) video_wrapper_class: String,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            change_small_images: true,
            process_external_images: false,
            margin_px: DEFAULT_MARGIN_PX,
            allow_dimension_probe: true,
            custom_size: DEFAULT_CUSTOM_SIZE.to_string(),
            fallback_size: DEFAULT_FALLBACK_SIZE.to_string(),
            caption_class: DEFAULT_CAPTION_CLASS.to_string(),
            video_wrapper_class: DEFAULT_VIDEO_WRAPPER_CLASS.to_string(),
        }
    }
}

/// Feed-level switches deciding which transform a request gets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Only normalize galleries; never rewrite images for email
    pub simplify_feed: bool,

    /// Leave the main feed alone and transform only the alternate feed
    pub alternate_feed: bool,

    /// Name of the alternate feed endpoint
    pub alternate_feed_name: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            simplify_feed: false,
            alternate_feed: false,
            alternate_feed_name: DEFAULT_ALTERNATE_FEED.to_string(),
        }
    }
}

impl FeedSettings {
    /// Warning shown when the settings contradict each other
    #[must_use]
    pub fn conflict(&self) -> Option<&'static str> {
        if self.simplify_feed && self.alternate_feed {
            Some("Simplify Feed is enabled, so the Alternate Feed setting will be ignored.")
        } else {
            None
        }
    }

    /// URL of the alternate feed.
    ///
    /// With pretty permalinks the feed lives at `<home>/feed/<name>`,
    /// otherwise at `<home>/?feed=<name>`.
    #[must_use]
    pub fn alternate_feed_url(&self, home_url: &str, pretty_permalinks: bool) -> String {
        let home = home_url.trim_end_matches('/');
        if pretty_permalinks {
            format!("{home}/feed/{}", self.alternate_feed_name)
        } else {
            format!("{home}/?feed={}", self.alternate_feed_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        let policy = ImagePolicy::default();
        assert_eq!(policy.max_width, 560);
        assert!(policy.change_small_images);
        assert!(!policy.process_external_images);
        assert_eq!(policy.margin_px, 10);
        assert_eq!(policy.custom_size, "mailchimp");
        assert_eq!(policy.fallback_size, "large");
    }

    #[test]
    fn test_conflict_only_when_both_enabled() {
        let mut settings = FeedSettings::default();
        assert!(settings.conflict().is_none());

        settings.alternate_feed = true;
        assert!(settings.conflict().is_none());

        settings.simplify_feed = true;
        assert!(settings.conflict().is_some());
    }

    #[test]
    fn test_alternate_feed_url() {
        let settings = FeedSettings::default();
        assert_eq!(
            settings.alternate_feed_url("https://example.com/", true),
            "https://example.com/feed/email"
        );
        assert_eq!(
            settings.alternate_feed_url("https://example.com", false),
            "https://example.com/?feed=email"
        );
    }
}
