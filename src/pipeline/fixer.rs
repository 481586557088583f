//! Feed content pipeline
//!
//! One run wraps the content, loads it, styles every image and video in
//! document order and serializes the wrapper's children back out. Nothing is
//! shared between runs.

use super::route::FeedRoute;
use crate::config::ImagePolicy;
use crate::document::{self, Document};
use crate::gallery;
use crate::probe::{DimensionProbe, NoProbe};
use crate::rendition::{self, RenditionStore};
use crate::resolver::{self, AssetStore};
use crate::style::{ManagedImageRef, StyleEngine, StyleOutcome, style_video};

/// A post as stored (raw) and as rendered for the feed
#[derive(Debug, Clone, Copy)]
pub struct FeedPost<'a> {
    /// Unrendered post source, still carrying shortcodes and block comments
    pub raw: &'a str,
    pub rendered: &'a str,
}

/// Builds summary-feed excerpts; provided by the host
pub trait ExcerptBuilder {
    fn excerpt(&self, post: &FeedPost<'_>) -> String;
}

/// Counters for one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixReport {
    pub images_seen: usize,
    pub replaced: usize,
    pub restyled: usize,
    pub left_external: usize,
    pub videos: usize,
    pub gallery_lists: usize,
}

impl FixReport {
    /// Whether the run changed the document at all
    #[must_use]
    pub fn modified(&self) -> bool {
        self.replaced + self.restyled + self.videos + self.gallery_lists > 0
    }

    fn record(&mut self, outcome: StyleOutcome) {
        self.images_seen += 1;
        match outcome {
            StyleOutcome::Replaced => self.replaced += 1,
            StyleOutcome::Restyled => self.restyled += 1,
            StyleOutcome::Untouched => self.left_external += 1,
        }
    }
}

/// Result of [`FeedFixer::fix_with_report`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub html: String,
    pub report: FixReport,
}

/// Rewrites feed content for email clients
pub struct FeedFixer<'a> {
    policy: ImagePolicy,
    assets: &'a dyn AssetStore,
    renditions: &'a dyn RenditionStore,
    probe: &'a dyn DimensionProbe,
}

impl<'a> FeedFixer<'a> {
    /// Fixer without a dimension probe
    #[must_use]
    pub fn new(
        policy: ImagePolicy,
        assets: &'a dyn AssetStore,
        renditions: &'a dyn RenditionStore,
    ) -> Self {
        Self {
            policy,
            assets,
            renditions,
            probe: &NoProbe,
        }
    }

    #[must_use]
    pub fn with_probe(mut self, probe: &'a dyn DimensionProbe) -> Self {
        self.probe = probe;
        self
    }

    #[must_use]
    pub fn policy(&self) -> &ImagePolicy {
        &self.policy
    }

    /// Rewrite images and videos in `content`
    #[must_use]
    pub fn fix(&self, content: &str) -> String {
        self.fix_with_report(content).html
    }

    /// Rewrite images and videos, reporting what was done.
    ///
    /// Content that yields no parseable element, or that no image, video or
    /// gallery list rewrite touched, is returned unchanged byte for byte.
    #[must_use]
    pub fn fix_with_report(&self, content: &str) -> FixOutcome {
        let mut doc = document::load(&document::wrap(content));
        if doc.is_empty() {
            tracing::debug!("Feed content did not parse, returning it unchanged");
            return FixOutcome {
                html: content.to_string(),
                report: FixReport::default(),
            };
        }

        let mut report = FixReport {
            gallery_lists: gallery::style_block_gallery_lists(&mut doc),
            ..FixReport::default()
        };
        self.fix_images(&mut doc, &mut report);
        self.fix_videos(&mut doc, &mut report);

        if !report.modified() {
            tracing::trace!(
                external = report.left_external,
                "Nothing rewritten, returning content unchanged"
            );
            return FixOutcome {
                html: content.to_string(),
                report,
            };
        }

        tracing::debug!(
            images = report.images_seen,
            replaced = report.replaced,
            restyled = report.restyled,
            external = report.left_external,
            videos = report.videos,
            "Fixed feed content"
        );

        FixOutcome {
            html: doc.to_html(),
            report,
        }
    }

    fn fix_images(&self, doc: &mut Document, report: &mut FixReport) {
        let engine = StyleEngine::new(&self.policy, self.probe);
        for node in doc.elements_by_tag("img") {
            let Some(image) = ManagedImageRef::from_node(doc, node, self.policy.caption_class())
            else {
                continue;
            };
            let identity = resolver::resolve(self.assets, &image.source_url);
            let chosen = rendition::select(
                self.renditions,
                identity,
                self.policy.custom_size(),
                self.policy.fallback_size(),
            );
            report.record(engine.style_image(doc, &image, identity, chosen.as_ref()));
        }
    }

    fn fix_videos(&self, doc: &mut Document, report: &mut FixReport) {
        for node in doc.elements_by_tag("video") {
            style_video(doc, node, &self.policy);
            report.videos += 1;
        }
    }

    /// Apply a route decision to one post
    #[must_use]
    pub fn render(
        &self,
        post: &FeedPost<'_>,
        route: FeedRoute,
        excerpt: Option<&dyn ExcerptBuilder>,
    ) -> String {
        match route {
            FeedRoute::Untouched => post.rendered.to_string(),
            FeedRoute::Excerpt => match excerpt {
                Some(builder) => builder.excerpt(post),
                None => post.rendered.to_string(),
            },
            FeedRoute::GalleryOnly => gallery::normalize_if_gallery(post.raw, post.rendered),
            FeedRoute::FullText => {
                self.fix(&gallery::normalize_if_gallery(post.raw, post.rendered))
            }
        }
    }
}
