//! Builder for `ImagePolicy`
//!
//! Every value passes through the settings boundary here, so a built policy
//! always satisfies its invariants and the core never re-validates it.

use super::settings::sanitize_max_width;
use super::types::ImagePolicy;

/// Fluent builder for [`ImagePolicy`]
#[derive(Debug, Clone, Default)]
pub struct ImagePolicyBuilder {
    policy: ImagePolicy,
}

impl ImagePolicy {
    #[must_use]
    pub fn builder() -> ImagePolicyBuilder {
        ImagePolicyBuilder::default()
    }
}

impl ImagePolicyBuilder {
    /// Set the maximum image width.
    ///
    /// Values outside `200..=900` are rejected and the previous width is kept.
    #[must_use]
    pub fn max_width(mut self, width: u32) -> Self {
        self.policy.max_width = sanitize_max_width(i64::from(width), self.policy.max_width);
        self
    }

    #[must_use]
    pub fn change_small_images(mut self, change: bool) -> Self {
        self.policy.change_small_images = change;
        self
    }

    #[must_use]
    pub fn process_external_images(mut self, process: bool) -> Self {
        self.policy.process_external_images = process;
        self
    }

    #[must_use]
    pub fn margin_px(mut self, margin: u32) -> Self {
        self.policy.margin_px = margin;
        self
    }

    /// Allow or forbid probing image files for their pixel dimensions
    #[must_use]
    pub fn allow_dimension_probe(mut self, allow: bool) -> Self {
        self.policy.allow_dimension_probe = allow;
        self
    }

    #[must_use]
    pub fn custom_size(mut self, name: impl Into<String>) -> Self {
        self.policy.custom_size = name.into();
        self
    }

    #[must_use]
    pub fn fallback_size(mut self, name: impl Into<String>) -> Self {
        self.policy.fallback_size = name.into();
        self
    }

    #[must_use]
    pub fn caption_class(mut self, class: impl Into<String>) -> Self {
        self.policy.caption_class = class.into();
        self
    }

    #[must_use]
    pub fn video_wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.policy.video_wrapper_class = class.into();
        self
    }

    #[must_use]
    pub fn build(self) -> ImagePolicy {
        self.policy
    }
}
