//! Getter methods for `ImagePolicy`

use super::types::ImagePolicy;

impl ImagePolicy {
    #[must_use]
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Cap applied to small side-aligned images and captions.
    ///
    /// Always `floor(max_width / 2)`, independent of the image's real width.
    #[must_use]
    pub fn half_width(&self) -> u32 {
        self.max_width / 2
    }

    #[must_use]
    pub fn change_small_images(&self) -> bool {
        self.change_small_images
    }

    #[must_use]
    pub fn process_external_images(&self) -> bool {
        self.process_external_images
    }

    #[must_use]
    pub fn margin_px(&self) -> u32 {
        self.margin_px
    }

    #[must_use]
    pub fn allow_dimension_probe(&self) -> bool {
        self.allow_dimension_probe
    }

    #[must_use]
    pub fn custom_size(&self) -> &str {
        &self.custom_size
    }

    #[must_use]
    pub fn fallback_size(&self) -> &str {
        &self.fallback_size
    }

    #[must_use]
    pub fn caption_class(&self) -> &str {
        &self.caption_class
    }

    #[must_use]
    pub fn video_wrapper_class(&self) -> &str {
        &self.video_wrapper_class
    }
}
