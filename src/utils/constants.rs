//! Shared configuration constants for feed image rewriting
//!
//! This module contains default values and markers used throughout the
//! codebase to ensure consistency and avoid magic numbers.

/// Default email image width: 560 pixels
///
/// Content width of a standard single column email template
/// (600 pixels wide with 20 pixels of padding on each side).
pub const DEFAULT_MAX_WIDTH: u32 = 560;

/// Smallest accepted maximum image width
pub const MIN_MAX_WIDTH: u32 = 200;

/// Largest accepted maximum image width
pub const MAX_MAX_WIDTH: u32 = 900;

/// Default margin around images, in pixels
pub const DEFAULT_MARGIN_PX: u32 = 10;

/// Name of the email-sized rendition registered with the image store
pub const DEFAULT_CUSTOM_SIZE: &str = "mailchimp";

/// Broader rendition requested when the custom size was never generated
pub const DEFAULT_FALLBACK_SIZE: &str = "large";

/// Class marking a caption wrapper around an image
pub const DEFAULT_CAPTION_CLASS: &str = "wp-caption";

/// Class marking the container the publishing system wraps around videos
pub const DEFAULT_VIDEO_WRAPPER_CLASS: &str = "wp-video";

/// Name of the alternate feed endpoint
pub const DEFAULT_ALTERNATE_FEED: &str = "email";

/// Tag of the synthetic container wrapped around feed content before parsing.
///
/// A custom element rather than `div`: stray `</div>` tags in post content
/// cannot close it early.
pub const WRAPPER_TAG: &str = "feed-content";

/// Classes carried by block-editor gallery lists
pub const BLOCK_GALLERY_CLASSES: &[&str] = &["wp-block-gallery", "blocks-gallery-grid"];

/// Style appended to block gallery lists
pub const GALLERY_LIST_STYLE: &str = "list-style-type:none;padding-left:0;";

/// Style appended to block gallery list items
pub const GALLERY_ITEM_STYLE: &str = "list-style-type:none;";
