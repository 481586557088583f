//! Settings boundary
//!
//! Values coming from storage or user input are validated here. Rejected
//! values never reach the policy; the previously stored value is kept.

use serde::Deserialize;

use super::types::{FeedSettings, ImagePolicy};
use crate::error::{FeedError, FeedResult};
use crate::utils::{MAX_MAX_WIDTH, MIN_MAX_WIDTH};

/// Validate a new maximum width, falling back to `previous` when rejected.
///
/// Zero, negative and out-of-range values are rejected.
#[must_use]
pub fn sanitize_max_width(new_value: i64, previous: u32) -> u32 {
    match validate_max_width(new_value) {
        Ok(width) => width,
        Err(e) => {
            log::warn!("{e}; keeping {previous}");
            previous
        }
    }
}

fn validate_max_width(new_value: i64) -> FeedResult<u32> {
    u32::try_from(new_value)
        .ok()
        .filter(|width| (MIN_MAX_WIDTH..=MAX_MAX_WIDTH).contains(width))
        .ok_or(FeedError::MaxWidthOutOfRange(new_value))
}

/// An image size the host must register for renditions to exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl ImagePolicy {
    /// The email-sized rendition: `max_width` wide, up to twice as tall
    #[must_use]
    pub fn custom_size_spec(&self) -> SizeSpec {
        SizeSpec {
            name: self.custom_size.clone(),
            width: self.max_width,
            height: self.max_width * 2,
        }
    }

    /// Load a policy from JSON, validating it like any other settings input
    pub fn from_json(json: &str) -> FeedResult<Self> {
        let raw: RawPolicy = serde_json::from_str(json)?;
        let mut policy = raw.policy;
        policy.max_width = match raw.max_width {
            Some(width) => sanitize_max_width(width, ImagePolicy::default().max_width),
            None => ImagePolicy::default().max_width,
        };
        Ok(policy)
    }
}

/// Width is read as a signed number so negative input is rejected, not a parse error
#[derive(Deserialize)]
struct RawPolicy {
    #[serde(default)]
    max_width: Option<i64>,
    #[serde(flatten)]
    policy: ImagePolicy,
}

/// Source of the settings for one request
pub trait SettingsProvider {
    fn policy(&self) -> ImagePolicy;

    fn feed_settings(&self) -> FeedSettings;

    /// Image sizes the host should register.
    ///
    /// Nothing is registered when the feed is only simplified.
    fn registered_sizes(&self) -> Vec<SizeSpec> {
        if self.feed_settings().simplify_feed {
            Vec::new()
        } else {
            vec![self.policy().custom_size_spec()]
        }
    }
}

/// In-memory settings store applying boundary validation on every update
#[derive(Debug, Clone, Default)]
pub struct StoredSettings {
    policy: ImagePolicy,
    feed: FeedSettings,
}

impl StoredSettings {
    #[must_use]
    pub fn new(policy: ImagePolicy, feed: FeedSettings) -> Self {
        Self { policy, feed }
    }

    /// Update the maximum width.
    ///
    /// On rejection the stored width is left unchanged and the error is returned.
    pub fn update_max_width(&mut self, new_value: i64) -> FeedResult<()> {
        self.policy.max_width = validate_max_width(new_value)?;
        Ok(())
    }

    pub fn set_simplify_feed(&mut self, simplify: bool) {
        self.feed.simplify_feed = simplify;
    }

    pub fn set_alternate_feed(&mut self, alternate: bool) {
        self.feed.alternate_feed = alternate;
    }

    pub fn set_change_small_images(&mut self, change: bool) {
        self.policy.change_small_images = change;
    }

    pub fn set_process_external_images(&mut self, process: bool) {
        self.policy.process_external_images = process;
    }
}

impl SettingsProvider for StoredSettings {
    fn policy(&self) -> ImagePolicy {
        self.policy.clone()
    }

    fn feed_settings(&self) -> FeedSettings {
        self.feed.clone()
    }
}
