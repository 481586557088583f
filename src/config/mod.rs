//! Configuration module for feed image rewriting
//!
//! This module provides the `ImagePolicy` snapshot and its builder, the
//! feed-level switches, and the settings boundary that validates values
//! before the transformation core ever sees them.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod settings;
pub mod types;

// Re-exports for public API
pub use builder::ImagePolicyBuilder;
pub use settings::{SettingsProvider, SizeSpec, StoredSettings, sanitize_max_width};
pub use types::{FeedSettings, ImagePolicy};
