//! Image and caption style engine
//!
//! Decides per image whether to swap in the email-sized rendition or keep the
//! source and restyle it into one of three alignment buckets, and applies the
//! narrower video treatment.

pub mod alignment;
pub mod engine;
pub mod image_ref;
pub mod video;

pub use alignment::{Bucket, Side, replaced_style};
pub use engine::{StyleEngine, StyleOutcome};
pub use image_ref::{ManagedImageRef, parse_declared_width};
pub use video::style_video;
