//! Media library collaborators shipped with the crate

pub mod manifest;

pub use manifest::{AttachmentEntry, MediaManifest, RenditionEntry};
