pub mod config;
pub mod document;
pub mod error;
pub mod gallery;
pub mod pipeline;
pub mod probe;
pub mod rendition;
pub mod resolver;
pub mod store;
pub mod style;
pub mod utils;

pub use config::{FeedSettings, ImagePolicy, ImagePolicyBuilder, SettingsProvider, StoredSettings};
pub use document::{Document, load, wrap};
pub use error::{FeedError, FeedResult};
pub use pipeline::{
    ExcerptBuilder, FeedFixer, FeedPost, FeedQuery, FeedRequest, FeedRoute, FixOutcome, FixReport,
};
pub use probe::{DimensionProbe, NoProbe, UploadDirProbe};
pub use rendition::{Rendition, RenditionStore};
pub use resolver::{AssetStore, AttachmentId, AttachmentIdentity, resolve, strip_resize_suffix};
pub use store::MediaManifest;
pub use style::{ManagedImageRef, StyleEngine, StyleOutcome};
