//! Feed content pipeline and route decision

pub mod fixer;
pub mod route;

pub use fixer::{ExcerptBuilder, FeedFixer, FeedPost, FixOutcome, FixReport};
pub use route::{FeedQuery, FeedRequest, FeedRoute};
