//! Per-request decision of which transform a feed item gets

use crate::config::FeedSettings;

/// Feed-mode questions answered by the host for the current request
pub trait FeedQuery {
    fn is_feed_request(&self) -> bool;

    /// Full text feeds, as opposed to summary feeds
    fn is_full_text_mode(&self) -> bool;

    fn is_named_feed(&self, name: &str) -> bool;
}

/// Plain request description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedRequest {
    pub feed: bool,
    pub full_text: bool,
    /// Custom feed endpoint requested, if any
    pub feed_name: Option<String>,
}

impl FeedRequest {
    /// A full-text request to the default feed
    #[must_use]
    pub fn full_text() -> Self {
        Self {
            feed: true,
            full_text: true,
            feed_name: None,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.feed_name = Some(name.into());
        self
    }
}

impl FeedQuery for FeedRequest {
    fn is_feed_request(&self) -> bool {
        self.feed
    }

    fn is_full_text_mode(&self) -> bool {
        self.full_text
    }

    fn is_named_feed(&self, name: &str) -> bool {
        self.feed_name.as_deref() == Some(name)
    }
}

/// Transform applied to feed content for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedRoute {
    /// Not a feed: content passes through
    Untouched,
    /// Summary feed: the excerpt builder takes over
    Excerpt,
    /// Galleries normalized, images left for the web layout
    GalleryOnly,
    /// Galleries normalized and images rewritten for email
    FullText,
}

impl FeedRoute {
    /// Evaluate the feed settings once for a request
    #[must_use]
    pub fn decide(query: &dyn FeedQuery, settings: &FeedSettings) -> FeedRoute {
        if !query.is_feed_request() {
            return FeedRoute::Untouched;
        }
        if !query.is_full_text_mode() {
            return FeedRoute::Excerpt;
        }
        if settings.simplify_feed {
            return FeedRoute::GalleryOnly;
        }
        if settings.alternate_feed && !query.is_named_feed(&settings.alternate_feed_name) {
            return FeedRoute::GalleryOnly;
        }
        FeedRoute::FullText
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FeedRoute::Untouched => "untouched",
            FeedRoute::Excerpt => "excerpt",
            FeedRoute::GalleryOnly => "gallery-only",
            FeedRoute::FullText => "full-text",
        }
    }
}

impl std::fmt::Display for FeedRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(simplify: bool, alternate: bool) -> FeedSettings {
        FeedSettings {
            simplify_feed: simplify,
            alternate_feed: alternate,
            ..FeedSettings::default()
        }
    }

    #[test]
    fn test_non_feed_untouched() {
        let request = FeedRequest::default();
        assert_eq!(FeedRoute::decide(&request, &settings(false, false)), FeedRoute::Untouched);
    }

    #[test]
    fn test_summary_feed_uses_excerpt() {
        let request = FeedRequest {
            feed: true,
            full_text: false,
            feed_name: None,
        };
        assert_eq!(FeedRoute::decide(&request, &settings(true, true)), FeedRoute::Excerpt);
    }

    #[test]
    fn test_full_text_table() {
        let main = FeedRequest::full_text();
        let email = FeedRequest::full_text().named("email");

        assert_eq!(FeedRoute::decide(&main, &settings(true, false)), FeedRoute::GalleryOnly);
        assert_eq!(FeedRoute::decide(&email, &settings(true, true)), FeedRoute::GalleryOnly);
        assert_eq!(FeedRoute::decide(&main, &settings(false, true)), FeedRoute::GalleryOnly);
        assert_eq!(FeedRoute::decide(&email, &settings(false, true)), FeedRoute::FullText);
        assert_eq!(FeedRoute::decide(&main, &settings(false, false)), FeedRoute::FullText);
        assert_eq!(FeedRoute::decide(&email, &settings(false, false)), FeedRoute::FullText);
    }

    #[test]
    fn test_route_names() {
        assert_eq!(FeedRoute::GalleryOnly.to_string(), "gallery-only");
        assert_eq!(FeedRoute::FullText.as_str(), "full-text");
    }
}
