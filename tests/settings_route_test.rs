//! Settings boundary and per-request routing

use feed_image_swap::{
    ExcerptBuilder, FeedFixer, FeedPost, FeedRequest, FeedRoute, SettingsProvider, StoredSettings,
};

mod common;
use common::{media_library, upload_url};

struct FirstParagraph;

impl ExcerptBuilder for FirstParagraph {
    fn excerpt(&self, post: &FeedPost<'_>) -> String {
        post.rendered
            .split_once("</p>")
            .map(|(first, _)| format!("{first}</p>"))
            .unwrap_or_else(|| post.rendered.to_string())
    }
}

#[test]
fn test_rejected_width_keeps_previous_policy() {
    let mut settings = StoredSettings::default();
    settings.update_max_width(600).unwrap();
    assert!(settings.update_max_width(150).is_err());
    assert!(settings.update_max_width(-1).is_err());
    assert_eq!(settings.policy().max_width(), 600);
}

#[test]
fn test_alternate_feed_routes_only_named_feed() {
    let mut settings = StoredSettings::default();
    settings.set_alternate_feed(true);
    let feed = settings.feed_settings();

    let main = FeedRequest::full_text();
    let email = FeedRequest::full_text().named(feed.alternate_feed_name.clone());

    assert_eq!(FeedRoute::decide(&main, &feed), FeedRoute::GalleryOnly);
    assert_eq!(FeedRoute::decide(&email, &feed), FeedRoute::FullText);
}

#[test]
fn test_simplify_overrides_alternate_feed() {
    let mut settings = StoredSettings::default();
    settings.set_alternate_feed(true);
    settings.set_simplify_feed(true);
    let feed = settings.feed_settings();

    assert!(feed.conflict().is_some());
    assert!(settings.registered_sizes().is_empty());

    let email = FeedRequest::full_text().named("email");
    assert_eq!(FeedRoute::decide(&email, &feed), FeedRoute::GalleryOnly);
}

#[test]
fn test_route_applied_to_post() {
    let media = media_library();
    let settings = StoredSettings::default();
    let fixer = FeedFixer::new(settings.policy(), &media, &media);

    let rendered = format!(
        r#"<p>First</p><p><img src="{}" width="300"></p>"#,
        upload_url("2024/05/photo-300x200.jpg")
    );
    let post = FeedPost {
        raw: "First\n\n<!-- wp:image -->",
        rendered: &rendered,
    };

    let summary = FeedRequest {
        feed: true,
        full_text: false,
        feed_name: None,
    };
    let route = FeedRoute::decide(&summary, &settings.feed_settings());
    assert_eq!(fixer.render(&post, route, Some(&FirstParagraph)), "<p>First</p>");

    let route = FeedRoute::decide(&FeedRequest::full_text(), &settings.feed_settings());
    assert!(fixer.render(&post, route, None).contains("photo-600x900.jpg"));

    let route = FeedRoute::decide(&FeedRequest::default(), &settings.feed_settings());
    assert_eq!(fixer.render(&post, route, None), rendered);
}
