//! Loading and serializing markup without images is a passthrough

use feed_image_swap::{FeedFixer, load, wrap};

mod common;
use common::{media_library, policy};

const SAMPLES: &[&str] = &[
    "<p>Hello <strong>world</strong></p>",
    r#"<h2 id="intro">Intro</h2><p>See <a href="https://example.com/?a=1&amp;b=2">this</a>.</p>"#,
    "<ul><li>one</li><li>two</li></ul><blockquote><p>quoted</p></blockquote>",
    "<!-- wp:paragraph --><p>block</p><!-- /wp:paragraph -->",
    "<pre><code>fn main() {}</code></pre>",
    r#"<table><tbody><tr><td>cell</td></tr></tbody></table>"#,
    "<p>line<br>break</p><hr>",
    r#"<iframe src="https://player.example.com/embed/1" width="560" height="315"></iframe>"#,
];

#[test]
fn test_samples_roundtrip_through_loader() {
    for sample in SAMPLES {
        assert_eq!(&load(&wrap(sample)).to_html(), sample, "sample: {sample}");
    }
}

#[test]
fn test_samples_pass_through_pipeline() {
    let media = media_library();
    let fixer = FeedFixer::new(policy(true), &media, &media);
    for sample in SAMPLES {
        assert_eq!(&fixer.fix(sample), sample, "sample: {sample}");
    }
}

#[test]
fn test_stray_close_tags_keep_following_content() {
    let media = media_library();
    let fixer = FeedFixer::new(policy(true), &media, &media);
    let output = fixer.fix("<p>one</p></div></span><p>two</p>");
    assert!(output.contains("one"));
    assert!(output.contains("two"));
}

#[test]
fn test_texturized_entities_pass_through_pipeline() {
    let media = media_library();
    let fixer = FeedFixer::new(policy(true), &media, &media);
    let input = "<p>It&#8217;s a &#8220;test&#8221;&nbsp;here<br />next</p>";
    assert_eq!(fixer.fix(input), input);
}

#[test]
fn test_self_closed_external_image_is_byte_identical() {
    let media = media_library();
    let fixer = FeedFixer::new(policy(false), &media, &media);
    let input = r#"<p><img src="https://cdn.other.net/a.jpg" alt="" width="100" height="50" /></p>"#;
    let outcome = fixer.fix_with_report(input);
    assert_eq!(outcome.html, input);
    assert_eq!(outcome.report.left_external, 1);
}

#[test]
fn test_non_breaking_space_survives_loader() {
    let html = "<p>one&nbsp;two</p>";
    assert_eq!(load(&wrap(html)).to_html(), html);
}
