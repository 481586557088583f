//! Shared fixtures for the feed-image-swap test suite

use feed_image_swap::{ImagePolicy, MediaManifest};

/// Upload base used by every fixture
pub const UPLOAD_BASE: &str = "https://example.com/up";

/// Media library with three attachments:
///
/// - `photo.jpg` (1) has the email size at 600 wide
/// - `side.jpg` (2) only has a `large` rendition, 800 wide
/// - `pic.jpg` (3) has the email size at 560 wide
#[allow(dead_code)]
pub fn media_library() -> MediaManifest {
    let json = serde_json::json!({
        "upload_base_url": UPLOAD_BASE,
        "attachments": [
            {
                "id": 1,
                "file": "2024/05/photo.jpg",
                "renditions": {
                    "mailchimp": { "url": format!("{UPLOAD_BASE}/2024/05/photo-600x900.jpg"), "width": 600, "height": 900 }
                }
            },
            {
                "id": 2,
                "file": "2024/05/side.jpg",
                "renditions": {
                    "large": { "url": format!("{UPLOAD_BASE}/2024/05/side-800x600.jpg"), "width": 800, "height": 600 }
                }
            },
            {
                "id": 3,
                "file": "2024/05/pic.jpg",
                "renditions": {
                    "mailchimp": { "url": format!("{UPLOAD_BASE}/2024/05/pic-560x560.jpg"), "width": 560, "height": 560 }
                }
            }
        ]
    });
    MediaManifest::from_json(&json.to_string()).expect("fixture manifest is valid")
}

/// Default policy with `change_small_images` set as given
#[allow(dead_code)]
pub fn policy(change_small_images: bool) -> ImagePolicy {
    ImagePolicy::builder()
        .max_width(560)
        .change_small_images(change_small_images)
        .build()
}

/// URL of a file under the fixture upload base
#[allow(dead_code)]
pub fn upload_url(file: &str) -> String {
    format!("{UPLOAD_BASE}/{file}")
}
