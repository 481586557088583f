//! Alignment buckets and the inline styles they produce

use crate::config::ImagePolicy;

/// Side requested by an `alignleft` / `alignright` class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Side named by a class list; `alignright` wins when both are present
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Option<Side> {
        let mut side = None;
        for class in classes {
            match class {
                "alignright" => return Some(Side::Right),
                "alignleft" => side = Some(Side::Left),
                _ => {}
            }
        }
        side
    }
}

/// Layout bucket for a non-replaced image or its caption wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    FloatRight,
    FloatLeft,
    Centered,
}

impl Bucket {
    /// Only images narrower than the maximum width may float.
    /// Unsized images are centered.
    #[must_use]
    pub fn choose(side: Option<Side>, width: Option<u32>, max_width: u32) -> Bucket {
        match (side, width) {
            (Some(Side::Right), Some(w)) if w < max_width => Bucket::FloatRight,
            (Some(Side::Left), Some(w)) if w < max_width => Bucket::FloatLeft,
            _ => Bucket::Centered,
        }
    }

    /// Value for the legacy `align` attribute
    #[must_use]
    pub fn align_attr(self) -> Option<&'static str> {
        match self {
            Bucket::FloatRight => Some("right"),
            Bucket::FloatLeft => Some("left"),
            Bucket::Centered => None,
        }
    }

    #[must_use]
    pub fn image_style(self, policy: &ImagePolicy) -> String {
        let margin = policy.margin_px();
        let half = policy.half_width();
        match self {
            Bucket::FloatRight => {
                format!("float:right;margin:0px 0px {margin}px {margin}px;max-width:{half}px;")
            }
            Bucket::FloatLeft => {
                format!("float:left;margin:0px {margin}px {margin}px 0px;max-width:{half}px;")
            }
            Bucket::Centered => centered_style(policy),
        }
    }

    #[must_use]
    pub fn caption_style(self, policy: &ImagePolicy) -> String {
        match self {
            Bucket::FloatRight => format!("float:right;max-width:{}px;", policy.half_width()),
            Bucket::FloatLeft => format!("float:left;max-width:{}px;", policy.half_width()),
            Bucket::Centered => format!("margin:0 auto;max-width:{}px;", policy.max_width()),
        }
    }
}

fn centered_style(policy: &ImagePolicy) -> String {
    format!(
        "display:block;margin:{}px auto;max-width:{}px;",
        policy.margin_px(),
        policy.max_width()
    )
}

/// Style of an image swapped for its email rendition.
///
/// The trailing `max-width:100%` keeps the pixel cap from overflowing a
/// narrower viewport.
#[must_use]
pub fn replaced_style(policy: &ImagePolicy) -> String {
    format!("{}max-width:100%;", centered_style(policy))
}
