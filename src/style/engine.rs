//! Per-image replacement and styling decisions

use super::alignment::{Bucket, Side, replaced_style};
use super::image_ref::ManagedImageRef;
use crate::config::ImagePolicy;
use crate::document::Document;
use crate::probe::DimensionProbe;
use crate::rendition::Rendition;
use crate::resolver::AttachmentIdentity;

/// What the engine did to one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOutcome {
    /// External image left exactly as authored
    Untouched,
    /// Source swapped for the email rendition
    Replaced,
    /// Kept its source; alignment styling applied
    Restyled,
}

/// Applies the image policy to `<img>` nodes
pub struct StyleEngine<'a> {
    policy: &'a ImagePolicy,
    probe: &'a dyn DimensionProbe,
}

impl<'a> StyleEngine<'a> {
    #[must_use]
    pub fn new(policy: &'a ImagePolicy, probe: &'a dyn DimensionProbe) -> Self {
        Self { policy, probe }
    }

    /// Style one image, mutating its node and possibly its caption wrapper.
    ///
    /// `rendition` is the selector's answer for `identity`; a replacement is
    /// only ever made from it.
    pub fn style_image(
        &self,
        doc: &mut Document,
        image: &ManagedImageRef,
        identity: AttachmentIdentity,
        rendition: Option<&Rendition>,
    ) -> StyleOutcome {
        if identity.is_external() && !self.policy.process_external_images() {
            tracing::trace!(src = %image.source_url, "Leaving external image untouched");
            return StyleOutcome::Untouched;
        }

        if !identity.is_external() {
            doc.update_element(image.node, |element| {
                element.remove_attr("height");
                element.remove_attr("style");
            });
        }

        match rendition {
            Some(rendition) if self.should_replace(image) => {
                self.replace(doc, image, rendition);
                StyleOutcome::Replaced
            }
            _ => {
                self.restyle(doc, image);
                StyleOutcome::Restyled
            }
        }
    }

    /// Large and unsized images are always swapped; small ones follow the policy
    fn should_replace(&self, image: &ManagedImageRef) -> bool {
        let max_width = self.policy.max_width();
        let Some(declared) = image.declared_width.filter(|&w| w < max_width) else {
            return true;
        };
        if self.policy.change_small_images() {
            return true;
        }

        if self.policy.allow_dimension_probe()
            && let Some((probed, _)) = self.probe.dimensions(&image.source_url)
            && (probed != declared || probed >= max_width)
        {
            tracing::debug!(
                src = %image.source_url,
                declared,
                probed,
                "Declared width disagrees with file, replacing"
            );
            return true;
        }
        false
    }

    fn replace(&self, doc: &mut Document, image: &ManagedImageRef, rendition: &Rendition) {
        doc.update_element(image.node, |element| {
            element.set_attr("src", rendition.url.as_str());
            element.set_attr("width", rendition.width.to_string());
            element.remove_attr("srcset");
            element.remove_attr("sizes");
            element.set_attr("style", replaced_style(self.policy));
        });
        if let Some(caption) = image.caption_container {
            doc.update_element(caption, |element| element.remove_attr("style"));
        }
        tracing::debug!(
            src = %image.source_url,
            replacement = %rendition.url,
            width = rendition.width,
            "Replaced image with email rendition"
        );
    }

    fn restyle(&self, doc: &mut Document, image: &ManagedImageRef) {
        let max_width = self.policy.max_width();
        let caption_side = image
            .caption_container
            .and_then(|id| doc.element(id))
            .and_then(|caption| Side::from_classes(caption.classes()));

        // Caption-wrapped images usually carry their alignment on the wrapper
        let side = Side::from_classes(image.css_classes.iter().map(String::as_str)).or(caption_side);
        let bucket = Bucket::choose(side, image.declared_width, max_width);

        doc.update_element(image.node, |element| {
            element.set_attr("style", bucket.image_style(self.policy));
            if let Some(align) = bucket.align_attr() {
                element.set_attr("align", align);
            }
        });

        if let Some(caption) = image.caption_container {
            let caption_bucket = Bucket::choose(caption_side, image.declared_width, max_width);
            doc.update_element(caption, |element| {
                element.set_attr("style", caption_bucket.caption_style(self.policy));
            });
        }

        tracing::trace!(src = %image.source_url, ?bucket, "Restyled image");
    }
}
