/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Responsive `<picture>` markup from responsive crops.
//!
//! Crops are evaluated in priority order (desktop first). Each crop with a
//! cropped image contributes up to three `<source>` elements, always in the
//! order AVIF, WebP, original, so user agents pick the best format they can
//! decode for the first matching media query.

use super::html;
use crate::media::MediaUrl;
use slider_core::crop::sort_by_priority;
use slider_core::{attrs, AttributeMap, ImageDimensions, ImageFormat, ResponsiveCrop};

/// CSS class carried by every banner image.
pub const IMAGE_CLASS: &str = "banner-slider-image";

const INDENT: &str = "    ";

/// One `<source>` element of a picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub media: String,
    pub srcset: String,
    pub format: ImageFormat,
}

impl SourceDescriptor {
    /// MIME type, set for AVIF and WebP sources only.
    pub fn mime_type(&self) -> Option<&'static str> {
        self.format.mime_type()
    }

    pub fn to_html(&self) -> String {
        let mut attributes = attrs! {
            "media" => self.media.as_str(),
            "srcset" => self.srcset.as_str(),
        };
        if let Some(mime) = self.mime_type() {
            attributes.insert("type".to_string(), mime.into());
        }
        html::tag("source", "", &attributes)
    }
}

/// The `<img>` a picture falls back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureFallback {
    pub src: String,
    /// Reserved layout size, from the highest-priority crop.
    pub dimensions: Option<ImageDimensions>,
}

/// Sources and fallback image selected from a banner's crops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PicturePlan {
    pub sources: Vec<SourceDescriptor>,
    pub fallback: Option<PictureFallback>,
}

/// Order crops by priority and list the sources each one contributes.
///
/// Crops without a cropped image are skipped. The fallback comes from the
/// first crop that has one.
pub fn select_sources(crops: &[ResponsiveCrop], media: &MediaUrl) -> PicturePlan {
    let mut ordered = crops.to_vec();
    sort_by_priority(&mut ordered);

    let mut plan = PicturePlan::default();
    for crop in &ordered {
        let Some(cropped) = crop.cropped_path() else {
            continue;
        };

        if plan.fallback.is_none() {
            plan.fallback = Some(PictureFallback {
                src: media.resolve(cropped),
                dimensions: crop.target_dimensions(),
            });
        }

        let query = crop.media_query_or_default();
        for format in ImageFormat::PREFERENCE {
            if let Some(path) = crop.variant_path(format) {
                plan.sources.push(SourceDescriptor {
                    media: query.to_string(),
                    srcset: media.resolve(path),
                    format,
                });
            }
        }
    }
    plan
}

/// Attributes shared by every banner `<img>`.
pub fn image_attributes(
    alt: &str,
    dimensions: Option<ImageDimensions>,
    lazy: bool,
) -> AttributeMap {
    let mut attributes = attrs! { "alt" => alt, "class" => IMAGE_CLASS };
    if let Some(size) = dimensions {
        attributes.insert("width".to_string(), size.width.into());
        attributes.insert("height".to_string(), size.height.into());
    }
    if lazy {
        attributes.insert("loading".to_string(), "lazy".into());
    }
    attributes
}

/// Render a `<picture>` element, or `None` when there are no sources.
///
/// `legacy_src` is used for the fallback `<img>` only when no crop supplied one.
pub fn render_picture(
    plan: &PicturePlan,
    alt: &str,
    lazy: bool,
    legacy_src: Option<&str>,
) -> Option<String> {
    if plan.sources.is_empty() {
        return None;
    }

    let (src, dimensions) = match &plan.fallback {
        Some(fallback) => (fallback.src.as_str(), fallback.dimensions),
        None => (legacy_src.unwrap_or_default(), None),
    };
    let img = html::img(src, &image_attributes(alt, dimensions, lazy));

    let mut content = String::from("\n");
    for source in &plan.sources {
        content.push_str(INDENT);
        content.push_str(&source.to_html());
        content.push('\n');
    }
    content.push_str(INDENT);
    content.push_str(&img);
    content.push('\n');

    Some(html::tag("picture", &content, &AttributeMap::new()))
}
