/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Responsive crop records.
//!
//! Crops are produced by the image pipeline and only consumed here. Each crop
//! targets one breakpoint and may carry AVIF and WebP siblings of the
//! cropped image.

use serde::{Deserialize, Serialize};

/// Media query used when a crop has no breakpoint data joined in.
pub const DEFAULT_MEDIA_QUERY: &str = "(min-width: 0px)";

/// Image encodings a crop can provide, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageFormat {
    /// Next-gen encoding (AVIF).
    Avif,
    /// Modern encoding (WebP).
    Webp,
    /// The encoding of the cropped image itself.
    Original,
}

impl ImageFormat {
    /// Formats in preference order.
    pub const PREFERENCE: [ImageFormat; 3] =
        [ImageFormat::Avif, ImageFormat::Webp, ImageFormat::Original];

    /// MIME type advertised on `<source>` and preload hints.
    ///
    /// The original format carries no type so every user agent picks it up.
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            ImageFormat::Avif => Some("image/avif"),
            ImageFormat::Webp => Some("image/webp"),
            ImageFormat::Original => None,
        }
    }
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// A breakpoint-specific variant of a banner image.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ResponsiveCrop {
    pub crop_id: u64,
    /// Owning banner.
    pub banner_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoint_id: Option<u64>,
    /// Cropped image path relative to the media root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cropped_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webp_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avif_image: Option<String>,
    pub generate_webp: bool,
    pub generate_avif: bool,
    /// Priority; smaller sorts first (desktop first).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    /// Breakpoint target width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_width: Option<u32>,
    /// Breakpoint target height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_height: Option<u32>,
    /// Breakpoint media query, e.g. `(min-width: 1024px)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_query: Option<String>,
}

impl ResponsiveCrop {
    pub fn cropped_path(&self) -> Option<&str> {
        self.cropped_image.as_deref().filter(|p| !p.is_empty())
    }

    /// Path of the given format variant, if the variant is enabled and present.
    pub fn variant_path(&self, format: ImageFormat) -> Option<&str> {
        let (enabled, path) = match format {
            ImageFormat::Avif => (self.generate_avif, self.avif_image.as_deref()),
            ImageFormat::Webp => (self.generate_webp, self.webp_image.as_deref()),
            ImageFormat::Original => (true, self.cropped_image.as_deref()),
        };
        if !enabled {
            return None;
        }
        path.filter(|p| !p.is_empty())
    }

    /// Media query for `<source>` elements, defaulting to a catch-all query.
    pub fn media_query_or_default(&self) -> &str {
        self.media_query
            .as_deref()
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_MEDIA_QUERY)
    }

    pub fn priority(&self) -> i32 {
        self.sort_order.unwrap_or(0)
    }

    /// Target dimensions when both are known and non-zero.
    pub fn target_dimensions(&self) -> Option<ImageDimensions> {
        match (self.target_width, self.target_height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => {
                Some(ImageDimensions { width, height })
            }
            _ => None,
        }
    }
}

/// Sort crops by priority, keeping input order for equal priorities.
pub fn sort_by_priority(crops: &mut [ResponsiveCrop]) {
    crops.sort_by_key(ResponsiveCrop::priority);
}
