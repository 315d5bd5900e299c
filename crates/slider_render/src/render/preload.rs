/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Preload hints for banner images.
//!
//! Only one format is ever preloaded: the best one any crop offers (AVIF,
//! then WebP, then the original). Preloading several formats would make
//! browsers download the same image more than once.

use super::html;
use crate::media::MediaUrl;
use serde::Serialize;
use slider_core::crop::sort_by_priority;
use slider_core::{attrs, ImageFormat, ResponsiveCrop};

/// Size descriptor appended after every breakpoint size.
const DEFAULT_SIZE: &str = "100vw";

/// A `<link rel="preload">` hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreloadLink {
    pub rel: String,
    pub href: String,
    #[serde(rename = "as")]
    pub as_type: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagesrcset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagesizes: Option<String>,
}

impl PreloadLink {
    /// A plain image preload with no type or source set.
    pub fn image(href: impl Into<String>) -> Self {
        Self {
            rel: "preload".to_string(),
            href: href.into(),
            as_type: "image".to_string(),
            mime_type: None,
            imagesrcset: None,
            imagesizes: None,
        }
    }

    pub fn to_html(&self) -> String {
        let mut attributes = attrs! {
            "rel" => self.rel.as_str(),
            "as" => self.as_type.as_str(),
            "href" => self.href.as_str(),
        };
        let optional = [
            ("type", &self.mime_type),
            ("imagesrcset", &self.imagesrcset),
            ("imagesizes", &self.imagesizes),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                attributes.insert(name.to_string(), value.as_str().into());
            }
        }
        html::tag("link", "", &attributes)
    }
}

/// Build the single preload hint for a set of responsive crops.
///
/// Returns `None` when no crop has a cropped image.
pub fn build_responsive_preload(
    crops: &[ResponsiveCrop],
    media: &MediaUrl,
) -> Option<PreloadLink> {
    let mut ordered = crops.to_vec();
    sort_by_priority(&mut ordered);

    let mut srcsets: [Vec<(String, u32)>; 3] = Default::default();
    let mut sizes: Vec<String> = Vec::new();

    for crop in &ordered {
        if crop.cropped_path().is_none() {
            continue;
        }
        let width = crop.target_width.unwrap_or(0);

        if let Some(query) = crop.media_query.as_deref().filter(|q| !q.is_empty()) {
            if width > 0 {
                sizes.push(format!("{} {}px", query, width));
            }
        }

        for (slot, format) in ImageFormat::PREFERENCE.into_iter().enumerate() {
            if let Some(path) = crop.variant_path(format) {
                srcsets[slot].push((media.resolve(path), width));
            }
        }
    }

    let (slot, format) = ImageFormat::PREFERENCE
        .into_iter()
        .enumerate()
        .find(|(slot, _)| !srcsets[*slot].is_empty())?;
    let chosen = &srcsets[slot];

    sizes.push(DEFAULT_SIZE.to_string());
    let imagesrcset = chosen
        .iter()
        .map(|(url, width)| format!("{} {}w", url, width))
        .collect::<Vec<_>>()
        .join(", ");

    Some(PreloadLink {
        mime_type: format.mime_type().map(str::to_string),
        imagesrcset: Some(imagesrcset),
        imagesizes: Some(sizes.join(", ")),
        ..PreloadLink::image(chosen[0].0.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(order: i32, width: u32, query: &str, avif: bool, webp: bool) -> ResponsiveCrop {
        let name = format!("c{}", order);
        ResponsiveCrop {
            sort_order: Some(order),
            cropped_image: Some(format!("crops/{name}.jpg")),
            webp_image: Some(format!("crops/{name}.webp")),
            avif_image: Some(format!("crops/{name}.avif")),
            generate_avif: avif,
            generate_webp: webp,
            target_width: Some(width),
            target_height: Some(width / 2),
            media_query: Some(query.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_prefers_avif_when_available() {
        let crops = vec![
            crop(1, 600, "(max-width: 767px)", true, true),
            crop(0, 1200, "(min-width: 768px)", true, true),
        ];
        let link = build_responsive_preload(&crops, &MediaUrl::new("/media/")).unwrap();
        assert_eq!(link.mime_type.as_deref(), Some("image/avif"));
        assert_eq!(link.href, "/media/crops/c0.avif");
        assert_eq!(
            link.imagesrcset.as_deref(),
            Some("/media/crops/c0.avif 1200w, /media/crops/c1.avif 600w")
        );
        assert_eq!(
            link.imagesizes.as_deref(),
            Some("(min-width: 768px) 1200px, (max-width: 767px) 600px, 100vw")
        );
    }

    #[test]
    fn test_falls_back_to_webp() {
        let crops = vec![
            crop(0, 1200, "(min-width: 768px)", false, true),
            crop(1, 600, "(max-width: 767px)", false, false),
        ];
        let link = build_responsive_preload(&crops, &MediaUrl::new("/media/")).unwrap();
        assert_eq!(link.mime_type.as_deref(), Some("image/webp"));
        assert_eq!(link.imagesrcset.as_deref(), Some("/media/crops/c0.webp 1200w"));
    }

    #[test]
    fn test_original_has_no_type() {
        let crops = vec![ResponsiveCrop {
            media_query: None,
            ..crop(0, 800, "", false, false)
        }];
        let link = build_responsive_preload(&crops, &MediaUrl::new("/media/")).unwrap();
        assert_eq!(link.mime_type, None);
        assert_eq!(link.href, "/media/crops/c0.jpg");
        assert_eq!(link.imagesizes.as_deref(), Some("100vw"));

        let json = serde_json::to_value(&link).unwrap();
        assert!(json.get("type").is_none());
        assert_eq!(json["as"], "image");
    }

    #[test]
    fn test_no_usable_crop() {
        let crops = vec![ResponsiveCrop {
            cropped_image: None,
            ..crop(0, 800, "(min-width: 0px)", true, true)
        }];
        assert_eq!(build_responsive_preload(&crops, &MediaUrl::default()), None);
    }

    #[test]
    fn test_link_markup() {
        let link = PreloadLink {
            mime_type: Some("image/webp".to_string()),
            imagesrcset: Some("/a.webp 800w".to_string()),
            imagesizes: Some("100vw".to_string()),
            ..PreloadLink::image("/a.webp")
        };
        assert_eq!(
            link.to_html(),
            r#"<link rel="preload" as="image" href="/a.webp" type="image/webp" imagesrcset="/a.webp 800w" imagesizes="100vw">"#
        );
    }
}
