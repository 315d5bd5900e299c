/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Video banner markup.
//!
//! Local files render as a native `<video>`; remote providers render as an
//! `<iframe>`. Both sit in a wrapper whose bottom padding reserves the
//! video's aspect ratio.

use super::html;
use regex::Regex;
use slider_core::{attrs, AttributeMap, AttributeValue};
use url::form_urlencoded;

/// Padding for a 16:9 video, used when the ratio cannot be parsed.
pub const DEFAULT_PADDING: f64 = 56.25;

pub const YOUTUBE: &str = "youtube";
pub const VIMEO: &str = "vimeo";

const WRAPPER_CLASS: &str = "banner-slider-video-wrapper";
const BACKGROUND_CLASS: &str = "banner-slider-video-background";
const OVERLAY_CLASS: &str = "banner-slider-video-overlay";
const VIDEO_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;object-fit:cover;";
const IFRAME_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;";
const UNSUPPORTED_TEXT: &str = "Your browser does not support the video tag.";

/// Attributes forced onto background `<video>` elements.
const BACKGROUND_FLAGS: [&str; 4] = ["autoplay", "loop", "muted", "playsinline"];

/// Bottom padding percentage for a `"W:H"` aspect ratio, rounded to two places.
///
/// Each part is read by its leading number, so `"4:3px"` is 4:3. Anything
/// other than exactly two parts, a width that is not a positive number, or
/// a non-finite result yields 16:9.
pub fn aspect_ratio_padding(aspect_ratio: &str) -> f64 {
    let parts: Vec<&str> = aspect_ratio.split(':').collect();
    let [width, height] = parts.as_slice() else {
        return DEFAULT_PADDING;
    };

    let width = leading_number(width);
    let height = leading_number(height);
    if !(width.is_finite() && width > 0.0) {
        return DEFAULT_PADDING;
    }

    let padding = (height / width * 10_000.0).round() / 100.0;
    if padding.is_finite() {
        padding
    } else {
        DEFAULT_PADDING
    }
}

/// The decimal number at the start of `s`, or 0 when there is none.
fn leading_number(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }
    s[..end].parse().unwrap_or(0.0)
}

/// What to render for one video banner.
#[derive(Debug, Clone)]
pub struct VideoRequest<'a> {
    pub url: &'a str,
    pub attributes: AttributeMap,
    pub aspect_ratio: &'a str,
    pub background: bool,
    /// Overlay markup shown above background videos (already filtered).
    pub overlay: Option<String>,
}

/// Renders video wrappers.
pub struct VideoMarkup {
    youtube_embed: Regex,
}

impl Default for VideoMarkup {
    fn default() -> Self {
        Self {
            youtube_embed: Regex::new(r"/embed/([a-zA-Z0-9_-]+)").expect("valid embed pattern"),
        }
    }
}

impl VideoMarkup {
    /// Render a native `<video>` for a locally stored file.
    ///
    /// Background videos always autoplay muted in a loop, inline, without controls.
    pub fn render_local(&self, request: VideoRequest<'_>) -> String {
        let mut attributes = request.attributes;
        if request.background {
            for flag in BACKGROUND_FLAGS {
                attributes.insert(flag.to_string(), AttributeValue::from(flag));
            }
            attributes.shift_remove("controls");
        }
        attributes.insert("src".to_string(), request.url.into());
        attributes.insert("style".to_string(), VIDEO_STYLE.into());

        let video = html::tag("video", UNSUPPORTED_TEXT, &attributes);
        wrap(
            video,
            request.aspect_ratio,
            request.background,
            request.overlay.as_deref(),
        )
    }

    /// Render an `<iframe>` for a remote provider.
    ///
    /// In background mode the embed URL gains the provider's autoplay and loop parameters.
    pub fn render_embedded(&self, request: VideoRequest<'_>, provider_code: &str) -> String {
        let url = if request.background {
            self.background_embed_url(request.url, provider_code)
        } else {
            request.url.to_string()
        };

        let mut attributes = request.attributes;
        attributes.insert("src".to_string(), url.into());
        attributes.insert("style".to_string(), IFRAME_STYLE.into());

        let iframe = html::tag("iframe", "", &attributes);
        wrap(
            iframe,
            request.aspect_ratio,
            request.background,
            request.overlay.as_deref(),
        )
    }

    /// Append background playback parameters for known providers.
    pub fn background_embed_url(&self, url: &str, provider_code: &str) -> String {
        let params: Vec<(&str, String)> = match provider_code {
            YOUTUBE => vec![
                ("autoplay", "1".to_string()),
                ("mute", "1".to_string()),
                ("loop", "1".to_string()),
                ("controls", "0".to_string()),
                ("showinfo", "0".to_string()),
                ("rel", "0".to_string()),
                ("modestbranding", "1".to_string()),
                // Looping a single video requires it to be its own playlist.
                ("playlist", self.youtube_video_id(url).unwrap_or_default()),
            ],
            VIMEO => vec![
                ("autoplay", "1".to_string()),
                ("muted", "1".to_string()),
                ("loop", "1".to_string()),
                ("background", "1".to_string()),
            ],
            _ => return url.to_string(),
        };

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", url, separator, query)
    }

    fn youtube_video_id(&self, url: &str) -> Option<String> {
        self.youtube_embed
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

fn wrap(inner: String, aspect_ratio: &str, background: bool, overlay: Option<&str>) -> String {
    let mut class = WRAPPER_CLASS.to_string();
    if background {
        class.push(' ');
        class.push_str(BACKGROUND_CLASS);
    }

    let mut content = inner;
    if background {
        if let Some(overlay) = overlay.filter(|o| !o.is_empty()) {
            content.push_str(&html::tag("div", overlay, &attrs! { "class" => OVERLAY_CLASS }));
        }
    }

    let padding = aspect_ratio_padding(aspect_ratio);
    html::tag(
        "div",
        &content,
        &attrs! {
            "class" => class,
            "style" => format!("position:relative;padding-bottom:{}%;", padding),
        },
    )
}
