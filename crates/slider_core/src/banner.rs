/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Banner records: one slide's content within a slider.

use serde::{Deserialize, Serialize};

/// The kind of content a banner carries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerType {
    #[default]
    Image,
    Video,
    /// Custom HTML body.
    Custom,
}

impl BannerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerType::Image => "image",
            BannerType::Video => "video",
            BannerType::Custom => "custom",
        }
    }
}

/// A single banner belonging to exactly one slider.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Banner {
    /// Identity; `0` means the banner was never persisted.
    pub banner_id: u64,
    /// Owning slider.
    pub slider_id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub banner_type: BannerType,
    /// Image path relative to the media root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// External video reference (provider URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Locally stored video path; wins over `video_url` when both are set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_path: Option<String>,
    /// `"W:H"` aspect ratio for video banners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Custom HTML body, also used as the overlay of background videos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub open_in_new_tab: bool,
    pub preload_enabled: bool,
    pub video_as_background: bool,
    pub is_active: bool,
    pub position: i32,
}

impl Banner {
    /// Title when present and non-empty, else the name.
    pub fn alt_text(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.name,
        }
    }

    /// Image path, ignoring empty strings.
    pub fn image_path(&self) -> Option<&str> {
        non_empty(self.image.as_deref())
    }

    /// The video reference to resolve: local path first, then external URL.
    pub fn video_reference(&self) -> Option<&str> {
        non_empty(self.video_path.as_deref()).or_else(|| non_empty(self.video_url.as_deref()))
    }

    pub fn link(&self) -> Option<&str> {
        non_empty(self.link_url.as_deref())
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
