/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Built-in video provider for files stored in the media directory.

use crate::backend::VideoProvider;
use crate::error::CollaboratorError;
use crate::media::MediaUrl;
use slider_core::{attrs, AttributeMap, VideoData};

pub const LOCAL: &str = "local";

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "ogv", "mov", "m4v"];

/// Serves video files from the media directory (or an absolute file URL).
#[derive(Debug, Clone, Default)]
pub struct LocalVideoProvider {
    media: MediaUrl,
}

impl LocalVideoProvider {
    pub fn new(media: MediaUrl) -> Self {
        Self { media }
    }
}

fn has_video_extension(reference: &str) -> bool {
    let path = reference.split(['?', '#']).next().unwrap_or(reference);
    path.rsplit_once('.').is_some_and(|(_, ext)| {
        VIDEO_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    })
}

fn is_absolute_url(reference: &str) -> bool {
    ["http://", "https://", "//"]
        .iter()
        .any(|scheme| reference.starts_with(scheme))
}

impl VideoProvider for LocalVideoProvider {
    fn code(&self) -> &str {
        LOCAL
    }

    fn is_local(&self) -> bool {
        true
    }

    fn parse(&self, reference: &str) -> Result<VideoData, CollaboratorError> {
        let reference = reference.trim();
        if reference.is_empty() || !has_video_extension(reference) {
            return Err(CollaboratorError::InvalidVideo(reference.to_string()));
        }
        Ok(VideoData {
            provider: LOCAL.to_string(),
            video_id: reference.to_string(),
            source: reference.to_string(),
        })
    }

    fn embed_url(&self, video: &VideoData) -> String {
        if is_absolute_url(&video.video_id) {
            video.video_id.clone()
        } else {
            self.media.resolve(&video.video_id)
        }
    }

    fn embed_attributes(&self) -> AttributeMap {
        attrs! { "controls" => "controls", "preload" => "metadata" }
    }
}
