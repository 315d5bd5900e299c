/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Parsed video references.

use serde::{Deserialize, Serialize};

/// Aspect ratio used when a banner's ratio is missing or malformed.
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

/// A video reference parsed by a video provider.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VideoData {
    /// Code of the provider that parsed the reference.
    pub provider: String,
    /// Provider-specific identifier (video ID, or the file path for local videos).
    pub video_id: String,
    /// The reference as stored on the banner.
    pub source: String,
}
