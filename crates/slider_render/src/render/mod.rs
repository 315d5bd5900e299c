/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Markup builders for banner images, preload hints and videos.

pub mod html;
pub mod picture;
pub mod preload;
pub mod video;

pub use picture::{render_picture, select_sources, PicturePlan, SourceDescriptor, IMAGE_CLASS};
pub use preload::{build_responsive_preload, PreloadLink};
pub use video::{aspect_ratio_padding, VideoMarkup, VideoRequest};
